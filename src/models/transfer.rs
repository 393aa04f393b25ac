use serde::{Deserialize, Serialize};

/// A scheduled transfer as returned by the server. All fields are
/// server-populated; `fee` and `scheduling_date` are computed on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: i64,
    pub source_account: String,
    pub destination_account: String,
    pub amount: f64,
    pub fee: f64,
    pub transfer_date: String,
    pub scheduling_date: String,
}

/// Body for scheduling a new transfer. No `id`, `fee` or `scheduling_date`,
/// the server assigns those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub source_account: String,
    pub destination_account: String,
    pub amount: f64,
    pub transfer_date: String,
}

/// Server acknowledgment for a create request. The created entity is not
/// echoed back, only a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferResponse {
    pub message: String,
}

/// Sort flags inside the page envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortInfo {
    pub empty: bool,
    pub sorted: bool,
    pub unsorted: bool,
}

/// Paging state echoed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub sort: SortInfo,
    pub offset: i64,
    pub page_size: i64,
    pub page_number: i64,
    pub unpaged: bool,
    pub paged: bool,
}

/// One page of transfers (Spring Data page envelope).
///
/// The server maintains `content.len() == number_of_elements`,
/// `first == (number == 0)` and, when `total_elements > 0`,
/// `last == (number == total_pages - 1)`. The client returns the envelope
/// as decoded and does not re-validate these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPage {
    pub content: Vec<Transfer>,
    pub pageable: Pageable,
    pub last: bool,
    pub total_pages: i64,
    pub total_elements: i64,
    pub first: bool,
    pub size: i64,
    pub number: i64,
    pub sort: SortInfo,
    pub number_of_elements: i64,
    pub empty: bool,
}
