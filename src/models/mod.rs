pub use errors::*;
pub use transfer::*;

pub mod errors;
pub mod transfer;
