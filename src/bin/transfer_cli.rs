use anyhow::Result;
use clap::{Parser, Subcommand};

use transfer_client::configure;
use transfer_client::logger::setup_logger;
use transfer_client::models::TransferRequest;
use transfer_client::TransferClient;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transfer API base URL
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List scheduled transfers page by page
    List {
        /// Page index (0-based)
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    /// Schedule a new transfer
    Create {
        /// Source account identifier
        #[arg(long)]
        from: String,

        /// Destination account identifier
        #[arg(long)]
        to: String,

        /// Amount in currency units
        #[arg(long)]
        amount: f64,

        /// Transfer date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = configure::load_config().expect("Failed to load config");

    if let Err(e) = setup_logger(&config) {
        eprintln!("Failed to set up logging: {}", e);
    }

    let base_url = args.url.unwrap_or(config.api_base_url.clone());
    let client = TransferClient::new(base_url);

    match args.command {
        Command::List { page, size } => {
            let result = client.list_transfers(page, size).await?;
            println!(
                "Page {}/{} ({} of {} transfers)",
                result.number + 1,
                result.total_pages,
                result.number_of_elements,
                result.total_elements
            );
            for transfer in &result.content {
                println!(
                    "#{}: {} -> {} amount={:.2} fee={:.2} on {}",
                    transfer.id,
                    transfer.source_account,
                    transfer.destination_account,
                    transfer.amount,
                    transfer.fee,
                    transfer.transfer_date
                );
            }
        }
        Command::Create {
            from,
            to,
            amount,
            date,
        } => {
            let transfer_date =
                date.unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

            let request = TransferRequest {
                source_account: from,
                destination_account: to,
                amount,
                transfer_date,
            };

            let response = client.create_transfer(&request).await?;
            println!("{}", response.message);
        }
    }

    Ok(())
}
