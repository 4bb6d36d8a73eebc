use anyhow::Result;
use clap::Parser;
use tracing::error;

use serptally::scrape::print_summary;
use serptally::utils::{setup_logging, validate_args};
use serptally::{scrape_saved_page, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    match scrape_saved_page(&args) {
        Ok(summary) => {
            print_summary(&summary, &args);
            Ok(())
        }
        Err(e) => {
            error!(error = ?e, "Scrape failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
