pub mod args;
pub mod domain;
pub mod error;
pub mod extract;
pub mod html;
pub mod report;
pub mod scrape;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use domain::{aggregate, domain_label};
pub use error::ScrapeError;
pub use extract::{extract, PageElement, ResultRecord};
pub use report::{save_report, write_report};
pub use scrape::{run_pipeline, scrape_saved_page};
pub use stats::{DomainCount, ScrapeSummary};
