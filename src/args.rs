use clap::Parser;
use std::path::PathBuf;

use crate::html::{DEFAULT_LINK_SELECTOR, DEFAULT_RESULT_SELECTOR, DEFAULT_TITLE_SELECTOR};

#[derive(Parser, Debug)]
#[command(
    name = "serptally",
    about = "Extract search results from a saved results page and count their domain labels",
    version,
    long_about = None
)]
pub struct Args {
    /// Saved search-results HTML page
    pub input: PathBuf,

    /// Report file to write
    #[arg(short, long, default_value = "search_results.txt")]
    pub output: PathBuf,

    /// CSS selector matching one search result
    #[arg(short, long, default_value = DEFAULT_RESULT_SELECTOR)]
    pub result_selector: String,

    /// CSS selector of the title inside a result
    #[arg(long, default_value = DEFAULT_TITLE_SELECTOR)]
    pub title_selector: String,

    /// CSS selector of the link inside a result
    #[arg(long, default_value = DEFAULT_LINK_SELECTOR)]
    pub link_selector: String,

    /// Base URL for resolving relative links
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Number of most frequent domain labels to display
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Do not echo each title and link
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
