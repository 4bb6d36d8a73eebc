use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::domain::aggregate_with_skips;
use crate::extract::{extract_with_report, PageElement};
use crate::html::{HtmlPage, Selectors};
use crate::report::save_report;
use crate::stats::ScrapeSummary;
use crate::utils::{format_number, parse_base_url};
use crate::Args;

/// Runs extract, aggregate and persist over the elements of one page.
pub fn run_pipeline<E: PageElement>(
    elements: &[E],
    output: &Path,
    echo: bool,
) -> Result<ScrapeSummary> {
    let extraction = extract_with_report(elements);

    if echo {
        for record in &extraction.records {
            println!("{}", record.title);
            println!("{}", record.link);
        }
    }

    let (counts, unparsed_links) =
        aggregate_with_skips(extraction.records.iter().map(|r| r.link.as_str()));

    save_report(output, &extraction.records, &counts)?;

    Ok(ScrapeSummary {
        records: extraction.records,
        counts,
        skipped_elements: extraction.skipped.len(),
        unparsed_links,
    })
}

pub fn scrape_saved_page(args: &Args) -> Result<ScrapeSummary> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "scrape", input = ?args.input, "Starting results extraction");

    let selectors = Selectors {
        result: args.result_selector.clone(),
        title: args.title_selector.clone(),
        link: args.link_selector.clone(),
    };
    let base_url = parse_base_url(args.base_url.as_deref())?;

    let page = HtmlPage::load(&args.input, &selectors, base_url)?;
    let summary = run_pipeline(&page.results(), &args.output, !args.quiet)?;

    info!(
        action = "complete",
        component = "scrape",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Scrape completed successfully"
    );
    Ok(summary)
}

pub fn print_summary(summary: &ScrapeSummary, args: &Args) {
    println!("\n--- Search Result Summary ---");
    println!("Results extracted: {}", format_number(summary.records.len()));
    if summary.skipped_elements > 0 {
        println!(
            "Results skipped (missing title or link): {}",
            format_number(summary.skipped_elements)
        );
    }
    if summary.unparsed_links > 0 {
        println!(
            "Links without a domain label: {}",
            format_number(summary.unparsed_links)
        );
    }
    println!(
        "Unique domain labels: {}",
        format_number(summary.counts.len())
    );
    println!("Report written to {}", args.output.display());

    if let Some(top_count) = args.top {
        let sorted = summary.counts.most_common();
        println!(
            "\nTop {} domain labels:",
            std::cmp::min(top_count, sorted.len())
        );
        for (label, count) in sorted.iter().take(top_count) {
            println!("- {}: {}", label, format_number(*count as usize));
        }
    }
}
