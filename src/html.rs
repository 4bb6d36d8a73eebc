use anyhow::{anyhow, Context, Result};
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;
use url::{ParseError, Url};

use crate::extract::PageElement;

pub const DEFAULT_RESULT_SELECTOR: &str = "li.b_algo";
pub const DEFAULT_TITLE_SELECTOR: &str = "h2";
pub const DEFAULT_LINK_SELECTOR: &str = "a";

/// CSS selectors locating one search result and its parts.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub result: String,
    pub title: String,
    pub link: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            result: DEFAULT_RESULT_SELECTOR.to_string(),
            title: DEFAULT_TITLE_SELECTOR.to_string(),
            link: DEFAULT_LINK_SELECTOR.to_string(),
        }
    }
}

struct Compiled {
    result: Selector,
    title: Selector,
    link: Selector,
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("Invalid CSS selector {:?}: {}", selector, e))
}

/// A saved search-results page. Acts as the driver session: result handles
/// borrow from it and are only valid while it lives.
pub struct HtmlPage {
    document: Html,
    selectors: Compiled,
    base_url: Option<Url>,
}

impl HtmlPage {
    pub fn parse(html: &str, selectors: &Selectors, base_url: Option<Url>) -> Result<Self> {
        let selectors = Compiled {
            result: compile(&selectors.result)?,
            title: compile(&selectors.title)?,
            link: compile(&selectors.link)?,
        };

        Ok(Self {
            document: Html::parse_document(html),
            selectors,
            base_url,
        })
    }

    pub fn load(path: &Path, selectors: &Selectors, base_url: Option<Url>) -> Result<Self> {
        let start_time = Instant::now();
        info!(action = "load", component = "html_page", file_path = ?path, "Loading saved results page");

        if !path.exists() {
            anyhow::bail!("Results page not found: {:?}", path);
        }
        let html = fs::read_to_string(path)
            .with_context(|| format!("Failed to read results page {:?}", path))?;
        let page = Self::parse(&html, selectors, base_url)?;

        info!(
            action = "loaded",
            component = "html_page",
            bytes = html.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Parsed results page"
        );
        Ok(page)
    }

    /// Every element matching the result selector, in document order.
    pub fn results(&self) -> Vec<HtmlResult<'_>> {
        let results: Vec<HtmlResult<'_>> = self
            .document
            .select(&self.selectors.result)
            .map(|element| HtmlResult { element, page: self })
            .collect();

        info!(action = "select", component = "html_page", result_count = results.len(), "Located result elements");
        results
    }
}

pub struct HtmlResult<'a> {
    element: ElementRef<'a>,
    page: &'a HtmlPage,
}

impl PageElement for HtmlResult<'_> {
    /// Rendered text of the first title match, whitespace collapsed.
    fn title(&self) -> Option<String> {
        let heading = self.element.select(&self.page.selectors.title).next()?;
        let text: String = heading.text().collect();
        Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// `href` of the first link match, resolved against the base URL when
    /// it is relative and a base is known.
    fn link(&self) -> Option<String> {
        let anchor = self.element.select(&self.page.selectors.link).next()?;
        let href = anchor.value().attr("href")?.trim();

        match (Url::parse(href), &self.page.base_url) {
            (Err(ParseError::RelativeUrlWithoutBase), Some(base)) => {
                base.join(href).ok().map(String::from)
            }
            _ => Some(href.to_string()),
        }
    }
}
