use tracing::{debug, info};
use url::Url;

use crate::error::ScrapeError;
use crate::stats::DomainCount;

/// Second-to-last dot-separated segment of the link's host.
///
/// `sub.example.com` gives `example`, but `www.example.co.uk` gives `co` and
/// an IPv4 host gives its third octet. Multi-part public suffixes are not
/// recognised.
pub fn domain_label(link: &str) -> Result<String, ScrapeError> {
    let unparseable = |reason: &str| ScrapeError::UnparseableLink {
        link: link.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(link).map_err(|e| unparseable(&e.to_string()))?;
    let host = url.host_str().ok_or_else(|| unparseable("no host"))?;

    let parts: Vec<&str> = host.split('.').collect();
    if parts.len() < 2 {
        return Err(unparseable("host has a single segment"));
    }

    Ok(parts[parts.len() - 2].to_string())
}

/// Tallies domain labels over `links`. Links without a label are skipped.
pub fn aggregate<I, S>(links: I) -> DomainCount
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aggregate_with_skips(links).0
}

/// Same as [`aggregate`], also returning how many links were skipped.
pub fn aggregate_with_skips<I, S>(links: I) -> (DomainCount, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = DomainCount::new();
    let mut skipped = 0;

    for link in links {
        match domain_label(link.as_ref()) {
            Ok(label) => counts.increment(&label),
            Err(e) => {
                debug!(action = "skip", component = "domain_aggregation", error = %e, "Link has no domain label");
                skipped += 1;
            }
        }
    }

    info!(
        action = "complete",
        component = "domain_aggregation",
        unique_labels = counts.len(),
        counted = counts.total(),
        skipped,
        "Domain aggregation completed"
    );
    (counts, skipped)
}
