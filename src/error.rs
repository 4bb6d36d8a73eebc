use thiserror::Error;

/// Non-fatal conditions hit while turning page elements into a report.
///
/// Neither variant aborts the pipeline: the offending element or link is
/// skipped and the error is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("result #{index} has no {field}")]
    MissingField { index: usize, field: Field },

    #[error("no domain label in {link:?}: {reason}")]
    UnparseableLink { link: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Link,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Title => f.write_str("title"),
            Field::Link => f.write_str("link"),
        }
    }
}
