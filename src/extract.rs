use tracing::{info, warn};

use crate::error::{Field, ScrapeError};

/// A single rendered search result, as handed over by whatever drives the page.
///
/// `None` from either accessor means the element lacks that sub-part.
pub trait PageElement {
    fn title(&self) -> Option<String>;
    fn link(&self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<ResultRecord>,
    pub skipped: Vec<ScrapeError>,
}

/// Reads title and link from every element, keeping input order.
/// Elements missing either part are logged and left out.
pub fn extract<E: PageElement>(elements: &[E]) -> Vec<ResultRecord> {
    extract_with_report(elements).records
}

pub fn extract_with_report<E: PageElement>(elements: &[E]) -> Extraction {
    let mut extraction = Extraction {
        records: Vec::with_capacity(elements.len()),
        skipped: Vec::new(),
    };

    for (index, element) in elements.iter().enumerate() {
        match read_element(index, element) {
            Ok(record) => extraction.records.push(record),
            Err(e) => {
                warn!(action = "skip", component = "result_extraction", index, error = %e, "Skipping incomplete result");
                extraction.skipped.push(e);
            }
        }
    }

    info!(
        action = "complete",
        component = "result_extraction",
        extracted = extraction.records.len(),
        skipped = extraction.skipped.len(),
        "Result extraction completed"
    );
    extraction
}

fn read_element<E: PageElement>(index: usize, element: &E) -> Result<ResultRecord, ScrapeError> {
    let title = element.title().ok_or(ScrapeError::MissingField {
        index,
        field: Field::Title,
    })?;
    let link = element.link().ok_or(ScrapeError::MissingField {
        index,
        field: Field::Link,
    })?;
    Ok(ResultRecord { title, link })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fake(Option<&'static str>, Option<&'static str>);

    impl PageElement for Fake {
        fn title(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
        fn link(&self) -> Option<String> {
            self.1.map(str::to_string)
        }
    }

    #[test]
    fn keeps_input_order() {
        let elements = [
            Fake(Some("B"), Some("http://b.com")),
            Fake(Some("A"), Some("http://a.com")),
        ];
        let records = extract(&elements);
        assert_eq!(
            records,
            vec![
                ResultRecord {
                    title: "B".into(),
                    link: "http://b.com".into()
                },
                ResultRecord {
                    title: "A".into(),
                    link: "http://a.com".into()
                },
            ]
        );
    }

    #[test]
    fn skips_elements_missing_a_part() {
        let elements = [
            Fake(None, Some("http://a.com")),
            Fake(Some("kept"), Some("http://k.com")),
            Fake(Some("no link"), None),
        ];
        let extraction = extract_with_report(&elements);

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].title, "kept");
        assert_eq!(
            extraction.skipped,
            vec![
                ScrapeError::MissingField {
                    index: 0,
                    field: Field::Title
                },
                ScrapeError::MissingField {
                    index: 2,
                    field: Field::Link
                },
            ]
        );
    }

    #[test]
    fn never_produces_more_records_than_elements() {
        let elements: Vec<Fake> = (0..10)
            .map(|i| {
                if i % 3 == 0 {
                    Fake(None, None)
                } else {
                    Fake(Some("t"), Some("http://x.com"))
                }
            })
            .collect();
        assert!(extract(&elements).len() <= elements.len());
        assert_eq!(extract(&elements).len(), 6);
    }

    #[test]
    fn empty_strings_are_not_missing() {
        let records = extract(&[Fake(Some(""), Some(""))]);
        assert_eq!(records.len(), 1);
    }
}
