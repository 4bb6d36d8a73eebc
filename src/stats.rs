use indexmap::IndexMap;

use crate::extract::ResultRecord;

/// Domain label frequencies, iterated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct DomainCount {
    counts: IndexMap<String, u32>,
}

// Two tallies are equal only if they also agree on first-seen order.
impl PartialEq for DomainCount {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for DomainCount {}

impl DomainCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, label: &str) {
        match self.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(label.to_string(), 1);
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.counts.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of links that yielded a label.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Entries sorted by descending count. Ties keep first-seen order.
    pub fn most_common(&self) -> Vec<(&str, u32)> {
        let mut sorted: Vec<(&str, u32)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<'a> FromIterator<(&'a str, u32)> for DomainCount {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        let mut counts = IndexMap::new();
        for (label, count) in iter {
            *counts.entry(label.to_string()).or_insert(0) += count;
        }
        Self { counts }
    }
}

#[derive(Debug)]
pub struct ScrapeSummary {
    pub records: Vec<ResultRecord>,
    pub counts: DomainCount,
    pub skipped_elements: usize,
    pub unparsed_links: usize,
}
