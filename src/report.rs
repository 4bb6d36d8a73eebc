use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::extract::ResultRecord;
use crate::stats::DomainCount;

pub const COUNT_HEADER: &str = "Top Level Domain Count:";

/// Writes the records, each followed by a blank line, then the label tally.
pub fn write_report<W: Write>(
    mut sink: W,
    records: &[ResultRecord],
    counts: &DomainCount,
) -> io::Result<()> {
    for record in records {
        writeln!(sink, "{}\n{}\n", record.title, record.link)?;
    }

    writeln!(sink, "{}", COUNT_HEADER)?;
    for (label, count) in counts.iter() {
        writeln!(sink, "{}: {}", label, count)?;
    }

    sink.flush()
}

/// Creates (or truncates) `path` and writes the report into it.
///
/// The file is closed on every path out of this function. Whatever reached
/// the disk before an error stays there.
pub fn save_report(path: &Path, records: &[ResultRecord], counts: &DomainCount) -> Result<()> {
    let start_time = Instant::now();
    info!(action = "start", component = "report_writer", file_path = ?path, "Writing report");

    let file = File::create(path).with_context(|| format!("Failed to create report {:?}", path))?;
    write_report(BufWriter::new(file), records, counts)
        .with_context(|| format!("Failed to write report {:?}", path))?;

    info!(
        action = "complete",
        component = "report_writer",
        file_path = ?path,
        records = records.len(),
        labels = counts.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Report written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(title: &str, link: &str) -> ResultRecord {
        ResultRecord {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    fn render(records: &[ResultRecord], counts: &DomainCount) -> String {
        let mut out = Vec::new();
        write_report(&mut out, records, counts).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn single_record_layout() {
        let counts: DomainCount = [("x", 1)].into_iter().collect();
        assert_eq!(
            render(&[record("A", "http://x.com")], &counts),
            "A\nhttp://x.com\n\nTop Level Domain Count:\nx: 1\n"
        );
    }

    #[test]
    fn counts_follow_tally_order() {
        let counts: DomainCount = [("zhihu", 2), ("baidu", 5), ("csdn", 1)].into_iter().collect();
        let records = [
            record("您的姓名 - 百度百科", "https://baike.baidu.com/item/name"),
            record("如何起名", "https://www.zhihu.com/question/1"),
        ];
        assert_eq!(
            render(&records, &counts),
            "您的姓名 - 百度百科\nhttps://baike.baidu.com/item/name\n\n\
             如何起名\nhttps://www.zhihu.com/question/1\n\n\
             Top Level Domain Count:\nzhihu: 2\nbaidu: 5\ncsdn: 1\n"
        );
    }

    #[test]
    fn empty_input_still_has_header() {
        assert_eq!(render(&[], &DomainCount::new()), "Top Level Domain Count:\n");
    }

    struct FailAfter {
        budget: usize,
        written: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate_and_keep_partial_output() {
        let mut sink = FailAfter {
            budget: 8,
            written: Vec::new(),
        };
        let err = write_report(
            &mut sink,
            &[record("A", "http://x.com"), record("B", "http://y.com")],
            &DomainCount::new(),
        )
        .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(!sink.written.is_empty());
        assert!(sink.written.len() <= 8);
    }
}
