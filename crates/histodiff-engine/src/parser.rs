use histodiff_types::{Histogram, MetricVector};
use regex::Regex;
use std::sync::LazyLock;

/// Regex for one histogram record
/// Example: "   1:        120005       9600400  java.lang.String"
static RECORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+):\s+([0-9]+)\s+([0-9]+)\s+(.+)$").unwrap());

/// Parse a full histogram report.
///
/// Non-record lines (headers, separators, "Total" footers) are skipped.
pub fn parse_histogram(text: &str) -> Histogram {
    parse_lines(text.lines())
}

/// Parse histogram records from individual lines.
///
/// A class seen on more than one line keeps the values of the last one.
pub fn parse_lines<'a, I>(lines: I) -> Histogram
where
    I: IntoIterator<Item = &'a str>,
{
    let mut histogram = Histogram::new();
    let mut skipped = 0usize;

    for line in lines {
        match parse_record(line) {
            Some((class_name, values)) => {
                if histogram.insert(class_name, values).is_some() {
                    tracing::debug!(class_name, "duplicate class, keeping last record");
                }
            }
            None => {
                tracing::trace!(line, "skipping non-record line");
                skipped += 1;
            }
        }
    }

    tracing::debug!(
        classes = histogram.len(),
        skipped,
        "parsed histogram snapshot"
    );
    histogram
}

/// Match a single line against the record pattern
fn parse_record(line: &str) -> Option<(&str, MetricVector)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let caps = RECORD_REGEX.captures(line)?;

    let class_name = caps.get(4)?.as_str();
    let (instances, bytes) = match (caps[2].parse::<i64>(), caps[3].parse::<i64>()) {
        (Ok(instances), Ok(bytes)) => (instances, bytes),
        _ => {
            tracing::debug!(line, "numeric field does not fit in i64, skipping");
            return None;
        }
    };

    Some((class_name, MetricVector::new(instances, bytes)))
}
