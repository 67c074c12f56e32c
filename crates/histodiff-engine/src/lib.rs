// Engine module - pure histogram processing (parse, diff, filter, sort)
// This layer sits between raw report text and CLI presentation

mod differ;
mod ordering;
mod parser;

pub use differ::diff_histograms;
pub use ordering::{filter_entries, sort_entries};
pub use parser::{parse_histogram, parse_lines};

use histodiff_types::{DiffSet, Histogram, Metric};

/// Selection applied after diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareOptions {
    /// Metric used for both filtering and sorting
    pub metric: Metric,
    /// Exclusive lower bound on the absolute delta of `metric`
    pub threshold: u64,
}

// Façade API - Stable public interface for CLI layer

/// Diff two snapshots, drop small changes, and order the result.
pub fn compare(before: &Histogram, after: &Histogram, options: &CompareOptions) -> DiffSet {
    let diff = diff_histograms(before, after);
    let filtered = filter_entries(diff, options.metric, options.threshold);
    sort_entries(filtered, options.metric)
}
