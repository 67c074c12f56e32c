use histodiff_types::{DiffEntry, DiffSet, Metric};
use std::cmp::Ordering;

/// Keep entries whose selected delta magnitude is strictly above `threshold`.
///
/// With `threshold == 0` this drops exactly the unchanged entries. Order of
/// the surviving entries is preserved.
pub fn filter_entries(diff: DiffSet, metric: Metric, threshold: u64) -> DiffSet {
    let total = diff.len();
    let filtered: DiffSet = diff
        .into_iter()
        .filter(|e| e.delta.get(metric).unsigned_abs() > threshold)
        .collect();

    tracing::debug!(
        %metric,
        threshold,
        kept = filtered.len(),
        dropped = total - filtered.len(),
        "filtered diff entries"
    );
    filtered
}

/// Order entries by the selected delta, largest increase first.
///
/// The sort is stable: ties keep their input order, so sorting an already
/// sorted set is a no-op.
pub fn sort_entries(diff: DiffSet, metric: Metric) -> DiffSet {
    let mut entries = diff.into_entries();
    entries.sort_by(by_delta_desc(metric));
    DiffSet::new(entries)
}

fn by_delta_desc(metric: Metric) -> impl Fn(&DiffEntry, &DiffEntry) -> Ordering {
    move |a, b| b.delta.get(metric).cmp(&a.delta.get(metric))
}
