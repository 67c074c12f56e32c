use histodiff_types::{DiffEntry, DiffSet, Histogram};
use std::collections::HashSet;

/// Compute per-class deltas between two snapshots.
///
/// Classes from `before` come first (in `before` order): present in both
/// yields `after - before`, vanished classes yield `-before`. Classes that
/// only exist in `after` follow with their raw `after` values.
///
/// This order is not a contract; use [`crate::sort_entries`] for ordering.
pub fn diff_histograms(before: &Histogram, after: &Histogram) -> DiffSet {
    let mut matched: HashSet<&str> = HashSet::with_capacity(before.len());
    let mut entries = Vec::with_capacity(before.len().max(after.len()));

    for (class_name, old) in before.iter() {
        let delta = match after.get(class_name) {
            Some(new) => {
                matched.insert(class_name);
                new - old
            }
            None => -old,
        };
        entries.push(DiffEntry::new(class_name, delta));
    }

    // Remaining classes were not in `before`
    let appeared = after
        .iter()
        .filter(|(class_name, _)| !matched.contains(class_name))
        .map(|(class_name, new)| DiffEntry::new(class_name, new));
    entries.extend(appeared);

    tracing::debug!(
        before = before.len(),
        after = after.len(),
        classes = entries.len(),
        "computed histogram diff"
    );

    DiffSet::new(entries)
}
