use crate::MetricVector;
use std::collections::HashMap;

/// One parsed snapshot: class name -> metric vector.
///
/// Keys are unique. Iteration follows the order in which each class was
/// first seen; re-inserting a class replaces its vector in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    entries: Vec<(String, MetricVector)>,
    index: HashMap<String, usize>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class, overwriting any earlier vector (last write wins).
    pub fn insert(
        &mut self,
        class_name: impl Into<String>,
        values: MetricVector,
    ) -> Option<MetricVector> {
        let class_name = class_name.into();
        match self.index.get(&class_name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, values)),
            None => {
                self.index.insert(class_name.clone(), self.entries.len());
                self.entries.push((class_name, values));
                None
            }
        }
    }

    pub fn get(&self, class_name: &str) -> Option<MetricVector> {
        self.index.get(class_name).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.index.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MetricVector)> {
        self.entries.iter().map(|(name, v)| (name.as_str(), *v))
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl FromIterator<(String, MetricVector)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (String, MetricVector)>>(iter: I) -> Self {
        let mut histogram = Histogram::new();
        for (name, values) in iter {
            histogram.insert(name, values);
        }
        histogram
    }
}
