use crate::MetricVector;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

/// Per-class change between two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub class_name: String,
    pub delta: MetricVector,
}

impl DiffEntry {
    pub fn new(class_name: impl Into<String>, delta: MetricVector) -> Self {
        Self {
            class_name: class_name.into(),
            delta,
        }
    }
}

// Serialized flat: {"class_name", "instances", "bytes"}
impl Serialize for DiffEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("DiffEntry", 3)?;
        row.serialize_field("class_name", &self.class_name)?;
        row.serialize_field("instances", &self.delta.instances())?;
        row.serialize_field("bytes", &self.delta.bytes())?;
        row.end()
    }
}

/// Ordered sequence of diff entries, one per class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiffSet(Vec<DiffEntry>);

impl DiffSet {
    pub fn new(entries: Vec<DiffEntry>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffEntry> {
        self.0.iter()
    }

    pub fn entries(&self) -> &[DiffEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<DiffEntry> {
        self.0
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.class_name.as_str()).collect()
    }
}

impl FromIterator<DiffEntry> for DiffSet {
    fn from_iter<I: IntoIterator<Item = DiffEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for DiffSet {
    type Item = DiffEntry;
    type IntoIter = std::vec::IntoIter<DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffSet {
    type Item = &'a DiffEntry;
    type IntoIter = std::slice::Iter<'a, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
