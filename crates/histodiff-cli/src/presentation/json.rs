use histodiff_types::DiffSet;

/// Machine-readable diff report, one object per class in report order
pub struct JsonReport<'a> {
    diff: &'a DiffSet,
}

impl<'a> JsonReport<'a> {
    pub fn new(diff: &'a DiffSet) -> Self {
        Self { diff }
    }

    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.diff)
    }
}
