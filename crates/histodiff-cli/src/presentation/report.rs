use histodiff_types::{DiffEntry, DiffSet};
use owo_colors::OwoColorize;
use std::fmt;

const HEADER: &str = "  #instances       #bytes  class name";
const RULE: &str = "-------------------------------------";

/// Plain-text diff table: header, rule, then one signed row per class
pub struct ReportView<'a> {
    diff: &'a DiffSet,
    color: bool,
}

impl<'a> ReportView<'a> {
    pub fn new(diff: &'a DiffSet) -> Self {
        Self { diff, color: false }
    }

    /// Color growth red and shrinkage green (terminal output only)
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, entry: &DiffEntry) -> fmt::Result {
        let instances = self.delta_cell(entry.delta.instances());
        let bytes = self.delta_cell(entry.delta.bytes());
        writeln!(f, "{} {}  {}", instances, bytes, entry.class_name)
    }

    fn delta_cell(&self, value: i64) -> String {
        let cell = format!("{:+12}", value);
        if !self.color {
            return cell;
        }
        match value.signum() {
            1 => format!("{}", cell.red()),
            -1 => format!("{}", cell.green()),
            _ => cell,
        }
    }
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        writeln!(f, "{}", RULE)?;
        for entry in self.diff {
            self.write_row(f, entry)?;
        }
        Ok(())
    }
}
