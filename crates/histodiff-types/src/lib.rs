pub mod diff;
pub mod error;
pub mod histogram;
pub mod metric;

pub use diff::{DiffEntry, DiffSet};
pub use error::{Error, Result};
pub use histogram::Histogram;
pub use metric::{Metric, MetricVector};
