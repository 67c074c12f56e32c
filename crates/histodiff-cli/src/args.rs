use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "histodiff")]
#[command(about = "Compare two heap histogram dumps and report per-class deltas", long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Earlier histogram: local file path or http(s):// URL
    #[arg(value_name = "BEFORE")]
    pub before: String,

    /// Later histogram: local file path or http(s):// URL
    #[arg(value_name = "AFTER")]
    pub after: String,

    /// Metric index used to filter and sort (0 = instances, 1 = bytes)
    #[arg(value_name = "SORT_BY")]
    pub sort_by: Option<String>,

    /// Hide classes whose absolute delta is not above this value
    #[arg(value_name = "THRESHOLD")]
    pub threshold: Option<String>,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
