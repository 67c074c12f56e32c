// NOTE: histodiff Layering
//
// - histodiff-types: snapshot / delta data model and typed errors
// - histodiff-engine: pure parse -> diff -> filter -> sort, no I/O
// - this crate: argument handling, input retrieval, logging, rendering
//
// Retrieval and process exit stay here so the engine can be tested
// without files, network, or exit codes.

mod args;
mod commands;
pub mod logging;
pub mod presentation;
pub mod source;
pub mod types;

pub use args::Cli;
pub use commands::run;
