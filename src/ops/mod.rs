// * Operations: logging setup and run reporting.

pub mod telemetry;

pub use telemetry::{init_tracing, Reporter, RunStats};
