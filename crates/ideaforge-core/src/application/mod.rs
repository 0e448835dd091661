//! Application layer: use cases over the domain, wired through ports.
//!
//! Generation itself needs no ports (it is pure); this layer exists for
//! the one effectful use case, exporting a blueprint's files to disk.

pub mod export;
pub mod ports;

pub use export::{default_export_dir, ExportOptions, ExportReport, ExportService};
pub use ports::Filesystem;
