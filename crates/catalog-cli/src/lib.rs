//! Course catalog validator CLI.
//!
//! Wires the pipeline stages together: ingest, column normalization, value
//! cleaning, validation on a worker thread, and report output.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
