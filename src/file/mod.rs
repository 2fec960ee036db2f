//! File I/O operations: loading YAML input and writing flattened output.

pub mod loader;
pub mod output;
