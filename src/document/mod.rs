//! Document model and YAML parsing.

pub mod node;
pub mod parser;
