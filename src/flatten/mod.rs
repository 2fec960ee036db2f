//! Tree flattening: turns a YAML subtree into `path<sep>value` lines.
//!
//! Lines come out in depth-first order, following mapping insertion order
//! and sequence index order, so the output of two similar documents diffs
//! cleanly.
//!
//! # Example
//!
//! ```
//! use yamlflat::document::parser::parse_yaml;
//! use yamlflat::flatten::{Flattener, FlattenOptions};
//!
//! let root = parse_yaml("image:\n  repository: nginx\n  tag: \"1.25\"\n").unwrap();
//! let output = Flattener::new(FlattenOptions::default()).flatten_to_string(&root, &[]);
//! assert_eq!(output, "image.repository: nginx\nimage.tag: 1.25\n");
//! ```

pub mod format;
pub mod options;
pub mod walker;

pub use options::{Depth, FlattenOptions, InvalidSeparator, Separator};
pub use walker::Flattener;
