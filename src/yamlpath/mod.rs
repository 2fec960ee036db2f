//! Entry path expressions: parsing and resolution.
//!
//! An entry path selects the node where flattening starts.
//!
//! # Supported Syntax
//!
//! - `name` - Mapping key
//! - `a.b.c` - Nested mapping keys
//! - `name[N]` - Element `N` of the sequence stored under `name`
//!
//! There are no wildcards, filters, negative indices or chained indices
//! (`name[0][1]`).
//!
//! # Examples
//!
//! ```
//! // alertmanager             - the alertmanager mapping
//! // spec.containers[1].name  - name of the second container
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod resolver;

pub use ast::{PathSegment, YamlPath};
pub use error::ResolveError;
pub use parser::{IndexPolicy, Parser};
pub use resolver::{resolve, Resolver};
