//! yamlflat - flatten nested YAML documents into `path<sep>value` lines.
//!
//! The library is split into the document model and parser, entry path
//! resolution, the flattener itself, and the file glue used by the binary.
//!
//! # Example
//!
//! ```
//! use yamlflat::document::parser::parse_yaml;
//! use yamlflat::flatten::{Flattener, FlattenOptions};
//! use yamlflat::select_entry;
//! use yamlflat::yamlpath::IndexPolicy;
//!
//! let root = parse_yaml("spec:\n  containers:\n    - name: web\n      image: nginx\n").unwrap();
//! let (node, prefix) = select_entry(&root, Some("spec.containers[0]"), IndexPolicy::Lenient).unwrap();
//! let output = Flattener::new(FlattenOptions::default()).flatten_to_string(node, &prefix);
//! assert_eq!(output, "spec.containers[0].name: web\nspec.containers[0].image: nginx\n");
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod flatten;
pub mod yamlpath;

use document::node::YamlNode;
use yamlpath::{IndexPolicy, Parser, ResolveError, Resolver};

/// Finds the node where flattening starts and the path prefix for its lines.
///
/// Without an entry expression (or with an empty one) the whole document
/// is used and the prefix is empty.
pub fn select_entry<'a>(
    root: &'a YamlNode,
    entry: Option<&str>,
    policy: IndexPolicy,
) -> Result<(&'a YamlNode, Vec<String>), ResolveError> {
    match entry.filter(|expr| !expr.is_empty()) {
        None => Ok((root, Vec::new())),
        Some(expr) => {
            let path = Parser::parse(expr, policy)?;
            let node = Resolver::new(root).resolve(&path)?;
            Ok((node, path.display_prefix()))
        }
    }
}
