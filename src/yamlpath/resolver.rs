//! Resolves entry paths against a parsed document.

use super::ast::{PathSegment, YamlPath};
use super::error::ResolveError;
use super::parser::{IndexPolicy, Parser};
use crate::document::node::{YamlNode, YamlValue};

/// Walks a document tree along a `YamlPath`.
pub struct Resolver<'a> {
    root: &'a YamlNode,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a YamlNode) -> Self {
        Resolver { root }
    }

    /// Returns the node at the end of `path`, or the first failing segment.
    ///
    /// No partial result is returned on failure.
    pub fn resolve(&self, path: &YamlPath) -> Result<&'a YamlNode, ResolveError> {
        path.segments
            .iter()
            .try_fold(self.root, |current, segment| Self::step(current, segment))
    }

    fn step(current: &'a YamlNode, segment: &PathSegment) -> Result<&'a YamlNode, ResolveError> {
        let key = segment.key();
        let child = current
            .get(key)
            .ok_or_else(|| ResolveError::KeyNotFound(key.to_string()))?;

        let Some(index) = segment.index() else {
            return Ok(child);
        };

        let out_of_range = || ResolveError::IndexOutOfRange(key.to_string(), index);
        match child.value() {
            YamlValue::Sequence(items) => usize::try_from(index)
                .ok()
                .and_then(|i| items.get(i))
                .ok_or_else(out_of_range),
            _ => Err(out_of_range()),
        }
    }
}

/// Parses `expr` and resolves it against `root` in one step.
///
/// # Example
///
/// ```
/// use yamlflat::document::parser::parse_yaml;
/// use yamlflat::yamlpath::{resolve, IndexPolicy, ResolveError};
///
/// let root = parse_yaml("containers:\n  - name: a\n  - name: b\n").unwrap();
/// let name = resolve(&root, "containers[1].name", IndexPolicy::Lenient).unwrap();
/// assert_eq!(name, &yamlflat::document::node::YamlNode::plain("b"));
///
/// let err = resolve(&root, "containers[5].name", IndexPolicy::Lenient).unwrap_err();
/// assert_eq!(err, ResolveError::IndexOutOfRange("containers".to_string(), 5));
/// ```
pub fn resolve<'a>(
    root: &'a YamlNode,
    expr: &str,
    policy: IndexPolicy,
) -> Result<&'a YamlNode, ResolveError> {
    let path = Parser::parse(expr, policy)?;
    Resolver::new(root).resolve(&path)
}
