//! YAML node representation used by the flattener.
//!
//! This module provides the tree that the path resolver walks and the
//! flattener linearizes. Each YAML value is wrapped in a `YamlNode`.
//!
//! Mappings are stored as ordered key/value pairs rather than a hash map:
//! source order decides output order, and duplicate keys are kept so that
//! lookups can follow first-match semantics.
//!
//! # Example
//!
//! ```
//! use yamlflat::document::node::{YamlNode, YamlValue, YamlString};
//!
//! let name = YamlNode::new(YamlValue::Scalar(YamlString::Plain("web".to_string())));
//! let root = YamlNode::new(YamlValue::Mapping(vec![("name".to_string(), name)]));
//!
//! assert!(root.get("name").is_some());
//! assert!(root.get("missing").is_none());
//! ```

/// Represents the different YAML scalar styles.
///
/// The style decides how the flattener re-emits the value: block styles
/// always become a `|-` block, the others go through quoting rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlString {
    /// Unquoted scalar (`key: value`)
    Plain(String),
    /// Single or double quoted scalar (`key: "value"`)
    Quoted(String),
    /// Literal block scalar (`key: |`)
    Literal(String),
    /// Folded block scalar (`key: >`)
    Folded(String),
}

impl std::fmt::Display for YamlString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl YamlString {
    pub fn as_str(&self) -> &str {
        match self {
            YamlString::Plain(s)
            | YamlString::Quoted(s)
            | YamlString::Literal(s)
            | YamlString::Folded(s) => s,
        }
    }

    /// Returns true if the scalar was written as a `|` or `>` block.
    pub fn is_block(&self) -> bool {
        matches!(self, YamlString::Literal(_) | YamlString::Folded(_))
    }

    /// Returns true if the value must be re-emitted as a block.
    pub fn is_multiline(&self) -> bool {
        self.is_block() || self.as_str().contains('\n')
    }
}

/// A YAML value without metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    /// Ordered key/value pairs
    Mapping(Vec<(String, YamlNode)>),
    /// Ordered list of values, indexable from 0
    Sequence(Vec<YamlNode>),
    /// A leaf value with its source style
    Scalar(YamlString),
}

impl YamlValue {
    /// Returns true if this value is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, YamlValue::Mapping(_))
    }

    /// Returns true if this value is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, YamlValue::Sequence(_))
    }

    /// Returns true if this value is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, YamlValue::Scalar(_))
    }
}

/// A node of a parsed YAML document.
///
/// Nodes are immutable once parsed. Each child is owned by exactly one
/// parent; aliases are expanded into copies at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlNode {
    pub(crate) value: YamlValue,
}

impl YamlNode {
    /// Creates a new `YamlNode` with the given value.
    pub fn new(value: YamlValue) -> Self {
        Self { value }
    }

    /// Creates a plain scalar node.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlflat::document::node::{YamlNode, YamlValue};
    ///
    /// let node = YamlNode::plain("v2");
    /// assert!(node.value().is_scalar());
    /// ```
    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(YamlValue::Scalar(YamlString::Plain(value.into())))
    }

    /// Returns an immutable reference to the node's value.
    pub fn value(&self) -> &YamlValue {
        &self.value
    }

    /// Looks up `key` in a mapping, returning the first matching value.
    ///
    /// Any node that is not a mapping behaves like an empty mapping.
    pub fn get(&self, key: &str) -> Option<&YamlNode> {
        match &self.value {
            YamlValue::Mapping(entries) => entries
                .iter()
                .find(|(candidate, _)| candidate == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Returns the number of direct children (0 for scalars).
    pub fn child_count(&self) -> usize {
        match &self.value {
            YamlValue::Mapping(entries) => entries.len(),
            YamlValue::Sequence(items) => items.len(),
            YamlValue::Scalar(_) => 0,
        }
    }

    /// Returns true if the node carries no data worth printing.
    ///
    /// A scalar is empty when its trimmed text is empty; a mapping or
    /// sequence is empty when it has no children.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlflat::document::node::{YamlNode, YamlValue};
    ///
    /// assert!(YamlNode::plain("  ").is_empty());
    /// assert!(YamlNode::new(YamlValue::Sequence(vec![])).is_empty());
    /// assert!(!YamlNode::plain("false").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match &self.value {
            YamlValue::Scalar(s) => s.as_str().trim().is_empty(),
            YamlValue::Mapping(entries) => entries.is_empty(),
            YamlValue::Sequence(items) => items.is_empty(),
        }
    }
}
