//! YAML parsing with scalar style preservation.
//!
//! This module turns YAML text into `YamlNode` trees. It drives the
//! `yaml-rust2` event parser directly instead of its `Yaml` loader because
//! the loader discards scalar styles, and the flattener needs to know
//! whether a value was written as a literal or folded block.
//!
//! # Example
//!
//! ```
//! use yamlflat::document::parser::parse_yaml;
//! use yamlflat::document::node::YamlValue;
//!
//! let node = parse_yaml("name: web\nreplicas: 3\n").unwrap();
//! assert!(node.value().is_mapping());
//! ```

use super::node::{YamlNode, YamlString, YamlValue};
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// A container that is still receiving children.
enum Frame {
    Mapping {
        anchor_id: usize,
        entries: Vec<(String, YamlNode)>,
        pending_key: Option<String>,
    },
    Sequence {
        anchor_id: usize,
        items: Vec<YamlNode>,
    },
}

/// Builds `YamlNode` documents from parser events.
struct TreeBuilder {
    source: Vec<char>,
    stack: Vec<Frame>,
    documents: Vec<YamlNode>,
    anchors: HashMap<usize, YamlNode>,
    document_start: usize,
    error: Option<anyhow::Error>,
}

impl TreeBuilder {
    fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            stack: Vec::new(),
            documents: Vec::new(),
            anchors: HashMap::new(),
            document_start: 0,
            error: None,
        }
    }

    fn fail(&mut self, error: anyhow::Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Remembers an anchored node so later aliases can copy it.
    fn register_anchor(&mut self, anchor_id: usize, node: &YamlNode) {
        if anchor_id > 0 {
            self.anchors.insert(anchor_id, node.clone());
        }
    }

    /// Attaches a finished node to its parent, or records it as a document root.
    fn attach(&mut self, node: YamlNode, mark: Marker) {
        let Some(frame) = self.stack.last_mut() else {
            self.documents.push(node);
            return;
        };

        let complex_key = match frame {
            Frame::Sequence { items, .. } => {
                items.push(node);
                false
            }
            Frame::Mapping {
                entries,
                pending_key,
                ..
            } => match (pending_key.take(), node.value) {
                (Some(key), value) => {
                    entries.push((key, YamlNode::new(value)));
                    false
                }
                (None, YamlValue::Scalar(key)) => {
                    *pending_key = Some(key.as_str().to_string());
                    false
                }
                (None, _) => true,
            },
        };

        if complex_key {
            self.fail(anyhow!(
                "Unsupported non-scalar mapping key at line {}, column {}",
                mark.line(),
                mark.col() + 1
            ));
        }
    }

    /// Converts a scalar event into a node.
    ///
    /// The event parser reports an implicit null (`key:` with nothing after
    /// it) as `~`. Only a `~` that is actually present in the source is
    /// kept; the implicit form becomes an empty plain scalar.
    fn scalar(&self, value: String, style: TScalarStyle, mark: Marker) -> YamlNode {
        let string = match style {
            TScalarStyle::Literal => YamlString::Literal(value),
            TScalarStyle::Folded => YamlString::Folded(value),
            TScalarStyle::SingleQuoted | TScalarStyle::DoubleQuoted => YamlString::Quoted(value),
            _ if value == "~" && self.source.get(mark.index()) != Some(&'~') => {
                YamlString::Plain(String::new())
            }
            _ => YamlString::Plain(value),
        };
        YamlNode::new(YamlValue::Scalar(string))
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event, mark: Marker) {
        if self.error.is_some() {
            return;
        }

        match event {
            Event::DocumentStart { .. } => {
                self.document_start = self.documents.len();
            }
            Event::DocumentEnd => {
                if self.documents.len() == self.document_start {
                    self.documents.push(YamlNode::plain(""));
                }
            }
            Event::MappingStart(anchor_id, ..) => self.stack.push(Frame::Mapping {
                anchor_id,
                entries: Vec::new(),
                pending_key: None,
            }),
            Event::SequenceStart(anchor_id, ..) => self.stack.push(Frame::Sequence {
                anchor_id,
                items: Vec::new(),
            }),
            Event::MappingEnd | Event::SequenceEnd => {
                let (anchor_id, value) = match self.stack.pop() {
                    Some(Frame::Mapping {
                        anchor_id, entries, ..
                    }) => (anchor_id, YamlValue::Mapping(entries)),
                    Some(Frame::Sequence { anchor_id, items }) => {
                        (anchor_id, YamlValue::Sequence(items))
                    }
                    None => {
                        self.fail(anyhow!("Unbalanced collection end at line {}", mark.line()));
                        return;
                    }
                };
                let node = YamlNode::new(value);
                self.register_anchor(anchor_id, &node);
                self.attach(node, mark);
            }
            Event::Scalar(value, style, anchor_id, ..) => {
                let node = self.scalar(value, style, mark);
                self.register_anchor(anchor_id, &node);
                self.attach(node, mark);
            }
            Event::Alias(anchor_id) => match self.anchors.get(&anchor_id).cloned() {
                Some(node) => self.attach(node, mark),
                None => self.fail(anyhow!(
                    "Unknown alias at line {}, column {}",
                    mark.line(),
                    mark.col() + 1
                )),
            },
            _ => {}
        }
    }
}

/// Parses every document of a YAML stream.
///
/// Aliases are expanded into copies of the anchored node, so the returned
/// trees never share children. An empty stream yields no documents.
///
/// # Errors
///
/// Returns an error if the input is not valid YAML, uses a collection as a
/// mapping key, or references an undefined alias.
pub fn parse_yaml_documents(yaml_str: &str) -> Result<Vec<YamlNode>> {
    let mut builder = TreeBuilder::new(yaml_str);
    let mut parser = Parser::new_from_str(yaml_str);
    parser
        .load(&mut builder, true)
        .context("Failed to parse YAML")?;

    if let Some(error) = builder.error {
        return Err(error.context("Failed to parse YAML"));
    }
    Ok(builder.documents)
}

/// Parses the first document of a YAML stream.
///
/// An empty input is treated as a document holding an empty scalar.
///
/// # Example
///
/// ```
/// use yamlflat::document::parser::parse_yaml;
///
/// assert!(parse_yaml("").unwrap().is_empty());
/// assert!(parse_yaml("key: [unclosed").is_err());
/// ```
pub fn parse_yaml(yaml_str: &str) -> Result<YamlNode> {
    Ok(parse_yaml_documents(yaml_str)?
        .into_iter()
        .next()
        .unwrap_or_else(|| YamlNode::plain("")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_at<'a>(node: &'a YamlNode, key: &str) -> &'a YamlString {
        match node.get(key).map(|n| n.value()) {
            Some(YamlValue::Scalar(s)) => s,
            other => panic!("Expected scalar at {}, got {:?}", key, other),
        }
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let node = parse_yaml("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();

        match node.value() {
            YamlValue::Mapping(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            }
            _ => panic!("Expected mapping"),
        }
    }

    #[test]
    fn test_parse_scalar_styles() {
        let yaml = "plain: text\nquoted: \"text\"\nsingle: 'text'\nliteral: |\n  a\n  b\nfolded: >\n  a\n  b\n";
        let node = parse_yaml(yaml).unwrap();

        assert_eq!(scalar_at(&node, "plain"), &YamlString::Plain("text".to_string()));
        assert_eq!(scalar_at(&node, "quoted"), &YamlString::Quoted("text".to_string()));
        assert_eq!(scalar_at(&node, "single"), &YamlString::Quoted("text".to_string()));
        assert_eq!(
            scalar_at(&node, "literal"),
            &YamlString::Literal("a\nb\n".to_string())
        );
        assert_eq!(
            scalar_at(&node, "folded"),
            &YamlString::Folded("a b\n".to_string())
        );
    }

    #[test]
    fn test_parse_keeps_scalar_text_verbatim() {
        let node = parse_yaml("enabled: false\nprice: 1.50\nnothing: null\n").unwrap();

        assert_eq!(scalar_at(&node, "enabled").as_str(), "false");
        assert_eq!(scalar_at(&node, "price").as_str(), "1.50");
        assert_eq!(scalar_at(&node, "nothing").as_str(), "null");
    }

    #[test]
    fn test_parse_implicit_null_is_empty() {
        let node = parse_yaml("missing:\nexplicit: ~\n").unwrap();

        assert_eq!(scalar_at(&node, "missing").as_str(), "");
        assert_eq!(scalar_at(&node, "explicit").as_str(), "~");
    }

    #[test]
    fn test_parse_duplicate_keys_kept_in_order() {
        let node = parse_yaml("a: 1\na: 2\n").unwrap();

        match node.value() {
            YamlValue::Mapping(entries) => assert_eq!(entries.len(), 2),
            _ => panic!("Expected mapping"),
        }
        assert_eq!(scalar_at(&node, "a").as_str(), "1");
    }

    #[test]
    fn test_parse_alias_is_copied() {
        let yaml = "base: &base\n  image: nginx\nweb: *base\n";
        let node = parse_yaml(yaml).unwrap();

        let web = node.get("web").unwrap();
        assert_eq!(scalar_at(web, "image").as_str(), "nginx");
        assert_eq!(node.get("base"), node.get("web"));
    }

    #[test]
    fn test_parse_nested_sequences() {
        let node = parse_yaml("matrix:\n  - [1, 2]\n  - [3]\n").unwrap();

        match node.get("matrix").unwrap().value() {
            YamlValue::Sequence(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].child_count(), 2);
                assert_eq!(rows[1].child_count(), 1);
            }
            _ => panic!("Expected sequence"),
        }
    }

    #[test]
    fn test_parse_complex_key_fails() {
        let result = parse_yaml("? [a, b]\n: value\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_yaml_fails() {
        let invalid_cases = vec!["key: [1, 2", "a: b: c", "{unclosed: 1"];

        for invalid in invalid_cases {
            assert!(parse_yaml(invalid).is_err(), "Expected error for: {}", invalid);
        }
    }

    #[test]
    fn test_parse_multiple_documents() {
        let docs = parse_yaml_documents("a: 1\n---\nb: 2\n---\n").unwrap();

        assert_eq!(docs.len(), 3);
        assert!(docs[0].get("a").is_some());
        assert!(docs[1].get("b").is_some());
        assert!(docs[2].is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_yaml_documents("").unwrap().is_empty());
        assert_eq!(parse_yaml("").unwrap(), YamlNode::plain(""));
    }
}
