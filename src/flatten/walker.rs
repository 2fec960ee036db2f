//! Recursive tree walk that writes flattened lines.

use super::format::{layout, ScalarLayout};
use super::options::{Depth, FlattenOptions};
use crate::document::node::{YamlNode, YamlValue};
use std::io::{self, Write};

const OBJECT_PLACEHOLDER: &str = "<object>";
const ARRAY_PLACEHOLDER: &str = "<array>";

/// Writes a YAML subtree as `path<sep>value` lines.
///
/// Lines are pushed to the writer as they are produced; nothing is
/// buffered beyond the current path.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flattener {
    options: FlattenOptions,
}

impl Flattener {
    pub fn new(options: FlattenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    /// Flattens `node`, prefixing every path with `prefix`.
    ///
    /// `prefix` is the path of `node` inside its document, usually the
    /// parts of the entry expression that selected it.
    pub fn flatten<W: Write>(
        &self,
        node: &YamlNode,
        prefix: &[String],
        out: &mut W,
    ) -> io::Result<()> {
        let mut path = prefix.to_vec();
        self.walk(node, &mut path, self.options.depth, out)
    }

    /// Flattens `node` into a string.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlflat::document::parser::parse_yaml;
    /// use yamlflat::flatten::{Flattener, FlattenOptions, Separator};
    ///
    /// let root = parse_yaml("ports:\n  - 80\n  - 443\n").unwrap();
    /// let options = FlattenOptions {
    ///     separator: Separator::Equals,
    ///     ..FlattenOptions::default()
    /// };
    /// let output = Flattener::new(options).flatten_to_string(&root, &[]);
    /// assert_eq!(output, "ports[0]=80\nports[1]=443\n");
    /// ```
    pub fn flatten_to_string(&self, node: &YamlNode, prefix: &[String]) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.flatten(node, prefix, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn walk<W: Write>(
        &self,
        node: &YamlNode,
        path: &mut Vec<String>,
        depth: Depth,
        out: &mut W,
    ) -> io::Result<()> {
        if !self.options.include_empty && node.is_empty() {
            return Ok(());
        }

        match node.value() {
            YamlValue::Mapping(entries) => {
                let Some(next) = depth.descend() else {
                    return self.write_line(path, OBJECT_PLACEHOLDER, out);
                };
                for (key, child) in entries {
                    path.push(key.clone());
                    let result = self.walk(child, path, next, out);
                    path.pop();
                    result?;
                }
                Ok(())
            }
            YamlValue::Sequence(items) => {
                let Some(next) = depth.descend() else {
                    return self.write_line(path, ARRAY_PLACEHOLDER, out);
                };
                for (index, item) in items.iter().enumerate() {
                    let suffix = format!("[{}]", index);
                    // The index attaches to the parent key; a root sequence
                    // has no key, so its elements are addressed as `[i]`.
                    let result = match path.last_mut() {
                        Some(last) => {
                            let key_len = last.len();
                            last.push_str(&suffix);
                            let result = self.walk(item, path, next, out);
                            if let Some(last) = path.last_mut() {
                                last.truncate(key_len);
                            }
                            result
                        }
                        None => {
                            path.push(suffix);
                            let result = self.walk(item, path, next, out);
                            path.pop();
                            result
                        }
                    };
                    result?;
                }
                Ok(())
            }
            YamlValue::Scalar(scalar) => match layout(scalar) {
                ScalarLayout::Block(lines) => {
                    self.write_line(path, "|-", out)?;
                    for line in lines {
                        writeln!(out, "  {}", line)?;
                    }
                    Ok(())
                }
                ScalarLayout::Quoted(value) => self.write_line(path, &value, out),
                ScalarLayout::Verbatim(value) => self.write_line(path, value, out),
            },
        }
    }

    fn write_line<W: Write>(&self, path: &[String], value: &str, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{}{}{}",
            path.join("."),
            self.options.separator.as_str(),
            value
        )
    }
}
