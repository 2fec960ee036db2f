//! Scalar formatting rules.

use crate::document::node::YamlString;

/// Characters that force a single-line value into double quotes.
const QUOTE_TRIGGERS: &[char] = &[':', '[', ']', '{', '}', ','];

/// How a scalar value is written after `path<sep>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarLayout<'a> {
    /// A `|-` header followed by each line indented by two spaces
    Block(Vec<&'a str>),
    /// Double-quoted, with inner `"` escaped
    Quoted(String),
    /// Written as is
    Verbatim(&'a str),
}

/// Chooses the layout for a scalar.
///
/// Block scalars and values containing a newline become a block. A
/// trailing newline does not produce a blank final line.
pub fn layout(scalar: &YamlString) -> ScalarLayout<'_> {
    let value = scalar.as_str();

    if scalar.is_multiline() {
        let mut lines: Vec<&str> = value.split('\n').collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        return ScalarLayout::Block(lines);
    }

    if value.contains(QUOTE_TRIGGERS) || value.starts_with(' ') || value.ends_with(' ') {
        return ScalarLayout::Quoted(format!("\"{}\"", value.replace('"', "\\\"")));
    }

    ScalarLayout::Verbatim(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> YamlString {
        YamlString::Plain(s.to_string())
    }

    #[test]
    fn test_plain_value_is_verbatim() {
        assert_eq!(layout(&plain("nginx")), ScalarLayout::Verbatim("nginx"));
        assert_eq!(layout(&plain("say \"hi\"")), ScalarLayout::Verbatim("say \"hi\""));
    }

    #[test]
    fn test_quoted_source_style_does_not_force_quotes() {
        let scalar = YamlString::Quoted("v2".to_string());
        assert_eq!(layout(&scalar), ScalarLayout::Verbatim("v2"));
    }

    #[test]
    fn test_special_characters_are_quoted() {
        for value in ["http://host", "[a]", "{b}", "a,b", "x]", "}"] {
            assert_eq!(
                layout(&plain(value)),
                ScalarLayout::Quoted(format!("\"{}\"", value)),
                "value: {}",
                value
            );
        }
    }

    #[test]
    fn test_surrounding_spaces_are_quoted() {
        assert_eq!(layout(&plain(" lead")), ScalarLayout::Quoted("\" lead\"".to_string()));
        assert_eq!(layout(&plain("trail ")), ScalarLayout::Quoted("\"trail \"".to_string()));
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(
            layout(&plain("key: \"value\"")),
            ScalarLayout::Quoted(r#""key: \"value\"""#.to_string())
        );
    }

    #[test]
    fn test_newline_value_is_block() {
        assert_eq!(layout(&plain("a\nb\n")), ScalarLayout::Block(vec!["a", "b"]));
        assert_eq!(layout(&plain("a\nb")), ScalarLayout::Block(vec!["a", "b"]));
    }

    #[test]
    fn test_block_keeps_inner_blank_lines() {
        assert_eq!(
            layout(&plain("a\n\nb\n\n")),
            ScalarLayout::Block(vec!["a", "", "b", ""])
        );
    }

    #[test]
    fn test_block_style_without_newline_is_block() {
        let literal = YamlString::Literal("single".to_string());
        assert_eq!(layout(&literal), ScalarLayout::Block(vec!["single"]));

        let folded = YamlString::Folded("a: b".to_string());
        assert_eq!(layout(&folded), ScalarLayout::Block(vec!["a: b"]));
    }
}
