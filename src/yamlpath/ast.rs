//! Abstract syntax tree types for entry path expressions.

/// A segment in an entry path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Mapping key (`name`)
    Key(String),
    /// Mapping key followed by a sequence index (`name[0]`)
    Indexed { key: String, index: i64 },
}

impl PathSegment {
    /// Returns the mapping key this segment looks up.
    pub fn key(&self) -> &str {
        match self {
            PathSegment::Key(key) | PathSegment::Indexed { key, .. } => key,
        }
    }

    /// Returns the sequence index, if the segment carries one.
    pub fn index(&self) -> Option<i64> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Indexed { index, .. } => Some(*index),
        }
    }
}

/// A complete entry path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlPath {
    /// Segments that make up the path.
    pub segments: Vec<PathSegment>,
    source: String,
}

impl YamlPath {
    /// Creates a new path with the given segments and the text they came from.
    pub fn new(segments: Vec<PathSegment>, source: impl Into<String>) -> Self {
        Self {
            segments,
            source: source.into(),
        }
    }

    /// Returns the expression as the user wrote it.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the raw `.`-separated parts of the expression.
    ///
    /// Output lines for a resolved node start with these parts, so
    /// `containers[1].name` prints as `containers[1].name...`.
    pub fn display_prefix(&self) -> Vec<String> {
        self.source.split('.').map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_accessors() {
        let plain = PathSegment::Key("spec".to_string());
        assert_eq!(plain.key(), "spec");
        assert_eq!(plain.index(), None);

        let indexed = PathSegment::Indexed {
            key: "containers".to_string(),
            index: 2,
        };
        assert_eq!(indexed.key(), "containers");
        assert_eq!(indexed.index(), Some(2));
    }

    #[test]
    fn test_display_prefix_keeps_raw_parts() {
        let path = YamlPath::new(vec![], "spec.containers[1].name");
        assert_eq!(path.display_prefix(), vec!["spec", "containers[1]", "name"]);
    }
}
