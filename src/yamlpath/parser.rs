//! Entry path expression parser.
//!
//! Expressions are `.`-separated segments, each either a bare key
//! (`spec`) or a key with a single trailing index (`containers[1]`).

use super::ast::{PathSegment, YamlPath};
use super::error::ResolveError;

/// How malformed index brackets are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Bracket text that is not an integer becomes index 0, a missing `]`
    /// takes the rest of the segment, and text after the first `]` is
    /// ignored.
    #[default]
    Lenient,
    /// Malformed brackets, non-integer indices and trailing text are errors.
    Strict,
}

impl IndexPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            IndexPolicy::Strict
        } else {
            IndexPolicy::Lenient
        }
    }
}

/// Parser for a single path segment.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    policy: IndexPolicy,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for one segment of an expression.
    pub fn new(segment: &'a str, policy: IndexPolicy) -> Self {
        Self {
            input: segment,
            position: 0,
            policy,
        }
    }

    /// Parses a whole expression into a `YamlPath`.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlflat::yamlpath::{IndexPolicy, Parser, PathSegment};
    ///
    /// let path = Parser::parse("spec.containers[1]", IndexPolicy::Lenient).unwrap();
    /// assert_eq!(path.segments[0], PathSegment::Key("spec".to_string()));
    /// assert_eq!(path.segments[1].index(), Some(1));
    /// ```
    pub fn parse(expr: &str, policy: IndexPolicy) -> Result<YamlPath, ResolveError> {
        let segments = expr
            .split('.')
            .map(|segment| Parser::new(segment, policy).parse_segment())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(YamlPath::new(segments, expr))
    }

    fn parse_segment(&mut self) -> Result<PathSegment, ResolveError> {
        let key = self.take_until('[');
        if self.is_eof() {
            if self.policy == IndexPolicy::Strict && (key.is_empty() || key.contains(']')) {
                return Err(self.invalid());
            }
            return Ok(PathSegment::Key(key.to_string()));
        }

        self.next(); // '['
        let index_text = self.take_until(']');
        let closed = self.next() == Some(']');

        match self.policy {
            IndexPolicy::Lenient => Ok(PathSegment::Indexed {
                key: key.to_string(),
                index: index_text.parse().unwrap_or(0),
            }),
            IndexPolicy::Strict => {
                if key.is_empty() || !closed || !self.is_eof() {
                    return Err(self.invalid());
                }
                let index = index_text.parse().map_err(|_| self.invalid())?;
                Ok(PathSegment::Indexed {
                    key: key.to_string(),
                    index,
                })
            }
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Checks if we've reached the end of input.
    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Consumes input up to (not including) `stop` or the end.
    fn take_until(&mut self, stop: char) -> &'a str {
        let input = self.input;
        let start = self.position;
        while let Some(ch) = self.peek() {
            if ch == stop {
                break;
            }
            self.next();
        }
        &input[start..self.position]
    }

    fn invalid(&self) -> ResolveError {
        ResolveError::InvalidSegment(self.input.to_string())
    }
}
