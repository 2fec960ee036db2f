//! Options controlling how a tree is flattened.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a key/value separator other than `": "` or `"="` is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid separator {0:?}, expected \": \" or \"=\"")]
pub struct InvalidSeparator(pub String);

/// The string placed between a path and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Separator {
    /// `path: value`
    #[default]
    Colon,
    /// `path=value`
    Equals,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Colon => ": ",
            Separator::Equals => "=",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Separator {
    type Err = InvalidSeparator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ": " => Ok(Separator::Colon),
            "=" => Ok(Separator::Equals),
            other => Err(InvalidSeparator(other.to_string())),
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = InvalidSeparator;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Separator> for String {
    fn from(separator: Separator) -> Self {
        separator.as_str().to_string()
    }
}

/// Remaining number of levels the flattener may descend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    #[default]
    Unlimited,
    Limited(usize),
}

impl Depth {
    /// Converts a signed budget; any negative value means unlimited.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlflat::flatten::Depth;
    ///
    /// assert_eq!(Depth::from_budget(-1), Depth::Unlimited);
    /// assert_eq!(Depth::from_budget(2), Depth::Limited(2));
    /// ```
    pub fn from_budget(budget: i64) -> Self {
        match usize::try_from(budget) {
            Ok(levels) => Depth::Limited(levels),
            Err(_) => Depth::Unlimited,
        }
    }

    /// Returns the budget for a child, or `None` when the budget is exhausted.
    pub fn descend(self) -> Option<Depth> {
        match self {
            Depth::Unlimited => Some(Depth::Unlimited),
            Depth::Limited(0) => None,
            Depth::Limited(levels) => Some(Depth::Limited(levels - 1)),
        }
    }
}

/// Settings for a flattening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlattenOptions {
    /// How deep to descend before printing `<object>`/`<array>` placeholders
    pub depth: Depth,
    /// Print empty scalars and empty collections instead of skipping them
    pub include_empty: bool,
    /// String between path and value
    pub separator: Separator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_parse() {
        assert_eq!(": ".parse::<Separator>(), Ok(Separator::Colon));
        assert_eq!("=".parse::<Separator>(), Ok(Separator::Equals));
        assert_eq!(
            ":".parse::<Separator>(),
            Err(InvalidSeparator(":".to_string()))
        );
        assert!(" = ".parse::<Separator>().is_err());
    }

    #[test]
    fn test_separator_display() {
        assert_eq!(Separator::Colon.to_string(), ": ");
        assert_eq!(Separator::Equals.to_string(), "=");
    }

    #[test]
    fn test_depth_descend() {
        assert_eq!(Depth::Unlimited.descend(), Some(Depth::Unlimited));
        assert_eq!(Depth::Limited(2).descend(), Some(Depth::Limited(1)));
        assert_eq!(Depth::Limited(1).descend(), Some(Depth::Limited(0)));
        assert_eq!(Depth::Limited(0).descend(), None);
    }

    #[test]
    fn test_depth_from_budget() {
        assert_eq!(Depth::from_budget(-5), Depth::Unlimited);
        assert_eq!(Depth::from_budget(0), Depth::Limited(0));
    }

    #[test]
    fn test_default_options() {
        let options = FlattenOptions::default();
        assert_eq!(options.depth, Depth::Unlimited);
        assert!(!options.include_empty);
        assert_eq!(options.separator, Separator::Colon);
    }
}
