use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The qualification status of an entry in `emoji-test.txt`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EmojiStatus {
    /// Skin tone and hair style modifiers that are only used as parts of other sequences
    Component,
    /// The fully rendered form; the only one that ends up in a dataset
    FullyQualified,
    /// Missing some, but not all, of the variation selectors of the fully-qualified form
    MinimallyQualified,
    /// Not actually displayed as an emoji/not RGI
    Unqualified
}

impl EmojiStatus {
    pub fn is_fully_qualified(&self) -> bool {
        matches!(self, Self::FullyQualified)
    }

    /// The alternatives of all statuses for use in a regular expression
    pub fn regex() -> &'static str {
        "component|fully-qualified|minimally-qualified|unqualified"
    }
}

impl Default for EmojiStatus {
    fn default() -> Self {
        Self::Unqualified
    }
}

impl Display for EmojiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Component => "component".fmt(f),
            Self::Unqualified => "unqualified".fmt(f),
            Self::FullyQualified => "fully-qualified".fmt(f),
            Self::MinimallyQualified => "minimally-qualified".fmt(f)
        }
    }
}

impl FromStr for EmojiStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "unqualified" => Ok(Self::Unqualified),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            other => Err(other.to_string())
        }
    }
}
