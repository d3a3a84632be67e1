use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator inserted between slug words. The host offers a fixed choice,
/// not an arbitrary character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    #[serde(rename = "-")]
    Hyphen,
    #[serde(rename = "_")]
    Underscore,
}

impl Separator {
    pub const fn as_char(self) -> char {
        match self {
            Self::Hyphen => '-',
            Self::Underscore => '_',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hyphen => "-",
            Self::Underscore => "_",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
