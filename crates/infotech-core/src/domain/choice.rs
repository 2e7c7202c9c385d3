//! Enumerated option values and their validation.
//!
//! Each enumerated option is parsed by an explicit `FromStr` that either
//! yields the value or an [`InvalidChoice`] naming the permitted set. The
//! CLI reuses these functions as its value parsers, so the same rules apply
//! whether a value comes from argv or from an interactive prompt.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value outside an option's permitted set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid choice '{value}' for {option} (choose from {})", .allowed.join(", "))]
pub struct InvalidChoice {
    /// Option name, e.g. `difficulty`.
    pub option: &'static str,
    /// The rejected value as given.
    pub value: String,
    /// Every value the option accepts.
    pub allowed: &'static [&'static str],
}

/// Difficulty level of a learning module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Accepted spellings, in display order.
    pub const CHOICES: &'static [&'static str] = &["beginner", "intermediate", "advanced"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(InvalidChoice {
                option: "difficulty",
                value: other.to_string(),
                allowed: Self::CHOICES,
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary language of a learning module's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    /// Accepted spellings, in display order.
    pub const CHOICES: &'static [&'static str] = &["ru", "en"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(InvalidChoice {
                option: "language",
                value: other.to_string(),
                allowed: Self::CHOICES,
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
