//! Validated name newtypes for items and characters
//!
//! Names are valid by construction:
//! - Non-empty, with at least one letter
//! - Only letters and spaces
//! - Character names optionally capped in length (see [`NamePolicy`])
//!
//! Names are stored exactly as given, without trimming.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::NameViolation;

/// Default cap for character names
pub const DEFAULT_MAX_CHARACTER_NAME_LENGTH: usize = 20;

/// Length rule applied on top of the letters-and-spaces check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePolicy {
    /// Maximum length in characters, or `None` for no cap
    pub max_length: Option<usize>,
}

impl NamePolicy {
    pub const UNBOUNDED: Self = Self { max_length: None };

    pub const fn capped(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
        }
    }

    /// Checks `name` against this policy.
    pub fn check(&self, name: &str) -> Result<(), NameViolation> {
        if let Some(offending) = name.chars().find(|c| !(c.is_alphabetic() || *c == ' ')) {
            return Err(NameViolation::NonAlphabetic { offending });
        }
        if !name.chars().any(char::is_alphabetic) {
            return Err(NameViolation::Empty);
        }
        if let Some(max) = self.max_length {
            let actual = name.chars().count();
            if actual > max {
                return Err(NameViolation::TooLong { max, actual });
            }
        }
        Ok(())
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self::capped(DEFAULT_MAX_CHARACTER_NAME_LENGTH)
    }
}

// ============================================================================
// ItemName
// ============================================================================

/// A validated armor or weapon name (letters and spaces, no length cap)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new validated item name.
    ///
    /// # Errors
    ///
    /// Returns a [`NameViolation`] if the name is empty or contains anything
    /// other than letters and spaces.
    pub fn new(name: impl Into<String>) -> Result<Self, NameViolation> {
        let name = name.into();
        NamePolicy::UNBOUNDED.check(&name)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemName {
    type Error = NameViolation;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> String {
        name.0
    }
}

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (letters and spaces, capped per [`NamePolicy`])
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new character name under the default policy (20 characters).
    pub fn new(name: impl Into<String>) -> Result<Self, NameViolation> {
        Self::with_policy(name, NamePolicy::default())
    }

    /// Create a new character name under an explicit policy.
    pub fn with_policy(name: impl Into<String>, policy: NamePolicy) -> Result<Self, NameViolation> {
        let name = name.into();
        policy.check(&name)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = NameViolation;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}
