//! Stat value objects - item modifiers, character attributes and inventory values

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Optional stat modifiers shared by every item.
///
/// Items carry no lower bound on their modifiers; a negative value is a
/// penalty.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemStats {
    pub hp: Option<f64>,
    pub cc: Option<f64>,
    pub critdmg: Option<f64>,
    pub patk: Option<f64>,
    pub matk: Option<f64>,
    pub defense: Option<f64>,
    pub mana: Option<f64>,
}

impl ItemStats {
    /// True when no modifier is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Combat attributes of a character. All values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CombatAttributes {
    pub patk: f64,
    pub matk: f64,
    pub cc: f64,
    pub critdmg: f64,
    pub defense: f64,
    pub luck: f64,
    pub evasion: f64,
    pub mana: f64,
}

/// A quantity or value held in a character's inventory.
///
/// Integers stay integers so that a round trip through JSON keeps `3` as
/// `3` rather than `3.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InventoryValue {
    Int(i64),
    Float(f64),
}

impl InventoryValue {
    /// Classify a JSON number.
    pub fn from_number(number: &serde_json::Number) -> Option<Self> {
        if let Some(int) = number.as_i64() {
            Some(Self::Int(int))
        } else {
            number.as_f64().map(Self::Float)
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(int) => *int as f64,
            Self::Float(float) => *float,
        }
    }
}

impl fmt::Display for InventoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{}", int),
            Self::Float(float) => write!(f, "{}", float),
        }
    }
}

impl From<i64> for InventoryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for InventoryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Item identifier to quantity/value. Keys are kept sorted.
pub type Inventory = BTreeMap<String, InventoryValue>;
