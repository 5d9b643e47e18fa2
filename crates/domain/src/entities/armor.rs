//! Armor entity - wearable pieces that fill a character's equipment slots

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::read_item_stats;
use crate::error::ValidationErrors;
use crate::types::ArmorType;
use crate::validation::FieldReader;
use crate::value_objects::{ItemName, ItemStats};

/// A validated armor piece.
///
/// # Invariants
///
/// - `name` holds only letters and spaces (enforced by `ItemName`)
/// - `type` is always one of the six armor literals
///
/// Stat modifiers have no bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Armor {
    name: ItemName,
    #[serde(rename = "type")]
    kind: ArmorType,
    description: Option<String>,
    #[serde(flatten)]
    stats: ItemStats,
    luck: Option<f64>,
    evasion: Option<f64>,
}

impl Armor {
    pub fn new(name: ItemName, kind: ArmorType) -> Self {
        Self {
            name,
            kind,
            description: None,
            stats: ItemStats::default(),
            luck: None,
            evasion: None,
        }
    }

    /// Validate a raw JSON object and build an armor piece from it.
    ///
    /// # Errors
    ///
    /// Returns every field failure found in `raw`.
    pub fn from_raw(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::from_value(raw)?;
        let name = reader.name("name", ItemName::new);
        let kind = reader.item_type::<ArmorType>("type");
        let description = reader.optional_string("description");
        let stats = read_item_stats(&mut reader);
        let luck = reader.optional_number("luck");
        let evasion = reader.optional_number("evasion");

        reader.finish(|| {
            Some(Self {
                name: name?,
                kind: kind?,
                description,
                stats,
                luck,
                evasion,
            })
        })
    }

    #[inline]
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ArmorType {
        self.kind
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn stats(&self) -> &ItemStats {
        &self.stats
    }

    #[inline]
    pub fn luck(&self) -> Option<f64> {
        self.luck
    }

    #[inline]
    pub fn evasion(&self) -> Option<f64> {
        self.evasion
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stats(mut self, stats: ItemStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_luck(mut self, luck: f64) -> Self {
        self.luck = Some(luck);
        self
    }

    pub fn with_evasion(mut self, evasion: f64) -> Self {
        self.evasion = Some(evasion);
        self
    }
}

impl TryFrom<Value> for Armor {
    type Error = ValidationErrors;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Self::from_raw(&raw)
    }
}

impl<'de> Deserialize<'de> for Armor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_raw(&raw).map_err(serde::de::Error::custom)
    }
}

/// Validate a raw JSON object as an [`Armor`].
pub fn validate_armor(raw: &Value) -> Result<Armor, ValidationErrors> {
    Armor::from_raw(raw)
}
