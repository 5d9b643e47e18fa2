//! Weapon entity - wielded items with an optional elemental affinity

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::read_item_stats;
use crate::error::ValidationErrors;
use crate::types::{Element, WeaponType};
use crate::validation::FieldReader;
use crate::value_objects::{ItemName, ItemStats};

/// A validated weapon.
///
/// The element is read from and written to the `Element` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weapon {
    name: ItemName,
    #[serde(rename = "type")]
    kind: WeaponType,
    description: Option<String>,
    #[serde(flatten)]
    stats: ItemStats,
    #[serde(rename = "Element")]
    element: Option<Element>,
}

impl Weapon {
    pub fn new(name: ItemName, kind: WeaponType) -> Self {
        Self {
            name,
            kind,
            description: None,
            stats: ItemStats::default(),
            element: None,
        }
    }

    /// Validate a raw JSON object and build a weapon from it.
    pub fn from_raw(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::from_value(raw)?;
        let name = reader.name("name", ItemName::new);
        let kind = reader.item_type::<WeaponType>("type");
        let description = reader.optional_string("description");
        let stats = read_item_stats(&mut reader);
        let element = reader.optional_literal::<Element>("Element");

        reader.finish(|| {
            Some(Self {
                name: name?,
                kind: kind?,
                description,
                stats,
                element,
            })
        })
    }

    #[inline]
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> WeaponType {
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
    pub fn element(&self) -> Option<Element> {
        self.element
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_stats(mut self, stats: ItemStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }
}

impl TryFrom<Value> for Weapon {
    type Error = ValidationErrors;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Self::from_raw(&raw)
    }
}

impl<'de> Deserialize<'de> for Weapon {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_raw(&raw).map_err(serde::de::Error::custom)
    }
}

/// Validate a raw JSON object as a [`Weapon`].
pub fn validate_weapon(raw: &Value) -> Result<Weapon, ValidationErrors> {
    Weapon::from_raw(raw)
}
