//! # Charforge Domain
//!
//! Validated records for a role-playing-game character and its equipment.
//!
//! Every record is built from a decoded JSON object in one pass. A pass never
//! stops at the first bad field: it returns either a fully valid, immutable
//! record or a [`ValidationErrors`] listing every failure.
//!
//! - [`validate_character`] / [`CharacterValidator`] build a [`Character`]
//! - [`validate_armor`] and [`validate_weapon`] build standalone items
//!
//! The crate does no I/O and no logging.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod types;
pub mod validation;
pub mod value_objects;

pub use aggregates::{validate_character, Character, CharacterValidator, Equipment};
pub use entities::{validate_armor, validate_weapon, Armor, Weapon};
pub use error::{NameViolation, ValidationError, ValidationErrors};
pub use types::{
    ArmorType, CharacterClass, Element, EquipmentSlot, Gender, LiteralEnum, Race, UnknownLiteral,
    WeaponType,
};
pub use validation::{FieldReader, RawRecord, ValidationConfig};
pub use value_objects::{
    CharacterName, CombatAttributes, Inventory, InventoryValue, ItemName, ItemStats, NamePolicy,
};
