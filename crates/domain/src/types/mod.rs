//! # Charforge Domain Types
//!
//! Fixed vocabularies used by the validated records. Every literal set is
//! declared once here and referenced by every validator that checks it.

mod literal;
pub use literal::{LiteralEnum, UnknownLiteral};

// Identity
mod identity;
pub use identity::{CharacterClass, Gender, Race};

// Item kinds
mod item_kinds;
pub use item_kinds::{ArmorType, Element, WeaponType};

// Equipment
mod slot;
pub use slot::EquipmentSlot;
