//! Domain entities - equippable items
//!
//! Armor and weapons share one shape: a validated name, a type from a fixed
//! literal set, an optional description and optional stat modifiers.

mod armor;
mod weapon;

pub use armor::{validate_armor, Armor};
pub use weapon::{validate_weapon, Weapon};

use crate::validation::FieldReader;
use crate::value_objects::ItemStats;

/// Read the stat modifiers every item carries.
pub(crate) fn read_item_stats(reader: &mut FieldReader<'_>) -> ItemStats {
    ItemStats {
        hp: reader.optional_number("hp"),
        cc: reader.optional_number("cc"),
        critdmg: reader.optional_number("critdmg"),
        patk: reader.optional_number("patk"),
        matk: reader.optional_number("matk"),
        defense: reader.optional_number("defense"),
        mana: reader.optional_number("mana"),
    }
}
