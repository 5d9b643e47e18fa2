//! Value objects - Immutable objects defined by their attributes

mod names;
mod stats;

pub use names::{CharacterName, ItemName, NamePolicy, DEFAULT_MAX_CHARACTER_NAME_LENGTH};
pub use stats::{CombatAttributes, Inventory, InventoryValue, ItemStats};
