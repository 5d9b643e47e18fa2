//! Equipment slots on a character

use serde::{Deserialize, Serialize};

use super::literal::define_literal_enum;

define_literal_enum! {
    /// One of the six named equipment positions on a character.
    ///
    /// A slot accepts any armor piece; the slot name does not have to match
    /// the armor's type.
    EquipmentSlot {
        Helmet => "helmet",
        Chestplate => "chestplate",
        Leggings => "leggings",
        Boots => "boots",
        Ring => "ring",
        Pendant => "pendant",
    }
}
