//! Item type enumerations - armor slots, weapon kinds and elements

use serde::{Deserialize, Serialize};

use super::literal::define_literal_enum;

define_literal_enum! {
    /// Kind of armor piece
    ArmorType {
        Helmet => "helmet",
        Chestplate => "chestplate",
        Leggings => "leggings",
        Boots => "boots",
        Ring => "ring",
        Pendant => "pendant",
    }
}

define_literal_enum! {
    /// Kind of weapon
    WeaponType {
        Sword => "sword",
        Dagger => "dagger",
        Bow => "bow",
        Crossbow => "crossbow",
        Axe => "axe",
        Gun => "gun",
        Staff => "staff",
        Wand => "wand",
        Picatrix => "picatrix",
    }
}

define_literal_enum! {
    /// Elemental damage carried by a weapon
    Element {
        Fire => "fire",
        Water => "water",
        Earth => "earth",
        Air => "air",
        Nature => "nature",
        Radiant => "radiant",
        Shadow => "shadow",
    }
}
