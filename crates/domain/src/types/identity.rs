//! Character identity enumerations - gender, race and class

use serde::{Deserialize, Serialize};

use super::literal::define_literal_enum;

define_literal_enum! {
    /// Character gender
    Gender {
        Male => "male",
        Female => "female",
    }
}

define_literal_enum! {
    /// Playable races
    Race {
        Human => "human",
        Orc => "orc",
        Elf => "elf",
        Dwarf => "dwarf",
        Goblin => "goblin",
    }
}

define_literal_enum! {
    /// Character class.
    ///
    /// Serialized under the `cls` key on a character.
    CharacterClass {
        Mage => "mage",
        Warlock => "warlock",
        Warrior => "warrior",
        Rogue => "rogue",
        Paladin => "paladin",
        Monk => "monk",
        Priest => "priest",
        Hunter => "hunter",
    }
}
