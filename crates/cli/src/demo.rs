//! Sample input for the demonstration run

use serde_json::{json, Value};

/// The canonical sample character: a level 0 human mage with nothing
/// equipped and an empty inventory.
pub fn sample_character_input() -> Value {
    json!({
        "name": "Josiah",
        "gender": "male",
        "race": "human",
        "hp": 100,
        "level": 0,
        "gold": 10,
        "patk": 5,
        "matk": 5,
        "cc": 0.01,
        "critdmg": 1.1,
        "defense": 0.95,
        "luck": 0,
        "evasion": 0,
        "mana": 100,
        "helmet": null,
        "chestplate": null,
        "leggings": null,
        "boots": null,
        "ring": null,
        "pendant": null,
        "inventory": {},
        "cls": "mage"
    })
}
