//! Character aggregate - the validated player character
//!
//! A character is built in a single validation pass over one raw JSON object.
//! Either every field passes and an immutable [`Character`] is returned, or
//! every failure is returned together and nothing is built.
//!
//! # Validation order
//!
//! 1. Identity: `name`, `gender`, `race`
//! 2. Vitals: `hp`, `level`, `gold` (all non-negative)
//! 3. Combat attributes (all non-negative)
//! 4. Equipment slots, each validated as an [`Armor`]
//! 5. `inventory`, then `cls`

use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::entities::Armor;
use crate::error::ValidationErrors;
use crate::types::{CharacterClass, EquipmentSlot, Gender, LiteralEnum, Race};
use crate::validation::{FieldReader, ValidationConfig};
use crate::value_objects::{CharacterName, CombatAttributes, Inventory};

/// The six equipment slots of a character.
///
/// Any armor piece is accepted in any slot; a ring in the `helmet` slot is
/// valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Equipment {
    helmet: Option<Armor>,
    chestplate: Option<Armor>,
    leggings: Option<Armor>,
    boots: Option<Armor>,
    ring: Option<Armor>,
    pendant: Option<Armor>,
}

impl Equipment {
    /// The armor in `slot`, if any.
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Armor> {
        match slot {
            EquipmentSlot::Helmet => self.helmet.as_ref(),
            EquipmentSlot::Chestplate => self.chestplate.as_ref(),
            EquipmentSlot::Leggings => self.leggings.as_ref(),
            EquipmentSlot::Boots => self.boots.as_ref(),
            EquipmentSlot::Ring => self.ring.as_ref(),
            EquipmentSlot::Pendant => self.pendant.as_ref(),
        }
    }

    /// Occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Armor)> + '_ {
        EquipmentSlot::all()
            .iter()
            .filter_map(move |slot| self.get(*slot).map(|armor| (*slot, armor)))
    }

    /// True when no slot holds anything.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn read(reader: &mut FieldReader<'_>) -> Self {
        let mut slot = |slot: EquipmentSlot| reader.nested(slot.as_str(), Armor::from_raw);
        Self {
            helmet: slot(EquipmentSlot::Helmet),
            chestplate: slot(EquipmentSlot::Chestplate),
            leggings: slot(EquipmentSlot::Leggings),
            boots: slot(EquipmentSlot::Boots),
            ring: slot(EquipmentSlot::Ring),
            pendant: slot(EquipmentSlot::Pendant),
        }
    }
}

/// A validated player character.
///
/// # Invariants
///
/// - `name` holds only letters and spaces and respects the configured cap
/// - `gender`, `race` and `cls` are members of their literal sets
/// - `hp`, `level`, `gold` and every combat attribute are zero or greater
/// - every occupied equipment slot holds a valid [`Armor`]
///
/// There are no mutating methods; a character never changes after it is built.
///
/// # Example
///
/// ```
/// use charforge_domain::validate_character;
/// use serde_json::json;
///
/// let character = validate_character(&json!({
///     "name": "Josiah", "gender": "male", "race": "human",
///     "hp": 100, "level": 0, "gold": 10,
///     "patk": 5, "matk": 5, "cc": 0.01, "critdmg": 1.1, "defense": 0.95,
///     "luck": 0, "evasion": 0, "mana": 100,
///     "inventory": {}, "cls": "mage"
/// }))
/// .unwrap();
///
/// assert_eq!(character.name().as_str(), "Josiah");
/// assert!(character.equipment().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    // Identity
    name: CharacterName,
    gender: Gender,
    race: Race,

    // Vitals/progression
    hp: f64,
    level: u64,
    gold: f64,

    #[serde(flatten)]
    attributes: CombatAttributes,

    #[serde(flatten)]
    equipment: Equipment,

    inventory: Inventory,
    cls: CharacterClass,
}

impl Character {
    /// Validate `raw` with the default [`ValidationConfig`].
    pub fn from_raw(raw: &Value) -> Result<Self, ValidationErrors> {
        CharacterValidator::default().validate(raw)
    }

    // =========================================================================
    // Identity Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[inline]
    pub fn race(&self) -> Race {
        self.race
    }

    /// Returns the character's class.
    #[inline]
    pub fn cls(&self) -> CharacterClass {
        self.cls
    }

    // =========================================================================
    // Vitals Accessors
    // =========================================================================

    #[inline]
    pub fn hp(&self) -> f64 {
        self.hp
    }

    #[inline]
    pub fn level(&self) -> u64 {
        self.level
    }

    #[inline]
    pub fn gold(&self) -> f64 {
        self.gold
    }

    /// Returns the combat attributes (patk, matk, cc, ...).
    #[inline]
    pub fn attributes(&self) -> &CombatAttributes {
        &self.attributes
    }

    // =========================================================================
    // Possessions
    // =========================================================================

    #[inline]
    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    #[inline]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

impl TryFrom<Value> for Character {
    type Error = ValidationErrors;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Self::from_raw(&raw)
    }
}

/// Validates with the default [`ValidationConfig`]. Output produced under a
/// relaxed config should be read back through [`CharacterValidator`], which is
/// also a [`DeserializeSeed`].
impl<'de> Deserialize<'de> for Character {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_raw(&raw).map_err(serde::de::Error::custom)
    }
}

/// Validates raw character input under a fixed [`ValidationConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterValidator {
    config: ValidationConfig,
}

impl CharacterValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Parse JSON text and validate it under this validator's config.
    pub fn parse_str(&self, text: &str) -> Result<Character, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        let character = (*self).deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(character)
    }

    /// Validate one raw character object.
    ///
    /// # Errors
    ///
    /// Returns every field failure. Failures inside an equipment slot are
    /// grouped under that slot as a `NestedValidationFailure`.
    pub fn validate(&self, raw: &Value) -> Result<Character, ValidationErrors> {
        let mut reader = FieldReader::from_value(raw)?;
        let policy = self.config.name_policy();

        let name = reader.name("name", |name| CharacterName::with_policy(name, policy));
        let gender = reader.literal::<Gender>("gender");
        let race = reader.literal::<Race>("race");

        let hp = reader.non_negative("hp");
        let level = reader.non_negative_integer("level");
        let gold = reader.non_negative("gold");

        let attributes = read_attributes(&mut reader);
        let equipment = Equipment::read(&mut reader);

        let inventory = reader.numeric_map("inventory");
        let cls = reader.literal::<CharacterClass>("cls");

        reader.finish(|| {
            Some(Character {
                name: name?,
                gender: gender?,
                race: race?,
                hp: hp?,
                level: level?,
                gold: gold?,
                attributes: attributes?,
                equipment,
                inventory: inventory?,
                cls: cls?,
            })
        })
    }
}

/// Deserializes and validates in one step under this validator's config.
impl<'de> DeserializeSeed<'de> for CharacterValidator {
    type Value = Character;

    fn deserialize<D>(self, deserializer: D) -> Result<Character, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        self.validate(&raw).map_err(serde::de::Error::custom)
    }
}

fn read_attributes(reader: &mut FieldReader<'_>) -> Option<CombatAttributes> {
    let patk = reader.non_negative("patk");
    let matk = reader.non_negative("matk");
    let cc = reader.non_negative("cc");
    let critdmg = reader.non_negative("critdmg");
    let defense = reader.non_negative("defense");
    let luck = reader.non_negative("luck");
    let evasion = reader.non_negative("evasion");
    let mana = reader.non_negative("mana");

    Some(CombatAttributes {
        patk: patk?,
        matk: matk?,
        cc: cc?,
        critdmg: critdmg?,
        defense: defense?,
        luck: luck?,
        evasion: evasion?,
        mana: mana?,
    })
}

/// Validate a raw JSON object as a [`Character`] with the default config.
pub fn validate_character(raw: &Value) -> Result<Character, ValidationErrors> {
    Character::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NameViolation, ValidationError};
    use crate::types::ArmorType;
    use crate::value_objects::InventoryValue;
    use serde_json::json;

    const NON_NEGATIVE_FIELDS: [&str; 11] = [
        "hp", "level", "gold", "patk", "matk", "cc", "critdmg", "defense", "luck", "evasion",
        "mana",
    ];

    fn josiah() -> Value {
        json!({
            "name": "Josiah", "gender": "male", "race": "human",
            "hp": 100, "level": 0, "gold": 10,
            "patk": 5, "matk": 5, "cc": 0.01, "critdmg": 1.1, "defense": 0.95,
            "luck": 0, "evasion": 0, "mana": 100,
            "helmet": null, "chestplate": null, "leggings": null,
            "boots": null, "ring": null, "pendant": null,
            "inventory": {}, "cls": "mage"
        })
    }

    fn single_error(raw: &Value) -> ValidationError {
        let errors = validate_character(raw).unwrap_err();
        assert_eq!(errors.len(), 1, "expected one error, got {errors}");
        errors.into_inner().remove(0)
    }

    #[test]
    fn test_canonical_character_is_valid() {
        let character = validate_character(&josiah()).unwrap();

        assert_eq!(character.name().as_str(), "Josiah");
        assert_eq!(character.gender(), Gender::Male);
        assert_eq!(character.race(), Race::Human);
        assert_eq!(character.cls(), CharacterClass::Mage);
        assert_eq!(character.hp(), 100.0);
        assert_eq!(character.level(), 0);
        assert_eq!(character.gold(), 10.0);
        assert_eq!(
            *character.attributes(),
            CombatAttributes {
                patk: 5.0,
                matk: 5.0,
                cc: 0.01,
                critdmg: 1.1,
                defense: 0.95,
                luck: 0.0,
                evasion: 0.0,
                mana: 100.0,
            }
        );
        for slot in EquipmentSlot::all() {
            assert!(character.equipment().get(*slot).is_none());
        }
        assert!(character.inventory().is_empty());
    }

    #[test]
    fn test_absent_slots_equal_null_slots() {
        let mut raw = josiah();
        let object = raw.as_object_mut().unwrap();
        for slot in EquipmentSlot::LITERALS {
            object.remove(*slot);
        }
        assert_eq!(
            validate_character(&raw).unwrap(),
            validate_character(&josiah()).unwrap()
        );
    }

    #[test]
    fn test_negative_level_is_the_only_error() {
        let mut raw = josiah();
        raw["level"] = json!(-1);
        assert_eq!(single_error(&raw), ValidationError::negative("level", -1.0));
    }

    #[test]
    fn test_every_numeric_attribute_rejects_negatives() {
        for field in NON_NEGATIVE_FIELDS {
            let mut raw = josiah();
            raw[field] = json!(-2);
            let error = single_error(&raw);
            assert_eq!(error.code(), "negative_value_not_allowed", "field {field}");
            assert_eq!(error.field(), field);
        }
    }

    #[test]
    fn test_fractional_negative_is_rejected() {
        let mut raw = josiah();
        raw["gold"] = json!(-0.5);
        assert_eq!(single_error(&raw), ValidationError::negative("gold", -0.5));
    }

    #[test]
    fn test_unknown_class_lists_allowed_set() {
        let mut raw = josiah();
        raw["cls"] = json!("ninja");
        assert_eq!(
            single_error(&raw),
            ValidationError::InvalidEnumValue {
                field: "cls".to_string(),
                value: "ninja".to_string(),
                allowed: &[
                    "mage", "warlock", "warrior", "rogue", "paladin", "monk", "priest", "hunter"
                ],
            }
        );
    }

    #[test]
    fn test_unknown_gender_and_race() {
        for (field, value) in [("gender", "other"), ("race", "gnome"), ("race", "Human")] {
            let mut raw = josiah();
            raw[field] = json!(value);
            let error = single_error(&raw);
            assert_eq!(error.code(), "invalid_enum_value");
            assert_eq!(error.field(), field);
        }
    }

    #[test]
    fn test_names_with_non_letters_rejected() {
        for name in ["Jos1ah", "Jo.siah", "Jo$iah", "Josiah!"] {
            let mut raw = josiah();
            raw["name"] = json!(name);
            let error = single_error(&raw);
            assert!(
                matches!(
                    error,
                    ValidationError::InvalidName {
                        reason: NameViolation::NonAlphabetic { .. },
                        ..
                    }
                ),
                "name {name:?} gave {error:?}"
            );
        }
    }

    #[test]
    fn test_name_with_space_accepted() {
        let mut raw = josiah();
        raw["name"] = json!("Josiah the Bold");
        let character = validate_character(&raw).unwrap();
        assert_eq!(character.name().as_str(), "Josiah the Bold");
    }

    #[test]
    fn test_name_length_cap_is_configurable() {
        let mut raw = josiah();
        raw["name"] = json!("Josiah of the Western Marches");

        let error = single_error(&raw);
        assert_eq!(
            error,
            ValidationError::invalid_name(
                "name",
                NameViolation::TooLong {
                    max: 20,
                    actual: 29
                }
            )
        );

        let relaxed = CharacterValidator::new(ValidationConfig::default().with_max_name_length(None));
        assert!(relaxed.validate(&raw).is_ok());
    }

    #[test]
    fn test_helmet_with_bad_name_is_nested_failure() {
        let mut raw = josiah();
        raw["helmet"] = json!({ "name": "Iron1", "type": "helmet" });
        assert_eq!(
            single_error(&raw),
            ValidationError::NestedValidationFailure {
                slot: "helmet".to_string(),
                errors: vec![ValidationError::invalid_name(
                    "name",
                    NameViolation::NonAlphabetic { offending: '1' }
                )],
            }
        );
    }

    #[test]
    fn test_slot_with_unknown_armor_type_names_the_slot() {
        let mut raw = josiah();
        raw["boots"] = json!({ "name": "Fast Shoes", "type": "sandals" });
        let error = single_error(&raw);
        match error {
            ValidationError::NestedValidationFailure { slot, errors } => {
                assert_eq!(slot, "boots");
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code(), "missing_or_invalid_type");
            }
            other => panic!("expected nested failure, got {other:?}"),
        }
    }

    #[test]
    fn test_slot_type_need_not_match_slot_name() {
        let mut raw = josiah();
        raw["helmet"] = json!({ "name": "Lucky Band", "type": "ring", "luck": 3 });
        let character = validate_character(&raw).unwrap();
        let helmet = character.equipment().get(EquipmentSlot::Helmet).unwrap();
        assert_eq!(helmet.kind(), ArmorType::Ring);
        assert_eq!(helmet.luck(), Some(3.0));
    }

    #[test]
    fn test_slot_that_is_not_an_object() {
        let mut raw = josiah();
        raw["ring"] = json!("gold ring");
        assert_eq!(
            single_error(&raw),
            ValidationError::wrong_type("ring", "object")
        );
    }

    #[test]
    fn test_equipment_iter_in_slot_order() {
        let mut raw = josiah();
        raw["pendant"] = json!({ "name": "Amulet", "type": "pendant" });
        raw["chestplate"] = json!({ "name": "Mail", "type": "chestplate" });
        let character = validate_character(&raw).unwrap();
        let slots: Vec<EquipmentSlot> = character.equipment().iter().map(|(s, _)| s).collect();
        assert_eq!(slots, vec![EquipmentSlot::Chestplate, EquipmentSlot::Pendant]);
    }

    #[test]
    fn test_inventory_values() {
        let mut raw = josiah();
        raw["inventory"] = json!({ "potion": 3, "ether": 1.5 });
        let character = validate_character(&raw).unwrap();
        assert_eq!(character.inventory()["potion"], InventoryValue::Int(3));
        assert_eq!(character.inventory()["ether"], InventoryValue::Float(1.5));
    }

    #[test]
    fn test_inventory_with_non_numeric_value() {
        let mut raw = josiah();
        raw["inventory"] = json!({ "potion": "three" });
        assert_eq!(
            single_error(&raw),
            ValidationError::wrong_type("inventory.potion", "int or float")
        );
    }

    #[test]
    fn test_missing_fields_reported() {
        let mut raw = josiah();
        let object = raw.as_object_mut().unwrap();
        object.remove("race");
        object.remove("inventory");
        let errors = validate_character(&raw).unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                ValidationError::missing("race"),
                ValidationError::missing("inventory")
            ]
        );
    }

    #[test]
    fn test_all_failures_collected_in_one_pass() {
        let mut raw = josiah();
        raw["name"] = json!("J0siah");
        raw["gender"] = json!("robot");
        raw["level"] = json!(-1);
        raw["mana"] = json!("full");
        raw["helmet"] = json!({ "name": "Iron1", "type": "helmet" });
        raw["cls"] = json!("ninja");

        let errors = validate_character(&raw).unwrap_err();
        let codes: Vec<&str> = errors.iter().map(ValidationError::code).collect();
        assert_eq!(
            codes,
            vec![
                "invalid_name",
                "invalid_enum_value",
                "negative_value_not_allowed",
                "wrong_type",
                "nested_validation_failure",
                "invalid_enum_value",
            ]
        );
        let paths: Vec<String> = errors.leaves().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            vec!["name", "gender", "level", "mana", "helmet.name", "cls"]
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut raw = josiah();
        raw["title"] = json!("Sir");
        assert!(validate_character(&raw).is_ok());
    }

    #[test]
    fn test_non_object_input() {
        let errors = validate_character(&json!("Josiah")).unwrap_err();
        assert_eq!(errors.errors()[0].code(), "wrong_type");
        assert_eq!(errors.errors()[0].field(), crate::error::ROOT_FIELD);
    }

    #[test]
    fn test_serialization_keeps_declaration_order() {
        let character = validate_character(&josiah()).unwrap();
        let json = serde_json::to_string(&character).unwrap();
        let keys = [
            "\"name\"", "\"gender\"", "\"race\"", "\"hp\"", "\"level\"", "\"gold\"",
            "\"patk\"", "\"mana\"", "\"helmet\"", "\"pendant\"", "\"inventory\"", "\"cls\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(json.contains("\"helmet\":null"));
    }

    #[test]
    fn test_revalidating_serialized_output_is_idempotent() {
        let mut raw = josiah();
        raw["ring"] = json!({
            "name": "Band of Echoes", "type": "ring", "description": "Hums softly",
            "mana": 15, "evasion": 0.02
        });
        raw["inventory"] = json!({ "potion": 3, "ether": 1.5 });
        let character = validate_character(&raw).unwrap();

        let text = serde_json::to_string_pretty(&character).unwrap();
        let reparsed: Character = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, character);

        let again = serde_json::to_string_pretty(&reparsed).unwrap();
        assert_eq!(again, text);
    }

    #[test]
    fn test_relaxed_config_round_trips_through_its_validator() {
        let mut raw = josiah();
        raw["name"] = json!("Josiah of the Western Marches");
        let relaxed = CharacterValidator::new(ValidationConfig::default().with_max_name_length(None));
        let character = relaxed.validate(&raw).unwrap();

        let text = serde_json::to_string(&character).unwrap();
        assert_eq!(relaxed.parse_str(&text).unwrap(), character);

        let err = serde_json::from_str::<Character>(&text).unwrap_err();
        assert!(err.to_string().contains("cannot exceed 20 characters"));
    }

    #[test]
    fn test_parse_str_rejects_trailing_input() {
        let text = serde_json::to_string(&josiah()).unwrap();
        let validator = CharacterValidator::default();
        assert!(validator.parse_str(&text).is_ok());
        assert!(validator.parse_str(&format!("{text} {{}}")).is_err());
    }

    #[test]
    fn test_deserialize_fails_with_report() {
        let mut raw = josiah();
        raw["level"] = json!(-1);
        let err = serde_json::from_value::<Character>(raw).unwrap_err();
        assert!(err.to_string().contains("level"));
    }
}
