//! Field-level validation pipeline
//!
//! A [`FieldReader`] walks one raw JSON object. Each reader method validates a
//! single field and either returns the converted value or records a
//! [`ValidationError`] and returns `None`. Nothing short-circuits: a record
//! validator calls one method per field, then [`FieldReader::finish`] builds
//! the record only if no error was recorded.
//!
//! ```
//! use charforge_domain::validation::FieldReader;
//! use serde_json::json;
//!
//! let raw = json!({ "name": "Josiah", "gold": -3 });
//! let mut reader = FieldReader::from_value(&raw).unwrap();
//! let gold = reader.non_negative("gold");
//! let mana = reader.non_negative("mana");
//! let result = reader.finish(|| Some((gold?, mana?)));
//!
//! let errors = result.unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

use serde_json::{Map, Value};

use crate::error::{NameViolation, ValidationError, ValidationErrors, ROOT_FIELD};
use crate::types::LiteralEnum;
use crate::value_objects::{
    Inventory, InventoryValue, NamePolicy, DEFAULT_MAX_CHARACTER_NAME_LENGTH,
};

/// A decoded JSON object, the raw input to every validator.
pub type RawRecord = Map<String, Value>;

/// Tunables for character validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Cap on character name length in characters; `None` disables the cap.
    pub max_name_length: Option<usize>,
}

impl ValidationConfig {
    pub fn with_max_name_length(mut self, max_name_length: Option<usize>) -> Self {
        self.max_name_length = max_name_length;
        self
    }

    pub fn name_policy(&self) -> NamePolicy {
        NamePolicy {
            max_length: self.max_name_length,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: Some(DEFAULT_MAX_CHARACTER_NAME_LENGTH),
        }
    }
}

/// Collects converted fields and failures for one raw object.
///
/// `null` is treated exactly like an absent key. Keys that no reader asks for
/// are ignored.
#[derive(Debug)]
pub struct FieldReader<'a> {
    raw: &'a RawRecord,
    errors: Vec<ValidationError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(raw: &'a RawRecord) -> Self {
        Self {
            raw,
            errors: Vec::new(),
        }
    }

    /// Start reading `value`, which must be a JSON object.
    pub fn from_value(value: &'a Value) -> Result<Self, ValidationErrors> {
        value
            .as_object()
            .map(Self::new)
            .ok_or_else(|| ValidationError::wrong_type(ROOT_FIELD, "object").into())
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.raw.get(field).filter(|value| !value.is_null())
    }

    fn reject<T>(&mut self, error: ValidationError) -> Option<T> {
        self.errors.push(error);
        None
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.get(field) {
            Some(value) => Some(value),
            None => self.reject(ValidationError::missing(field)),
        }
    }

    fn string(&mut self, field: &str, value: &'a Value) -> Option<&'a str> {
        match value.as_str() {
            Some(s) => Some(s),
            None => self.reject(ValidationError::wrong_type(field, "string")),
        }
    }

    fn number(&mut self, field: &str, value: &Value) -> Option<f64> {
        match value.as_f64() {
            Some(number) => Some(number),
            None => self.reject(ValidationError::wrong_type(field, "number")),
        }
    }

    fn member<T: LiteralEnum>(&mut self, field: &str, value: &'a Value) -> Option<T> {
        let literal = self.string(field, value)?;
        match T::from_literal(literal) {
            Some(member) => Some(member),
            None => self.reject(ValidationError::InvalidEnumValue {
                field: field.to_string(),
                value: literal.to_string(),
                allowed: T::LITERALS,
            }),
        }
    }

    /// Required name field, checked by `parse`.
    ///
    /// `parse` borrows from the raw input, so constructors such as
    /// `ItemName::new` can be passed directly.
    pub fn name<N>(
        &mut self,
        field: &str,
        parse: impl FnOnce(&'a str) -> Result<N, NameViolation>,
    ) -> Option<N> {
        let value = self.required(field)?;
        let raw = self.string(field, value)?;
        match parse(raw) {
            Ok(name) => Some(name),
            Err(reason) => self.reject(ValidationError::invalid_name(field, reason)),
        }
    }

    /// Optional free-text field.
    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        let value = self.get(field)?;
        self.string(field, value).map(str::to_string)
    }

    /// Required literal enum field.
    pub fn literal<T: LiteralEnum>(&mut self, field: &str) -> Option<T> {
        let value = self.required(field)?;
        self.member(field, value)
    }

    /// Optional literal enum field.
    pub fn optional_literal<T: LiteralEnum>(&mut self, field: &str) -> Option<T> {
        let value = self.get(field)?;
        self.member(field, value)
    }

    /// Required item type.
    ///
    /// Every failure, including an absent or `null` type, is reported as
    /// [`ValidationError::MissingOrInvalidType`].
    pub fn item_type<T: LiteralEnum>(&mut self, field: &str) -> Option<T> {
        let value = self.get(field);
        if let Some(kind) = value.and_then(Value::as_str).and_then(T::from_literal) {
            return Some(kind);
        }
        let shown = value.map(|value| match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        });
        self.reject(ValidationError::MissingOrInvalidType {
            field: field.to_string(),
            value: shown,
            allowed: T::LITERALS,
        })
    }

    /// Optional number with no bound.
    pub fn optional_number(&mut self, field: &str) -> Option<f64> {
        let value = self.get(field)?;
        self.number(field, value)
    }

    /// Required number that must be zero or greater.
    pub fn non_negative(&mut self, field: &str) -> Option<f64> {
        let value = self.required(field)?;
        let number = self.number(field, value)?;
        if number < 0.0 {
            return self.reject(ValidationError::negative(field, number));
        }
        Some(number)
    }

    /// Required whole number that must be zero or greater.
    ///
    /// Floats with no fractional part are accepted.
    pub fn non_negative_integer(&mut self, field: &str) -> Option<u64> {
        let value = self.required(field)?;
        let Value::Number(number) = value else {
            return self.reject(ValidationError::wrong_type(field, "integer"));
        };
        if let Some(whole) = number.as_u64() {
            return Some(whole);
        }
        let Some(float) = number.as_f64() else {
            return self.reject(ValidationError::wrong_type(field, "integer"));
        };
        if float < 0.0 {
            return self.reject(ValidationError::negative(field, float));
        }
        // `u64::MAX as f64` rounds up to 2^64, which does not fit.
        if float.fract() != 0.0 || float >= u64::MAX as f64 {
            return self.reject(ValidationError::wrong_type(field, "integer"));
        }
        Some(float as u64)
    }

    /// Required object whose values must all be numbers.
    ///
    /// A bad entry is reported as `field.key`.
    pub fn numeric_map(&mut self, field: &str) -> Option<Inventory> {
        let value = self.required(field)?;
        let Some(entries) = value.as_object() else {
            return self.reject(ValidationError::wrong_type(field, "object"));
        };

        let mut map = Inventory::new();
        let mut valid = true;
        for (key, entry) in entries {
            match entry {
                Value::Number(number) => {
                    if let Some(parsed) = InventoryValue::from_number(number) {
                        map.insert(key.clone(), parsed);
                    }
                }
                _ => {
                    valid = false;
                    self.errors.push(ValidationError::wrong_type(
                        format!("{}.{}", field, key),
                        "int or float",
                    ));
                }
            }
        }
        valid.then_some(map)
    }

    /// Optional nested record.
    ///
    /// The nested validator's failures are attached under `slot` as a single
    /// [`ValidationError::NestedValidationFailure`].
    pub fn nested<T>(
        &mut self,
        slot: &str,
        validate: impl FnOnce(&'a Value) -> Result<T, ValidationErrors>,
    ) -> Option<T> {
        let value = self.get(slot)?;
        if !value.is_object() {
            return self.reject(ValidationError::wrong_type(slot, "object"));
        }
        match validate(value) {
            Ok(record) => Some(record),
            Err(errors) => self.reject(ValidationError::NestedValidationFailure {
                slot: slot.to_string(),
                errors: errors.into_inner(),
            }),
        }
    }

    /// Build the record if no field failed, otherwise return every failure.
    ///
    /// A reader method that returns `None` for a required field always
    /// records an error, so `build` only sees complete data. If `build` still
    /// gives up, the record is reported as incomplete on [`ROOT_FIELD`] so the
    /// returned errors are never empty.
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.errors.is_empty() {
            return Err(ValidationErrors::new(self.errors));
        }
        build()
            .ok_or_else(|| ValidationError::wrong_type(ROOT_FIELD, "complete record").into())
    }
}
