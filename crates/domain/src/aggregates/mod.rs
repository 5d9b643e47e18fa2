//! Aggregate roots - records that own their constituent parts
//!
//! A [`Character`] exclusively owns the armor in its equipment slots. Nothing
//! is shared between characters and nothing points back to its owner.

pub mod character;

pub use character::{validate_character, Character, CharacterValidator, Equipment};
