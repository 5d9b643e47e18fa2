//! Literal enums - fields restricted to a small fixed set of lowercase strings
//!
//! Each enum is declared exactly once with [`define_literal_enum!`]; its
//! accepted literals, parsing, display and serde form all come from that one
//! declaration.

/// A field whose value must be one of a fixed set of string literals.
pub trait LiteralEnum: Sized + Copy + 'static {
    /// Every accepted literal, in declaration order.
    const LITERALS: &'static [&'static str];

    /// Every variant, in the same order as [`Self::LITERALS`].
    fn all() -> &'static [Self];

    /// The literal for this variant.
    fn as_str(&self) -> &'static str;

    /// Exact, case-sensitive lookup.
    fn from_literal(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.as_str() == s)
    }
}

macro_rules! define_literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::types::LiteralEnum for $name {
            const LITERALS: &'static [&'static str] = &[$($literal),+];

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::types::LiteralEnum::as_str(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::types::UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::types::LiteralEnum>::from_literal(s).ok_or_else(|| {
                    $crate::types::UnknownLiteral {
                        value: s.to_string(),
                        allowed: <Self as $crate::types::LiteralEnum>::LITERALS,
                    }
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::types::UnknownLiteral;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                $crate::types::LiteralEnum::as_str(&value).to_string()
            }
        }
    };
}

pub(crate) use define_literal_enum;

/// Returned when a string is not one of an enum's literals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value:?} is not one of [{}]", .allowed.join(", "))]
pub struct UnknownLiteral {
    pub value: String,
    pub allowed: &'static [&'static str],
}
