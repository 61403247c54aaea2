//! Elemental type codes
//!
//! The dataset stores types as the strings `"1"` through `"18"`. Anything
//! else, including the `"0"` placeholder used for "no second type", does not
//! parse into a [`TypeCode`] and so never takes part in type matchups.

use derive_more::Display;
use serde::Serialize;

/// Number of known type codes
pub const TYPE_COUNT: u8 = 18;

/// Code marking an absent secondary type
pub const NO_TYPE_SENTINEL: &str = "0";

/// One of the 18 known type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{}", _0)]
pub struct TypeCode(u8);

impl TypeCode {
    /// Build a code from its number, if it is one of the known 18
    pub const fn new(code: u8) -> Option<Self> {
        if code >= 1 && code <= TYPE_COUNT {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Parse a raw dataset value. Unknown codes and the sentinel yield `None`.
    ///
    /// Only the canonical spellings `"1"` to `"18"` are codes; padded or
    /// signed variants such as `"06"`, `"+6"` or `" 6"` are not.
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.parse::<u8>().ok().and_then(Self::new)?;
        (code.0.to_string() == raw).then_some(code)
    }

    pub fn code(self) -> u8 {
        self.0
    }

    /// Human-readable label shown next to pokemon names
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Fighting",
            2 => "Flying",
            3 => "Poison",
            4 => "Ground",
            5 => "Rock",
            6 => "Bug",
            7 => "Ghost",
            8 => "Steel",
            9 => "Fire",
            10 => "Water",
            11 => "Grass",
            12 => "Electric",
            13 => "Psychic",
            14 => "Ice",
            15 => "Dragon",
            16 => "Dark",
            17 => "Fairy",
            _ => "Normal",
        }
    }

    /// Iterate over every known code in ascending order
    pub fn all() -> impl Iterator<Item = TypeCode> {
        (1..=TYPE_COUNT).map(TypeCode)
    }
}

/// Display label for a raw dataset code, falling back to the raw text
pub fn type_label(raw: &str) -> String {
    TypeCode::parse(raw)
        .map(|code| code.label().to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(TypeCode::parse("1").map(TypeCode::code), Some(1));
        assert_eq!(TypeCode::parse("18").map(TypeCode::code), Some(18));
        assert_eq!(TypeCode::all().count(), 18);
    }

    #[test]
    fn test_sentinel_and_unknown_codes_do_not_parse() {
        assert!(TypeCode::parse(NO_TYPE_SENTINEL).is_none());
        assert!(TypeCode::parse("19").is_none());
        assert!(TypeCode::parse("").is_none());
        assert!(TypeCode::parse("fire").is_none());
        assert!(TypeCode::parse("-3").is_none());
        for padded in ["06", "+6", "006", " 6", "6 ", "018"] {
            assert!(TypeCode::parse(padded).is_none(), "{:?} parsed", padded);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(TypeCode::parse("9").unwrap().label(), "Fire");
        assert_eq!(TypeCode::parse("18").unwrap().label(), "Normal");
        assert_eq!(type_label("11"), "Grass");
        assert_eq!(type_label("42"), "42");
    }
}
