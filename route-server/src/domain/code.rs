//! Location code type.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidCode {
    reason: &'static str,
}

/// A short unique code identifying a location, such as an airport's IATA
/// code (`IST`, `LHR`) or a city-center code (`CCIST`).
///
/// Codes are 2 to 6 uppercase ASCII letters or digits. This type
/// guarantees that any `LocationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::LocationCode;
///
/// let ist = LocationCode::parse("IST").unwrap();
/// assert_eq!(ist.as_str(), "IST");
///
/// // Lowercase is rejected by `parse` but accepted by `parse_normalized`
/// assert!(LocationCode::parse("ist").is_err());
/// assert_eq!(LocationCode::parse_normalized("ist").unwrap(), ist);
///
/// // Too short or too long is rejected
/// assert!(LocationCode::parse("A").is_err());
/// assert!(LocationCode::parse("TOOLONGCODE").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LocationCode(String);

impl LocationCode {
    /// Parse a location code from a string.
    ///
    /// The input must be 2 to 6 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidCode> {
        let bytes = s.as_bytes();

        if bytes.len() < 2 || bytes.len() > 6 {
            return Err(InvalidCode {
                reason: "must be 2 to 6 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(LocationCode(s.to_owned()))
    }

    /// Parse a location code, uppercasing the input first.
    ///
    /// Lets callers accept `ist` or `Ist` where the canonical form is
    /// `IST`. All other rules of [`LocationCode::parse`] still apply.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCode> {
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({})", self.0)
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LocationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LocationCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_normalized(&raw).map_err(D::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid codes: 2-6 uppercase alphanumerics
    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z0-9]{2,6}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_code_string()) {
            let code = LocationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid code can be parsed
        #[test]
        fn valid_always_parses(s in valid_code_string()) {
            prop_assert!(LocationCode::parse(&s).is_ok());
        }

        /// parse_normalized agrees with parse on mixed-case input
        #[test]
        fn normalized_matches_uppercased(s in "[a-zA-Z0-9]{2,6}") {
            let normalized = LocationCode::parse_normalized(&s).unwrap();
            let upper = s.to_ascii_uppercase();
            prop_assert_eq!(normalized.as_str(), upper.as_str());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z0-9]{0,1}|[A-Z0-9]{7,12}") {
            prop_assert!(LocationCode::parse(&s).is_err());
        }
    }
}
