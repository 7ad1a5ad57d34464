//! Bolt property classes (ISO 898-1)
//!
//! A property class "X.Y" encodes the bolt's nominal strengths:
//! the ultimate tensile strength is `X × 100` N/mm² and the yield strength
//! is `0.Y` times that. Grade 4.6 is therefore 400 N/mm² ultimate and
//! 240 N/mm² yield.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::materials::BoltGrade;
//!
//! let grade: BoltGrade = "8.8".parse().unwrap();
//! assert_eq!(grade.ultimate_strength_mpa(), 800);
//! assert_eq!(grade.yield_strength_mpa(), 640.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Bolt property class such as 4.6 or 10.9.
///
/// Serializes as its designation string (`"4.6"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoltGrade {
    major: u8,
    minor: u8,
}

impl BoltGrade {
    /// Property classes listed in ISO 898-1 for carbon and alloy steel bolts
    pub const STANDARD: [BoltGrade; 9] = [
        BoltGrade::new(4, 6),
        BoltGrade::new(4, 8),
        BoltGrade::new(5, 6),
        BoltGrade::new(5, 8),
        BoltGrade::new(6, 8),
        BoltGrade::new(8, 8),
        BoltGrade::new(9, 8),
        BoltGrade::new(10, 9),
        BoltGrade::new(12, 9),
    ];

    /// Create a grade from its two designation numbers.
    ///
    /// No range checking; use [`BoltGrade::parse`] for user input.
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Parse a designation of the form "X.Y".
    ///
    /// `X` is one or two digits and `Y` exactly one digit. Anything else
    /// is rejected with [`CalcError::InputFormat`].
    pub fn parse(designation: &str) -> CalcResult<Self> {
        let trimmed = designation.trim();
        let bad = |reason: &str| CalcError::input_format("bolt_grade", designation, reason);

        let (major, minor) = trimmed
            .split_once('.')
            .ok_or_else(|| bad("expected a property class like '4.6' with a '.' separator"))?;

        if major.is_empty() || major.len() > 2 || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad("part before '.' must be one or two digits"));
        }
        if minor.len() != 1 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad("part after '.' must be a single digit"));
        }

        // Both parts are validated ASCII digits, so these cannot fail
        let major: u8 = major.parse().map_err(|_| bad("invalid major number"))?;
        let minor: u8 = minor.parse().map_err(|_| bad("invalid minor number"))?;
        Ok(Self { major, minor })
    }

    /// Ultimate tensile strength f_ub (N/mm²)
    pub fn ultimate_strength_mpa(&self) -> u32 {
        u32::from(self.major) * 100
    }

    /// Yield strength f_yb (N/mm²)
    pub fn yield_strength_mpa(&self) -> f64 {
        f64::from(self.ultimate_strength_mpa()) * f64::from(self.minor) / 10.0
    }

    /// Whether this is one of the ISO 898-1 property classes
    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(self)
    }

    /// Designation string, e.g. "4.6"
    pub fn designation(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl Default for BoltGrade {
    fn default() -> Self {
        BoltGrade::new(4, 6)
    }
}

impl fmt::Display for BoltGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for BoltGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoltGrade::parse(s)
    }
}

impl TryFrom<String> for BoltGrade {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BoltGrade::parse(&value)
    }
}

impl From<BoltGrade> for String {
    fn from(grade: BoltGrade) -> Self {
        grade.designation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_4_6() {
        let grade = BoltGrade::parse("4.6").unwrap();
        assert_eq!(grade.ultimate_strength_mpa(), 400);
        assert_eq!(grade.yield_strength_mpa(), 240.0);
        assert!(grade.is_standard());
    }

    #[test]
    fn test_two_digit_major() {
        let grade: BoltGrade = "10.9".parse().unwrap();
        assert_eq!(grade.ultimate_strength_mpa(), 1000);
        assert_eq!(grade.yield_strength_mpa(), 900.0);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(BoltGrade::parse("  8.8\n").unwrap(), BoltGrade::new(8, 8));
    }

    #[test]
    fn test_zero_strength_grade_parses() {
        let grade = BoltGrade::parse("0.6").unwrap();
        assert_eq!(grade.ultimate_strength_mpa(), 0);
        assert!(!grade.is_standard());
    }

    #[test]
    fn test_malformed_grades() {
        for input in ["46", "4.", ".6", "a.b", "4.6.8", "4.66", "123.4", "", "-4.6", "4,6"] {
            let err = BoltGrade::parse(input).unwrap_err();
            assert_eq!(err.error_code(), "INPUT_FORMAT", "input {:?}", input);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BoltGrade::new(12, 9).to_string(), "12.9");
    }

    #[test]
    fn test_serialization() {
        let grade = BoltGrade::new(4, 6);
        let json = serde_json::to_string(&grade).unwrap();
        assert_eq!(json, "\"4.6\"");

        let roundtrip: BoltGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(grade, roundtrip);

        assert!(serde_json::from_str::<BoltGrade>("\"46\"").is_err());
    }
}
