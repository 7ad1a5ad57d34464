//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## SI Units
//!
//! Bolt design per IS 800 is carried out in mm and N/mm², so the formulas
//! produce newtons. Results are reported in kilonewtons (kN = 1000 N).
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::units::{KiloNewtons, Newtons};
//!
//! let capacity = Newtons(28_974.0);
//! let kn: KiloNewtons = capacity.into();
//! assert!((kn.0 - 28.974).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

impl KiloNewtons {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newtons_to_kilonewtons() {
        let n = Newtons(64_385.0);
        let kn: KiloNewtons = n.into();
        assert!((kn.0 - 64.385).abs() < 1e-9);
    }

    #[test]
    fn test_value_after_conversion() {
        let n = Newtons(28_974.356);
        assert!((KiloNewtons::from(n).value() - 28.974356).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let kn = KiloNewtons(28.974);
        let json = serde_json::to_string(&kn).unwrap();
        assert_eq!(json, "28.974");

        let roundtrip: KiloNewtons = serde_json::from_str(&json).unwrap();
        assert_eq!(kn, roundtrip);
    }
}
