//! # Bolted Connection Calculation
//!
//! Determines how many bolts a lap or butt connection needs to carry a
//! factored load, per IS 800:2007 Section 10.3.
//!
//! ## Procedure
//!
//! 1. Bolt grade → f_ub, f_yb
//! 2. Design shear, bearing and tensile strengths of one bolt (kN)
//! 3. Bolt value = the smallest of the three
//! 4. Required bolts = ⌈factored load / bolt value⌉
//!
//! ## Assumptions
//!
//! - Bearing-type connection with standard clearance holes
//! - Load shared equally by all bolts
//! - No long-joint or large-grip reductions
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::calculations::bolted_connection::{
//!     calculate, BoltSpec, ConnectionGeometry, ConnectionInput, PlateSpec,
//! };
//! use bolt_core::materials::BoltGrade;
//!
//! let input = ConnectionInput {
//!     label: "Splice-1".to_string(),
//!     factored_load_kn: 50.0,
//!     bolt: BoltSpec { diameter_mm: 16, grade: BoltGrade::new(4, 6) },
//!     plate: PlateSpec { thickness_mm: 10, ultimate_strength_mpa: 410 },
//!     geometry: ConnectionGeometry {
//!         threaded_planes: 1,
//!         unthreaded_planes: 0,
//!         edge_distance_mm: 30,
//!         pitch_mm: 40,
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.required_bolts, 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::equations::bolt::{
    bearing_coefficient, design_bearing_strength, design_shear_strength, design_tensile_strength,
    governing_bolt_value, hole_diameter,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BoltGrade, PlateSteelGrade};
use crate::units::{KiloNewtons, Newtons};

/// Bolt diameter and property class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltSpec {
    /// Nominal bolt diameter d (mm)
    pub diameter_mm: u32,
    /// Property class, e.g. "4.6"
    pub grade: BoltGrade,
}

impl BoltSpec {
    /// Ultimate tensile strength f_ub (N/mm²)
    pub fn ultimate_strength_mpa(&self) -> u32 {
        self.grade.ultimate_strength_mpa()
    }

    /// Yield strength f_yb (N/mm²)
    pub fn yield_strength_mpa(&self) -> f64 {
        self.grade.yield_strength_mpa()
    }

    /// Standard clearance hole diameter d_0 (mm)
    pub fn hole_diameter_mm(&self) -> f64 {
        hole_diameter(f64::from(self.diameter_mm))
    }
}

/// Connected plate properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateSpec {
    /// Aggregate minimum thickness bearing in one direction t (mm)
    pub thickness_mm: u32,
    /// Ultimate tensile strength f_up (N/mm²)
    pub ultimate_strength_mpa: u32,
}

impl PlateSpec {
    /// Plate of a catalogued IS 2062 grade
    pub fn from_grade(thickness_mm: u32, grade: PlateSteelGrade) -> Self {
        Self {
            thickness_mm,
            ultimate_strength_mpa: grade.ultimate_strength_mpa(),
        }
    }
}

/// Shear planes and bolt spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGeometry {
    /// Shear planes intercepting the threads, N_n
    pub threaded_planes: u32,
    /// Shear planes through the unthreaded shank, N_s
    pub unthreaded_planes: u32,
    /// Edge distance e (mm)
    pub edge_distance_mm: u32,
    /// Pitch p (mm)
    pub pitch_mm: u32,
}

/// Input parameters for a bolted connection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Splice-1",
///   "factored_load_kn": 50.0,
///   "bolt": { "diameter_mm": 16, "grade": "4.6" },
///   "plate": { "thickness_mm": 10, "ultimate_strength_mpa": 410 },
///   "geometry": {
///     "threaded_planes": 1,
///     "unthreaded_planes": 0,
///     "edge_distance_mm": 30,
///     "pitch_mm": 40
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInput {
    /// User label for this connection (e.g., "Splice-1")
    #[serde(default)]
    pub label: String,

    /// Factored load to be transferred (kN)
    pub factored_load_kn: f64,

    pub bolt: BoltSpec,

    pub plate: PlateSpec,

    pub geometry: ConnectionGeometry,
}

impl ConnectionInput {
    /// Validate input parameters.
    ///
    /// Only the load is checked. Material and geometry values go through
    /// the formulas as given; a connection with no capacity is reported by
    /// [`required_bolt_count`] instead.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.factored_load_kn.is_finite() {
            return Err(CalcError::invalid_input(
                "factored_load_kn",
                self.factored_load_kn.to_string(),
                "Load must be a finite number",
            ));
        }
        if self.factored_load_kn < 0.0 {
            return Err(CalcError::invalid_input(
                "factored_load_kn",
                self.factored_load_kn.to_string(),
                "Load cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Mode of the governing bolt strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthMode {
    Shear,
    Bearing,
    Tension,
}

impl fmt::Display for StrengthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthMode::Shear => "Shear",
            StrengthMode::Bearing => "Bearing",
            StrengthMode::Tension => "Tension",
        };
        f.write_str(name)
    }
}

/// Design strengths of a single bolt (kN).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignStrengths {
    /// Design shear strength V_dsb (kN)
    pub shear_kn: f64,
    /// Design bearing strength V_dpb (kN)
    pub bearing_kn: f64,
    /// Design tensile strength T_db (kN)
    pub tensile_kn: f64,
}

impl DesignStrengths {
    /// Bolt value: minimum of the three strengths (kN)
    pub fn bolt_value_kn(&self) -> f64 {
        governing_bolt_value(self.shear_kn, self.bearing_kn, self.tensile_kn)
    }

    /// Which strength sets the bolt value. Ties resolve in the order
    /// shear, bearing, tension.
    pub fn governing_mode(&self) -> StrengthMode {
        if self.shear_kn <= self.bearing_kn && self.shear_kn <= self.tensile_kn {
            StrengthMode::Shear
        } else if self.bearing_kn <= self.tensile_kn {
            StrengthMode::Bearing
        } else {
            StrengthMode::Tension
        }
    }
}

/// Results from a bolted connection calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "f_ub_mpa": 400,
///   "f_yb_mpa": 240.0,
///   "hole_diameter_mm": 18.0,
///   "bearing_coefficient": 0.4907,
///   "strengths": { "shear_kn": 28.974, "bearing_kn": 64.385, "tensile_kn": 46.296 },
///   "bolt_value_kn": 28.974,
///   "governing_mode": "Shear",
///   "required_bolts": 2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionResult {
    /// Bolt ultimate strength f_ub (N/mm²)
    pub f_ub_mpa: u32,
    /// Bolt yield strength f_yb (N/mm²)
    pub f_yb_mpa: f64,
    /// Hole diameter d_0 (mm)
    pub hole_diameter_mm: f64,
    /// Bearing coefficient k_b
    pub bearing_coefficient: f64,
    pub strengths: DesignStrengths,
    /// Governing bolt value (kN)
    pub bolt_value_kn: f64,
    pub governing_mode: StrengthMode,
    /// Number of bolts needed to carry the factored load
    pub required_bolts: u32,
}

impl ConnectionResult {
    /// Capacity of the bolt group as designed (kN)
    pub fn group_capacity_kn(&self) -> f64 {
        self.bolt_value_kn * f64::from(self.required_bolts)
    }
}

/// Compute the three design strengths of one bolt.
///
/// Never fails: degenerate inputs give zero, negative or NaN strengths.
pub fn design_strengths(bolt: &BoltSpec, plate: &PlateSpec, geometry: &ConnectionGeometry) -> DesignStrengths {
    let f_ub = f64::from(bolt.ultimate_strength_mpa());
    let f_up = f64::from(plate.ultimate_strength_mpa);
    let d = f64::from(bolt.diameter_mm);

    let shear = Newtons(design_shear_strength(
        f_ub,
        d,
        f64::from(geometry.threaded_planes),
        f64::from(geometry.unthreaded_planes),
    ));
    let bearing = Newtons(design_bearing_strength(
        f_ub,
        f_up,
        d,
        f64::from(geometry.pitch_mm),
        f64::from(geometry.edge_distance_mm),
        f64::from(plate.thickness_mm),
    ));
    let tensile = Newtons(design_tensile_strength(f_up, d));

    DesignStrengths {
        shear_kn: KiloNewtons::from(shear).value(),
        bearing_kn: KiloNewtons::from(bearing).value(),
        tensile_kn: KiloNewtons::from(tensile).value(),
    }
}

/// Number of bolts needed: ⌈load / bolt value⌉.
///
/// # Errors
///
/// [`CalcError::Domain`] when the bolt value is zero, negative or NaN, or
/// when the quotient is not a finite count.
///
/// # Example
///
/// ```rust
/// use bolt_core::calculations::bolted_connection::required_bolt_count;
///
/// assert_eq!(required_bolt_count(100.0, 33.333).unwrap(), 4);
/// assert!(required_bolt_count(100.0, 0.0).is_err());
/// ```
pub fn required_bolt_count(factored_load_kn: f64, bolt_value_kn: f64) -> CalcResult<u32> {
    if bolt_value_kn.is_nan() || bolt_value_kn <= 0.0 {
        return Err(CalcError::domain(
            "required_bolt_count",
            format!(
                "bolt value must be positive to divide the load, got {} kN",
                bolt_value_kn
            ),
        ));
    }

    let bolts = (factored_load_kn / bolt_value_kn).ceil();
    if !bolts.is_finite() || bolts < 0.0 || bolts > f64::from(u32::MAX) {
        return Err(CalcError::domain(
            "required_bolt_count",
            format!(
                "{} kN / {} kN does not give a usable bolt count",
                factored_load_kn, bolt_value_kn
            ),
        ));
    }

    Ok(bolts as u32)
}

/// Calculate the required number of bolts for a connection.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Returns
///
/// * `Ok(ConnectionResult)` - Strengths, bolt value and bolt count
/// * `Err(CalcError)` - Invalid load, or a connection with no capacity
pub fn calculate(input: &ConnectionInput) -> CalcResult<ConnectionResult> {
    input.validate()?;

    let bolt = &input.bolt;
    if !bolt.grade.is_standard() {
        tracing::warn!(grade = %bolt.grade, "bolt grade is not an ISO 898-1 property class");
    }

    let strengths = design_strengths(bolt, &input.plate, &input.geometry);
    let bolt_value_kn = strengths.bolt_value_kn();

    tracing::debug!(
        label = %input.label,
        shear_kn = strengths.shear_kn,
        bearing_kn = strengths.bearing_kn,
        tensile_kn = strengths.tensile_kn,
        bolt_value_kn,
        "computed bolt design strengths"
    );

    let required_bolts = required_bolt_count(input.factored_load_kn, bolt_value_kn)?;

    let k_b = bearing_coefficient(
        f64::from(bolt.ultimate_strength_mpa()),
        f64::from(input.plate.ultimate_strength_mpa),
        f64::from(bolt.diameter_mm),
        f64::from(input.geometry.pitch_mm),
        f64::from(input.geometry.edge_distance_mm),
    );

    Ok(ConnectionResult {
        f_ub_mpa: bolt.ultimate_strength_mpa(),
        f_yb_mpa: bolt.yield_strength_mpa(),
        hole_diameter_mm: bolt.hole_diameter_mm(),
        bearing_coefficient: k_b,
        strengths,
        bolt_value_kn,
        governing_mode: strengths.governing_mode(),
        required_bolts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_connection() -> ConnectionInput {
        ConnectionInput {
            label: "Test Splice".to_string(),
            factored_load_kn: 50.0,
            bolt: BoltSpec {
                diameter_mm: 16,
                grade: BoltGrade::new(4, 6),
            },
            plate: PlateSpec {
                thickness_mm: 10,
                ultimate_strength_mpa: 410,
            },
            geometry: ConnectionGeometry {
                threaded_planes: 1,
                unthreaded_planes: 0,
                edge_distance_mm: 30,
                pitch_mm: 40,
            },
        }
    }

    #[test]
    fn test_end_to_end() {
        let result = calculate(&test_connection()).unwrap();

        assert_eq!(result.f_ub_mpa, 400);
        assert_eq!(result.f_yb_mpa, 240.0);
        assert_eq!(result.hole_diameter_mm, 18.0);

        // V_dsb = 400 * 0.78 * 201.06 / (1.25 * √3) = 28.974 kN
        assert!((result.strengths.shear_kn - 28.974).abs() < 0.001);
        // k_b = 40/54 - 0.25 = 0.4907; V_dpb = 2.5 * 0.4907 * 16 * 10 * 410 / 1.25 = 64.385 kN
        assert!((result.strengths.bearing_kn - 64.385).abs() < 0.001);
        // T_db = 0.9 * 410 * 156.83 / 1.25 = 46.296 kN
        assert!((result.strengths.tensile_kn - 46.296).abs() < 0.001);

        assert_eq!(result.bolt_value_kn, result.strengths.shear_kn);
        assert_eq!(result.governing_mode, StrengthMode::Shear);

        // 50 / 28.974 = 1.73 → 2
        assert_eq!(result.required_bolts, 2);
        assert!(result.group_capacity_kn() >= 50.0);
    }

    #[test]
    fn test_bolt_value_is_min_of_strengths() {
        let mut input = test_connection();
        for (n_n, n_s, e, p) in [(1, 0, 30, 40), (2, 1, 20, 35), (0, 2, 60, 80), (1, 1, 15, 30)] {
            input.geometry = ConnectionGeometry {
                threaded_planes: n_n,
                unthreaded_planes: n_s,
                edge_distance_mm: e,
                pitch_mm: p,
            };
            let s = design_strengths(&input.bolt, &input.plate, &input.geometry);
            let expected = s.shear_kn.min(s.bearing_kn).min(s.tensile_kn);
            assert_eq!(s.bolt_value_kn(), expected);
        }
    }

    #[test]
    fn test_governing_mode() {
        let s = DesignStrengths { shear_kn: 90.0, bearing_kn: 12.5, tensile_kn: 40.0 };
        assert_eq!(s.governing_mode(), StrengthMode::Bearing);
        let s = DesignStrengths { shear_kn: 90.0, bearing_kn: 60.0, tensile_kn: 40.0 };
        assert_eq!(s.governing_mode(), StrengthMode::Tension);
        let s = DesignStrengths { shear_kn: 5.0, bearing_kn: 5.0, tensile_kn: 5.0 };
        assert_eq!(s.governing_mode(), StrengthMode::Shear);
    }

    #[test]
    fn test_ceiling_division() {
        assert_eq!(required_bolt_count(100.0, 33.333).unwrap(), 4);
        assert_eq!(required_bolt_count(100.0, 25.0).unwrap(), 4);
        assert_eq!(required_bolt_count(100.0, 24.9).unwrap(), 5);
        assert_eq!(required_bolt_count(0.0, 10.0).unwrap(), 0);
    }

    #[test]
    fn test_non_positive_bolt_value() {
        for value in [0.0, -1.0, f64::NAN] {
            let err = required_bolt_count(50.0, value).unwrap_err();
            assert_eq!(err.error_code(), "DOMAIN_ERROR");
        }
    }

    #[test]
    fn test_overflowing_count() {
        let err = required_bolt_count(f64::MAX, f64::MIN_POSITIVE).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_zero_strength_grade_is_domain_error() {
        let mut input = test_connection();
        input.bolt.grade = BoltGrade::parse("0.6").unwrap();

        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::Domain { .. }));
    }

    #[test]
    fn test_no_shear_planes_is_domain_error() {
        let mut input = test_connection();
        input.geometry.threaded_planes = 0;
        input.geometry.unthreaded_planes = 0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_invalid_load() {
        let mut input = test_connection();
        input.factored_load_kn = -5.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        input.factored_load_kn = f64::INFINITY;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_plate_from_grade() {
        let plate = PlateSpec::from_grade(12, PlateSteelGrade::E350);
        assert_eq!(plate.ultimate_strength_mpa, 490);
        assert_eq!(plate.thickness_mm, 12);
    }

    #[test]
    fn test_serialization() {
        let input = test_connection();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("\"grade\": \"4.6\""));
        let roundtrip: ConnectionInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_label_defaults_when_missing() {
        let json = r#"{
            "factored_load_kn": 50.0,
            "bolt": { "diameter_mm": 16, "grade": "4.6" },
            "plate": { "thickness_mm": 10, "ultimate_strength_mpa": 410 },
            "geometry": { "threaded_planes": 1, "unthreaded_planes": 0, "edge_distance_mm": 30, "pitch_mm": 40 }
        }"#;
        let input: ConnectionInput = serde_json::from_str(json).unwrap();
        assert!(input.label.is_empty());
        assert_eq!(calculate(&input).unwrap().required_bolts, 2);
    }
}
