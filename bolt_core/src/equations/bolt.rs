//! # Bolt Design Strength Formulas
//!
//! Limit-state design strengths of a single bolt in a bearing-type
//! connection, per IS 800:2007 Section 10.3.
//!
//! ## Notation
//!
//! - `d` = Nominal bolt diameter (mm)
//! - `d_0` = Hole diameter (mm)
//! - `f_ub` = Ultimate tensile strength of the bolt (N/mm²)
//! - `f_up` = Ultimate tensile strength of the plate (N/mm²)
//! - `N_n` = Number of shear planes intercepting the threads
//! - `N_s` = Number of shear planes through the shank
//! - `e` = Edge distance (mm)
//! - `p` = Pitch (mm)
//! - `t` = Aggregate minimum plate thickness bearing in one direction (mm)
//! - `γ_mb` = Partial safety factor for bolts at ultimate strength
//!
//! ## Units
//!
//! Every function returns newtons when given mm and N/mm². None of them
//! validate their inputs: zero or negative values propagate through the
//! arithmetic unchanged.
//!
//! ## References
//!
//! - IS 800:2007 Table 5: Partial safety factors
//! - IS 800:2007 Table 19: Clearances for fastener holes
//! - IS 800:2007 Section 10.3.3, 10.3.4, 10.3.5

use std::f64::consts::PI;

/// Partial safety factor for bolts governed by ultimate stress (IS 800 Table 5)
pub const GAMMA_MB: f64 = 1.25;

/// Ratio of net tensile stress area to gross shank area for ISO metric threads
pub const THREADED_AREA_RATIO: f64 = 0.78;

/// Tensile strength reduction applied to `f_ub·A_n` (IS 800 10.3.5)
pub const TENSION_REDUCTION: f64 = 0.9;

/// Bearing coefficient ceiling
pub const KB_MAX: f64 = 1.0;

// =============================================================================
// AREAS
// =============================================================================

/// Gross cross-sectional area of the unthreaded shank
///
/// # Formula
/// A_sb = π·d²/4
#[inline]
pub fn shank_area(d: f64) -> f64 {
    PI * d.powi(2) / 4.0
}

/// Net tensile stress area through the threads
///
/// # Formula
/// A_nb = 0.78 × π·d²/4
#[inline]
pub fn threaded_net_area(d: f64) -> f64 {
    THREADED_AREA_RATIO * shank_area(d)
}

// =============================================================================
// SHEAR (IS 800 10.3.3)
// =============================================================================

/// Design shear strength of a bolt
///
/// ```text
///     ══╤══   plate 1
///   ────┼──── shear plane
///     ══╧══   plate 2
/// ```
///
/// # Formula
/// V_dsb = f_ub (n_n·A_nb + n_s·A_sb) / (√3 · γ_mb)
///
/// # Arguments
/// * `f_ub` - Bolt ultimate strength (N/mm²)
/// * `d` - Bolt diameter (mm)
/// * `n_n` - Shear planes intercepting the threads
/// * `n_s` - Shear planes through the unthreaded shank
///
/// # Returns
/// Shear strength in N. Zero when both plane counts are zero.
///
/// # Example
/// ```rust
/// use bolt_core::equations::bolt::design_shear_strength;
///
/// // M16 grade 4.6, single threaded shear plane
/// let v = design_shear_strength(400.0, 16.0, 1.0, 0.0);
/// assert!((v / 1000.0 - 28.974).abs() < 0.001);
/// ```
#[inline]
pub fn design_shear_strength(f_ub: f64, d: f64, n_n: f64, n_s: f64) -> f64 {
    let unthreaded = shank_area(d);
    let threaded = threaded_net_area(d);
    f_ub * (threaded * n_n + unthreaded * n_s) / (GAMMA_MB * 3.0_f64.sqrt())
}

// =============================================================================
// BEARING (IS 800 10.3.4)
// =============================================================================

/// Standard clearance hole diameter for a bolt (IS 800 Table 19)
///
/// | Bolt diameter | Hole diameter |
/// |---------------|---------------|
/// | d ≤ 14        | d + 1         |
/// | 14 < d < 27   | d + 2         |
/// | d ≥ 27        | d + 3         |
///
/// # Example
/// ```rust
/// use bolt_core::equations::bolt::hole_diameter;
///
/// assert_eq!(hole_diameter(14.0), 15.0);
/// assert_eq!(hole_diameter(27.0), 30.0);
/// ```
#[inline]
pub fn hole_diameter(d: f64) -> f64 {
    if d <= 14.0 {
        d + 1.0
    } else if d >= 27.0 {
        d + 3.0
    } else {
        d + 2.0
    }
}

/// Bearing coefficient k_b
///
/// # Formula
/// k_b = min(e/(3d_0), p/(3d_0) − 0.25, f_ub/f_up, 1.0)
///
/// The result never exceeds 1.0. `f64::min` discards NaN operands, so a
/// NaN ratio (e.g. `0/0` strengths) falls back to the remaining terms.
#[inline]
pub fn bearing_coefficient(f_ub: f64, f_up: f64, d: f64, p: f64, e: f64) -> f64 {
    let d_0 = hole_diameter(d);
    (e / (3.0 * d_0))
        .min(p / (3.0 * d_0) - 0.25)
        .min(f_ub / f_up)
        .min(KB_MAX)
}

/// Design bearing strength of a bolt on the connected plate
///
/// ```text
///      e        p
///   |<--->|<-------->|
///   ┌─────────────────────
///   │     ○          ○      → load
///   └─────────────────────
/// ```
///
/// # Formula
/// V_dpb = 2.5 · k_b · d · t · f_up / γ_mb
///
/// # Arguments
/// * `f_ub` - Bolt ultimate strength (N/mm²)
/// * `f_up` - Plate ultimate strength (N/mm²)
/// * `d` - Bolt diameter (mm)
/// * `p` - Pitch (mm)
/// * `e` - Edge distance (mm)
/// * `t` - Aggregate minimum plate thickness (mm)
///
/// # Example
/// ```rust
/// use bolt_core::equations::bolt::design_bearing_strength;
///
/// let v = design_bearing_strength(400.0, 410.0, 16.0, 40.0, 30.0, 10.0);
/// assert!((v / 1000.0 - 64.385).abs() < 0.001);
/// ```
#[inline]
pub fn design_bearing_strength(f_ub: f64, f_up: f64, d: f64, p: f64, e: f64, t: f64) -> f64 {
    let k_b = bearing_coefficient(f_ub, f_up, d, p, e);
    2.5 * k_b * t * d * f_up / GAMMA_MB
}

// =============================================================================
// TENSION (IS 800 10.3.5)
// =============================================================================

/// Design tensile strength through the threaded net area
///
/// # Formula
/// T_db = 0.9 · f_up · A_nb / γ_mb
///
/// # Example
/// ```rust
/// use bolt_core::equations::bolt::design_tensile_strength;
///
/// let t = design_tensile_strength(410.0, 16.0);
/// assert!((t / 1000.0 - 46.296).abs() < 0.001);
/// ```
#[inline]
pub fn design_tensile_strength(f_up: f64, d: f64) -> f64 {
    TENSION_REDUCTION * f_up * threaded_net_area(d) / GAMMA_MB
}

// =============================================================================
// GOVERNING VALUE
// =============================================================================

/// Bolt value: the smallest of the shear, bearing and tensile strengths
#[inline]
pub fn governing_bolt_value(shear: f64, bearing: f64, tensile: f64) -> f64 {
    shear.min(bearing).min(tensile)
}
