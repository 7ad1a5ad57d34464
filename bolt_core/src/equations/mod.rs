//! # Bolted Connection Equations
//!
//! This module contains all equations used in bolted connection calculations.
//! Having equations in one place enables:
//! - Easy verification against code references (IS 800)
//! - Documentation of assumptions and units
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`bolt`] - Single-bolt design strengths (shear, bearing, tension)
//! - [`registry`] - Equation metadata for the equations reference and reports
//!
//! ## References
//!
//! - IS 800:2007: General Construction in Steel - Code of Practice
//! - ISO 898-1: Mechanical properties of fasteners

pub mod bolt;
pub mod registry;

// Re-export commonly used items
pub use bolt::{
    bearing_coefficient,
    design_bearing_strength,
    design_shear_strength,
    design_tensile_strength,
    governing_bolt_value,
    hole_diameter,
    shank_area,
    threaded_net_area,
    GAMMA_MB,
    THREADED_AREA_RATIO,
};

pub use registry::{
    connection_calculation_equations,
    generate_equations_markdown,
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
};
