//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bolted_connection`] - Bolt count for a bolted steel connection (IS 800)

pub mod bolted_connection;

// Re-export commonly used types
pub use bolted_connection::{
    calculate, design_strengths, required_bolt_count, BoltSpec, ConnectionGeometry,
    ConnectionInput, ConnectionResult, DesignStrengths, PlateSpec, StrengthMode,
};
