//! # bolt_core - Bolted Connection Calculation Engine
//!
//! `bolt_core` computes the design strength of a single bolt in a steel
//! connection and the number of bolts needed to carry a factored load.
//! All inputs and outputs are JSON-serializable, making it easy to drive
//! from a CLI, a batch file, or an LLM tool call.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every formula is listed in the equation registry
//!
//! ## Quick Start
//!
//! ```rust
//! use bolt_core::calculations::{calculate, BoltSpec, ConnectionGeometry, ConnectionInput, PlateSpec};
//!
//! let input = ConnectionInput {
//!     label: "Lap joint".to_string(),
//!     factored_load_kn: 100.0,
//!     bolt: BoltSpec { diameter_mm: 20, grade: "8.8".parse().unwrap() },
//!     plate: PlateSpec { thickness_mm: 12, ultimate_strength_mpa: 410 },
//!     geometry: ConnectionGeometry {
//!         threaded_planes: 1,
//!         unthreaded_planes: 1,
//!         edge_distance_mm: 40,
//!         pitch_mm: 60,
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{} bolts, bolt value {:.3} kN", result.required_bolts, result.bolt_value_kn);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The bolted connection calculation
//! - [`equations`] - Design strength formulas and the equation registry
//! - [`materials`] - Bolt property classes and plate steel grades
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, ConnectionInput, ConnectionResult};
pub use errors::{CalcError, CalcResult};
pub use materials::{BoltGrade, PlateSteelGrade};
