//! # Materials
//!
//! Material definitions for bolted connections.
//!
//! ## Material Types
//!
//! - **Bolts**: Property classes per ISO 898-1 ([`BoltGrade`])
//! - **Plates**: Structural steel grades per IS 2062 ([`PlateSteelGrade`])
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::materials::{BoltGrade, PlateSteelGrade};
//!
//! let bolt: BoltGrade = "4.6".parse().unwrap();
//! let plate: PlateSteelGrade = "E250".parse().unwrap();
//!
//! // f_ub / f_up enters the bearing coefficient
//! let ratio = bolt.ultimate_strength_mpa() as f64 / plate.ultimate_strength_mpa() as f64;
//! assert!(ratio < 1.0);
//! ```

pub mod bolt_grade;
pub mod plate_steel;

pub use bolt_grade::BoltGrade;
pub use plate_steel::PlateSteelGrade;
