//! # Equation Registry
//!
//! Central registry of all equations used in bolted connection calculations.
//! Each equation has metadata including code references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for reports and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use bolt_core::equations::registry::Equation;
//!
//! let meta = Equation::BoltShearStrength.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! println!("Reference: {}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// IS 800 - General Construction in Steel, Code of Practice
    IS800 {
        year: u16,
        clause: &'static str,
    },
    /// ISO 898-1 - Mechanical properties of fasteners
    ISO898 { part: u8 },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::IS800 { year, clause } => {
                format!("IS 800:{} {}", year, clause)
            }
            CodeReference::ISO898 { part } => format!("ISO 898-{}", part),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Material strengths derived from grade designations
    MaterialProperties,
    /// Bolt and hole geometry (areas, clearances)
    Geometry,
    /// Design strengths of a single bolt
    DesignStrengths,
    /// Governing value and bolt count
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::MaterialProperties => "Material Properties",
            EquationCategory::Geometry => "Geometry",
            EquationCategory::DesignStrengths => "Design Strengths",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::MaterialProperties => 1,
            EquationCategory::Geometry => 2,
            EquationCategory::DesignStrengths => 3,
            EquationCategory::DesignChecks => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "d", "f_ub")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "N/mm²")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in bolted connection calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// f_ub = 100·X, f_yb = f_ub·0.Y for property class X.Y
    BoltGradeStrengths,
    /// A_sb = πd²/4, A_nb = 0.78·A_sb
    BoltAreas,
    /// d_0 = d + 1, 2 or 3
    HoleDiameter,
    /// V_dsb = f_ub(n_n·A_nb + n_s·A_sb)/(√3·γ_mb)
    BoltShearStrength,
    /// k_b = min(e/3d_0, p/3d_0 − 0.25, f_ub/f_up, 1.0)
    BearingCoefficient,
    /// V_dpb = 2.5·k_b·d·t·f_up/γ_mb
    BoltBearingStrength,
    /// T_db = 0.9·f_up·A_nb/γ_mb
    BoltTensileStrength,
    /// Bolt value = min(V_dsb, V_dpb, T_db)
    GoverningBoltValue,
    /// n = ⌈P/BV⌉
    RequiredBoltCount,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::BoltGradeStrengths => EquationMetadata {
                name: "Bolt Grade Strengths",
                description: "Ultimate and yield strength of a bolt from its property class designation",
                formula_plain: "f_ub = 100 * X, f_yb = f_ub * 0.Y for property class X.Y",
                reference: CodeReference::ISO898 { part: 1 },
                variables: vec![
                    Variable::new("X", "Major part of the property class", "-"),
                    Variable::new("Y", "Minor part of the property class", "-"),
                    Variable::new("f_ub", "Bolt ultimate tensile strength", "N/mm²"),
                    Variable::new("f_yb", "Bolt yield strength", "N/mm²"),
                ],
                assumptions: vec!["Nominal values, not measured strengths"],
                category: EquationCategory::MaterialProperties,
                source_module: "materials/bolt_grade.rs",
                source_function: "BoltGrade::ultimate_strength_mpa",
            },

            Equation::BoltAreas => EquationMetadata {
                name: "Bolt Areas",
                description: "Gross shank area and net tensile stress area through the threads",
                formula_plain: "A_sb = pi * d^2 / 4, A_nb = 0.78 * A_sb",
                reference: CodeReference::IS800 { year: 2007, clause: "10.3.3" },
                variables: vec![
                    Variable::new("d", "Nominal bolt diameter", "mm"),
                    Variable::new("A_sb", "Shank area", "mm²"),
                    Variable::new("A_nb", "Net tensile stress area", "mm²"),
                ],
                assumptions: vec!["ISO metric coarse threads (A_nb/A_sb ≈ 0.78)"],
                category: EquationCategory::Geometry,
                source_module: "equations/bolt.rs",
                source_function: "threaded_net_area",
            },

            Equation::HoleDiameter => EquationMetadata {
                name: "Hole Diameter",
                description: "Standard clearance hole diameter for a bolt",
                formula_plain: "d_0 = d + 1 (d <= 14), d + 2 (14 < d < 27), d + 3 (d >= 27)",
                reference: CodeReference::IS800 { year: 2007, clause: "Table 19" },
                variables: vec![
                    Variable::new("d", "Nominal bolt diameter", "mm"),
                    Variable::new("d_0", "Hole diameter", "mm"),
                ],
                assumptions: vec!["Standard clearance holes (not oversize or slotted)"],
                category: EquationCategory::Geometry,
                source_module: "equations/bolt.rs",
                source_function: "hole_diameter",
            },

            Equation::BoltShearStrength => EquationMetadata {
                name: "Bolt Shear Strength",
                description: "Design strength of a bolt in shear across threaded and unthreaded planes",
                formula_plain: "V_dsb = f_ub * (n_n * A_nb + n_s * A_sb) / (sqrt(3) * gamma_mb)",
                reference: CodeReference::IS800 { year: 2007, clause: "10.3.3" },
                variables: vec![
                    Variable::new("f_ub", "Bolt ultimate tensile strength", "N/mm²"),
                    Variable::new("n_n", "Shear planes intercepting threads", "-"),
                    Variable::new("n_s", "Shear planes through the shank", "-"),
                    Variable::new("gamma_mb", "Partial safety factor (1.25)", "-"),
                    Variable::new("V_dsb", "Design shear strength", "N"),
                ],
                assumptions: vec![
                    "No long-joint, large-grip or packing plate reductions",
                    "Bearing-type connection",
                ],
                category: EquationCategory::DesignStrengths,
                source_module: "equations/bolt.rs",
                source_function: "design_shear_strength",
            },

            Equation::BearingCoefficient => EquationMetadata {
                name: "Bearing Coefficient",
                description: "Reduction of bearing capacity by edge distance, pitch and strength ratio",
                formula_plain: "k_b = min(e / (3 d_0), p / (3 d_0) - 0.25, f_ub / f_up, 1.0)",
                reference: CodeReference::IS800 { year: 2007, clause: "10.3.4" },
                variables: vec![
                    Variable::new("e", "Edge distance", "mm"),
                    Variable::new("p", "Pitch", "mm"),
                    Variable::new("d_0", "Hole diameter", "mm"),
                    Variable::new("f_up", "Plate ultimate tensile strength", "N/mm²"),
                ],
                assumptions: vec!["Ceiling of 1.0"],
                category: EquationCategory::DesignStrengths,
                source_module: "equations/bolt.rs",
                source_function: "bearing_coefficient",
            },

            Equation::BoltBearingStrength => EquationMetadata {
                name: "Bolt Bearing Strength",
                description: "Design bearing strength of a bolt on the connected plate",
                formula_plain: "V_dpb = 2.5 * k_b * d * t * f_up / gamma_mb",
                reference: CodeReference::IS800 { year: 2007, clause: "10.3.4" },
                variables: vec![
                    Variable::new("k_b", "Bearing coefficient", "-"),
                    Variable::new("t", "Aggregate minimum plate thickness", "mm"),
                    Variable::new("V_dpb", "Design bearing strength", "N"),
                ],
                assumptions: vec!["Standard clearance holes"],
                category: EquationCategory::DesignStrengths,
                source_module: "equations/bolt.rs",
                source_function: "design_bearing_strength",
            },

            Equation::BoltTensileStrength => EquationMetadata {
                name: "Bolt Tensile Strength",
                description: "Design tensile strength through the threaded net area",
                formula_plain: "T_db = 0.9 * f_up * A_nb / gamma_mb",
                reference: CodeReference::IS800 { year: 2007, clause: "10.3.5" },
                variables: vec![
                    Variable::new("A_nb", "Net tensile stress area", "mm²"),
                    Variable::new("T_db", "Design tensile strength", "N"),
                ],
                assumptions: vec!["Plate ultimate strength used in place of f_ub"],
                category: EquationCategory::DesignStrengths,
                source_module: "equations/bolt.rs",
                source_function: "design_tensile_strength",
            },

            Equation::GoverningBoltValue => EquationMetadata {
                name: "Bolt Value",
                description: "Governing single-bolt capacity",
                formula_plain: "BV = min(V_dsb, V_dpb, T_db)",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("BV", "Bolt value", "kN")],
                assumptions: vec![],
                category: EquationCategory::DesignChecks,
                source_module: "equations/bolt.rs",
                source_function: "governing_bolt_value",
            },

            Equation::RequiredBoltCount => EquationMetadata {
                name: "Required Number of Bolts",
                description: "Bolts needed to carry the factored load at the governing bolt value",
                formula_plain: "n = ceil(P_u / BV)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("P_u", "Factored load", "kN"),
                    Variable::new("n", "Required number of bolts", "-"),
                ],
                assumptions: vec!["Load shared equally between bolts", "BV > 0"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/bolted_connection.rs",
                source_function: "required_bolt_count",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sorted order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![DesignChecks, DesignStrengths, Geometry, MaterialProperties];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::BoltGradeStrengths,
    Equation::BoltAreas,
    Equation::HoleDiameter,
    Equation::BoltShearStrength,
    Equation::BearingCoefficient,
    Equation::BoltBearingStrength,
    Equation::BoltTensileStrength,
    Equation::GoverningBoltValue,
    Equation::RequiredBoltCount,
];

/// Equations applied by a bolted connection calculation, in evaluation order
pub fn connection_calculation_equations() -> Vec<Equation> {
    ALL_EQUATIONS.to_vec()
}

/// Generate the equations reference as Markdown.
///
/// # Example
///
/// ```rust
/// use bolt_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Bolt Shear Strength"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Bolted Connection Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used in bolted connection calculations.
Each equation includes its formula, code reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Length | mm |
| Stress | N/mm² |
| Force | N (formulas), kN (reports) |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}
