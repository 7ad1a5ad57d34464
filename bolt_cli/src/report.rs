//! Text and JSON rendering of a connection result.

use serde::Serialize;
use std::io::{self, Write};

use bolt_core::equations::connection_calculation_equations;
use bolt_core::{CalcResult, ConnectionInput, ConnectionResult};

const RULE: &str = "----------------------------------------";

// Plate outline: left and right plate widths between the '|' borders
const LEFT_WIDTH: usize = 24;
const RIGHT_WIDTH: usize = 23;
const BOLT_GLYPH: &str = "()";
const BOLT_OFFSET: usize = 19;

pub fn render_banner() -> String {
    [
        "",
        "Design of Steel Structures",
        "Bolted Connections",
        "",
    ]
    .join("\n")
}

/// Material properties, the three strengths, bolt value and bolt count.
pub fn render_report(result: &ConnectionResult) -> String {
    let s = &result.strengths;
    let lines = [
        RULE.to_string(),
        format!("fub = {} N/mm2", result.f_ub_mpa),
        format!("fyb = {:.3} N/mm2", result.f_yb_mpa),
        RULE.to_string(),
        format!("Shear strength of bolt  :     {:.3} kN", s.shear_kn),
        format!("Bearing strength of bolt:     {:.3} kN", s.bearing_kn),
        format!("Tensile strength of bolt:     {:.3} kN", s.tensile_kn),
        RULE.to_string(),
        format!("Bolt value:                   {:.3} kN ({})", result.bolt_value_kn, result.governing_mode),
        format!("Number of bolts required:     {}", result.required_bolts),
        format!("Group capacity:               {:.3} kN", result.group_capacity_kn()),
    ];
    lines.join("\n")
}

/// Two-plate outline with one bolt glyph per required bolt, written row by row.
///
/// ```text
/// __________________________________________________
/// |                        |                       |
/// |                        |                       |
/// |                   ()   |                       |
/// |                        |                       |
/// |________________________|_______________________|
/// ```
pub fn write_diagram<W: Write>(out: &mut W, bolts: u32) -> io::Result<()> {
    let blank_row = format!("|{}|{}|", " ".repeat(LEFT_WIDTH), " ".repeat(RIGHT_WIDTH));
    let bolt_row = format!(
        "|{}{}{}|{}|",
        " ".repeat(BOLT_OFFSET),
        BOLT_GLYPH,
        " ".repeat(LEFT_WIDTH - BOLT_OFFSET - BOLT_GLYPH.len()),
        " ".repeat(RIGHT_WIDTH)
    );

    writeln!(out, "{}", "_".repeat(LEFT_WIDTH + RIGHT_WIDTH + 3))?;
    writeln!(out, "{}", blank_row)?;
    for _ in 0..bolts {
        writeln!(out, "{}", blank_row)?;
        writeln!(out, "{}", bolt_row)?;
        writeln!(out, "{}", blank_row)?;
    }
    writeln!(out, "|{}|{}|", "_".repeat(LEFT_WIDTH), "_".repeat(RIGHT_WIDTH))
}

/// Formula and clause for every equation the calculation applies.
pub fn render_references() -> String {
    let mut out = String::from("References:\n");
    for equation in connection_calculation_equations() {
        let meta = equation.metadata();
        out.push_str(&format!(
            "  {:<26} {:<58} [{}]\n",
            meta.name,
            meta.formula_plain,
            meta.reference.citation()
        ));
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a ConnectionInput,
    result: &'a ConnectionResult,
}

pub fn render_json(input: &ConnectionInput, result: &ConnectionResult) -> CalcResult<String> {
    Ok(serde_json::to_string_pretty(&JsonReport { input, result })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_core::calculations::{calculate, BoltSpec, ConnectionGeometry, PlateSpec};
    use bolt_core::BoltGrade;

    fn splice() -> ConnectionInput {
        ConnectionInput {
            label: "Splice".to_string(),
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
    fn test_report_values() {
        let result = calculate(&splice()).unwrap();
        let report = render_report(&result);

        assert!(report.contains("fub = 400 N/mm2"));
        assert!(report.contains("fyb = 240.000 N/mm2"));
        assert!(report.contains("Shear strength of bolt  :     28.974 kN"));
        assert!(report.contains("Bearing strength of bolt:     64.385 kN"));
        assert!(report.contains("Tensile strength of bolt:     46.296 kN"));
        assert!(report.contains("Bolt value:                   28.974 kN (Shear)"));
        assert!(report.contains("Number of bolts required:     2"));
        // 2 x 28.974 kN
        assert!(report.ends_with("Group capacity:               57.949 kN"));
    }

    fn diagram(bolts: u32) -> String {
        let mut out = Vec::new();
        write_diagram(&mut out, bolts).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_diagram_layout() {
        let diagram = diagram(2);
        let lines: Vec<&str> = diagram.lines().collect();

        // top rule, spacer, three rows per bolt, bottom rule
        assert_eq!(lines.len(), 3 + 3 * 2);
        assert!(lines.iter().all(|l| l.chars().count() == 50));
        assert_eq!(lines[0], "_".repeat(50));
        assert_eq!(lines[3], "|                   ()   |                       |");
        assert_eq!(lines[8], "|________________________|_______________________|");
        assert_eq!(diagram.matches("()").count(), 2);
    }

    #[test]
    fn test_diagram_without_bolts() {
        let diagram = diagram(0);
        assert_eq!(diagram.lines().count(), 3);
        assert!(!diagram.contains("()"));
    }

    /// Counts bytes without keeping them
    struct CountingSink(u64);

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0 += buf.len() as u64;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_diagram_large_bolt_count_streams() {
        let bolts = 2_000_000;
        let mut sink = CountingSink(0);
        write_diagram(&mut sink, bolts).unwrap();

        // 51 bytes per line including the newline
        assert_eq!(sink.0, 51 * (3 + 3 * u64::from(bolts)));
    }

    #[test]
    fn test_references_cite_clauses() {
        let refs = render_references();
        assert!(refs.contains("Bolt Shear Strength"));
        assert!(refs.contains("[IS 800:2007 10.3.4]"));
        assert!(refs.contains("[IS 800:2007 Table 19]"));
    }

    #[test]
    fn test_json_report() {
        let input = splice();
        let result = calculate(&input).unwrap();
        let json = render_json(&input, &result).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"]["bolt"]["grade"], "4.6");
        assert_eq!(value["result"]["required_bolts"], 2);
        assert_eq!(value["result"]["governing_mode"], "Shear");
    }
}
