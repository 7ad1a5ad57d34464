//! Interactive input acquisition.
//!
//! Prompts are written to any `Write` and answers read from any `BufRead`,
//! so the whole dialogue can be driven from a byte slice in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use bolt_core::calculations::{BoltSpec, ConnectionGeometry, ConnectionInput, PlateSpec};
use bolt_core::{BoltGrade, CalcError, CalcResult, PlateSteelGrade};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and return the trimmed answer.
    fn ask(&mut self, field: &str, prompt: &str) -> CalcResult<String> {
        let io_err = |e: std::io::Error| CalcError::file_error("read", "<stdin>", e.to_string());

        write!(self.output, "{}", prompt).map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_err)?;
        if read == 0 {
            return Err(CalcError::input_format(field, "", "unexpected end of input"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a value and parse it, reporting failures as input-format errors.
    pub fn parse<T>(&mut self, field: &str, prompt: &str) -> CalcResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let answer = self.ask(field, prompt)?;
        answer
            .parse()
            .map_err(|e: T::Err| CalcError::input_format(field, answer.as_str(), e.to_string()))
    }

    fn bolt_grade(&mut self) -> CalcResult<BoltGrade> {
        let answer = self.ask("bolt_grade", "Enter bolt grade (eg: 4.6): ")?;
        BoltGrade::parse(&answer)
    }

    /// Plate strength as a number in N/mm² or an IS 2062 grade name
    fn plate(&mut self, thickness_mm: u32) -> CalcResult<PlateSpec> {
        let answer = self.ask(
            "plate_ultimate_strength",
            "Enter plate ultimate strength (N/mm2) or grade (eg: E250): ",
        )?;
        if let Ok(ultimate_strength_mpa) = answer.parse::<u32>() {
            return Ok(PlateSpec {
                thickness_mm,
                ultimate_strength_mpa,
            });
        }
        match answer.parse::<PlateSteelGrade>() {
            Ok(grade) => {
                tracing::debug!(
                    %grade,
                    f_up = grade.ultimate_strength_mpa(),
                    f_y = grade.yield_strength_mpa(),
                    "plate grade looked up"
                );
                Ok(PlateSpec::from_grade(thickness_mm, grade))
            }
            Err(_) => Err(CalcError::input_format(
                "plate_ultimate_strength",
                answer,
                "expected a whole number of N/mm2 or an IS 2062 grade such as E250",
            )),
        }
    }

    /// Run the full question sequence for one connection.
    pub fn read_connection_input(&mut self) -> CalcResult<ConnectionInput> {
        let factored_load_kn: f64 = self.parse("factored_load_kn", "Enter factored load (kN): ")?;
        let diameter_mm: u32 = self.parse("diameter_mm", "Enter bolt diameter (mm): ")?;
        let grade = self.bolt_grade()?;
        let thickness_mm: u32 = self.parse(
            "thickness_mm",
            "Enter aggregate minimum plate thickness (mm): ",
        )?;
        let plate = self.plate(thickness_mm)?;
        let threaded_planes: u32 = self.parse(
            "threaded_planes",
            "Enter number of shear planes (threaded): ",
        )?;
        let unthreaded_planes: u32 = self.parse(
            "unthreaded_planes",
            "Enter number of shear planes (non-threaded): ",
        )?;
        let edge_distance_mm: u32 = self.parse("edge_distance_mm", "Enter edge distance (e) (mm): ")?;
        let pitch_mm: u32 = self.parse("pitch_mm", "Enter pitch (p) (mm): ")?;

        Ok(ConnectionInput {
            label: String::new(),
            factored_load_kn,
            bolt: BoltSpec { diameter_mm, grade },
            plate,
            geometry: ConnectionGeometry {
                threaded_planes,
                unthreaded_planes,
                edge_distance_mm,
                pitch_mm,
            },
        })
    }
}
