//! Structural plate steel grades (IS 2062)
//!
//! Connected plates are usually specified by grade rather than by strength.
//! This catalogue maps IS 2062 grade names to their ultimate tensile
//! strength `f_up` for plates up to 20 mm thick.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalcError;

/// IS 2062 hot-rolled structural steel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateSteelGrade {
    E250,
    E275,
    E300,
    E350,
    E410,
    E450,
}

impl PlateSteelGrade {
    /// All grades for iteration
    pub const ALL: [PlateSteelGrade; 6] = [
        PlateSteelGrade::E250,
        PlateSteelGrade::E275,
        PlateSteelGrade::E300,
        PlateSteelGrade::E350,
        PlateSteelGrade::E410,
        PlateSteelGrade::E450,
    ];

    /// Ultimate tensile strength f_up (N/mm²)
    pub fn ultimate_strength_mpa(&self) -> u32 {
        match self {
            PlateSteelGrade::E250 => 410,
            PlateSteelGrade::E275 => 430,
            PlateSteelGrade::E300 => 440,
            PlateSteelGrade::E350 => 490,
            PlateSteelGrade::E410 => 540,
            PlateSteelGrade::E450 => 570,
        }
    }

    /// Nominal yield strength f_y (N/mm²), which is the number in the name
    pub fn yield_strength_mpa(&self) -> u32 {
        match self {
            PlateSteelGrade::E250 => 250,
            PlateSteelGrade::E275 => 275,
            PlateSteelGrade::E300 => 300,
            PlateSteelGrade::E350 => 350,
            PlateSteelGrade::E410 => 410,
            PlateSteelGrade::E450 => 450,
        }
    }

    /// Grade name as written in IS 2062
    pub fn name(&self) -> &'static str {
        match self {
            PlateSteelGrade::E250 => "E250",
            PlateSteelGrade::E275 => "E275",
            PlateSteelGrade::E300 => "E300",
            PlateSteelGrade::E350 => "E350",
            PlateSteelGrade::E410 => "E410",
            PlateSteelGrade::E450 => "E450",
        }
    }
}

impl fmt::Display for PlateSteelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlateSteelGrade {
    type Err = CalcError;

    /// Case-insensitive lookup by name ("E250", "e350")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        PlateSteelGrade::ALL
            .iter()
            .find(|g| g.name() == wanted)
            .copied()
            .ok_or_else(|| CalcError::material_not_found(s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let grade: PlateSteelGrade = "e250".parse().unwrap();
        assert_eq!(grade, PlateSteelGrade::E250);
        assert_eq!(grade.ultimate_strength_mpa(), 410);
        assert_eq!(grade.yield_strength_mpa(), 250);
    }

    #[test]
    fn test_unknown_grade() {
        let err = "E999".parse::<PlateSteelGrade>().unwrap_err();
        assert_eq!(err, CalcError::material_not_found("E999"));
    }

    #[test]
    fn test_ultimate_exceeds_yield() {
        for grade in PlateSteelGrade::ALL {
            assert!(grade.ultimate_strength_mpa() > grade.yield_strength_mpa());
            assert_eq!(grade.to_string().parse::<PlateSteelGrade>().unwrap(), grade);
        }
    }
}
