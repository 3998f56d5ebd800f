use std::fmt;

use uom::si::{f64::Length, length::meter, power::kilowatt, ratio::ratio};

use crate::models::machine::sizing::MachineDimensions;

use super::Validation;

/// Plain-text validation report for one machine.
///
/// Produced by [`Validation::report`]; render it with `to_string()` or any
/// formatting macro.
#[derive(Debug, Clone, Copy)]
pub struct ValidationReport<'a> {
    pub(super) dims: &'a MachineDimensions,
    pub(super) validation: &'a Validation,
}

impl fmt::Display for ValidationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dims;
        let validation = self.validation;

        writeln!(f, "=== DESIGN VALIDATION REPORT ===")?;
        writeln!(f, "Machine: {} ({})", dims.machine_type, dims.application)?;
        writeln!(f, "Score: {:.1}/100", validation.score())?;
        writeln!(f, "Level: {}", validation.quality())?;
        writeln!(
            f,
            "Status: {}",
            if validation.is_valid() {
                "VALID"
            } else {
                "INVALID"
            }
        )?;

        writeln!(f)?;
        writeln!(f, "=== MAIN DIMENSIONS ===")?;
        let lengths: [(&str, Length); 7] = [
            ("D", dims.diameter),
            ("L", dims.length),
            ("tau_p", dims.pole_pitch),
            ("slot_height", dims.slot_height),
            ("slot_width", dims.slot_width),
            ("magnet_thickness", dims.magnet_thickness),
            ("air_gap", dims.air_gap),
        ];
        for (name, value) in lengths {
            writeln!(f, "{name}: {:.4} m", value.get::<meter>())?;
        }
        writeln!(f, "Zs: {}", dims.slots)?;
        writeln!(f, "pole_pairs: {}", dims.pole_pairs)?;
        writeln!(f, "power: {:.1} kW", dims.power.get::<kilowatt>())?;
        writeln!(f, "D/L: {:.4}", dims.diameter_to_length().get::<ratio>())?;

        if !validation.warnings().is_empty() {
            writeln!(f)?;
            writeln!(f, "=== WARNINGS ===")?;
            for warning in validation.warnings() {
                writeln!(f, "  {warning}")?;
            }
        }

        if !validation.errors().is_empty() {
            writeln!(f)?;
            writeln!(f, "=== ERRORS ===")?;
            for error in validation.errors() {
                writeln!(f, "  {error}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "=== RECOMMENDATION ===")?;
        writeln!(f, "  {}", validation.recommendation())
    }
}
