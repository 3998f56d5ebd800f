use std::collections::BTreeSet;

use super::{
    Defect, ElectricalKind, FaultCategory, FaultKind, MechanicalKind, MixedKind, ThermalKind,
};

/// Maintenance advice for a batch of `category` defects.
///
/// Severity-driven advice comes first, then one line per defect kind present
/// in the batch, in kind order. Mixed batches always end with the two
/// cross-analysis lines.
///
/// # Example
///
/// ```
/// use emachine_models::models::faults::{FaultCategory, recommendations};
///
/// let advice = recommendations(FaultCategory::Electrical, &[]);
/// assert_eq!(advice, ["No electrical defect detected: machine in good condition"]);
/// ```
#[must_use]
pub fn recommendations(category: FaultCategory, defects: &[Defect]) -> Vec<&'static str> {
    if defects.is_empty() {
        return vec![healthy(category)];
    }

    let mut advice = Vec::new();
    if defects.iter().any(|defect| defect.severity.is_critical()) {
        advice.push(critical(category));
    }
    if defects.iter().any(|defect| defect.severity.is_moderate()) {
        advice.push(moderate(category));
    }

    let kinds: BTreeSet<FaultKind> = defects.iter().map(Defect::kind).collect();
    advice.extend(kinds.into_iter().filter_map(|kind| for_kind(category, kind)));

    if category == FaultCategory::Mixed {
        advice.push("Run a cross thermal, mechanical and electrical analysis");
        advice.push("Monitor performance parameters and their trends");
    }

    advice
}

fn healthy(category: FaultCategory) -> &'static str {
    match category {
        FaultCategory::Thermal => "No thermal defect detected: machine in good condition",
        FaultCategory::Mechanical => "No defect detected: machine in good condition",
        FaultCategory::Electrical => "No electrical defect detected: machine in good condition",
        FaultCategory::Mixed => "No mixed defect detected: machine in good condition",
    }
}

fn critical(category: FaultCategory) -> &'static str {
    match category {
        FaultCategory::Thermal => {
            "Critical thermal defects detected: reduce load and inspect cooling immediately"
        }
        FaultCategory::Mechanical => "Critical defects detected: immediate maintenance required",
        FaultCategory::Electrical => {
            "Critical electrical defects detected: immediate shutdown required"
        }
        FaultCategory::Mixed => "Critical mixed defects detected: in-depth analysis required",
    }
}

fn moderate(category: FaultCategory) -> &'static str {
    match category {
        FaultCategory::Thermal => "Moderate thermal defects detected: schedule a thermal survey",
        FaultCategory::Mechanical => "Moderate defects detected: schedule maintenance",
        FaultCategory::Electrical => "Moderate electrical defects detected: urgent inspection",
        FaultCategory::Mixed => "Moderate mixed defects detected: reinforce monitoring",
    }
}

/// Kind-specific advice, only for kinds of the requested family.
fn for_kind(category: FaultCategory, kind: FaultKind) -> Option<&'static str> {
    if kind.category() != category {
        return None;
    }

    match kind {
        FaultKind::Thermal(kind) => Some(match kind {
            ThermalKind::Hotspot => "Locate hotspots with a thermal camera",
            ThermalKind::ThermalGradient => "Check the temperature distribution along the core",
            ThermalKind::InsulationDegradation => "Measure the winding insulation resistance",
            ThermalKind::CoolingFailure => "Inspect the cooling circuit and fans",
            ThermalKind::Overload => "Review the load profile and thermal protections",
        }),
        FaultKind::Mechanical(kind) => match kind {
            MechanicalKind::Eccentricity => Some("Check rotor to stator alignment and bearings"),
            MechanicalKind::BearingWear => Some("Inspect bearings and replace them if needed"),
            MechanicalKind::ShaftBend => Some("Check shaft straightness and journals"),
            MechanicalKind::RotorUnbalance => Some("Balance the rotor and check its masses"),
            MechanicalKind::Vibration => {
                Some("Analyze the vibration spectrum to identify the source")
            }
            MechanicalKind::StatorDeformation
            | MechanicalKind::AirGapVariation
            | MechanicalKind::Misalignment => None,
        },
        FaultKind::Electrical(kind) => match kind {
            ElectricalKind::WindingFault => Some("Inspect windings and measure their resistances"),
            ElectricalKind::InsulationDegradation => {
                Some("Test insulation resistance and breakdown voltage")
            }
            ElectricalKind::ShortCircuit => {
                Some("Locate and isolate the short circuit, check the protections")
            }
            ElectricalKind::OpenCircuit => Some("Locate and repair the open circuit"),
            ElectricalKind::PhaseUnbalance => {
                Some("Measure phase currents and voltages, then rebalance")
            }
            ElectricalKind::MagnetDemagnetization => {
                Some("Check the magnets and the operating temperature")
            }
            ElectricalKind::CoreLoss => Some("Analyze iron losses and check the lamination grade"),
            ElectricalKind::EddyCurrent => None,
        },
        FaultKind::Mixed(kind) => match kind {
            MixedKind::CascadeFailure => {
                Some("Trace the failure sequence to identify the root cause")
            }
            MixedKind::AgingRelated => Some("Assess whether replacement or refurbishment is due"),
            MixedKind::OverloadInduced => Some("Review load conditions and protections"),
            MixedKind::Environmental => {
                Some("Improve environmental protection and insulation")
            }
            MixedKind::MaintenanceRelated => {
                Some("Review maintenance procedures and train the staff")
            }
            MixedKind::ThermalMechanical
            | MixedKind::ThermalElectrical
            | MixedKind::MechanicalElectrical => None,
        },
    }
}
