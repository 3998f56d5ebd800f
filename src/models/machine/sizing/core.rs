//! Empirical sizing computations.

mod coefficients;
mod dimensions;
mod error;
mod input;
mod rotor;
mod stator;

use std::f64::consts::PI;

use tracing::debug;
use uom::si::{angular_velocity::revolution_per_minute, f64::Length, length::meter, power::watt};

use crate::models::machine::MachineType;

pub use coefficients::{ApplicationFactors, SizingCoefficients};
pub use dimensions::MachineDimensions;
pub use error::SizingError;
pub use input::SizingInput;
pub use rotor::RotorDimensions;
pub use stator::StatorDimensions;

use coefficients::magnet_share;

/// Slots per pole pair for a three-phase, one slot per pole per phase stator.
const SLOTS_PER_POLE_PAIR: u32 = 6;

/// Extra stator slots given to hybrid machines.
const HYBRID_EXTRA_SLOTS: u32 = 2;

/// Sizes a machine from its rating using the given baseline coefficients.
///
/// Application factors are applied to a copy of `coefficients`.
pub(super) fn size(input: &SizingInput, coefficients: &SizingCoefficients) -> MachineDimensions {
    let machine_type = input.machine_type();
    let application = input.application();
    let k = coefficients.for_application(application);
    let pole_pairs = input.pole_pairs();

    let watts_per_rpm = input.power().get::<watt>() / input.speed().get::<revolution_per_minute>();
    let x = watts_per_rpm.cbrt();

    let length = k.k_length * x;
    let mut diameter = k.k_diameter * x;

    let ratio = diameter / length;
    if ratio < k.min_diameter_to_length {
        diameter = k.min_diameter_to_length * length;
        debug!(
            ratio,
            limit = k.min_diameter_to_length,
            "raised diameter to minimum D/L"
        );
    } else if ratio > k.max_diameter_to_length {
        diameter = k.max_diameter_to_length * length;
        debug!(
            ratio,
            limit = k.max_diameter_to_length,
            "lowered diameter to maximum D/L"
        );
    }

    let pole_pitch = PI * diameter / (2.0 * f64::from(pole_pairs));

    let mut slots = SLOTS_PER_POLE_PAIR.saturating_mul(pole_pairs);
    if machine_type == MachineType::Hybrid {
        slots = slots.saturating_add(HYBRID_EXTRA_SLOTS);
    }

    let slot_height = k.k_slot * pole_pitch;
    let slot_width = k.slot_width_ratio * slot_height;
    let magnet_thickness = k.k_magnet * pole_pitch * magnet_share(machine_type);
    let air_gap = k.air_gap_per_diameter * diameter;

    MachineDimensions {
        diameter: Length::new::<meter>(diameter),
        length: Length::new::<meter>(length),
        pole_pitch: Length::new::<meter>(pole_pitch),
        slots,
        slot_height: Length::new::<meter>(slot_height),
        slot_width: Length::new::<meter>(slot_width),
        magnet_thickness: Length::new::<meter>(magnet_thickness),
        air_gap: Length::new::<meter>(air_gap),
        pole_pairs,
        power: input.power(),
        machine_type,
        application,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{AngularVelocity, Power},
        length::millimeter,
        power::kilowatt,
        ratio::ratio,
    };

    use crate::models::machine::Application;

    fn input(
        kw: f64,
        rpm: f64,
        pole_pairs: u32,
        machine_type: MachineType,
        application: Application,
    ) -> SizingInput {
        SizingInput::new(
            Power::new::<kilowatt>(kw),
            AngularVelocity::new::<revolution_per_minute>(rpm),
            pole_pairs,
            machine_type,
            application,
        )
        .unwrap()
    }

    fn x(kw: f64, rpm: f64) -> f64 {
        (kw * 1000.0 / rpm).cbrt()
    }

    #[test]
    fn traction_ipmsm() {
        let dims = size(
            &input(50.0, 3000.0, 2, MachineType::Ipmsm, Application::Traction),
            &SizingCoefficients::default(),
        );
        let x = x(50.0, 3000.0);

        // 0.15 / 0.10 = 1.5 sits on the lower D/L bound.
        assert_relative_eq!(dims.diameter.get::<meter>(), 0.15 * x, epsilon = 1e-12);
        assert_relative_eq!(dims.length.get::<meter>(), 0.10 * x, epsilon = 1e-12);
        assert_relative_eq!(dims.diameter_to_length().get::<ratio>(), 1.5, epsilon = 1e-9);

        let d = dims.diameter.get::<meter>();
        let tau = PI * d / 4.0;
        assert_relative_eq!(dims.pole_pitch.get::<meter>(), tau, epsilon = 1e-12);
        assert_eq!(dims.slots, 12);
        assert_relative_eq!(dims.slot_height.get::<meter>(), 0.1 * tau, epsilon = 1e-12);
        assert_relative_eq!(dims.slot_width.get::<meter>(), 0.08 * tau, epsilon = 1e-12);
        assert_relative_eq!(
            dims.magnet_thickness.get::<meter>(),
            0.8 * tau * 0.3,
            epsilon = 1e-12
        );
        assert_relative_eq!(dims.air_gap.get::<meter>(), 0.001 * d, epsilon = 1e-12);
        assert_eq!(dims.poles(), 4);
    }

    #[test]
    fn wind_application_factors() {
        let dims = size(
            &input(500.0, 300.0, 8, MachineType::Ipmsm, Application::Wind),
            &SizingCoefficients::default(),
        );
        let x = x(500.0, 300.0);

        assert_relative_eq!(dims.diameter.get::<meter>(), 0.18 * x, epsilon = 1e-12);
        assert_relative_eq!(dims.length.get::<meter>(), 0.08 * x, epsilon = 1e-12);
        assert_relative_eq!(
            dims.air_gap.get::<meter>(),
            0.0012 * dims.diameter.get::<meter>(),
            epsilon = 1e-12
        );
        assert_eq!(dims.slots, 48);
    }

    #[test]
    fn repeated_calls_do_not_compound() {
        let coefficients = SizingCoefficients::default();
        let request = input(100.0, 1500.0, 3, MachineType::Ipmsm, Application::Aerospace);

        let first = size(&request, &coefficients);
        let second = size(&request, &coefficients);
        assert_eq!(first, second);
    }

    #[test]
    fn aerospace_is_raised_to_minimum_ratio() {
        // 0.12 / 0.13 is below 1.5, so D becomes 1.5 L.
        let dims = size(
            &input(100.0, 6000.0, 2, MachineType::Ipmsm, Application::Aerospace),
            &SizingCoefficients::default(),
        );
        let x = x(100.0, 6000.0);

        assert_relative_eq!(dims.length.get::<meter>(), 0.13 * x, epsilon = 1e-12);
        assert_relative_eq!(dims.diameter.get::<meter>(), 1.5 * 0.13 * x, epsilon = 1e-12);
    }

    #[test]
    fn diameter_is_clamped_to_maximum_ratio() {
        let coefficients = SizingCoefficients {
            k_diameter: 0.5,
            ..SizingCoefficients::default()
        };
        let dims = size(
            &input(50.0, 3000.0, 2, MachineType::Ipmsm, Application::Traction),
            &coefficients,
        );

        assert_relative_eq!(dims.diameter_to_length().get::<ratio>(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn hybrid_has_extra_slots() {
        let dims = size(
            &input(150.0, 4000.0, 3, MachineType::Hybrid, Application::Traction),
            &SizingCoefficients::default(),
        );
        assert_eq!(dims.slots, 20);
    }

    #[test]
    fn synrel_has_no_magnets() {
        let dims = size(
            &input(75.0, 1500.0, 3, MachineType::SynRel, Application::Industrial),
            &SizingCoefficients::default(),
        );
        assert_relative_eq!(dims.magnet_thickness.get::<millimeter>(), 0.0);
        assert_eq!(dims.slots, 18);
    }

    #[test]
    fn rotor_follows_topology() {
        let dims = size(
            &input(75.0, 1500.0, 3, MachineType::SynRel, Application::Industrial),
            &SizingCoefficients::default(),
        );
        let rotor = dims.rotor();

        let d = dims.diameter.get::<meter>();
        let outer = d / 2.0 - dims.air_gap.get::<meter>();
        assert_relative_eq!(rotor.outer_radius.get::<meter>(), outer, epsilon = 1e-12);
        assert_relative_eq!(rotor.shaft_radius.get::<meter>(), 0.4 * outer, epsilon = 1e-12);
        assert_relative_eq!(
            rotor.pole_width.get::<meter>(),
            0.7 * dims.pole_pitch.get::<meter>(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            rotor.pole_depth.unwrap().get::<meter>(),
            0.8 * dims.slot_height.get::<meter>(),
            epsilon = 1e-12
        );

        let ipmsm = MachineDimensions {
            machine_type: MachineType::Ipmsm,
            ..dims
        };
        assert!(ipmsm.rotor().pole_depth.is_none());
    }

    #[test]
    fn stator_slot_fits_annulus() {
        let dims = size(
            &input(50.0, 3000.0, 2, MachineType::Ipmsm, Application::Traction),
            &SizingCoefficients::default(),
        );
        let stator = dims.stator();

        assert_relative_eq!(
            stator.outer_radius.get::<meter>(),
            dims.diameter.get::<meter>() / 2.0,
            epsilon = 1e-12
        );
        assert!(stator.inner_radius < stator.outer_radius);
        assert!(!stator.slot_height_reduced);
        assert_eq!(stator.slot_height, dims.slot_height);
        assert!(stator.slot_area <= stator.available_area_per_slot * 0.8);
        assert_eq!(stator.slot_area, stator.nominal_slot_area);
    }

    #[test]
    fn oversized_slot_is_reduced() {
        let dims = size(
            &input(50.0, 3000.0, 2, MachineType::Ipmsm, Application::Traction),
            &SizingCoefficients::default(),
        );
        let crowded = MachineDimensions {
            slots: 400,
            ..dims
        };
        let stator = crowded.stator();

        assert!(stator.slot_height_reduced);
        assert!(stator.slot_height < dims.slot_height);
        assert_relative_eq!(
            stator.slot_area.value,
            0.8 * stator.available_area_per_slot.value,
            max_relative = 1e-12
        );
        assert_eq!(stator.nominal_slot_area, dims.slot_height * dims.slot_width);
        assert!(stator.slot_area < stator.nominal_slot_area);
        // Radii still describe the nominal slot depth.
        assert_eq!(stator.inner_radius, dims.diameter / 2.0 - dims.slot_height);
    }

    #[test]
    fn zero_slots_are_treated_as_one() {
        let dims = size(
            &input(50.0, 3000.0, 2, MachineType::Ipmsm, Application::Traction),
            &SizingCoefficients::default(),
        );
        let stator = MachineDimensions { slots: 0, ..dims }.stator();

        assert!(stator.available_area_per_slot.value.is_finite());
        assert_eq!(stator.slots, 0);
    }
}
