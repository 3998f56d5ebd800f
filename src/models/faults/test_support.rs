use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Power},
    power::kilowatt,
};

use crate::models::machine::{
    Application, MachineType,
    sizing::{self, MachineDimensions, SizingInput},
};

/// A 50 kW, 3000 rpm, four-pole traction IPMSM.
pub(super) fn traction_dims() -> MachineDimensions {
    let input = SizingInput::new(
        Power::new::<kilowatt>(50.0),
        AngularVelocity::new::<revolution_per_minute>(3000.0),
        2,
        MachineType::Ipmsm,
        Application::Traction,
    )
    .unwrap();
    sizing::size(&input)
}
