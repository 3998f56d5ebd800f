//! Machine layouts for finite-element packages.
//!
//! A [`MachineLayout`] is the plain description of the stator and rotor
//! laminations, slots, holes, magnets, winding, shaft and frame of one
//! machine. It is built from sized [`MachineDimensions`] or taken from a
//! published [`reference`](super::reference) machine, and is meant to be
//! translated into the input format of an external FEM package.
//!
//! Topologies differ only in their rotor holes:
//!
//! - IPMSM / SPMSM: one set of `2p` magnet holes.
//! - SynRel: one set of `2p` flux barriers without magnets.
//! - Hybrid: `2p` magnet holes plus `2p` flux barriers offset by half a pole.

mod error;
mod rotor;
mod stator;
mod winding;

use std::f64::consts::PI;

use tracing::warn;
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::millimeter,
    power::kilowatt,
};

use crate::{
    models::machine::{MachineType, sizing::MachineDimensions},
    support::constraint::{Constrained, ConstraintError, StrictlyPositive, UnitInterval},
};

pub use error::{LayoutError, WindingError};
pub use rotor::{DEFAULT_MAGNET_GRADE, HoleSet, Magnet, RotorLamination};
pub use stator::{Slot, StatorLamination};
pub use winding::{CoilKind, Connection, Phase, Winding, WindingMatrix};

/// Axial length of the shaft and frame relative to the active length.
const AXIAL_OVERHANG: f64 = 1.2;

/// Shaft diameter relative to the stator outer diameter.
const SHAFT_DIAMETER_SHARE: f64 = 0.4;

const FRAME_THICKNESS_MM: f64 = 20.0;
const SLOT_OPENING_HEIGHT_MM: f64 = 1.0;
const SLOT_OPENING_WIDTH_MM: f64 = 2.0;

/// Flux barrier depth relative to the slot height.
const SYNREL_BARRIER_DEPTH: f64 = 0.8;
const HYBRID_BARRIER_DEPTH: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shaft {
    pub length: Length,
    pub diameter: Length,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub inner_radius: Length,
    pub outer_radius: Length,
    pub length: Length,
}

/// Hybrid hole width fractions and the winding connection.
///
/// Both fractions are relative to the rotor pole width and lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    magnet_hole_width: f64,
    reluctance_hole_width: f64,
    connection: Connection,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            magnet_hole_width: 0.6,
            reluctance_hole_width: 0.8,
            connection: Connection::Star,
        }
    }
}

impl LayoutOptions {
    /// Constructs validated layout options.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if either fraction lies outside `[0, 1]`.
    pub fn new(
        magnet_hole_width: f64,
        reluctance_hole_width: f64,
    ) -> Result<Self, ConstraintError> {
        Ok(Self::from_constrained(
            UnitInterval::new(magnet_hole_width)?,
            UnitInterval::new(reluctance_hole_width)?,
        ))
    }

    #[must_use]
    pub fn from_constrained(
        magnet_hole_width: Constrained<f64, UnitInterval>,
        reluctance_hole_width: Constrained<f64, UnitInterval>,
    ) -> Self {
        Self {
            magnet_hole_width: magnet_hole_width.into_inner(),
            reluctance_hole_width: reluctance_hole_width.into_inner(),
            connection: Connection::default(),
        }
    }

    #[must_use]
    pub fn with_connection(self, connection: Connection) -> Self {
        Self { connection, ..self }
    }

    /// Magnet hole width as a share of the pole width.
    #[must_use]
    pub fn magnet_hole_width(&self) -> f64 {
        self.magnet_hole_width
    }

    /// Flux barrier width as a share of the pole width.
    #[must_use]
    pub fn reluctance_hole_width(&self) -> f64 {
        self.reluctance_hole_width
    }

    #[must_use]
    pub fn connection(&self) -> Connection {
        self.connection
    }
}

/// Complete machine description.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineLayout {
    pub name: String,
    pub machine_type: MachineType,
    pub stator: StatorLamination,
    pub rotor: RotorLamination,
    pub shaft: Shaft,
    pub frame: Option<Frame>,
}

/// Hole and winding summary of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridCharacteristics {
    pub total_holes: u32,
    pub magnet_holes: u32,
    pub reluctance_holes: u32,
    pub winding_layers: u32,
    pub parallel_circuits: u32,

    /// Magnet holes over all holes, zero for a rotor without holes.
    pub magnet_ratio: f64,
}

impl MachineLayout {
    /// Builds the layout of a sized machine with default options.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if `turns_per_coil`, the pole pair count or
    /// the slot count is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use emachine_models::models::machine::{
    ///     Application, MachineType,
    ///     layout::MachineLayout,
    ///     sizing::{self, SizingInput},
    /// };
    /// use uom::si::{
    ///     angular_velocity::revolution_per_minute,
    ///     f64::{AngularVelocity, Power},
    ///     power::kilowatt,
    /// };
    ///
    /// let input = SizingInput::new(
    ///     Power::new::<kilowatt>(150.0),
    ///     AngularVelocity::new::<revolution_per_minute>(4000.0),
    ///     3,
    ///     MachineType::Hybrid,
    ///     Application::Traction,
    /// )
    /// .unwrap();
    ///
    /// let layout = MachineLayout::from_dimensions(&sizing::size(&input), 9).unwrap();
    /// let summary = layout.hybrid_characteristics();
    /// assert_eq!(summary.magnet_holes, 6);
    /// assert_eq!(summary.reluctance_holes, 6);
    /// ```
    pub fn from_dimensions(
        dims: &MachineDimensions,
        turns_per_coil: u32,
    ) -> Result<Self, LayoutError> {
        Self::with_options(dims, turns_per_coil, &LayoutOptions::default())
    }

    /// Builds the layout of a sized machine.
    ///
    /// # Errors
    ///
    /// See [`MachineLayout::from_dimensions`].
    pub fn with_options(
        dims: &MachineDimensions,
        turns_per_coil: u32,
        options: &LayoutOptions,
    ) -> Result<Self, LayoutError> {
        let turns_per_coil = StrictlyPositive::new(turns_per_coil)
            .map_err(LayoutError::TurnsPerCoil)?
            .into_inner();
        let pole_pairs = StrictlyPositive::new(dims.pole_pairs)
            .map_err(LayoutError::PolePairs)?
            .into_inner();
        let slots = StrictlyPositive::new(dims.slots)
            .map_err(LayoutError::Slots)?
            .into_inner();

        let machine_type = dims.machine_type;
        let stator_dims = dims.stator();
        let rotor_dims = dims.rotor();

        let hybrid = machine_type == MachineType::Hybrid;
        let winding = Winding {
            phases: 3,
            turns_per_coil,
            parallel_circuits: if hybrid { 2 } else { 1 },
            layers: 1,
            pole_pairs,
            connection: options.connection,
            coil: if hybrid {
                CoilKind::Distributed
            } else {
                CoilKind::Concentrated
            },
            matrix: WindingMatrix::single_layer(slots, pole_pairs, turns_per_coil),
        };

        let stator = StatorLamination {
            length: dims.length,
            outer_radius: stator_dims.outer_radius,
            inner_radius: stator_dims.inner_radius,
            slot: Slot {
                count: slots,
                height: stator_dims.slot_height,
                width: stator_dims.slot_width,
                opening_height: Length::new::<millimeter>(SLOT_OPENING_HEIGHT_MM),
                opening_width: Length::new::<millimeter>(SLOT_OPENING_WIDTH_MM),
            },
            winding,
        };

        let rotor = RotorLamination {
            length: dims.length,
            outer_radius: rotor_dims.outer_radius,
            inner_radius: rotor_dims.outer_radius - dims.slot_height,
            holes: rotor_holes(dims, rotor_dims.pole_width, options),
        };

        let shaft = Shaft {
            length: dims.length * AXIAL_OVERHANG,
            diameter: dims.diameter * SHAFT_DIAMETER_SHARE,
        };

        let frame = Frame {
            inner_radius: dims.diameter / 2.0,
            outer_radius: dims.diameter / 2.0 + Length::new::<millimeter>(FRAME_THICKNESS_MM),
            length: dims.length * AXIAL_OVERHANG,
        };

        if rotor.inner_radius <= shaft.diameter / 2.0 {
            warn!(
                rotor_bore_mm = rotor.inner_radius.get::<millimeter>(),
                shaft_radius_mm = (shaft.diameter / 2.0).get::<millimeter>(),
                "rotor bore does not clear the shaft"
            );
        }
        if slots % pole_pairs.saturating_mul(6) != 0 {
            warn!(
                slots,
                pole_pairs, "slot count does not split into equal phase belts"
            );
        }

        Ok(Self {
            name: format!(
                "{}_{}_{:.0}kW",
                machine_type,
                dims.application,
                dims.power.get::<kilowatt>()
            ),
            machine_type,
            stator,
            rotor,
            shaft,
            frame: Some(frame),
        })
    }

    #[must_use]
    pub fn pole_pairs(&self) -> u32 {
        self.stator.winding.pole_pairs
    }

    /// Replaces the stator winding matrix, keeping every other winding field.
    ///
    /// # Errors
    ///
    /// Returns [`WindingError::SlotCount`] if `matrix` does not have one row
    /// per stator slot.
    pub fn with_winding_matrix(mut self, matrix: WindingMatrix) -> Result<Self, WindingError> {
        let slots = self.stator.slot.count;
        if u32::try_from(matrix.slots()).ok() != Some(slots) {
            return Err(WindingError::SlotCount {
                rows: matrix.slots(),
                slots,
            });
        }
        self.stator.winding.matrix = matrix;
        Ok(self)
    }

    /// Shorts turns of one coil side in the stator winding.
    ///
    /// # Errors
    ///
    /// See [`WindingMatrix::inject_turn_fault`].
    pub fn inject_turn_fault(
        &mut self,
        slot: usize,
        phase: Phase,
        turns: u32,
    ) -> Result<(), WindingError> {
        self.stator.winding.matrix.inject_turn_fault(slot, phase, turns)
    }

    /// Counts magnet and reluctance holes and summarises the winding.
    #[must_use]
    pub fn hybrid_characteristics(&self) -> HybridCharacteristics {
        let magnet_holes = self.rotor.magnet_holes();
        let reluctance_holes = self.rotor.reluctance_holes();
        let total_holes = magnet_holes + reluctance_holes;

        HybridCharacteristics {
            total_holes,
            magnet_holes,
            reluctance_holes,
            winding_layers: self.stator.winding.layers,
            parallel_circuits: self.stator.winding.parallel_circuits,
            magnet_ratio: if total_holes == 0 {
                0.0
            } else {
                f64::from(magnet_holes) / f64::from(total_holes)
            },
        }
    }

    /// Saliency estimate `2 + 2·depth/width` of the first flux barrier set.
    ///
    /// Returns `None` if the rotor has no magnet-free holes.
    #[must_use]
    pub fn reluctance_ratio(&self) -> Option<f64> {
        self.rotor
            .holes
            .iter()
            .find(|set| !set.has_magnets())
            .map(|set| 2.0 + 2.0 * (set.depth / set.width).value)
    }
}

fn rotor_holes(
    dims: &MachineDimensions,
    pole_width: Length,
    options: &LayoutOptions,
) -> Vec<HoleSet> {
    let poles = dims.poles();
    let opening_height = Length::new::<millimeter>(SLOT_OPENING_HEIGHT_MM);
    let opening_width = Length::new::<millimeter>(SLOT_OPENING_WIDTH_MM);

    let magnet_set = |width: Length| HoleSet {
        count: poles,
        depth: dims.magnet_thickness,
        width,
        opening_height,
        opening_width,
        offset: Angle::new::<radian>(0.0),
        magnets: vec![Magnet {
            grade: DEFAULT_MAGNET_GRADE,
            length: dims.length,
            thickness: dims.magnet_thickness,
            width,
        }],
    };

    let barrier_set = |depth: Length, width: Length, offset: Angle| HoleSet {
        count: poles,
        depth,
        width,
        opening_height,
        opening_width,
        offset,
        magnets: Vec::new(),
    };

    match dims.machine_type {
        MachineType::Ipmsm | MachineType::Spmsm => vec![magnet_set(pole_width)],
        MachineType::SynRel => vec![barrier_set(
            dims.slot_height * SYNREL_BARRIER_DEPTH,
            pole_width,
            Angle::new::<radian>(0.0),
        )],
        MachineType::Hybrid => vec![
            magnet_set(pole_width * options.magnet_hole_width),
            barrier_set(
                dims.slot_height * HYBRID_BARRIER_DEPTH,
                pole_width * options.reluctance_hole_width,
                Angle::new::<radian>(PI / f64::from(poles.max(1))),
            ),
        ],
    }
}
