//! Published reference machines.
//!
//! These layouts reproduce machines whose main dimensions are publicly
//! documented. The Toyota Prius 2004 traction motor is given in full; the
//! other machines carry the simplified slot and hole dimensions of their
//! demonstrators.

use std::fmt;

use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

use crate::{models::machine::MachineType, support::constraint::StrictlyPositive};

use super::layout::{
    CoilKind, Connection, DEFAULT_MAGNET_GRADE, HoleSet, LayoutError, MachineLayout, Magnet,
    RotorLamination, Shaft, Slot, StatorLamination, Winding, WindingError, WindingMatrix,
};

/// Turns per coil of the production Prius winding.
pub const PRIUS_TURNS_PER_COIL: u32 = 9;

/// Turns per coil used for the demonstrator machines.
pub const DEFAULT_TURNS_PER_COIL: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceMachine {
    ToyotaPrius2004,
    TeslaModelS,
    NissanLeaf,
    SynchronousReluctance,
}

impl ReferenceMachine {
    pub const ALL: [Self; 4] = [
        Self::ToyotaPrius2004,
        Self::TeslaModelS,
        Self::NissanLeaf,
        Self::SynchronousReluctance,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ToyotaPrius2004 => "Toyota_Prius_2004",
            Self::TeslaModelS => "Tesla_Model_S",
            Self::NissanLeaf => "Nissan_Leaf",
            Self::SynchronousReluctance => "Synchronous_Reluctance",
        }
    }

    #[must_use]
    pub fn machine_type(self) -> MachineType {
        match self {
            Self::ToyotaPrius2004 | Self::TeslaModelS => MachineType::Ipmsm,
            Self::NissanLeaf => MachineType::Spmsm,
            Self::SynchronousReluctance => MachineType::SynRel,
        }
    }

    #[must_use]
    pub fn default_turns_per_coil(self) -> u32 {
        match self {
            Self::ToyotaPrius2004 => PRIUS_TURNS_PER_COIL,
            _ => DEFAULT_TURNS_PER_COIL,
        }
    }

    /// Builds the layout with the machine's own turns per coil.
    #[must_use]
    pub fn layout(self) -> MachineLayout {
        self.build(self.default_turns_per_coil())
    }

    /// Builds the layout with a custom number of turns per coil.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::TurnsPerCoil`] if `turns_per_coil` is zero.
    pub fn with_turns_per_coil(self, turns_per_coil: u32) -> Result<MachineLayout, LayoutError> {
        let turns = StrictlyPositive::new(turns_per_coil).map_err(LayoutError::TurnsPerCoil)?;
        Ok(self.build(turns.into_inner()))
    }

    /// Builds the layout with its own turns per coil and a custom winding.
    ///
    /// # Errors
    ///
    /// Returns [`WindingError::SlotCount`] if `matrix` does not have one row
    /// per stator slot.
    pub fn with_winding_matrix(self, matrix: WindingMatrix) -> Result<MachineLayout, WindingError> {
        self.layout().with_winding_matrix(matrix)
    }

    fn build(self, turns_per_coil: u32) -> MachineLayout {
        match self {
            Self::ToyotaPrius2004 => toyota_prius_2004(turns_per_coil),
            Self::TeslaModelS => tesla_model_s(turns_per_coil),
            Self::NissanLeaf => nissan_leaf(turns_per_coil),
            Self::SynchronousReluctance => synchronous_reluctance(turns_per_coil),
        }
    }
}

impl fmt::Display for ReferenceMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn m(value: f64) -> Length {
    Length::new::<meter>(value)
}

fn winding(slots: u32, pole_pairs: u32, turns_per_coil: u32, coil: CoilKind) -> Winding {
    Winding {
        phases: 3,
        turns_per_coil,
        parallel_circuits: 1,
        layers: 1,
        pole_pairs,
        connection: Connection::default(),
        coil,
        matrix: WindingMatrix::single_layer(slots, pole_pairs, turns_per_coil),
    }
}

fn toyota_prius_2004(turns_per_coil: u32) -> MachineLayout {
    let length = m(0.08382);
    let magnet = Magnet {
        grade: DEFAULT_MAGNET_GRADE,
        length,
        thickness: m(0.0065),
        width: m(0.0189),
    };

    MachineLayout {
        name: ReferenceMachine::ToyotaPrius2004.name().to_owned(),
        machine_type: MachineType::Ipmsm,
        stator: StatorLamination {
            length,
            outer_radius: m(0.13462),
            inner_radius: m(0.08095),
            slot: Slot {
                count: 48,
                height: m(0.0333),
                width: m(0.008),
                opening_height: m(0.001),
                opening_width: m(0.00193),
            },
            // 8 poles on 48 slots with a coil pitch of 6 slots.
            winding: winding(48, 4, turns_per_coil, CoilKind::Distributed),
        },
        rotor: RotorLamination {
            length,
            outer_radius: m(0.0802),
            inner_radius: m(0.05532),
            holes: vec![HoleSet {
                count: 8,
                depth: m(0.01096),
                width: m(0.042),
                opening_height: m(0.0015),
                opening_width: m(0.0),
                offset: Angle::new::<radian>(0.0),
                // V-shaped pair per pole.
                magnets: vec![magnet, magnet],
            }],
        },
        shaft: Shaft {
            length: m(0.1),
            diameter: m(0.11064),
        },
        frame: None,
    }
}

struct Demonstrator {
    name: &'static str,
    machine_type: MachineType,
    length: f64,
    stator_radii: (f64, f64),
    slots: u32,
    slot: (f64, f64),
    rotor_radii: (f64, f64),
    poles: u32,
    hole: (f64, f64),
    magnetised: bool,
}

impl Demonstrator {
    fn layout(&self, turns_per_coil: u32) -> MachineLayout {
        let length = m(self.length);
        let (outer, inner) = self.stator_radii;
        let (slot_height, slot_width) = self.slot;
        let (rotor_outer, rotor_inner) = self.rotor_radii;
        let (depth, width) = self.hole;

        let magnets = if self.magnetised {
            vec![Magnet {
                grade: DEFAULT_MAGNET_GRADE,
                length,
                thickness: m(depth),
                width: m(width),
            }]
        } else {
            Vec::new()
        };

        MachineLayout {
            name: self.name.to_owned(),
            machine_type: self.machine_type,
            stator: StatorLamination {
                length,
                outer_radius: m(outer),
                inner_radius: m(inner),
                slot: Slot {
                    count: self.slots,
                    height: m(slot_height),
                    width: m(slot_width),
                    opening_height: m(0.0),
                    opening_width: m(0.0),
                },
                winding: winding(
                    self.slots,
                    self.poles / 2,
                    turns_per_coil,
                    CoilKind::Concentrated,
                ),
            },
            rotor: RotorLamination {
                length,
                outer_radius: m(rotor_outer),
                inner_radius: m(rotor_inner),
                holes: vec![HoleSet {
                    count: self.poles,
                    depth: m(depth),
                    width: m(width),
                    opening_height: m(0.0),
                    opening_width: m(0.0),
                    offset: Angle::new::<radian>(0.0),
                    magnets,
                }],
            },
            shaft: Shaft {
                length: m(0.1),
                diameter: m(0.05),
            },
            frame: None,
        }
    }
}

fn tesla_model_s(turns_per_coil: u32) -> MachineLayout {
    Demonstrator {
        name: ReferenceMachine::TeslaModelS.name(),
        machine_type: MachineType::Ipmsm,
        length: 0.085,
        stator_radii: (0.095, 0.065),
        slots: 48,
        slot: (0.002, 0.0025),
        rotor_radii: (0.064, 0.025),
        poles: 8,
        hole: (0.012, 0.035),
        magnetised: true,
    }
    .layout(turns_per_coil)
}

fn nissan_leaf(turns_per_coil: u32) -> MachineLayout {
    Demonstrator {
        name: ReferenceMachine::NissanLeaf.name(),
        machine_type: MachineType::Spmsm,
        length: 0.075,
        stator_radii: (0.085, 0.058),
        slots: 48,
        slot: (0.0018, 0.0022),
        rotor_radii: (0.057, 0.025),
        poles: 8,
        hole: (0.004, 0.025),
        magnetised: true,
    }
    .layout(turns_per_coil)
}

fn synchronous_reluctance(turns_per_coil: u32) -> MachineLayout {
    Demonstrator {
        name: ReferenceMachine::SynchronousReluctance.name(),
        machine_type: MachineType::SynRel,
        length: 0.065,
        stator_radii: (0.075, 0.050),
        slots: 36,
        slot: (0.0015, 0.0020),
        rotor_radii: (0.049, 0.020),
        poles: 6,
        hole: (0.008, 0.020),
        magnetised: false,
    }
    .layout(turns_per_coil)
}
