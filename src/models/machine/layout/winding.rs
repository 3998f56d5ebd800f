use std::fmt;

use crate::support::constraint::StrictlyPositive;

use super::error::WindingError;

/// A stator phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    A,
    B,
    C,
}

impl Phase {
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Column of this phase in a [`WindingMatrix`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        })
    }
}

/// Phase connection, star unless a layout asks otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Connection {
    #[default]
    Star,
    Delta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoilKind {
    Concentrated,
    Distributed,
}

/// Phase belts in slot order: A+, C−, B+, A−, C+, B−.
const PHASE_BELTS: [(Phase, i64); 6] = [
    (Phase::A, 1),
    (Phase::C, -1),
    (Phase::B, 1),
    (Phase::A, -1),
    (Phase::C, 1),
    (Phase::B, -1),
];

/// Signed turns per slot and phase for a single-layer winding.
///
/// Row `s` holds the turns of slot `s` in phases A, B and C. A positive
/// count is a go conductor, a negative count a return conductor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindingMatrix {
    turns: Vec<[i64; 3]>,
}

impl WindingMatrix {
    /// Builds a single-layer, three-phase matrix.
    ///
    /// Slot `s` belongs to phase belt `⌊s·6p / Zs⌋ mod 6`, so each belt
    /// spans `Zs / 6p` consecutive slots when that divides evenly.
    #[must_use]
    pub fn single_layer(slots: u32, pole_pairs: u32, turns_per_coil: u32) -> Self {
        let belts = 6 * u64::from(pole_pairs);
        let zs = u64::from(slots.max(1));
        let turns = i64::from(turns_per_coil);

        let rows = (0..u64::from(slots))
            .map(|slot| {
                let belt = usize::try_from((slot * belts / zs) % 6).unwrap_or_default();
                let (phase, sign) = PHASE_BELTS[belt];
                let mut row = [0; 3];
                row[phase.index()] = sign * turns;
                row
            })
            .collect();

        Self { turns: rows }
    }

    /// Wraps an explicit matrix, one `[A, B, C]` row per slot.
    ///
    /// # Errors
    ///
    /// Returns [`WindingError::SlotCount`] if there is not exactly one row
    /// per stator slot.
    pub fn from_rows(rows: Vec<[i64; 3]>, slots: u32) -> Result<Self, WindingError> {
        if u32::try_from(rows.len()).ok() != Some(slots) {
            return Err(WindingError::SlotCount {
                rows: rows.len(),
                slots,
            });
        }
        Ok(Self { turns: rows })
    }

    #[must_use]
    pub fn slots(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[[i64; 3]] {
        &self.turns
    }

    /// Returns the signed turns of `phase` in `slot`, if the slot exists.
    #[must_use]
    pub fn get(&self, slot: usize, phase: Phase) -> Option<i64> {
        self.turns.get(slot).map(|row| row[phase.index()])
    }

    /// Total conductor turns of `phase` over all slots.
    #[must_use]
    pub fn phase_turns(&self, phase: Phase) -> u64 {
        self.turns
            .iter()
            .map(|row| row[phase.index()].unsigned_abs())
            .sum()
    }

    /// Replaces the turn count of one coil side, keeping its direction.
    ///
    /// Models a turn-to-turn short circuit: the coil side keeps carrying
    /// current in the same direction, with fewer effective turns.
    ///
    /// # Errors
    ///
    /// Returns [`WindingError::Turns`] if `turns` is zero,
    /// [`WindingError::SlotOutOfRange`] if `slot` does not exist and
    /// [`WindingError::EmptyCoilSide`] if `phase` has no conductor in `slot`.
    pub fn inject_turn_fault(
        &mut self,
        slot: usize,
        phase: Phase,
        turns: u32,
    ) -> Result<(), WindingError> {
        let turns = StrictlyPositive::new(turns)
            .map_err(WindingError::Turns)?
            .into_inner();
        let slots = self.turns.len();
        let row = self
            .turns
            .get_mut(slot)
            .ok_or(WindingError::SlotOutOfRange { slot, slots })?;

        let entry = &mut row[phase.index()];
        if *entry == 0 {
            return Err(WindingError::EmptyCoilSide { slot, phase });
        }
        *entry = entry.signum() * i64::from(turns);
        Ok(())
    }

    /// Returns one faulted copy of this matrix per turn count `1..=n`,
    /// where `n` is the healthy turn count of the coil side.
    ///
    /// # Errors
    ///
    /// Same as [`WindingMatrix::inject_turn_fault`].
    pub fn turn_fault_sweep(&self, slot: usize, phase: Phase) -> Result<Vec<Self>, WindingError> {
        let nominal = self
            .get(slot, phase)
            .ok_or(WindingError::SlotOutOfRange {
                slot,
                slots: self.slots(),
            })?
            .unsigned_abs();
        if nominal == 0 {
            return Err(WindingError::EmptyCoilSide { slot, phase });
        }

        let nominal = u32::try_from(nominal).unwrap_or(u32::MAX);
        (1..=nominal)
            .map(|turns| {
                let mut faulted = self.clone();
                faulted.inject_turn_fault(slot, phase, turns)?;
                Ok(faulted)
            })
            .collect()
    }
}

/// Stator winding description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winding {
    pub phases: u32,
    pub turns_per_coil: u32,
    pub parallel_circuits: u32,
    pub layers: u32,
    pub pole_pairs: u32,
    pub connection: Connection,
    pub coil: CoilKind,
    pub matrix: WindingMatrix,
}
