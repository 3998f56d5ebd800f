//! Electric machine design.
//!
//! A design starts from a rating (power, speed, pole pairs) and a
//! [`MachineType`] / [`Application`] pair:
//!
//! 1. [`sizing`] derives the main, rotor and stator dimensions from empirical
//!    scaling laws.
//! 2. [`validation`] scores those dimensions against design bands.
//! 3. [`templates`] proposes pole counts and coil turn options per application.
//! 4. [`layout`] turns dimensions into the lamination, slot, hole, magnet and
//!    winding description consumed by a finite-element package.
//!    [`reference`] provides published machines in the same form.

pub mod layout;
pub mod reference;
pub mod sizing;
pub mod templates;
pub mod validation;

mod topology;

pub use topology::{Application, MachineType, TopologyParseError};
