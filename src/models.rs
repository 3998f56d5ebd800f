//! Domain models.
//!
//! # Organization
//!
//! - [`machine`]: sizing, validation, templates and layout of a machine design.
//! - [`faults`]: defect and fault-scenario generators that operate on a design.
//!
//! Sizing is also exposed through a [`twine_core::Model`] adapter
//! ([`machine::sizing::BoldeaSizing`]) that delegates to the sizing core.

pub mod faults;
pub mod machine;
