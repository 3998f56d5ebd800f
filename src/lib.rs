//! # emachine-models
//!
//! Parametric electric machine designs and synthetic fault scenarios for
//! simulation dataset generation.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models.
//!   - [`models::machine`]: empirical ("Boldea") sizing, design validation,
//!     application templates, and the layout description handed to a
//!     finite-element package.
//!   - [`models::faults`]: stochastic thermal, mechanical, electrical and
//!     mixed defect generators.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use emachine_models::models::machine::{
//!     Application, MachineType,
//!     sizing::{self, SizingInput},
//!     validation::Validator,
//! };
//! use uom::si::{
//!     angular_velocity::revolution_per_minute,
//!     f64::{AngularVelocity, Power},
//!     power::kilowatt,
//! };
//!
//! let input = SizingInput::new(
//!     Power::new::<kilowatt>(50.0),
//!     AngularVelocity::new::<revolution_per_minute>(3000.0),
//!     2,
//!     MachineType::Ipmsm,
//!     Application::Traction,
//! )
//! .unwrap();
//!
//! let dims = sizing::size(&input);
//! let validation = Validator::default().validate(&dims);
//! assert!(validation.is_valid());
//! assert!(validation.score() <= 100.0);
//! ```

pub mod models;
pub mod support;
