//! `mixdiff` library crate.
//!
//! Mutual diffusion coefficient of a binary liquid mixture from composition and
//! temperature, using UNIFAC-style local compositions with free-volume and
//! association corrections.
//!
//! The binary (`dab`) is a thin wrapper around this library so that:
//!
//! - the model is testable without spawning processes
//! - other front-ends can call `models::evaluate` directly
//!
//! ```
//! use mixdiff::domain::ModelConstants;
//! use mixdiff::models::DiffusionModel;
//!
//! let model = DiffusionModel::new(ModelConstants::reference());
//! let r = model.evaluate(0.5, 298.15).unwrap();
//! assert!((r.dab - r.ln_dab.exp()).abs() < 1e-18);
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
