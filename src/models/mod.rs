//! Diffusion model implementation.
//!
//! The model is a pure function of `(Xa, T)` and an injected constant table so
//! front-ends (CLI, interactive prompt, tests) can share it without setup.

pub mod model;

pub use model::*;
