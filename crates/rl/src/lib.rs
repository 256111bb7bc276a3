#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
//! Gym-style environment surface over the coverage simulation.

pub mod coverage_env;
pub mod env;

pub use coverage_env::CoverageEnv;
pub use env::{Env, StepResult};
