#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
//! # Coverage Simulation Core
//!
//! A small 2D pursuit/coverage simulation: a single mobile observer roams a
//! bounded arena trying to keep as many randomly moving targets as possible
//! inside its sensor radius over a fixed-length episode of discrete steps.
//!
//! ## Key Components
//!
//! -   **Geometry:** [`Vec2`], Euclidean [`distance`] and the
//!     [`heading_increment`] used by every moving body, defined in the
//!     [`geometry`] module.
//! -   **Bodies:** [`Target`] (random-waypoint cruiser) and [`Agent`]
//!     (externally steered observer) in the [`motion`] module, living inside
//!     an [`Arena`].
//! -   **Session:** the [`Session`] struct in the [`session`] module owns all
//!     mutable state and steps the simulation forward one macro-step at a
//!     time, expanding each into `update_rate` micro-steps of motion and
//!     reward accrual.
//!
//! ## Usage
//!
//! ```rust
//! use sim::{Session, SimConfig, Vec2};
//!
//! let mut session = Session::new(SimConfig::default(), 42)?;
//! let outcome = session.step(Vec2::new(75.0, 75.0))?;
//! assert!(!outcome.done);
//! # Ok::<(), sim::SimError>(())
//! ```
//!
//! Each session is independently owned; run one instance per rollout with no
//! shared state between them.

pub mod config;
pub mod coverage;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod session;
pub mod types;

pub use config::SimConfig;
pub use coverage::covered;
pub use error::SimError;
pub use geometry::{distance, heading_increment};
pub use motion::{Agent, Target, ARRIVAL_TOLERANCE};
pub use session::{Session, SessionView, StepOutcome};
pub use types::{Arena, Vec2};
