//! Motion models for the two kinds of moving body.
//!
//! Targets cruise toward uniformly random waypoints and replan when they
//! arrive or run out of step budget. The agent steers toward an externally
//! supplied destination one micro-step at a time.

use crate::geometry::heading_increment;
use crate::types::{Arena, Vec2};

/// Per-axis arrival tolerance, for both target waypoints and the agent's
/// destination. Deliberately a square region (checked per axis), not a
/// Euclidean disc; changing it shifts the observable timing of replan and
/// arrival events.
pub const ARRIVAL_TOLERANCE: f32 = 1.0;

/// A moving target following a random-waypoint cruise pattern.
///
/// `increment == None` marks a target that has just replanned and must
/// recompute its per-step displacement before moving again.
#[derive(Clone, Debug)]
pub struct Target {
    pub pos: Vec2,
    pub waypoint: Vec2,
    pub steps_left: u32,
    pub increment: Option<Vec2>,
}

impl Target {
    #[must_use]
    pub const fn new(pos: Vec2, waypoint: Vec2, step_budget: u32) -> Self {
        Self {
            pos,
            waypoint,
            steps_left: step_budget,
            increment: None,
        }
    }

    /// Whether this target must pick a new waypoint before moving.
    ///
    /// True when the step budget is spent or the current position is within
    /// [`ARRIVAL_TOLERANCE`] of the waypoint on both axes. The budget check
    /// keeps a boundary-clamped target from stalling forever on a heading it
    /// can never complete.
    #[must_use]
    pub fn needs_replan(&self) -> bool {
        self.steps_left == 0
            || ((self.pos.x - self.waypoint.x).abs() < ARRIVAL_TOLERANCE
                && (self.pos.y - self.waypoint.y).abs() < ARRIVAL_TOLERANCE)
    }

    /// Advance one micro-step: replan if due, then cruise toward the waypoint.
    pub fn advance(&mut self, arena: Arena, speed: f32, step_budget: u32, rng: &mut fastrand::Rng) {
        if self.needs_replan() {
            self.waypoint = arena.sample(rng);
            self.steps_left = step_budget;
            self.increment = None;
            tracing::trace!(x = self.waypoint.x, y = self.waypoint.y, "target replanned");
        }
        if self.increment.is_none() {
            // None again only if the new waypoint coincides with the position
            // exactly; the target then idles until the next replan.
            self.increment = heading_increment(self.pos, self.waypoint, speed);
        }
        if let Some(inc) = self.increment {
            self.pos = arena.clamp(self.pos + inc);
        }
        self.steps_left = self.steps_left.saturating_sub(1);
    }
}

/// The mobile observer. Position only; steering comes from outside.
#[derive(Clone, Debug)]
pub struct Agent {
    pub pos: Vec2,
}

impl Agent {
    #[must_use]
    pub const fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Move one micro-step toward `dest` and report whether the agent has now
    /// arrived (within [`ARRIVAL_TOLERANCE`] per axis, checked after moving).
    ///
    /// A destination equal to the current position yields no displacement and
    /// an immediate arrival.
    pub fn advance(&mut self, dest: Vec2, arena: Arena, speed: f32) -> bool {
        if let Some(inc) = heading_increment(self.pos, dest, speed) {
            self.pos = arena.clamp(self.pos + inc);
        }
        (self.pos.x - dest.x).abs() < ARRIVAL_TOLERANCE
            && (self.pos.y - dest.y).abs() < ARRIVAL_TOLERANCE
    }
}
