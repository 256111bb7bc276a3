//! Scenario configuration.
//!
//! Deserializes straight from scenario JSON; every field has a default so a
//! scenario file only needs to name what it overrides.

use serde::Deserialize;

use crate::error::SimError;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Number of targets, fixed for the life of the session.
    pub num_targets: usize,
    /// Euclidean radius within which a target is observed and scores reward.
    pub sensor_range: f32,
    /// Micro-steps per macro-step.
    pub update_rate: u32,
    /// Micro-steps a target may spend on one waypoint before forced replan.
    pub target_max_step: u32,
    /// Target cruise speed, distance units per micro-step.
    pub target_speed: f32,
    /// Agent speed, distance units per micro-step. The scenario this models
    /// fixes it at 1.0.
    pub agent_speed: f32,
    /// Total simulated time; the episode budget is this divided by
    /// `update_rate`.
    pub total_sim_time: u32,
    /// Arena width.
    pub width: f32,
    /// Arena height.
    pub height: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_targets: 10,
            sensor_range: 15.0,
            update_rate: 10,
            target_max_step: 100,
            target_speed: 1.0,
            agent_speed: 1.0,
            total_sim_time: 1500,
            width: 150.0,
            height: 150.0,
        }
    }
}

impl SimConfig {
    /// Episode budget in macro-steps. Float division; a fractional budget is
    /// compared against the integer macro-step counter, so termination lands
    /// on the ceiling of this value.
    #[must_use]
    pub fn episode_budget(&self) -> f32 {
        self.total_sim_time as f32 / self.update_rate as f32
    }

    /// Reject degenerate scenarios before any state is built.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_targets == 0 {
            return Err(SimError::InvalidConfig("num_targets must be positive"));
        }
        if self.sensor_range <= 0.0 {
            return Err(SimError::InvalidConfig("sensor_range must be positive"));
        }
        if self.update_rate == 0 {
            return Err(SimError::InvalidConfig("update_rate must be positive"));
        }
        if self.target_max_step == 0 {
            return Err(SimError::InvalidConfig("target_max_step must be positive"));
        }
        if self.target_speed <= 0.0 {
            return Err(SimError::InvalidConfig("target_speed must be positive"));
        }
        if self.agent_speed <= 0.0 {
            return Err(SimError::InvalidConfig("agent_speed must be positive"));
        }
        if self.total_sim_time == 0 {
            return Err(SimError::InvalidConfig("total_sim_time must be positive"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SimError::InvalidConfig("arena dimensions must be positive"));
        }
        Ok(())
    }
}
