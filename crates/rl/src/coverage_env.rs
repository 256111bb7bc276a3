use std::collections::HashMap;

use sim::{Session, SimConfig, SimError, Vec2};

use crate::env::{Env, StepResult};

/// Environment where the agent must keep moving targets inside its sensor
/// radius. Wraps a [`sim::Session`] and flattens its observations for a
/// training loop.
///
/// The observation is `2 * num_targets` floats: the (x, y) of each target
/// while it is within sensor range, zeros otherwise. The action is the 2D
/// destination the agent steers toward for one macro-step.
pub struct CoverageEnv {
    session: Session,
    num_targets: usize,
}

impl CoverageEnv {
    /// Build a fresh rollout instance.
    ///
    /// # Errors
    ///
    /// Propagates [`SimError`] from session construction (invalid config or
    /// impossible spawn).
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        let num_targets = config.num_targets;
        Ok(Self {
            session: Session::new(config, seed)?,
            num_targets,
        })
    }

    /// Read-only access to the wrapped session, for drivers and tests.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Env for CoverageEnv {
    fn step(&mut self, action: [f32; 2]) -> StepResult {
        match self.session.step(Vec2::new(action[0], action[1])) {
            Ok(outcome) => StepResult {
                obs: flatten(&outcome.observation),
                reward: outcome.reward as f32,
                done: outcome.done,
                info: outcome.info,
            },
            // Exhausted sessions surface as a terminal no-op through the Gym
            // convention: last observation, zero reward, done.
            Err(err) => {
                tracing::debug!(%err, "step on spent session surfaced as terminal no-op");
                StepResult {
                    obs: flatten(&self.session.reset()),
                    reward: 0.0,
                    done: true,
                    info: HashMap::new(),
                }
            }
        }
    }

    fn reset(&mut self) -> Vec<f32> {
        flatten(&self.session.reset())
    }

    fn obs_size(&self) -> usize {
        2 * self.num_targets
    }

    fn action_size(&self) -> usize {
        2
    }
}

fn flatten(observation: &[Vec2]) -> Vec<f32> {
    let mut out = Vec::with_capacity(2 * observation.len());
    for p in observation {
        out.push(p.x);
        out.push(p.y);
    }
    out
}
