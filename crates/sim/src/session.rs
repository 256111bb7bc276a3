//! # Session State Machine
//!
//! A [`Session`] owns all mutable simulation state: the target and agent
//! positions, the RNG, and the macro-step counter. Each call to
//! [`Session::step`] advances one macro-step, which expands into
//! `update_rate` micro-steps of target motion, agent motion, and coverage
//! reward accrual.

use std::collections::HashMap;

use crate::config::SimConfig;
use crate::coverage::covered;
use crate::error::SimError;
use crate::geometry::distance;
use crate::motion::{Agent, Target};
use crate::types::{Arena, Vec2};

/// Minimum pairwise spawn separation, target-to-target and agent-to-target.
const SPAWN_SEPARATION: f32 = 1.0;

/// Placement attempts per body before spawning is declared impossible.
const SPAWN_ATTEMPTS: usize = 10_000;

/// Result of one macro-step.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// Per-target entry: the target's position when within sensor range of
    /// the agent, `Vec2::ZERO` otherwise. An out-of-range target is therefore
    /// indistinguishable from one sitting exactly at the origin; that
    /// ambiguity is part of the observation contract.
    pub observation: Vec<Vec2>,
    /// Coverage counts summed over the macro-step's micro-steps. Bounded by
    /// `update_rate * num_targets`.
    pub reward: u32,
    /// True once the macro-step counter has reached the episode budget.
    pub done: bool,
    /// Always empty; carried for the Gym-style calling convention.
    pub info: HashMap<String, String>,
}

/// Read-only snapshot for external consumers such as renderers. The stepping
/// engine never depends on anything that consumes this.
#[derive(Clone, Copy, Debug)]
pub struct SessionView<'a> {
    pub agent_pos: Vec2,
    pub targets: &'a [Target],
    pub sensor_range: f32,
    pub arena: Arena,
}

/// One independent simulation instance.
///
/// Sessions share nothing; for parallel rollouts, build one per rollout.
pub struct Session {
    config: SimConfig,
    arena: Arena,
    episode_budget: f32,
    curr_episode: u32,
    targets: Vec<Target>,
    agent: Agent,
    rng: fastrand::Rng,
}

impl Session {
    /// Validate the config and spawn all bodies by rejection sampling.
    ///
    /// Every target spawns more than one unit (Euclidean) from every other,
    /// and the agent more than one unit from every target. The separation is
    /// enforced at spawn only, never during simulation.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidConfig`] for degenerate parameters,
    /// [`SimError::SpawnFailed`] when the arena cannot host the population
    /// with the required separation.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        let arena = Arena::new(config.width, config.height);
        let mut rng = fastrand::Rng::with_seed(seed);

        let mut spawn_points: Vec<Vec2> = Vec::with_capacity(config.num_targets + 1);
        for _ in 0..=config.num_targets {
            let p = place_apart(arena, &spawn_points, &mut rng)
                .ok_or(SimError::SpawnFailed(config.num_targets + 1))?;
            spawn_points.push(p);
        }
        let agent = Agent::new(spawn_points.pop().ok_or(SimError::SpawnFailed(0))?);
        let targets = spawn_points
            .into_iter()
            .map(|pos| Target::new(pos, arena.sample(&mut rng), config.target_max_step))
            .collect();

        Ok(Self {
            episode_budget: config.episode_budget(),
            curr_episode: 0,
            arena,
            targets,
            agent,
            rng,
            config,
        })
    }

    /// Advance one macro-step toward `action`, the agent's destination for
    /// this decision interval.
    ///
    /// Runs `update_rate` micro-steps. Each micro-step moves every target,
    /// moves the agent unless it already arrived earlier in this macro-step,
    /// and adds the current coverage count to the reward. The observation is
    /// recomputed once, after the last micro-step.
    ///
    /// # Errors
    ///
    /// [`SimError::EpisodeExhausted`] when the budget was already spent
    /// before this call. Nothing is mutated in that case; the guard is a
    /// warning-level no-op, not a failure of the session.
    pub fn step(&mut self, action: Vec2) -> Result<StepOutcome, SimError> {
        if self.exhausted() {
            tracing::warn!(
                curr_episode = self.curr_episode,
                "step requested on an exhausted session; call reset"
            );
            return Err(SimError::EpisodeExhausted);
        }
        self.curr_episode += 1;

        let mut reward = 0u32;
        let mut arrived = false;
        for _ in 0..self.config.update_rate {
            for target in &mut self.targets {
                target.advance(
                    self.arena,
                    self.config.target_speed,
                    self.config.target_max_step,
                    &mut self.rng,
                );
            }
            if !arrived {
                arrived = self.agent.advance(action, self.arena, self.config.agent_speed);
            }
            reward += covered(self.agent.pos, &self.targets, self.config.sensor_range);
        }

        Ok(StepOutcome {
            observation: self.observation(),
            reward,
            done: self.exhausted(),
            info: HashMap::new(),
        })
    }

    /// Recompute and return the observation without touching any state.
    ///
    /// Serves both as the initial observation fetch before the first step and
    /// as the terminal observation fetch after a `done` step.
    #[must_use]
    pub fn reset(&self) -> Vec<Vec2> {
        self.observation()
    }

    fn observation(&self) -> Vec<Vec2> {
        self.targets
            .iter()
            .map(|t| {
                if distance(self.agent.pos, t.pos) <= self.config.sensor_range {
                    t.pos
                } else {
                    Vec2::ZERO
                }
            })
            .collect()
    }

    fn exhausted(&self) -> bool {
        self.curr_episode as f32 >= self.episode_budget
    }

    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            agent_pos: self.agent.pos,
            targets: &self.targets,
            sensor_range: self.config.sensor_range,
            arena: self.arena,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    #[must_use]
    pub fn agent_pos(&self) -> Vec2 {
        self.agent.pos
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Macro-steps taken so far.
    #[must_use]
    pub fn curr_episode(&self) -> u32 {
        self.curr_episode
    }

    #[must_use]
    pub fn episode_budget(&self) -> f32 {
        self.episode_budget
    }
}

/// Sample a point more than [`SPAWN_SEPARATION`] from every taken point.
fn place_apart(arena: Arena, taken: &[Vec2], rng: &mut fastrand::Rng) -> Option<Vec2> {
    for _ in 0..SPAWN_ATTEMPTS {
        let p = arena.sample(rng);
        if taken.iter().all(|q| distance(p, *q) > SPAWN_SEPARATION) {
            return Some(p);
        }
    }
    None
}
