use std::collections::HashMap;

/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the
/// interface an environment must provide to a training loop. Each call to
/// [`step`] advances the simulation by one action and returns the new
/// observation vector, a reward signal, a termination flag, and an auxiliary
/// info map.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action, a 2D destination coordinate.
    fn step(&mut self, action: [f32; 2]) -> StepResult;

    /// Recompute the current observation vector without advancing the
    /// simulation. Doubles as the initial observation fetch and the terminal
    /// observation fetch after a `done` step.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action space.
    fn action_size(&self) -> usize;
}

/// Result of a single environment step.
#[derive(Clone, Debug)]
pub struct StepResult {
    pub obs: Vec<f32>,
    pub reward: f32,
    pub done: bool,
    /// Auxiliary diagnostics; empty for this environment.
    pub info: HashMap<String, String>,
}
