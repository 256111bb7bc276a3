use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// Rejection sampling could not place all bodies with the required
    /// separation; the arena is too small for the population.
    #[error("could not place {0} bodies at least one unit apart")]
    SpawnFailed(usize),
    /// The episode budget is spent; the call was a no-op. Callers fetch the
    /// terminal observation via `reset` and reinitialize.
    #[error("episode budget exhausted; reset the session")]
    EpisodeExhausted,
}
