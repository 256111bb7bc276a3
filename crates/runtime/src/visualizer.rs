//! Optional frame sink for external visualization.
//!
//! The stepping engine never depends on a renderer; anything that wants to
//! draw the simulation consumes read-only [`SessionView`] snapshots through
//! this trait.

use sim::SessionView;

/// Consumer of per-macro-step simulation frames.
pub trait Visualizer {
    fn frame(&mut self, view: &SessionView<'_>);
}

/// Logs frames through `tracing` at debug level. Useful for piping a run into
/// any log-based plotting, and as the reference implementation of the trait.
#[derive(Default)]
pub struct TraceVisualizer {
    frames: u64,
}

impl Visualizer for TraceVisualizer {
    fn frame(&mut self, view: &SessionView<'_>) {
        self.frames += 1;
        let in_range = view
            .targets
            .iter()
            .filter(|t| sim::distance(view.agent_pos, t.pos) <= view.sensor_range)
            .count();
        tracing::debug!(
            frame = self.frames,
            agent_x = view.agent_pos.x,
            agent_y = view.agent_pos.y,
            targets = view.targets.len(),
            in_range,
            "frame"
        );
    }
}
