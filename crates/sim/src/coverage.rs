//! Sensor-coverage accounting.

use crate::geometry::distance;
use crate::motion::Target;
use crate::types::Vec2;

/// Number of targets within `sensor_range` (Euclidean) of the agent.
///
/// Linear scan; no spatial index. Fine at the scales this simulation runs at
/// (a few hundred targets).
#[must_use]
pub fn covered(agent_pos: Vec2, targets: &[Target], sensor_range: f32) -> u32 {
    let mut count = 0;
    for target in targets {
        if distance(agent_pos, target.pos) <= sensor_range {
            count += 1;
        }
    }
    count
}
