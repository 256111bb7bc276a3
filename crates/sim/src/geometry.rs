//! Shared geometry helpers for target and agent motion.

use crate::types::Vec2;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Per-step displacement from `loc` toward `dest` at the given speed.
///
/// Returns `None` when `loc == dest`; callers short-circuit with zero
/// displacement since there is no heading to follow.
///
/// The delta is first divided by its larger axis magnitude, then renormalized
/// to unit length and scaled by `speed`. The two-stage form is load-bearing
/// for reproducibility: collapsing it into a single normalization changes
/// low-order bits and with them the timing of arrival events.
#[must_use]
pub fn heading_increment(loc: Vec2, dest: Vec2, speed: f32) -> Option<Vec2> {
    if loc == dest {
        return None;
    }
    let delta = dest - loc;
    let axis_max = delta.x.abs().max(delta.y.abs());
    let scaled = Vec2::new(delta.x / axis_max, delta.y / axis_max);
    let len = scaled.length();
    Some(Vec2::new(scaled.x / len * speed, scaled.y / len * speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn increment_has_requested_speed() {
        let inc = heading_increment(Vec2::new(1.0, 1.0), Vec2::new(9.0, 4.0), 2.5)
            .expect("distinct points have a heading");
        assert!((inc.length() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn increment_points_toward_destination() {
        let inc = heading_increment(Vec2::new(5.0, 5.0), Vec2::new(0.0, 10.0), 1.0)
            .expect("distinct points have a heading");
        assert!(inc.x < 0.0 && inc.y > 0.0);
    }

    #[test]
    fn coincident_points_have_no_heading() {
        let p = Vec2::new(2.0, 3.0);
        assert!(heading_increment(p, p, 1.0).is_none());
    }

    #[test]
    fn axis_aligned_increment_is_finite() {
        // Larger-axis divide must not trip on a zero minor axis.
        let inc = heading_increment(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), 1.0)
            .expect("distinct points have a heading");
        assert!((inc.x - 1.0).abs() < 1e-6);
        assert!(inc.y.abs() < 1e-6);
    }
}
