use std::ops::{Add, Sub};

/// 2D position or displacement in arena coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Rectangular arena spanning `[0, width] x [0, height]`.
///
/// All positions in the simulation are kept inside these bounds by clamping
/// each axis independently after every motion update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a point to the arena bounds, per axis.
    #[must_use]
    pub fn clamp(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    #[must_use]
    pub fn contains(self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Draw a uniformly random point inside the arena.
    pub fn sample(self, rng: &mut fastrand::Rng) -> Vec2 {
        Vec2::new(rng.f32() * self.width, rng.f32() * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pins_both_axes_independently() {
        let arena = Arena::new(10.0, 20.0);
        assert_eq!(arena.clamp(Vec2::new(-3.0, 25.0)), Vec2::new(0.0, 20.0));
        assert_eq!(arena.clamp(Vec2::new(4.0, 5.0)), Vec2::new(4.0, 5.0));
    }

    #[test]
    fn sample_stays_inside_bounds() {
        let arena = Arena::new(7.0, 3.0);
        let mut rng = fastrand::Rng::with_seed(1);
        for _ in 0..100 {
            assert!(arena.contains(arena.sample(&mut rng)));
        }
    }
}
