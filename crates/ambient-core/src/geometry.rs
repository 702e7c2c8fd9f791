//! Small math helpers shared by the particle, dust and marquee code.

use glam::Vec2;
use rand::Rng;

/// Closed numeric range `[min, max]` used for randomized construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Range `[-magnitude, magnitude]`.
    pub const fn symmetric(magnitude: f32) -> Self {
        Self::new(-magnitude, magnitude)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    /// Uniform sample; a zero-width span always yields `min`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        random_in_range(rng, self.min, self.max)
    }
}

#[inline]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Fold `v` into the half-open interval `[min, max)`.
///
/// Degenerate intervals collapse to `min`.
#[inline]
pub fn wrap(min: f32, max: f32, v: f32) -> f32 {
    let range = max - min;
    if !(range > 0.0) || !v.is_finite() {
        return min;
    }
    let r = (v - min).rem_euclid(range);
    // rem_euclid may round up to exactly `range` for tiny negative inputs
    if r >= range {
        min
    } else {
        min + r
    }
}

/// One axis of an elastic wall bounce against `[0, extent]`.
///
/// Returns the new position and velocity. On contact the velocity is turned
/// to point back inside and the overshoot is mirrored across the wall, so
/// the position never leaves the interval.
#[inline]
pub fn reflect_axis(pos: f32, vel: f32, extent: f32) -> (f32, f32) {
    let extent = extent.max(0.0);
    let next = pos + vel;
    if next <= 0.0 {
        ((-next).min(extent), vel.abs())
    } else if next >= extent {
        ((2.0 * extent - next).clamp(0.0, extent), -vel.abs())
    } else {
        (next, vel)
    }
}

/// Advance `pos` by `vel` inside `[0, bounds.x] x [0, bounds.y]`, each axis independently.
#[inline]
pub fn reflect(pos: Vec2, vel: Vec2, bounds: Vec2) -> (Vec2, Vec2) {
    let (x, vx) = reflect_axis(pos.x, vel.x, bounds.x);
    let (y, vy) = reflect_axis(pos.y, vel.y, bounds.y);
    (Vec2::new(x, y), Vec2::new(vx, vy))
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sine ease-in-out over `t` in `[0, 1]`.
#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -((std::f32::consts::PI * t).cos() - 1.0) / 2.0
}

/// Yoyo progress for a repeating tween: 0 -> 1 on even cycles, 1 -> 0 on odd ones.
#[inline]
pub fn yoyo(elapsed: f32, duration: f32) -> f32 {
    if !(duration > 0.0) || elapsed <= 0.0 {
        return 0.0;
    }
    let phase = elapsed / duration;
    let cycle = phase.floor();
    let frac = phase - cycle;
    if (cycle as u64) % 2 == 0 {
        frac
    } else {
        1.0 - frac
    }
}
