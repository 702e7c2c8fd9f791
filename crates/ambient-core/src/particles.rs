//! Ambient particle field: a fixed pool of dots drifting and bouncing inside the surface.

use crate::config::ParticleFieldConfig;
use crate::engine::{Effect, SurfaceEngine};
use crate::error::Result;
use crate::geometry::reflect;
use crate::surface::{Rgb, Surface2d};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Displacement per frame.
    pub velocity: Vec2,
    radius: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn step(&mut self, bounds: Vec2) {
        let (position, velocity) = reflect(self.position, self.velocity, bounds);
        self.position = position;
        self.velocity = velocity;
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    color: Rgb,
}

impl ParticleField {
    /// Allocate `config.count` particles spread uniformly over `bounds`.
    pub fn new<R: Rng + ?Sized>(
        config: &ParticleFieldConfig,
        bounds: Vec2,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let bounds = bounds.max(Vec2::ZERO);
        let particles = (0..config.count)
            .map(|_| {
                Particle::new(
                    Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                    Vec2::new(config.speed.sample(rng), config.speed.sample(rng)),
                    config.radius.sample(rng),
                    config.opacity.sample(rng),
                )
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[particles] count={} bounds=({:.0},{:.0})",
            particles.len(),
            bounds.x,
            bounds.y
        );
        Ok(Self {
            particles,
            color: config.color,
        })
    }

    pub fn from_particles(particles: Vec<Particle>, color: Rgb) -> Self {
        Self { particles, color }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Advance one frame against the current bounds.
    pub fn step(&mut self, bounds: Vec2) {
        for p in &mut self.particles {
            p.step(bounds);
        }
    }
}

impl Effect for ParticleField {
    // velocities are per frame, so elapsed time is not used
    fn advance(&mut self, _dt: Duration, bounds: Vec2) {
        self.step(bounds);
    }

    fn draw<S: Surface2d + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, self.color.with_alpha(p.opacity));
        }
    }
}

pub type ParticleFieldEngine<S, F> = SurfaceEngine<ParticleField, S, F>;
