//! Ambient dust: sparse motes that ease back and forth around fixed anchors.

use crate::config::DustConfig;
use crate::constants::*;
use crate::engine::{Effect, SurfaceEngine};
use crate::error::Result;
use crate::geometry::{lerp, random_in_range, sine_in_out, yoyo, Span};
use crate::surface::{Rgb, Rgba, Surface2d};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DustTone {
    White,
    Amber,
}

impl DustTone {
    pub fn color(self, opacity: f32) -> Rgba {
        match self {
            DustTone::White => Rgb(DUST_WHITE_RGB).with_alpha(DUST_WHITE_ALPHA * opacity),
            DustTone::Amber => Rgb(DUST_AMBER_RGB).with_alpha(DUST_AMBER_ALPHA * opacity),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mote {
    /// Position as a fraction of the surface size.
    pub anchor: Vec2,
    pub size: f32,
    pub tone: DustTone,
    /// Offset reached at the far end of the yoyo.
    pub drift: Vec2,
    pub peak_opacity: f32,
    pub duration_secs: f32,
    pub delay_secs: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoteSample {
    pub offset: Vec2,
    pub opacity: f32,
    /// Softening in px; `DUST_REST_BLUR` at rest, sharp at the peak.
    pub blur: f32,
}

impl Mote {
    fn random<R: Rng + ?Sized>(config: &DustConfig, rng: &mut R) -> Self {
        let drift = Span::symmetric(config.drift);
        Self {
            anchor: Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()),
            size: if rng.gen::<f32>() < DUST_SMALL_CHANCE {
                DUST_SMALL_SIZE
            } else {
                DUST_LARGE_SIZE
            },
            tone: if rng.gen::<f32>() < DUST_WHITE_CHANCE {
                DustTone::White
            } else {
                DustTone::Amber
            },
            drift: Vec2::new(drift.sample(rng), drift.sample(rng)),
            peak_opacity: config.peak_opacity.sample(rng),
            duration_secs: config.duration_secs.sample(rng),
            delay_secs: random_in_range(rng, 0.0, config.max_delay_secs),
        }
    }

    /// Offset and opacity `elapsed` seconds after mount.
    pub fn sample(&self, elapsed: f32) -> MoteSample {
        let t = sine_in_out(yoyo(elapsed - self.delay_secs, self.duration_secs));
        MoteSample {
            offset: self.drift * t,
            opacity: lerp(DUST_REST_OPACITY, self.peak_opacity, t),
            blur: lerp(DUST_REST_BLUR, 0.0, t),
        }
    }

    /// Radius and alpha a blurred mote is painted with.
    ///
    /// A 2D context has no cheap per-shape blur, so the softening spreads the
    /// dot by half the blur and thins its alpha to keep the same total ink.
    pub fn paint(&self, sample: &MoteSample) -> (f32, Rgba) {
        let core = self.size * 0.5;
        let radius = core + sample.blur * 0.5;
        let thinning = if radius > 0.0 { (core / radius).powi(2) } else { 1.0 };
        (radius, self.tone.color(sample.opacity * thinning))
    }
}

pub struct DustField {
    motes: Vec<Mote>,
    elapsed: f64,
    bounds: Vec2,
}

impl DustField {
    pub fn new<R: Rng + ?Sized>(config: &DustConfig, bounds: Vec2, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let motes = (0..config.count).map(|_| Mote::random(config, rng)).collect();
        Ok(Self {
            motes,
            elapsed: 0.0,
            bounds,
        })
    }

    pub fn motes(&self) -> &[Mote] {
        &self.motes
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    /// Surface-space center of mote `index` at the current time.
    pub fn center_of(&self, index: usize) -> Option<Vec2> {
        self.motes.get(index).map(|m| {
            m.anchor * self.bounds + m.sample(self.elapsed as f32).offset
        })
    }
}

impl Effect for DustField {
    fn advance(&mut self, dt: Duration, bounds: Vec2) {
        self.elapsed += dt.as_secs_f64();
        self.bounds = bounds;
    }

    fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    fn draw<S: Surface2d + ?Sized>(&self, surface: &mut S) {
        let elapsed = self.elapsed as f32;
        for m in &self.motes {
            let s = m.sample(elapsed);
            let (radius, color) = m.paint(&s);
            surface.fill_circle(m.anchor * self.bounds + s.offset, radius, color);
        }
    }
}

pub type DustFieldEngine<S, F> = SurfaceEngine<DustField, S, F>;
