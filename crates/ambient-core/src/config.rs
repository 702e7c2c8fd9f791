//! Typed configuration for the effects. Defaults come from `constants`.

use crate::constants::*;
use crate::error::{AmbientError, Result};
use crate::geometry::Span;
use crate::marquee::Direction;
use crate::surface::Rgb;

/// Host accessibility setting. `Reduced` disables every animation loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Full,
    Reduced,
}

impl Motion {
    #[inline]
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Motion::Reduced
        } else {
            Motion::Full
        }
    }

    #[inline]
    pub fn is_reduced(self) -> bool {
        self == Motion::Reduced
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleFieldConfig {
    pub count: usize,
    /// Per-axis velocity range in px per frame.
    pub speed: Span,
    pub radius: Span,
    pub opacity: Span,
    pub color: Rgb,
    pub motion: Motion,
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            speed: Span::symmetric(PARTICLE_SPEED_MAX),
            radius: Span::new(PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX),
            opacity: Span::new(PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX),
            color: Rgb(BRAND_RGB),
            motion: Motion::Full,
        }
    }
}

impl ParticleFieldConfig {
    pub fn validate(&self) -> Result<()> {
        check_span("speed", &self.speed)?;
        check_span("radius", &self.radius)?;
        check_span("opacity", &self.opacity)?;
        if self.radius.min < 0.0 {
            return Err(AmbientError::InvalidConfig(
                "radius must not be negative".into(),
            ));
        }
        check_unit("opacity", &self.opacity)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DustConfig {
    pub count: usize,
    pub drift: f32,
    pub peak_opacity: Span,
    pub duration_secs: Span,
    pub max_delay_secs: f32,
    pub motion: Motion,
}

impl Default for DustConfig {
    fn default() -> Self {
        Self {
            count: DUST_COUNT,
            drift: DUST_DRIFT_MAX,
            peak_opacity: Span::new(DUST_PEAK_OPACITY_MIN, DUST_PEAK_OPACITY_MAX),
            duration_secs: Span::new(DUST_DURATION_MIN_SEC, DUST_DURATION_MAX_SEC),
            max_delay_secs: DUST_DELAY_MAX_SEC,
            motion: Motion::Full,
        }
    }
}

impl DustConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.drift.is_finite() || self.drift < 0.0 {
            return Err(AmbientError::InvalidConfig(format!(
                "dust drift must be a non-negative number, got {}",
                self.drift
            )));
        }
        check_span("peak opacity", &self.peak_opacity)?;
        check_unit("peak opacity", &self.peak_opacity)?;
        check_span("duration", &self.duration_secs)?;
        if self.duration_secs.min <= 0.0 {
            return Err(AmbientError::InvalidConfig(
                "dust duration must be positive".into(),
            ));
        }
        if !self.max_delay_secs.is_finite() || self.max_delay_secs < 0.0 {
            return Err(AmbientError::InvalidConfig(
                "dust delay must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeConfig {
    pub direction: Direction,
    /// Seconds to traverse one loop width.
    pub duration_secs: f64,
    pub motion: Motion,
}

impl MarqueeConfig {
    pub fn new(direction: Direction, duration_secs: f64) -> Self {
        Self {
            direction,
            duration_secs,
            motion: Motion::Full,
        }
    }

    /// Top tools row: content exits left.
    pub fn leftward_row() -> Self {
        Self::new(Direction::Leftward, MARQUEE_LEFTWARD_ROW_SEC)
    }

    /// Bottom tools row: content exits right.
    pub fn rightward_row() -> Self {
        Self::new(Direction::Rightward, MARQUEE_RIGHTWARD_ROW_SEC)
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(AmbientError::InvalidConfig(format!(
                "marquee duration must be positive, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }
}

fn check_span(name: &str, span: &Span) -> Result<()> {
    if span.is_valid() {
        Ok(())
    } else {
        Err(AmbientError::InvalidConfig(format!(
            "{} range [{}, {}] is empty or not finite",
            name, span.min, span.max
        )))
    }
}

fn check_unit(name: &str, span: &Span) -> Result<()> {
    if span.min >= 0.0 && span.max <= 1.0 {
        Ok(())
    } else {
        Err(AmbientError::InvalidConfig(format!(
            "{} must lie within [0, 1]",
            name
        )))
    }
}
