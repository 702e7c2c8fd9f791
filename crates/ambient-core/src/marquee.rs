//! Seamless marquee: a doubled strip translated at constant speed and folded
//! back into one loop width so it never visibly resets.

use crate::config::MarqueeConfig;
use crate::constants::{MARQUEE_MIN_LOOP_WIDTH, MEASURE_RETRY_FRAMES, MEASURE_SETTLE_FRAMES};
use crate::error::{AmbientError, Result};
use crate::geometry::wrap;
use std::time::Duration;

/// Perceived travel direction of the strip.
///
/// `Leftward` is +1: the offset is negated by the sign before being used as a
/// translation, so content exits on the left and enters on the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Leftward,
    Rightward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Leftward => 1.0,
            Direction::Rightward => -1.0,
        }
    }

    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign.signum() {
            1 => Some(Direction::Leftward),
            -1 => Some(Direction::Rightward),
            _ => None,
        }
    }
}

/// Host-side track holding two back-to-back copies of the item list.
pub trait MarqueeTrack {
    /// Full laid-out width of the doubled content, in px.
    fn scroll_width(&self) -> f32;
    /// Apply a horizontal translation, in px.
    fn set_offset(&self, x: f32);
}

/// Width of one copy of the content, or `DegenerateWidth` if layout has not settled.
pub fn measure_loop_width(full_width: f32) -> Result<f32> {
    let loop_width = full_width / 2.0;
    if loop_width.is_finite() && loop_width >= MARQUEE_MIN_LOOP_WIDTH {
        Ok(loop_width)
    } else {
        Err(AmbientError::DegenerateWidth {
            measured: loop_width,
        })
    }
}

/// Linear, endlessly repeating tween of the strip offset.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeTween {
    loop_width: f32,
    direction: Direction,
    duration_secs: f64,
    elapsed_secs: f64,
}

impl MarqueeTween {
    pub fn new(loop_width: f32, config: &MarqueeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            loop_width,
            direction: config.direction,
            duration_secs: config.duration_secs,
            elapsed_secs: 0.0,
        })
    }

    pub fn loop_width(&self) -> f32 {
        self.loop_width
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Time into the current repeat, in `[0, duration)`.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed_secs = (self.elapsed_secs + dt.as_secs_f64()).rem_euclid(self.duration_secs);
    }

    /// Unwrapped tween value `elapsed` seconds after start.
    pub fn target_at(&self, elapsed_secs: f64) -> f32 {
        let progress = elapsed_secs / self.duration_secs;
        (self.direction.sign() as f64 * -(self.loop_width as f64) * progress) as f32
    }

    /// Wrapped translation `elapsed` seconds after start, in `[-loop_width, 0)`.
    pub fn offset_at(&self, elapsed_secs: f64) -> f32 {
        wrap(-self.loop_width, 0.0, self.target_at(elapsed_secs))
    }

    pub fn raw_offset(&self) -> f32 {
        self.target_at(self.elapsed_secs)
    }

    pub fn offset(&self) -> f32 {
        self.offset_at(self.elapsed_secs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureStep {
    /// Layout may still be moving; check again next frame.
    Wait,
    Measure,
    /// Retry budget spent; leave the strip static.
    GiveUp,
}

/// Decides on which animation frames a marquee should try to measure its track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasureGate {
    settle_frames: u32,
    max_attempts: u32,
    frames: u32,
    attempts: u32,
}

impl Default for MeasureGate {
    fn default() -> Self {
        Self::new(MEASURE_SETTLE_FRAMES, MEASURE_RETRY_FRAMES)
    }
}

impl MeasureGate {
    pub fn new(settle_frames: u32, max_attempts: u32) -> Self {
        Self {
            settle_frames,
            max_attempts,
            frames: 0,
            attempts: 0,
        }
    }

    pub fn on_frame(&mut self) -> MeasureStep {
        self.frames = self.frames.saturating_add(1);
        if self.frames < self.settle_frames {
            MeasureStep::Wait
        } else if self.attempts >= self.max_attempts {
            MeasureStep::GiveUp
        } else {
            self.attempts += 1;
            MeasureStep::Measure
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Start over. With `settled` the next frame measures right away.
    pub fn reset(&mut self, settled: bool) {
        self.frames = if settled {
            self.settle_frames.saturating_sub(1)
        } else {
            0
        };
        self.attempts = 0;
    }
}
