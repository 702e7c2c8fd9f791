//! One marquee's measure-then-start flow, from mount to stop.

use crate::config::MarqueeConfig;
use crate::error::{AmbientError, Result};
use crate::marquee::{MarqueeTrack, MeasureGate, MeasureStep};
use crate::schedule::{AnimationDriver, FrameScheduler};
use crate::timeline::{StartOutcome, Timeline, TrackId};

/// Waits for layout to settle, measures the track and hands the tween to a
/// [`Timeline`]. The scheduler only drives measurement frames; once the
/// tween is live the timeline's own loop takes over.
pub struct MarqueeSession<T, F>
where
    T: MarqueeTrack + Clone + 'static,
    F: FrameScheduler,
{
    id: TrackId,
    track: T,
    config: MarqueeConfig,
    gate: MeasureGate,
    driver: AnimationDriver<F>,
    stopped: bool,
}

impl<T, F> MarqueeSession<T, F>
where
    T: MarqueeTrack + Clone + 'static,
    F: FrameScheduler,
{
    pub fn new(id: TrackId, track: T, config: MarqueeConfig, scheduler: F) -> Self {
        Self {
            id,
            track,
            config,
            gate: MeasureGate::default(),
            driver: AnimationDriver::new(scheduler),
            stopped: false,
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    pub fn is_measuring(&self) -> bool {
        self.driver.is_running()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn driver(&self) -> &AnimationDriver<F> {
        &self.driver
    }

    /// Measure on upcoming frames until the track has a usable width.
    /// `settled` skips the settle frames when layout is already known good.
    pub fn begin_measuring(&mut self, settled: bool) {
        if self.stopped {
            return;
        }
        self.gate.reset(settled);
        self.driver.stop();
        self.driver.start();
    }

    /// Body of one measurement frame. Returns the outcome when a start happened.
    pub fn on_frame(&mut self, timeline: &mut Timeline) -> Option<StartOutcome> {
        if !self.driver.begin_frame() {
            return None;
        }
        match self.gate.on_frame() {
            MeasureStep::Wait => {
                self.driver.end_frame();
                None
            }
            MeasureStep::GiveUp => {
                log::warn!(
                    "[marquee] track={} has no usable width after {} attempts; left static",
                    self.id.0,
                    self.gate.attempts()
                );
                self.driver.stop();
                None
            }
            MeasureStep::Measure => match self.try_start(timeline) {
                Err(AmbientError::DegenerateWidth { measured }) => {
                    log::debug!(
                        "[marquee] track={} measured {:.1}px; retrying next frame",
                        self.id.0,
                        measured
                    );
                    self.driver.end_frame();
                    None
                }
                Err(_) => {
                    self.driver.stop();
                    None
                }
                Ok(outcome) => {
                    self.driver.stop();
                    Some(outcome)
                }
            },
        }
    }

    /// Replace any tween on this track with one built from a fresh measurement.
    pub fn try_start(&mut self, timeline: &mut Timeline) -> Result<StartOutcome> {
        let outcome = timeline.restart(self.id, Box::new(self.track.clone()), &self.config);
        if let Err(e) = &outcome {
            if !matches!(e, AmbientError::DegenerateWidth { .. }) {
                log::warn!("[marquee] track={} not started: {}", self.id.0, e);
            }
        }
        outcome
    }

    /// Kill the tween and start over, optionally with a new config. A
    /// degenerate measurement falls back to the frame-gated retry.
    pub fn restart(
        &mut self,
        timeline: &mut Timeline,
        config: Option<MarqueeConfig>,
    ) -> Option<StartOutcome> {
        if self.stopped {
            return None;
        }
        if let Some(config) = config {
            self.config = config;
        }
        self.driver.stop();
        match self.try_start(timeline) {
            Ok(outcome) => Some(outcome),
            Err(AmbientError::DegenerateWidth { .. }) => {
                self.begin_measuring(true);
                None
            }
            Err(_) => None,
        }
    }

    /// Cancel the tween and any pending measurement frame. Idempotent; the
    /// track keeps its last offset. Returns whether a tween was live.
    pub fn stop(&mut self, timeline: &mut Timeline) -> bool {
        self.stopped = true;
        self.driver.stop();
        timeline.stop(self.id)
    }
}
