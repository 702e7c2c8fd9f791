//! Shared animation timeline driving every marquee tween from one clock.

use crate::config::MarqueeConfig;
use crate::error::Result;
use crate::marquee::{measure_loop_width, MarqueeTrack, MarqueeTween};
use crate::schedule::{AnimationDriver, FrameScheduler};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StartOutcome {
    Started { loop_width: f32 },
    /// Reduced motion: the strip is laid out statically and no tween exists.
    Static,
}

struct Entry {
    track: Box<dyn MarqueeTrack>,
    tween: MarqueeTween,
}

#[derive(Default)]
pub struct Timeline {
    entries: FnvHashMap<TrackId, Entry>,
    next_id: u32,
}

impl Timeline {
    pub fn allocate_id(&mut self) -> TrackId {
        let id = TrackId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Measure `track` and begin looping it, replacing any tween already on `id`.
    ///
    /// A degenerate measurement leaves the track without a tween and returns
    /// `DegenerateWidth` so the caller can retry after layout settles.
    pub fn start(
        &mut self,
        id: TrackId,
        track: Box<dyn MarqueeTrack>,
        config: &MarqueeConfig,
    ) -> Result<StartOutcome> {
        self.kill(id);
        config.validate()?;
        if config.motion.is_reduced() {
            track.set_offset(0.0);
            return Ok(StartOutcome::Static);
        }
        let loop_width = measure_loop_width(track.scroll_width())?;
        let tween = MarqueeTween::new(loop_width, config)?;
        track.set_offset(0.0);
        log::debug!(
            "[timeline] start track={} loop_width={:.1} dir={:?} duration={:.1}s",
            id.0,
            loop_width,
            config.direction,
            config.duration_secs
        );
        self.entries.insert(id, Entry { track, tween });
        Ok(StartOutcome::Started { loop_width })
    }

    /// Drop the current tween and start again from a fresh measurement.
    pub fn restart(
        &mut self,
        id: TrackId,
        track: Box<dyn MarqueeTrack>,
        config: &MarqueeConfig,
    ) -> Result<StartOutcome> {
        self.stop(id);
        self.start(id, track, config)
    }

    /// Cancel the tween on `id`, leaving the track at its last offset.
    /// Returns whether a tween was live.
    pub fn stop(&mut self, id: TrackId) -> bool {
        let stopped = self.kill(id);
        if stopped {
            log::debug!("[timeline] stop track={}", id.0);
        }
        stopped
    }

    /// Advance every tween and apply the wrapped offsets.
    pub fn tick(&mut self, dt: Duration) {
        for entry in self.entries.values_mut() {
            entry.tween.advance(dt);
            entry.track.set_offset(entry.tween.offset());
        }
    }

    pub fn tween(&self, id: TrackId) -> Option<&MarqueeTween> {
        self.entries.get(&id).map(|e| &e.tween)
    }

    pub fn is_live(&self, id: TrackId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn kill(&mut self, id: TrackId) -> bool {
        self.entries.remove(&id).is_some()
    }
}

/// The one frame loop that ticks a timeline. It runs only while a tween is live.
pub struct TimelineDriver<F: FrameScheduler> {
    driver: AnimationDriver<F>,
}

impl<F: FrameScheduler> TimelineDriver<F> {
    pub fn new(scheduler: F) -> Self {
        Self {
            driver: AnimationDriver::new(scheduler),
        }
    }

    /// Returns whether the loop was started by this call.
    pub fn ensure_running(&mut self) -> bool {
        if self.driver.is_running() {
            return false;
        }
        self.driver.start();
        log::debug!("[timeline] loop started");
        true
    }

    /// Body of one loop frame. Returns whether the timeline was ticked.
    pub fn frame(&mut self, timeline: &mut Timeline, dt: Duration) -> bool {
        if !self.driver.begin_frame() {
            return false;
        }
        timeline.tick(dt);
        if timeline.is_idle() {
            self.driver.stop();
            log::debug!("[timeline] loop idle");
        } else {
            self.driver.end_frame();
        }
        true
    }

    /// Cancel the pending frame once the last tween has been stopped.
    pub fn halt_if_idle(&mut self, timeline: &Timeline) -> bool {
        if !timeline.is_idle() || !self.driver.is_running() {
            return false;
        }
        self.driver.stop();
        log::debug!("[timeline] loop halted");
        true
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn driver(&self) -> &AnimationDriver<F> {
        &self.driver
    }
}

thread_local! {
    static TIMELINE: RefCell<Option<Timeline>> = const { RefCell::new(None) };
}

/// Run `f` against this thread's timeline, creating it on first use.
///
/// `f` must not call `with_timeline` again.
pub fn with_timeline<R>(f: impl FnOnce(&mut Timeline) -> R) -> R {
    TIMELINE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let timeline = slot.get_or_insert_with(|| {
            log::debug!("[timeline] registered");
            Timeline::default()
        });
        f(timeline)
    })
}
