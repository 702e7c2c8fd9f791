//! The one animation-frame loop that ticks the shared marquee timeline.
//! It runs only while at least one tween is live.

use crate::frame::{self, RafScheduler};
use ambient_core::{with_timeline, TimelineDriver};
use instant::Instant;
use std::cell::RefCell;

struct TimelineLoop {
    clock: TimelineDriver<RafScheduler>,
    last: Instant,
}

impl TimelineLoop {
    fn new() -> Self {
        let callback = frame::empty_callback();
        frame::install(&callback, on_frame);
        Self {
            clock: TimelineDriver::new(RafScheduler::new(callback)),
            last: Instant::now(),
        }
    }
}

thread_local! {
    static LOOP: RefCell<Option<TimelineLoop>> = const { RefCell::new(None) };
}

pub fn ensure_running() {
    LOOP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let lp = slot.get_or_insert_with(TimelineLoop::new);
        if !lp.clock.is_running() {
            lp.last = Instant::now();
            lp.clock.ensure_running();
        }
    });
}

/// Cancel the pending frame if no tween is left, so nothing fires after a stop.
pub fn halt_if_idle() {
    LOOP.with(|cell| {
        if let Some(lp) = cell.borrow_mut().as_mut() {
            with_timeline(|t| lp.clock.halt_if_idle(t));
        }
    });
}

fn on_frame() {
    LOOP.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(lp) = slot.as_mut() else {
            return;
        };
        let now = Instant::now();
        let dt = now - lp.last;
        lp.last = now;
        with_timeline(|t| lp.clock.frame(t, dt));
    });
}
