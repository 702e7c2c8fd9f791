// In-memory stand-ins for the host: a surface that records draw calls, a
// scheduler that counts requests, and a marquee track with a settable width.

#![allow(dead_code)]

use ambient_core::{FrameHandle, FrameScheduler, MarqueeTrack, Rgba, Surface2d};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

pub struct RecordingSurface {
    pub size: Vec2,
    pub syncs: usize,
    pub clears: usize,
    pub circles: Vec<Circle>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            syncs: 0,
            clears: 0,
            circles: Vec::new(),
        }
    }
}

impl Surface2d for RecordingSurface {
    fn logical_size(&self) -> Vec2 {
        self.size
    }

    fn sync_backing_size(&mut self) {
        self.syncs += 1;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(Circle {
            center,
            radius,
            color,
        });
    }
}

#[derive(Default)]
pub struct CountingScheduler {
    pub requested: usize,
    pub cancelled: Vec<FrameHandle>,
    pub outstanding: Option<FrameHandle>,
    pub refuse: bool,
    next: i32,
}

impl CountingScheduler {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.requested += 1;
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.outstanding = Some(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
        if self.outstanding == Some(handle) {
            self.outstanding = None;
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeTrack {
    pub width: Rc<Cell<f32>>,
    pub offset: Rc<Cell<Option<f32>>>,
    pub writes: Rc<Cell<usize>>,
}

impl FakeTrack {
    pub fn with_width(full_width: f32) -> Self {
        let track = Self::default();
        track.width.set(full_width);
        track
    }

    pub fn offset(&self) -> Option<f32> {
        self.offset.get()
    }
}

impl MarqueeTrack for FakeTrack {
    fn scroll_width(&self) -> f32 {
        self.width.get()
    }

    fn set_offset(&self, x: f32) {
        self.offset.set(Some(x));
        self.writes.set(self.writes.get() + 1);
    }
}
