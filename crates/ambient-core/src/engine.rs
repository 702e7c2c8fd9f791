//! Mount / frame / resize / unmount lifecycle shared by every canvas effect.

use crate::config::Motion;
use crate::error::Result;
use crate::schedule::{AnimationDriver, DriverState, FrameScheduler};
use crate::surface::Surface2d;
use glam::Vec2;
use std::time::Duration;

/// Something that animates inside a rectangle and can paint itself.
pub trait Effect {
    fn advance(&mut self, dt: Duration, bounds: Vec2);
    /// The surface changed size outside a frame.
    fn resize(&mut self, _bounds: Vec2) {}
    fn draw<S: Surface2d + ?Sized>(&self, surface: &mut S);
}

pub struct SurfaceEngine<E: Effect, S: Surface2d, F: FrameScheduler> {
    effect: E,
    surface: S,
    driver: AnimationDriver<F>,
    motion: Motion,
    frames: u64,
}

impl<E: Effect, S: Surface2d, F: FrameScheduler> SurfaceEngine<E, S, F> {
    /// Size the surface, build the effect for its current size and start the loop.
    ///
    /// With reduced motion a single static frame is painted and nothing is scheduled.
    pub fn mount(
        mut surface: S,
        scheduler: F,
        motion: Motion,
        build: impl FnOnce(Vec2) -> Result<E>,
    ) -> Result<Self> {
        surface.sync_backing_size();
        let effect = build(surface.logical_size())?;
        let mut engine = Self {
            effect,
            surface,
            driver: AnimationDriver::new(scheduler),
            motion,
            frames: 0,
        };
        if motion.is_reduced() {
            log::debug!("[surface] reduced motion; painting static frame");
            engine.paint();
        } else {
            engine.driver.start();
        }
        Ok(engine)
    }

    /// Body of one animation-frame callback. Returns whether anything was drawn.
    pub fn frame(&mut self, dt: Duration) -> bool {
        if !self.driver.begin_frame() {
            return false;
        }
        let bounds = self.surface.logical_size();
        self.effect.advance(dt, bounds);
        self.paint();
        self.frames += 1;
        self.driver.end_frame();
        true
    }

    pub fn resize(&mut self) {
        if self.driver.state() == DriverState::Stopped {
            return;
        }
        self.surface.sync_backing_size();
        self.effect.resize(self.surface.logical_size());
        // resizing the backing store wipes it; a static field has no next frame to repaint
        if !self.driver.is_running() {
            self.paint();
        }
    }

    /// Cancel the pending frame. Safe to call any number of times.
    pub fn unmount(&mut self) {
        if self.driver.state() != DriverState::Stopped {
            log::debug!("[surface] unmount after {} frames", self.frames);
        }
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn driver(&self) -> &AnimationDriver<F> {
        &self.driver
    }

    fn paint(&mut self) {
        self.surface.clear();
        self.effect.draw(&mut self.surface);
    }
}
