//! Frame scheduling and the lifetime of one animation loop.

/// Opaque id of a scheduled frame callback (an animation-frame request id on the web).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host hook that schedules one callback per display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// Holds at most one outstanding frame request for a loop.
///
/// `stop` cancels the outstanding request, so once it returns no callback
/// belonging to this driver will run its frame body again.
pub struct AnimationDriver<F: FrameScheduler> {
    scheduler: F,
    pending: Option<FrameHandle>,
    state: DriverState,
}

impl<F: FrameScheduler> AnimationDriver<F> {
    pub fn new(scheduler: F) -> Self {
        Self {
            scheduler,
            pending: None,
            state: DriverState::Idle,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Begin the loop; a no-op while already running.
    pub fn start(&mut self) -> bool {
        if self.state == DriverState::Running {
            return false;
        }
        self.state = DriverState::Running;
        self.schedule_next();
        true
    }

    /// Call at the top of a frame callback. Returns whether the frame body should run.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.state == DriverState::Running
    }

    /// Call at the end of a frame body to request the next frame.
    pub fn end_frame(&mut self) {
        if self.state == DriverState::Running && self.pending.is_none() {
            self.schedule_next();
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.state = DriverState::Stopped;
    }

    fn schedule_next(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("frame request refused; animation loop idle");
            self.state = DriverState::Idle;
        }
    }
}
