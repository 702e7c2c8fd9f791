use ambient_core::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the closure passed to `requestAnimationFrame`.
///
/// Filled once the owner of the loop exists and emptied on teardown, which
/// also breaks the owner <-> closure reference cycle.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn empty_callback() -> FrameCallback {
    Rc::new(RefCell::new(None))
}

pub fn install(callback: &FrameCallback, body: impl FnMut() + 'static) {
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(body) as Box<dyn FnMut()>));
}

/// Drop the closure. Must not be called from inside that closure.
pub fn release(callback: &FrameCallback) {
    callback.borrow_mut().take();
}

/// `requestAnimationFrame` scheduler for one loop.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let closure = slot.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| log::error!("requestAnimationFrame error: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(handle.0);
        }
    }
}
