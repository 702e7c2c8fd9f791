//! Seamless marquee on a DOM track that already holds two copies of its items.

use crate::dom::{self, ListenerGuard};
use crate::frame::{self, FrameCallback, RafScheduler};
use crate::timeline_loop;
use ambient_core::{
    with_timeline, Direction, MarqueeConfig, MarqueeSession, MarqueeTrack, StartOutcome,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
struct DomTrack {
    element: web::HtmlElement,
}

impl MarqueeTrack for DomTrack {
    fn scroll_width(&self) -> f32 {
        self.element.scroll_width() as f32
    }

    fn set_offset(&self, x: f32) {
        let _ = self
            .element
            .style()
            .set_property("transform", &format!("translate3d({:.3}px, 0, 0)", x));
    }
}

/// Options for `startMarquee`. `direction` is +1 (content moves left) or -1 (moves right).
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct MarqueeOptions {
    pub direction: i32,
    pub duration_secs: f64,
    pub reduced_motion: bool,
    pub follow_system_motion: bool,
}

#[wasm_bindgen]
impl MarqueeOptions {
    #[wasm_bindgen(constructor)]
    pub fn new(direction: i32, duration_secs: f64) -> MarqueeOptions {
        Self {
            direction,
            duration_secs,
            reduced_motion: false,
            follow_system_motion: true,
        }
    }

    #[wasm_bindgen(js_name = leftwardRow)]
    pub fn leftward_row() -> MarqueeOptions {
        Self::from_config(&MarqueeConfig::leftward_row())
    }

    #[wasm_bindgen(js_name = rightwardRow)]
    pub fn rightward_row() -> MarqueeOptions {
        Self::from_config(&MarqueeConfig::rightward_row())
    }
}

impl MarqueeOptions {
    fn from_config(config: &MarqueeConfig) -> Self {
        Self::new(config.direction.sign() as i32, config.duration_secs)
    }

    fn to_config(self) -> MarqueeConfig {
        let direction = Direction::from_sign(self.direction).unwrap_or_else(|| {
            log::warn!("[marquee] direction 0 is not a direction; using leftward");
            Direction::Leftward
        });
        MarqueeConfig::new(direction, self.duration_secs).with_motion(dom::resolve_motion(
            self.reduced_motion,
            self.follow_system_motion,
        ))
    }
}

type Session = MarqueeSession<DomTrack, RafScheduler>;

fn on_measure_frame(session: &RefCell<Session>) {
    let outcome = with_timeline(|t| session.borrow_mut().on_frame(t));
    after_start(outcome);
}

fn restart(session: &RefCell<Session>, config: Option<MarqueeConfig>) {
    let outcome = with_timeline(|t| session.borrow_mut().restart(t, config));
    after_start(outcome);
}

fn after_start(outcome: Option<StartOutcome>) {
    if let Some(StartOutcome::Started { .. }) = outcome {
        timeline_loop::ensure_running();
    }
}

/// A running (or pending) marquee. Dropping it (or `free()` from JS) stops it.
#[wasm_bindgen]
pub struct MarqueeHandle {
    session: Rc<RefCell<Session>>,
    callback: FrameCallback,
    resize: Option<ListenerGuard>,
}

#[wasm_bindgen]
impl MarqueeHandle {
    /// Re-measure and restart, optionally with new options.
    pub fn restart(&self, options: Option<MarqueeOptions>) {
        restart(&self.session, options.map(MarqueeOptions::to_config));
    }

    /// Cancel the tween and any pending measurement. The strip keeps its last offset.
    pub fn stop(&mut self) {
        with_timeline(|t| self.session.borrow_mut().stop(t));
        timeline_loop::halt_if_idle();
        self.resize = None;
        frame::release(&self.callback);
    }

    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool {
        let id = self.session.borrow().id();
        with_timeline(|t| t.is_live(id))
    }
}

impl Drop for MarqueeHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[wasm_bindgen(js_name = startMarquee)]
pub fn start_marquee(track: web::HtmlElement, options: Option<MarqueeOptions>) -> MarqueeHandle {
    let config = options
        .unwrap_or_else(MarqueeOptions::leftward_row)
        .to_config();
    let id = with_timeline(|t| t.allocate_id());
    let callback = frame::empty_callback();
    let reduced = config.motion.is_reduced();
    let session = Rc::new(RefCell::new(MarqueeSession::new(
        id,
        DomTrack { element: track },
        config,
        RafScheduler::new(callback.clone()),
    )));

    // installed even for a static strip: a later restart may switch motion on
    {
        let session = session.clone();
        frame::install(&callback, move || on_measure_frame(&session));
    }
    if reduced {
        let _ = with_timeline(|t| session.borrow_mut().try_start(t));
    } else {
        let session = session.clone();
        spawn_local(async move {
            dom::fonts_ready().await;
            session.borrow_mut().begin_measuring(false);
        });
    }
    let resize = {
        let session = session.clone();
        dom::on_window_resize(move || restart(&session, None))
    };

    MarqueeHandle {
        session,
        callback,
        resize,
    }
}
