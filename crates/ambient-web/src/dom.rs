use ambient_core::Motion;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|dpr| *dpr > 0.0)
        .unwrap_or(1.0)
}

pub fn window_inner_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(read(w.inner_width()), read(w.inner_height()))
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Explicit host flag wins; otherwise optionally follow the system setting.
pub fn resolve_motion(reduced_motion: bool, follow_system: bool) -> Motion {
    Motion::from_reduced(reduced_motion || (follow_system && prefers_reduced_motion()))
}

/// Resolves once web fonts have loaded. Returns immediately where the
/// font loading API is missing.
pub async fn fonts_ready() {
    let Some(document) = window_document() else {
        return;
    };
    match document.fonts().ready() {
        Ok(promise) => {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("fonts.ready rejected: {:?}", e);
            }
        }
        Err(e) => log::debug!("fonts.ready unavailable: {:?}", e),
    }
}

/// Event listener that is removed again when dropped.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn on_window_resize(handler: impl FnMut() + 'static) -> Option<ListenerGuard> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let target: web::EventTarget = window.into();
    if let Err(e) =
        target.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::warn!("resize listener not registered: {:?}", e);
        return None;
    }
    Some(ListenerGuard {
        target,
        event: "resize",
        closure,
    })
}
