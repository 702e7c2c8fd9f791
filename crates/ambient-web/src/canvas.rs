//! Mounting canvas effects (particle field, ambient dust) onto host canvases.

use crate::dom::{self, ListenerGuard};
use crate::frame::{self, FrameCallback, RafScheduler};
use crate::surface::CanvasSurface;
use ambient_core::constants::*;
use ambient_core::geometry::Span;
use ambient_core::{
    AmbientError, DustConfig, DustField, Effect, Motion, ParticleField, ParticleFieldConfig, Rgb,
    SurfaceEngine,
};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Object-safe view of a mounted engine, whatever its effect type.
trait MountedEffect {
    fn frame(&mut self, dt: Duration);
    fn resize(&mut self);
    fn unmount(&mut self);
    fn is_running(&self) -> bool;
}

impl<E: Effect> MountedEffect for SurfaceEngine<E, CanvasSurface, RafScheduler> {
    fn frame(&mut self, dt: Duration) {
        SurfaceEngine::frame(self, dt);
    }

    fn resize(&mut self) {
        SurfaceEngine::resize(self);
    }

    fn unmount(&mut self) {
        SurfaceEngine::unmount(self);
    }

    fn is_running(&self) -> bool {
        SurfaceEngine::is_running(self)
    }
}

type Slot = Rc<RefCell<Option<Box<dyn MountedEffect>>>>;

/// A mounted canvas effect. Dropping it (or `free()` from JS) unmounts.
#[wasm_bindgen]
pub struct CanvasEffectHandle {
    slot: Slot,
    callback: FrameCallback,
    resize: Option<ListenerGuard>,
}

#[wasm_bindgen]
impl CanvasEffectHandle {
    /// Re-sync the canvas backing store with its CSS size.
    pub fn resize(&self) {
        if let Some(fx) = self.slot.borrow_mut().as_mut() {
            fx.resize();
        }
    }

    /// Stop drawing and detach listeners. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(mut fx) = self.slot.borrow_mut().take() {
            fx.unmount();
        }
        self.resize = None;
        frame::release(&self.callback);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.slot
            .borrow()
            .as_ref()
            .map(|fx| fx.is_running())
            .unwrap_or(false)
    }
}

impl CanvasEffectHandle {
    fn inert() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            callback: frame::empty_callback(),
            resize: None,
        }
    }
}

impl Drop for CanvasEffectHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn mount_effect<E: Effect + 'static>(
    canvas: web::HtmlCanvasElement,
    motion: Motion,
    build: impl FnOnce(Vec2) -> Result<E, AmbientError>,
) -> CanvasEffectHandle {
    let surface = match CanvasSurface::acquire(canvas) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[canvas] {}: {:?}", AmbientError::SurfaceUnavailable, e);
            return CanvasEffectHandle::inert();
        }
    };

    let slot: Slot = Rc::new(RefCell::new(None));
    let callback = frame::empty_callback();
    {
        let slot = slot.clone();
        let mut last = Instant::now();
        frame::install(&callback, move || {
            let now = Instant::now();
            let dt = now - last;
            last = now;
            if let Some(fx) = slot.borrow_mut().as_mut() {
                fx.frame(dt);
            }
        });
    }

    let engine = match SurfaceEngine::mount(
        surface,
        RafScheduler::new(callback.clone()),
        motion,
        build,
    ) {
        Ok(engine) => engine,
        Err(e) => {
            log::warn!("[canvas] effect not mounted: {}", e);
            frame::release(&callback);
            return CanvasEffectHandle::inert();
        }
    };
    *slot.borrow_mut() = Some(Box::new(engine));

    let resize = {
        let slot = slot.clone();
        dom::on_window_resize(move || {
            if let Some(fx) = slot.borrow_mut().as_mut() {
                fx.resize();
            }
        })
    };

    CanvasEffectHandle {
        slot,
        callback,
        resize,
    }
}

/// Options for `mountParticleField`. Defaults reproduce the brand-orange hero effect.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct ParticleFieldOptions {
    pub count: u32,
    /// Max per-axis speed in px per frame.
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Packed `0xRRGGBB`.
    pub color: u32,
    pub reduced_motion: bool,
    pub follow_system_motion: bool,
}

#[wasm_bindgen]
impl ParticleFieldOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ParticleFieldOptions {
        Self::default()
    }
}

impl Default for ParticleFieldOptions {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT as u32,
            speed: PARTICLE_SPEED_MAX,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            opacity_min: PARTICLE_OPACITY_MIN,
            opacity_max: PARTICLE_OPACITY_MAX,
            color: Rgb(BRAND_RGB).to_hex(),
            reduced_motion: false,
            follow_system_motion: true,
        }
    }
}

impl ParticleFieldOptions {
    fn to_config(self) -> ParticleFieldConfig {
        ParticleFieldConfig {
            count: self.count as usize,
            speed: Span::symmetric(self.speed.abs()),
            radius: Span::new(self.radius_min, self.radius_max),
            opacity: Span::new(self.opacity_min, self.opacity_max),
            color: Rgb::from_hex(self.color),
            motion: dom::resolve_motion(self.reduced_motion, self.follow_system_motion),
        }
    }
}

#[wasm_bindgen(js_name = mountParticleField)]
pub fn mount_particle_field(
    canvas: web::HtmlCanvasElement,
    options: Option<ParticleFieldOptions>,
) -> CanvasEffectHandle {
    let config = options.unwrap_or_default().to_config();
    log::debug!("[particles] mount count={} motion={:?}", config.count, config.motion);
    mount_effect(canvas, config.motion, move |bounds| {
        ParticleField::new(&config, bounds, &mut rand::thread_rng())
    })
}

/// Options for `mountAmbientDust`.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct DustOptions {
    pub count: u32,
    pub reduced_motion: bool,
    pub follow_system_motion: bool,
}

#[wasm_bindgen]
impl DustOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DustOptions {
        Self::default()
    }
}

impl Default for DustOptions {
    fn default() -> Self {
        Self {
            count: DUST_COUNT as u32,
            reduced_motion: false,
            follow_system_motion: true,
        }
    }
}

impl DustOptions {
    fn to_config(self) -> DustConfig {
        DustConfig {
            count: self.count as usize,
            motion: dom::resolve_motion(self.reduced_motion, self.follow_system_motion),
            ..DustConfig::default()
        }
    }
}

#[wasm_bindgen(js_name = mountAmbientDust)]
pub fn mount_ambient_dust(
    canvas: web::HtmlCanvasElement,
    options: Option<DustOptions>,
) -> CanvasEffectHandle {
    let config = options.unwrap_or_default().to_config();
    mount_effect(canvas, config.motion, move |bounds| {
        DustField::new(&config, bounds, &mut rand::thread_rng())
    })
}
