#![cfg(target_arch = "wasm32")]
//! Browser front-end: mounts the ambient canvas effects and seamless
//! marquees from `ambient-core` onto host-page elements.

use wasm_bindgen::prelude::*;

mod canvas;
mod dom;
mod frame;
mod marquee;
mod surface;
mod timeline_loop;

pub use canvas::{
    mount_ambient_dust, mount_particle_field, CanvasEffectHandle, DustOptions,
    ParticleFieldOptions,
};
pub use marquee::{start_marquee, MarqueeHandle, MarqueeOptions};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web ready");
    Ok(())
}
