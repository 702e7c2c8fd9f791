use crate::dom;
use ambient_core::{CanvasLayout, Rgba, Surface2d};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface2d` over a `<canvas>` 2D context, drawn in CSS pixels and sized
/// to the canvas's parent element (the window when detached).
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface2d for CanvasSurface {
    fn logical_size(&self) -> Vec2 {
        if let Some(parent) = self.canvas.parent_element() {
            let rect = parent.get_bounding_client_rect();
            return Vec2::new(rect.width() as f32, rect.height() as f32);
        }
        dom::window_inner_size()
    }

    fn sync_backing_size(&mut self) {
        let layout = CanvasLayout::for_container(self.logical_size(), dom::device_pixel_ratio());
        let style = self.canvas.style();
        let _ = style.set_property("width", &layout.css_width());
        let _ = style.set_property("height", &layout.css_height());
        self.canvas.set_width(layout.backing.width);
        self.canvas.set_height(layout.backing.height);
        // setting width/height resets the context, so the scale goes back on every time
        if let Err(e) = self
            .ctx
            .set_transform(layout.scale, 0.0, 0.0, layout.scale, 0.0, 0.0)
        {
            log::warn!("[canvas] set_transform error: {:?}", e);
        }
    }

    fn clear(&mut self) {
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }
}
