//! Drawing-surface abstraction implemented by the host (a 2D canvas on the web).

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// From a packed `0xRRGGBB` value.
    #[inline]
    pub fn from_hex(packed: u32) -> Self {
        Rgb([(packed >> 16) as u8, (packed >> 8) as u8, packed as u8])
    }

    #[inline]
    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.0;
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// CSS color string, e.g. `rgba(237,121,34,0.45)`.
    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb.0;
        format!("rgba({},{},{},{:.3})", r, g, b, self.alpha)
    }
}

/// A 2D surface the effects draw onto, in CSS (device-independent) pixels.
pub trait Surface2d {
    /// Current size of the container, read live on every call.
    fn logical_size(&self) -> Vec2;
    /// Resize the backing store to the container size times the device
    /// pixel ratio and re-apply the matching drawing scale.
    fn sync_backing_size(&mut self);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Backing-store pixel dimensions for a CSS size at a device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    pub fn from_css(css: Vec2, device_pixel_ratio: f64) -> Self {
        let dpr = sanitize_dpr(device_pixel_ratio);
        let w_px = (css.x.max(0.0) as f64 * dpr) as u32;
        let h_px = (css.y.max(0.0) as f64 * dpr) as u32;
        Self {
            width: w_px.max(1),
            height: h_px.max(1),
        }
    }
}

#[inline]
fn sanitize_dpr(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    }
}

/// What a canvas host writes so the canvas covers its container exactly.
///
/// The CSS size is pinned to the container, never derived from the canvas,
/// so the backing store can be any multiple of it without feeding back
/// into the next measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    pub css: Vec2,
    pub backing: BackingSize,
    /// Drawing scale mapping CSS pixels onto the backing store.
    pub scale: f64,
}

impl CanvasLayout {
    pub fn for_container(container: Vec2, device_pixel_ratio: f64) -> Self {
        let css = container.max(Vec2::ZERO);
        Self {
            css,
            backing: BackingSize::from_css(css, device_pixel_ratio),
            scale: sanitize_dpr(device_pixel_ratio),
        }
    }

    pub fn css_width(&self) -> String {
        format!("{}px", self.css.x)
    }

    pub fn css_height(&self) -> String {
        format!("{}px", self.css.y)
    }
}
