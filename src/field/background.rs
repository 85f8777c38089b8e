use crate::color::gradient::{GLOW_BACKGROUND, interpolate};
use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::math::clamp01;

/// Gradient parameter for pixel `(x, y)`: 70% diagonal position, 30% normalized distance from the
/// frame center (0 at the center, 1 at a corner).
pub fn gradient_t(canvas: Canvas, x: f32, y: f32, diag: f32) -> f32 {
    let cx = canvas.width as f32 / 2.0;
    let cy = canvas.height as f32 / 2.0;
    let corner = cx.hypot(cy);
    let radius = if corner > 0.0 {
        (x - cx).hypot(y - cy) / corner
    } else {
        0.0
    };
    clamp01(diag * 0.7 + radius * 0.3)
}

/// Background color at gradient parameter `grad_t`.
pub fn background_color(stops: &[Rgb8], grad_t: f32) -> Rgb8 {
    interpolate(stops, grad_t, GLOW_BACKGROUND)
}

#[cfg(test)]
#[path = "../../tests/unit/field/background.rs"]
mod tests;
