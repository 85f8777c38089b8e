use std::f32::consts::PI;

pub(crate) const TAU: f32 = 2.0 * PI;

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub(crate) fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Round and saturate a float channel into `0..=255`.
#[inline]
pub(crate) fn channel_u8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Gaussian falloff `exp(-(x * k)^2)`.
#[inline]
pub(crate) fn gauss(x: f32, k: f32) -> f32 {
    let v = x * k;
    (-v * v).exp()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
