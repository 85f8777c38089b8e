use crate::foundation::math::{channel_u8, clamp01, lerp};

/// Straight RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Linear blend of two float RGB triples; `t` is clamped to `[0, 1]`.
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    let t = clamp01(t);
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

/// Blend `src` over `dst` with weight `t` on the color channels. The result is opaque.
pub fn mix_rgb(dst: Rgba8, src: Rgba8, t: f32) -> Rgba8 {
    let t = clamp01(t);
    if t <= 0.0 {
        return [dst[0], dst[1], dst[2], 255];
    }
    let mut out = [0u8, 0, 0, 255];
    for ((o, &d), &s) in out.iter_mut().zip(&dst[..3]).zip(&src[..3]) {
        *o = channel_u8(lerp(f32::from(d), f32::from(s), t));
    }
    out
}

/// Mean of the color channels, normalized to `[0, 1]`.
pub(crate) fn brightness(px: Rgba8) -> f32 {
    (f32::from(px[0]) + f32::from(px[1]) + f32::from(px[2])) / (3.0 * 255.0)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
