use crate::foundation::core::Rgb8;
use crate::foundation::math::{channel_u8, clamp01, gauss, lerp};

/// Glow used when sampling the background gradient.
pub const GLOW_BACKGROUND: f32 = 0.18;

/// Sample a multi-stop gradient at `t` with a brightness flare at each segment's midpoint.
///
/// - no stops: black
/// - one stop: that stop, glow ignored
/// - otherwise: linear blend inside the segment `t` falls in, plus
///   `exp(-((fraction - 0.5) * 4)^2) * glow * 255` on every channel
///
/// `t` and `glow` are clamped to `[0, 1]`.
pub fn interpolate(colors: &[Rgb8], t: f32, glow: f32) -> Rgb8 {
    match colors {
        [] => Rgb8::BLACK,
        [only] => *only,
        _ => {
            let t = clamp01(t);
            let glow = clamp01(glow);
            let last_segment = colors.len() - 2;

            let position = t * (colors.len() - 1) as f32;
            let segment = (position.floor().max(0.0) as usize).min(last_segment);
            let fraction = clamp01(position - segment as f32);

            let a = colors[segment].to_f32();
            let b = colors[segment + 1].to_f32();
            let bump = gauss(fraction - 0.5, 4.0) * glow * 255.0;

            Rgb8::new(
                channel_u8(lerp(a[0], b[0], fraction) + bump),
                channel_u8(lerp(a[1], b[1], fraction) + bump),
                channel_u8(lerp(a[2], b[2], fraction) + bump),
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/gradient.rs"]
mod tests;
