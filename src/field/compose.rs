use crate::effects::composite::lerp_rgb;
use crate::field::ribbon::RibbonSample;
use crate::foundation::core::Rgb8;
use crate::foundation::math::{TAU, channel_u8, clamp01, gauss};

const FADE_SHARPNESS: f32 = 12.0;
const HIGHLIGHT_ROW: f32 = 0.18;
const HIGHLIGHT_STRENGTH: f32 = 28.0;

/// Blend the ribbon color into the background.
///
/// Occupancy drives the ribbon/background mix. The outer fade uses only the main ribbon distance,
/// so branches keep full strength while the main ribbon's edge fades out. A rim highlight near the
/// top of the frame is added where occupancy is nonzero.
pub fn compose_ribbon(
    bg: Rgb8,
    ribbon: Rgb8,
    sample: &RibbonSample,
    nx: f32,
    ny: f32,
    grad_t: f32,
) -> Rgb8 {
    let occupancy = clamp01(sample.occupancy);
    let blended = lerp_rgb(bg.to_f32(), ribbon.to_f32(), occupancy);
    let fade = clamp01((-sample.main_dist * FADE_SHARPNESS).exp());
    let out = lerp_rgb(bg.to_f32(), blended, fade);

    let highlight = gauss(ny - HIGHLIGHT_ROW, 3.0)
        * (nx * TAU + grad_t * 2.0).sin().abs()
        * HIGHLIGHT_STRENGTH
        * occupancy;

    Rgb8::new(
        channel_u8(out[0] + highlight),
        channel_u8(out[1] + highlight),
        channel_u8(out[2] + highlight),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/field/compose.rs"]
mod tests;
