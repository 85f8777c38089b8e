use std::f32::consts::PI;

use rayon::prelude::*;

use crate::effects::blur::box_blur_row_span;
use crate::effects::composite::{Rgba8, brightness, mix_rgb};
use crate::foundation::core::FrameRGBA;
use crate::foundation::error::{RibbonError, RibbonResult};
use crate::foundation::math::gauss;
use crate::render::params::STRIPE_COUNT;

const GAP_RATIO: f32 = 0.18;
const MIN_GAP: u32 = 2;
const GAP_BLUR_MIX: f32 = 0.7;
const SOFTNESS_RATIO: f32 = 0.09;
const SHIFT_RATIO: f32 = 0.22;
const REFLECT_ZONE: f32 = 0.18;
const REFLECT_REACH: f32 = 0.7;
const REFLECT_STRENGTH: f32 = 0.55;
const ALPHA_BASE: f32 = 0.32;
const ALPHA_DARK_BOOST: f32 = 0.32;

/// Column layout of one glass stripe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripeGeometry {
    /// Stripe index, `0..STRIPE_COUNT`.
    pub index: u32,
    /// First column (inclusive).
    pub x_start: u32,
    /// Last column (exclusive).
    pub x_end: u32,
    /// Nominal stripe width, `frame width / STRIPE_COUNT`.
    pub stripe_width: f32,
    /// Boundary gap width, also the box blur radius. The gap occupies the stripe's rightmost
    /// columns, so the last stripe carries one at the frame's right edge and stripe 0 has none on
    /// its left.
    pub gap: u32,
}

impl StripeGeometry {
    /// Partition `width` columns into [`STRIPE_COUNT`] stripes. Stripes that round to zero
    /// columns (frames narrower than the stripe count) are omitted.
    pub fn layout(width: u32) -> Vec<Self> {
        let stripe_width = width as f32 / STRIPE_COUNT as f32;
        let gap = ((stripe_width * GAP_RATIO).round() as u32).max(MIN_GAP);
        (0..STRIPE_COUNT)
            .filter_map(|index| {
                let x_start = ((index as f32 * stripe_width).round() as u32).min(width);
                let x_end = (((index + 1) as f32 * stripe_width).round() as u32).min(width);
                (x_end > x_start).then_some(Self {
                    index,
                    x_start,
                    x_end,
                    stripe_width,
                    gap,
                })
            })
            .collect()
    }

    /// Number of columns covered.
    pub fn len(&self) -> u32 {
        self.x_end - self.x_start
    }

    /// Whether the stripe covers no columns.
    pub fn is_empty(&self) -> bool {
        self.x_end <= self.x_start
    }

    /// Horizontal center of the stripe.
    pub fn center(&self) -> f32 {
        (self.x_start + self.x_end) as f32 / 2.0
    }

    /// First column of the trailing boundary gap. Every stripe, the last included, owns the gap on
    /// its right edge; the leading edge is always interior band.
    pub fn gap_start(&self) -> u32 {
        self.x_end - self.gap.min(self.len())
    }

    fn column_warps(&self, frame_width: u32) -> Vec<ColumnWarp> {
        let sw = self.stripe_width;
        let softness = SOFTNESS_RATIO * sw;
        let span = self.len() as f32;
        let last = frame_width.saturating_sub(1) as f32;
        let clamp_col = |v: f32| v.round().clamp(0.0, last) as usize;

        (self.x_start..self.x_end)
            .map(|x| {
                let xf = x as f32;
                let dist = (xf - self.center()).abs();
                let edge_alpha = if softness > 0.0 {
                    gauss(dist / softness, 1.0)
                } else {
                    0.0
                };
                let shift =
                    (PI * (xf - self.x_start as f32) / span).sin() * SHIFT_RATIO * sw * edge_alpha;

                let from_start = xf - self.x_start as f32;
                let from_end = self.x_end as f32 - xf;
                let reflect_src = if from_start < REFLECT_ZONE * sw {
                    Some(xf + REFLECT_REACH * sw)
                } else if from_end < REFLECT_ZONE * sw {
                    Some(xf - REFLECT_REACH * sw)
                } else {
                    None
                };
                let reflect = reflect_src.map(|rx| {
                    let strength =
                        (1.0 - dist / (0.5 * sw)).max(0.0) * edge_alpha * REFLECT_STRENGTH;
                    (clamp_col(rx), strength)
                });

                ColumnWarp {
                    src_x: clamp_col(xf + shift),
                    reflect,
                    edge_alpha,
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
struct ColumnWarp {
    src_x: usize,
    reflect: Option<(usize, f32)>,
    edge_alpha: f32,
}

/// Render one stripe purely from `snapshot`.
///
/// Returns a tile of `stripe.len() x snapshot.height` RGBA8 pixels, row-major. Gap columns are a
/// 30/70 mix of the source and its box blur, interior columns are fully blurred; the displaced
/// (and near the edges, reflected) sample is then composited over that blurred background with a
/// brightness-adaptive alpha.
pub fn render_stripe_tile(snapshot: &FrameRGBA, stripe: &StripeGeometry) -> RibbonResult<Vec<u8>> {
    if stripe.is_empty() || stripe.x_end > snapshot.width {
        return Err(RibbonError::render("stripe outside of frame columns"));
    }

    let row_len = snapshot.width as usize * 4;
    let radius = stripe.gap as usize;
    let x_start = stripe.x_start as usize;
    let gap_start = stripe.gap_start() as usize;
    let x_end = stripe.x_end as usize;
    let warps = stripe.column_warps(snapshot.width);

    let mut tile = Vec::with_capacity(stripe.len() as usize * snapshot.height as usize * 4);
    for row in snapshot.data.chunks_exact(row_len) {
        let band = box_blur_row_span(row, x_start..gap_start, radius)?;
        let gap = box_blur_row_span(row, gap_start..x_end, radius)?;

        for (i, warp) in warps.iter().enumerate() {
            let x = x_start + i;
            let bg = if x < gap_start {
                read_px(&band, i)
            } else {
                mix_rgb(read_px(row, x), read_px(&gap, x - gap_start), GAP_BLUR_MIX)
            };

            let displaced = read_px(row, warp.src_x);
            let sampled = match warp.reflect {
                Some((rx, strength)) => mix_rgb(displaced, read_px(row, rx), strength),
                None => displaced,
            };

            let alpha =
                warp.edge_alpha * (ALPHA_BASE + ALPHA_DARK_BOOST * (1.0 - brightness(sampled)));
            tile.extend_from_slice(&mix_rgb(bg, sampled, alpha));
        }
    }
    Ok(tile)
}

/// Run the glass stripe pass.
///
/// `snapshot` is the finished base frame and is only ever read; the distorted frame is returned as
/// a new buffer. Every stripe is rendered into its own tile, optionally in parallel on the current
/// rayon pool, and the tiles are then written into the working copy.
#[tracing::instrument(skip(snapshot), fields(width = snapshot.width, height = snapshot.height))]
pub fn apply_glass_stripes(snapshot: &FrameRGBA, parallel: bool) -> RibbonResult<FrameRGBA> {
    let expected = snapshot.canvas().rgba_len()?;
    if snapshot.data.len() != expected {
        return Err(RibbonError::render(
            "apply_glass_stripes expects data matching width*height*4",
        ));
    }

    let stripes = StripeGeometry::layout(snapshot.width);
    let tiles = if parallel {
        stripes
            .par_iter()
            .map(|s| render_stripe_tile(snapshot, s))
            .collect::<Vec<_>>()
    } else {
        stripes
            .iter()
            .map(|s| render_stripe_tile(snapshot, s))
            .collect::<Vec<_>>()
    };

    let mut working = snapshot.clone();
    let row_len = snapshot.width as usize * 4;
    for (stripe, tile) in stripes.iter().zip(tiles) {
        let tile = tile?;
        let tile_row = stripe.len() as usize * 4;
        let offset = stripe.x_start as usize * 4;
        for (dst_row, src_row) in working
            .data
            .chunks_exact_mut(row_len)
            .zip(tile.chunks_exact(tile_row))
        {
            dst_row[offset..offset + tile_row].copy_from_slice(src_row);
        }
    }
    Ok(working)
}

#[inline]
fn read_px(row: &[u8], x: usize) -> Rgba8 {
    let i = x * 4;
    [row[i], row[i + 1], row[i + 2], row[i + 3]]
}

#[cfg(test)]
#[path = "../../tests/unit/render/stripes.rs"]
mod tests;
