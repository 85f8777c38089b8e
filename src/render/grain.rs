use rand::rngs::StdRng;
use rand::{Rng, SeedableRng as _};

use crate::foundation::core::{Canvas, FrameRGBA};
use crate::foundation::error::{RibbonError, RibbonResult};
use crate::foundation::math::channel_u8;

const GRAIN_SCALE: f32 = 50.0;

/// Where grain randomness comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrainSource {
    /// Reseeded from the same value on every render, so repeated renders match byte for byte.
    Seeded(u64),
    /// Fresh OS entropy per render.
    #[default]
    Entropy,
}

impl GrainSource {
    pub(crate) fn rng(self) -> StdRng {
        match self {
            Self::Seeded(seed) => StdRng::seed_from_u64(seed),
            Self::Entropy => StdRng::from_entropy(),
        }
    }
}

/// Per-pixel grain deltas, drawn before the frame is finished and applied last.
///
/// The same delta is added to R, G and B of a pixel so grain stays monochromatic.
#[derive(Clone, Debug, PartialEq)]
pub struct GrainField {
    canvas: Canvas,
    deltas: Vec<f32>,
}

impl GrainField {
    /// A field that leaves every pixel untouched.
    pub fn none(canvas: Canvas) -> Self {
        Self {
            canvas,
            deltas: Vec::new(),
        }
    }

    /// Draw one delta per pixel in row-major order: `(u - 0.5) * amount * 50`, `u ~ U[0, 1)`.
    ///
    /// `amount` is clamped to `[0, 1]`; zero yields [`GrainField::none`] without touching `rng`.
    pub fn generate<R: Rng>(
        canvas: Canvas,
        amount: f32,
        rng: &mut R,
    ) -> RibbonResult<Self> {
        let amount = if amount.is_finite() {
            amount.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if amount <= 0.0 {
            return Ok(Self::none(canvas));
        }

        let count = canvas.rgba_len()? / 4;
        let deltas = (0..count)
            .map(|_| (rng.gen_range(0.0f32..1.0) - 0.5) * amount * GRAIN_SCALE)
            .collect();
        Ok(Self { canvas, deltas })
    }

    /// Whether applying this field is a no-op.
    pub fn is_noop(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Delta for pixel `(x, y)`; zero for a no-op field.
    pub fn delta(&self, x: u32, y: u32) -> f32 {
        let idx = (y as usize) * (self.canvas.width as usize) + (x as usize);
        self.deltas.get(idx).copied().unwrap_or(0.0)
    }

    /// Add the deltas to the color channels of `frame`; alpha is untouched.
    pub fn apply(&self, frame: &mut FrameRGBA) -> RibbonResult<()> {
        if self.is_noop() {
            return Ok(());
        }
        if frame.canvas() != self.canvas {
            return Err(RibbonError::render(
                "grain field dimensions do not match the frame",
            ));
        }
        for (px, &d) in frame.data.chunks_exact_mut(4).zip(&self.deltas) {
            for c in &mut px[..3] {
                *c = channel_u8(f32::from(*c) + d);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/grain.rs"]
mod tests;
