use crate::foundation::core::{Canvas, Rgb8};

/// Number of vertical glass stripes the frame is partitioned into.
pub const STRIPE_COUNT: u32 = 28;

/// Parameter snapshot consumed by one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParameters {
    /// Color blended in where the ribbon covers the frame.
    pub ribbon_color: Rgb8,
    /// Enables the glass stripe pass.
    pub vertical_stripes: bool,
    /// Output dimensions.
    pub canvas: Canvas,
    grain_amount: f32,
}

impl RenderParameters {
    /// Parameters with grain off and stripes off.
    pub fn new(canvas: Canvas, ribbon_color: Rgb8) -> Self {
        Self {
            ribbon_color,
            vertical_stripes: false,
            canvas,
            grain_amount: 0.0,
        }
    }

    /// Set the grain amount. Values are clamped to `[0, 1]`; non-finite values become 0.
    pub fn with_grain(mut self, amount: f32) -> Self {
        self.set_grain(amount);
        self
    }

    /// Toggle the glass stripe pass.
    pub fn with_vertical_stripes(mut self, enabled: bool) -> Self {
        self.vertical_stripes = enabled;
        self
    }

    /// Replace the output dimensions.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// In-place variant of [`RenderParameters::with_grain`].
    pub fn set_grain(&mut self, amount: f32) {
        self.grain_amount = if amount.is_finite() {
            amount.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Grain amount in `[0, 1]`.
    pub fn grain_amount(&self) -> f32 {
        self.grain_amount
    }

    /// Number of glass stripes; always [`STRIPE_COUNT`].
    pub fn stripe_count(&self) -> u32 {
        STRIPE_COUNT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/params.rs"]
mod tests;
