use rayon::prelude::*;

use crate::field::background::{background_color, gradient_t};
use crate::field::compose::compose_ribbon;
use crate::field::ribbon::ribbon_sample;
use crate::foundation::core::{ColorStops, FrameRGBA};
use crate::foundation::error::RibbonResult;
use crate::noise::simplex::NoiseField;
use crate::render::cancel::RenderTicket;
use crate::render::params::RenderParameters;

pub(crate) struct BaseInputs<'a> {
    pub(crate) stops: &'a ColorStops,
    pub(crate) params: &'a RenderParameters,
    pub(crate) noise: &'a NoiseField,
    pub(crate) ticket: Option<&'a RenderTicket>,
}

/// Gradient, ribbon and highlight for every pixel of `frame`. Rows are independent.
pub(crate) fn render_base(
    frame: &mut FrameRGBA,
    inputs: &BaseInputs<'_>,
    parallel: bool,
) -> RibbonResult<()> {
    let row_len = frame.width as usize * 4;
    let shade = |(y, row): (usize, &mut [u8])| -> RibbonResult<()> {
        if let Some(ticket) = inputs.ticket {
            ticket.check()?;
        }
        shade_row(row, y as u32, inputs);
        Ok(())
    };

    if parallel {
        frame
            .data
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .try_for_each(shade)
    } else {
        frame
            .data
            .chunks_exact_mut(row_len)
            .enumerate()
            .try_for_each(shade)
    }
}

fn shade_row(row: &mut [u8], y: u32, inputs: &BaseInputs<'_>) {
    let canvas = inputs.params.canvas;
    let ny = y as f32 / canvas.height as f32;
    let stops = inputs.stops.as_slice();
    let ribbon = inputs.params.ribbon_color;

    for (x, px) in row.chunks_exact_mut(4).enumerate() {
        let nx = x as f32 / canvas.width as f32;
        let sample = ribbon_sample(inputs.noise, nx, ny);
        let grad_t = gradient_t(canvas, x as f32, y as f32, sample.diag);
        let bg = background_color(stops, grad_t);
        let out = compose_ribbon(bg, ribbon, &sample, nx, ny, grad_t);
        px.copy_from_slice(&[out.r, out.g, out.b, 255]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/base.rs"]
mod tests;
