use std::ops::Range;

use crate::foundation::error::{RibbonError, RibbonResult};

/// Horizontal box blur of one RGBA8 row, evaluated only for the columns in `span`.
///
/// Each output pixel is the unweighted mean of the `2 * radius + 1` pixels centered on it, with
/// reads past either end of the row clamped to the edge pixel. Returns `span.len() * 4` bytes.
pub fn box_blur_row_span(row: &[u8], span: Range<usize>, radius: usize) -> RibbonResult<Vec<u8>> {
    if !row.len().is_multiple_of(4) {
        return Err(RibbonError::render(
            "box_blur_row_span expects an rgba8 row",
        ));
    }
    let width = row.len() / 4;
    if span.start > span.end || span.end > width {
        return Err(RibbonError::render("box blur span out of row bounds"));
    }

    let mut out = Vec::with_capacity(span.len() * 4);
    if radius == 0 {
        out.extend_from_slice(&row[span.start * 4..span.end * 4]);
        return Ok(out);
    }

    let taps = (2 * radius + 1) as u32;
    let last = width as isize - 1;
    let r = radius as isize;
    for x in span {
        let mut acc = [0u32; 4];
        for dx in -r..=r {
            let sx = (x as isize + dx).clamp(0, last) as usize;
            let idx = sx * 4;
            for (a, &v) in acc.iter_mut().zip(&row[idx..idx + 4]) {
                *a += u32::from(v);
            }
        }
        for a in acc {
            out.push(((a + taps / 2) / taps).min(255) as u8);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
