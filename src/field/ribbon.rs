use std::f32::consts::PI;

use crate::noise::simplex::NoiseField;

const MAIN_SWAY: f32 = 0.06;
const MAIN_NOISE: f32 = 0.1;
const MAIN_SHARPNESS: f32 = 32.0;
const BRANCH_SWAY: f32 = 0.08;
const BRANCH_NOISE: f32 = 0.05;
const BRANCH_SHARPNESS: f32 = 40.0;
const BRANCH_WEIGHT: f32 = 0.7;
const BRANCHES: [f32; 2] = [1.0, 2.0];

/// Ribbon field values for one normalized pixel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonSample {
    /// Diagonal coordinate `(nx + (1 - ny)) / 2`.
    pub diag: f32,
    /// Distance from the main ribbon's center line.
    pub main_dist: f32,
    /// How strongly the ribbon (main band plus branches) covers this pixel, in `[0, 1]`.
    pub occupancy: f32,
}

/// Evaluate the ribbon occupancy field at `(nx, ny)` in `[0, 1]^2`.
///
/// The main ribbon is the zero set of `diag - curve` turned into a soft band; two branches follow
/// the main curve with their own sway and noise offset.
pub fn ribbon_sample(noise: &NoiseField, nx: f32, ny: f32) -> RibbonSample {
    let diag = (nx + (1.0 - ny)) / 2.0;

    let main_curve =
        diag + MAIN_SWAY * (ny * PI * 1.2).sin() + MAIN_NOISE * noise.sample(nx * 2.0, ny * 2.0);
    let main_dist = (diag - main_curve).abs();
    let main_band = (-main_dist * MAIN_SHARPNESS).exp();

    let mut branch_band = 0.0;
    for b in BRANCHES {
        let phase = b * 1.2;
        let branch_curve = main_curve
            + BRANCH_SWAY * (ny * PI * (1.1 + 0.2 * b) + phase).sin()
            + BRANCH_NOISE * noise.sample(nx * 3.0 + phase * 10.0, ny * 3.0 + phase * 10.0);
        let branch_dist = (diag - branch_curve).abs();
        branch_band += (-branch_dist * BRANCH_SHARPNESS).exp() * BRANCH_WEIGHT;
    }

    RibbonSample {
        diag,
        main_dist,
        occupancy: (main_band + branch_band).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/ribbon.rs"]
mod tests;
