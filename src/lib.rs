//! Fluid Ribbon renders a generative gradient image: a multi-stop color gradient overlaid with an
//! organic, noise-perturbed ribbon, an optional ribbed-glass stripe distortion, and grain.
//!
//! # Pipeline overview
//!
//! 1. **Base**: for every pixel, sample the ribbon field ([`ribbon_sample`]), pick the background
//!    color from the gradient ([`background_color`]) and blend the ribbon over it
//!    ([`compose_ribbon`]). Grain deltas are drawn into a [`GrainField`] but not applied yet.
//! 2. **Stripes** (optional): snapshot the base frame and run the glass stripe pass
//!    ([`apply_glass_stripes`]) reading only from that snapshot.
//! 3. **Grain**: add the buffered grain deltas last so grain is never blurred or displaced.
//!
//! The entry point for hosts is [`RenderSession`], which owns the [`NoiseField`] for the lifetime
//! of a pattern and exposes [`RenderSession::render`] and [`RenderSession::export_at`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a fixed noise seed and a seeded [`GrainSource`] produce
//!   byte-identical frames, with or without parallel rendering.
//! - **Straight, opaque RGBA8** output: alpha is 255 everywhere.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod color;
mod config;
mod effects;
mod field;
mod foundation;
mod noise;
mod render;

pub use color::gradient::{GLOW_BACKGROUND, interpolate};
pub use color::hex::parse_hex;
pub use config::RibbonConfig;
pub use effects::blur::box_blur_row_span;
pub use effects::composite::{lerp_rgb, mix_rgb};
pub use field::background::{background_color, gradient_t};
pub use field::compose::compose_ribbon;
pub use field::ribbon::{RibbonSample, ribbon_sample};
pub use foundation::core::{Canvas, ColorStops, FrameRGBA, Rgb8};
pub use foundation::error::{RibbonError, RibbonResult};
pub use noise::simplex::NoiseField;
pub use render::cancel::{CancelHandle, RenderTicket};
pub use render::grain::{GrainField, GrainSource};
pub use render::params::{RenderParameters, STRIPE_COUNT};
pub use render::pipeline::{RenderThreading, render_frame};
pub use render::session::{ExportMode, RenderSession};
pub use render::stripes::{StripeGeometry, apply_glass_stripes, render_stripe_tile};
