use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, ColorStops, Rgb8};
use crate::foundation::error::{RibbonError, RibbonResult};
use crate::noise::simplex::NoiseField;
use crate::render::grain::GrainSource;
use crate::render::params::RenderParameters;
use crate::render::pipeline::RenderThreading;
use crate::render::session::RenderSession;

const DEFAULT_COLORS: [&str; 4] = ["#0b1d51", "#725cff", "#ff8fb1", "#ffe3a3"];

/// Host-facing configuration, loaded from JSON.
///
/// Colors stay as strings until [`RibbonConfig::validate`] so malformed values surface as
/// [`RibbonError::InvalidColorFormat`] rather than as a generic parse error.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RibbonConfig {
    /// Gradient stops as `#RRGGBB` strings, in order.
    pub colors: Vec<String>,
    /// Ribbon color as `#RRGGBB`.
    pub ribbon_color: String,
    /// Grain amount; clamped to `[0, 1]`.
    #[serde(default)]
    pub grain: f32,
    /// Enables the glass stripe pass.
    #[serde(default)]
    pub vertical_stripes: bool,
    /// On-screen width in pixels.
    pub width: u32,
    /// On-screen height in pixels.
    pub height: u32,
    /// Noise seed; a random pattern is chosen when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Grain seed; grain is drawn from OS entropy when absent.
    #[serde(default)]
    pub grain_seed: Option<u64>,
    /// Render rows and stripes in parallel.
    #[serde(default)]
    pub parallel: bool,
    /// Worker thread count for parallel renders.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|s| (*s).to_owned()).collect(),
            ribbon_color: "#ffffff".to_owned(),
            grain: 0.12,
            vertical_stripes: true,
            width: 1920,
            height: 1080,
            seed: None,
            grain_seed: None,
            parallel: true,
            threads: None,
        }
    }
}

impl RibbonConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> RibbonResult<Self> {
        serde_json::from_str(s).map_err(|e| RibbonError::serde(e.to_string()))
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: &Path) -> RibbonResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Check the configuration and return the parsed stops and parameters.
    pub fn validate(&self) -> RibbonResult<(ColorStops, RenderParameters)> {
        if self.colors.is_empty() {
            return Err(RibbonError::validation(
                "config 'colors' must contain at least one color",
            ));
        }
        if let Some(0) = self.threads {
            return Err(RibbonError::validation(
                "config 'threads' must be >= 1 when set",
            ));
        }
        let stops = ColorStops::from_hex(&self.colors)?;
        let ribbon = Rgb8::from_hex(&self.ribbon_color)?;
        let params = RenderParameters::new(Canvas::new(self.width, self.height), ribbon)
            .with_grain(self.grain)
            .with_vertical_stripes(self.vertical_stripes);
        Ok((stops, params))
    }

    /// Grain source implied by `grain_seed`.
    pub fn grain_source(&self) -> GrainSource {
        self.grain_seed.map_or(GrainSource::Entropy, GrainSource::Seeded)
    }

    /// Build a ready-to-render session.
    pub fn build_session(&self) -> RibbonResult<RenderSession> {
        let (stops, params) = self.validate()?;
        let noise = match self.seed {
            Some(seed) => NoiseField::from_seed(seed),
            None => NoiseField::from_entropy(),
        };
        RenderSession::new(stops, params, noise)?
            .with_grain_source(self.grain_source())
            .with_threading(RenderThreading {
                parallel: self.parallel,
                threads: self.threads,
            })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
