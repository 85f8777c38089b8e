use crate::foundation::core::{Canvas, ColorStops, FrameRGBA, Rgb8};
use crate::foundation::error::{RibbonError, RibbonResult};
use crate::noise::simplex::NoiseField;
use crate::render::cancel::{CancelHandle, RenderTicket};
use crate::render::grain::GrainSource;
use crate::render::params::RenderParameters;
use crate::render::pipeline::{FrameJob, RenderThreading, build_thread_pool, run_frame};

/// How [`RenderSession::export_at`] produces a frame at a size other than the on-screen one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportMode {
    /// Rerun the whole pipeline at the target size with the session's noise field.
    #[default]
    Resynthesize,
    /// Render at the on-screen size and resize the result.
    Rescale,
}

/// A rendering session: one noise pattern plus the current parameter snapshot.
///
/// The noise field is created once and reused for every render so the pattern stays stable across
/// parameter changes and animation ticks; [`RenderSession::new_pattern`] replaces it.
pub struct RenderSession {
    stops: ColorStops,
    params: RenderParameters,
    noise: NoiseField,
    grain: GrainSource,
    threading: RenderThreading,
    pool: Option<rayon::ThreadPool>,
    cancel: CancelHandle,
}

impl RenderSession {
    /// Start a session. At least one color stop is required.
    pub fn new(stops: ColorStops, params: RenderParameters, noise: NoiseField) -> RibbonResult<Self> {
        validate_stops(&stops)?;
        Ok(Self {
            stops,
            params,
            noise,
            grain: GrainSource::default(),
            threading: RenderThreading::default(),
            pool: None,
            cancel: CancelHandle::default(),
        })
    }

    /// Use `grain` as the grain randomness source.
    pub fn with_grain_source(mut self, grain: GrainSource) -> Self {
        self.grain = grain;
        self
    }

    /// Configure threading, building a dedicated rayon pool when parallel.
    pub fn with_threading(mut self, threading: RenderThreading) -> RibbonResult<Self> {
        self.pool = if threading.parallel {
            Some(build_thread_pool(threading.threads)?)
        } else {
            None
        };
        self.threading = threading;
        Ok(self)
    }

    /// Current parameters.
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    /// Current color stops.
    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    /// The session's noise field.
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Current threading configuration.
    pub fn threading(&self) -> &RenderThreading {
        &self.threading
    }

    /// Handle for superseding in-flight renders from another thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Ticket for a render starting now; see [`RenderSession::render_with_ticket`].
    pub fn ticket(&self) -> RenderTicket {
        self.cancel.ticket()
    }

    /// Replace the whole parameter snapshot.
    pub fn set_params(&mut self, params: RenderParameters) {
        self.params = params;
        self.cancel.supersede();
    }

    /// Replace the color stops. At least one stop is required.
    pub fn set_stops(&mut self, stops: ColorStops) -> RibbonResult<()> {
        validate_stops(&stops)?;
        self.stops = stops;
        self.cancel.supersede();
        Ok(())
    }

    /// Change the on-screen size. Zero dimensions are accepted; renders are skipped until valid.
    pub fn set_canvas(&mut self, width: u32, height: u32) {
        self.params.canvas = Canvas::new(width, height);
        self.cancel.supersede();
    }

    /// Change the ribbon color.
    pub fn set_ribbon_color(&mut self, color: Rgb8) {
        self.params.ribbon_color = color;
        self.cancel.supersede();
    }

    /// Change the grain amount (clamped to `[0, 1]`).
    pub fn set_grain_amount(&mut self, amount: f32) {
        self.params.set_grain(amount);
        self.cancel.supersede();
    }

    /// Toggle the glass stripe pass.
    pub fn set_vertical_stripes(&mut self, enabled: bool) {
        self.params.vertical_stripes = enabled;
        self.cancel.supersede();
    }

    /// Replace the noise field with one built from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.noise = NoiseField::from_seed(seed);
        self.cancel.supersede();
        tracing::debug!(seed, "noise field reseeded");
    }

    /// Replace the noise field with a fresh random pattern. Returns the new seed.
    pub fn new_pattern(&mut self) -> u64 {
        self.noise = NoiseField::from_entropy();
        self.cancel.supersede();
        tracing::debug!(seed = self.noise.seed(), "new noise pattern");
        self.noise.seed()
    }

    /// Render at the current canvas size. `Ok(None)` when the canvas is empty.
    #[tracing::instrument(skip(self), fields(width = self.params.canvas.width, height = self.params.canvas.height))]
    pub fn render(&self) -> RibbonResult<Option<FrameRGBA>> {
        self.render_with_ticket(&self.ticket())
    }

    /// Render under an explicit ticket. Fails with [`RibbonError::Superseded`] once the ticket's
    /// generation is outdated.
    pub fn render_with_ticket(&self, ticket: &RenderTicket) -> RibbonResult<Option<FrameRGBA>> {
        self.render_params(&self.params, ticket)
    }

    /// Produce a frame of exactly `width x height` pixels.
    #[tracing::instrument(skip(self))]
    pub fn export_at(&self, width: u32, height: u32, mode: ExportMode) -> RibbonResult<FrameRGBA> {
        let target = Canvas::new(width, height);
        if target.is_empty() {
            return Err(RibbonError::validation(
                "export width and height must be > 0",
            ));
        }

        let ticket = self.ticket();
        match mode {
            ExportMode::Resynthesize => {
                let params = self.params.with_canvas(target);
                self.render_params(&params, &ticket)?
                    .ok_or_else(|| RibbonError::render("export produced no frame"))
            }
            ExportMode::Rescale => {
                let frame = self.render_params(&self.params, &ticket)?.ok_or_else(|| {
                    RibbonError::validation("cannot rescale: on-screen canvas is empty")
                })?;
                if frame.canvas() == target {
                    return Ok(frame);
                }
                frame.rescaled(width, height)
            }
        }
    }

    fn render_params(
        &self,
        params: &RenderParameters,
        ticket: &RenderTicket,
    ) -> RibbonResult<Option<FrameRGBA>> {
        let job = FrameJob {
            stops: &self.stops,
            params,
            noise: &self.noise,
            grain: self.grain,
            ticket: Some(ticket),
        };
        run_frame(&job, self.pool.as_ref())
    }
}

fn validate_stops(stops: &ColorStops) -> RibbonResult<()> {
    if stops.is_empty() {
        return Err(RibbonError::validation(
            "at least one color stop is required",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/session.rs"]
mod tests;
