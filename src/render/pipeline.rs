use std::time::Instant;

use crate::foundation::core::{ColorStops, FrameRGBA};
use crate::foundation::error::{RibbonError, RibbonResult};
use crate::noise::simplex::NoiseField;
use crate::render::base::{BaseInputs, render_base};
use crate::render::cancel::RenderTicket;
use crate::render::grain::{GrainField, GrainSource};
use crate::render::params::RenderParameters;
use crate::render::stripes::apply_glass_stripes;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Threading controls for a single frame.
pub struct RenderThreading {
    /// Spread base-pass rows and stripe tiles across a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

pub(crate) struct FrameJob<'a> {
    pub(crate) stops: &'a ColorStops,
    pub(crate) params: &'a RenderParameters,
    pub(crate) noise: &'a NoiseField,
    pub(crate) grain: GrainSource,
    pub(crate) ticket: Option<&'a RenderTicket>,
}

/// Render one frame from scratch.
///
/// This is the one-shot API; [`crate::RenderSession`] wraps it with a persistent noise field,
/// a cached thread pool and cancellation.
///
/// Pipeline:
/// 1. base pass (gradient, ribbon, highlight), grain deltas drawn but not applied
/// 2. glass stripe pass on a snapshot of the base frame, when enabled
/// 3. grain
///
/// Returns `Ok(None)` when the canvas has a zero dimension.
pub fn render_frame(
    stops: &ColorStops,
    params: &RenderParameters,
    noise: &NoiseField,
    grain: GrainSource,
    threading: &RenderThreading,
) -> RibbonResult<Option<FrameRGBA>> {
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };
    let job = FrameJob {
        stops,
        params,
        noise,
        grain,
        ticket: None,
    };
    run_frame(&job, pool.as_ref())
}

pub(crate) fn run_frame(
    job: &FrameJob<'_>,
    pool: Option<&rayon::ThreadPool>,
) -> RibbonResult<Option<FrameRGBA>> {
    let canvas = job.params.canvas;
    if canvas.is_empty() {
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            "skipping render for empty canvas"
        );
        return Ok(None);
    }
    check(job.ticket)?;

    let started = Instant::now();
    let mut frame = FrameRGBA::new_opaque(canvas)?;
    let grain = GrainField::generate(
        canvas,
        job.params.grain_amount(),
        &mut job.grain.rng(),
    )?;

    let parallel = pool.is_some();
    let inputs = BaseInputs {
        stops: job.stops,
        params: job.params,
        noise: job.noise,
        ticket: job.ticket,
    };
    in_pool(pool, || render_base(&mut frame, &inputs, parallel))?;
    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "base pass done");
    check(job.ticket)?;

    let mut out = if job.params.vertical_stripes {
        let snapshot = frame;
        let working = in_pool(pool, || apply_glass_stripes(&snapshot, parallel))?;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "stripe pass done"
        );
        check(job.ticket)?;
        working
    } else {
        frame
    };

    grain.apply(&mut out)?;
    Ok(Some(out))
}

fn check(ticket: Option<&RenderTicket>) -> RibbonResult<()> {
    match ticket {
        Some(t) => t.check(),
        None => Ok(()),
    }
}

fn in_pool<T, F>(pool: Option<&rayon::ThreadPool>, f: F) -> T
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    match pool {
        Some(pool) => pool.install(f),
        None => f(),
    }
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> RibbonResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RibbonError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RibbonError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
