use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::{RibbonError, RibbonResult};

/// Cloneable handle that marks every in-flight render of a session as superseded.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    generation: Arc<AtomicU64>,
}

impl CancelHandle {
    /// Supersede all renders started before this call.
    pub fn supersede(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Issue a ticket for a render starting now.
    pub fn ticket(&self) -> RenderTicket {
        RenderTicket {
            generation: Arc::clone(&self.generation),
            started: self.generation.load(Ordering::Acquire),
        }
    }
}

/// Generation a render was started under.
///
/// Renders poll their ticket at row and pass boundaries and stop with
/// [`RibbonError::Superseded`] once a newer generation exists.
#[derive(Clone, Debug)]
pub struct RenderTicket {
    generation: Arc<AtomicU64>,
    started: u64,
}

impl RenderTicket {
    /// Whether a newer request has been issued since this ticket.
    pub fn is_superseded(&self) -> bool {
        self.generation.load(Ordering::Acquire) != self.started
    }

    pub(crate) fn check(&self) -> RibbonResult<()> {
        if self.is_superseded() {
            return Err(RibbonError::Superseded);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cancel.rs"]
mod tests;
