//! Per-session detail overlay state

use tutordesk_core::SessionId;

/// Identifies one opening of the overlay; results carrying an older
/// generation are not applied to overlay state.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    pub session_id: SessionId,
    pub generation: Generation,
    /// An update issued from this overlay is in flight
    pub pending: bool,
    /// Inline error from the last failed update
    pub error: Option<String>,
}

impl DetailOverlay {
    pub fn new(session_id: SessionId, generation: Generation) -> Self {
        Self {
            session_id,
            generation,
            pending: false,
            error: None,
        }
    }

    /// Whether a result tagged with `generation` belongs to this opening
    pub fn owns(&self, generation: Option<Generation>) -> bool {
        generation == Some(self.generation)
    }
}
