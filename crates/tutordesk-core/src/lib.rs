//! # tutordesk-core - Core Domain Types
//!
//! Foundation crate for Tutordesk. Provides the session record model, the
//! status classifier, the grouping/sorting engine, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`SessionRecord`] - One tutoring session as delivered by the backend
//! - [`TestEvent`] - An upcoming school test
//! - [`SessionId`] - Backend identifier of a session
//!
//! ### Status Classification (`status`)
//! - [`StatusKind`] - Single classification behind priority, glyph, color and markability
//! - [`StatusColor`] - Semantic color class (`success`/`error`/`warning`/`accent`/`dim`)
//! - [`is_markable()`] - Whether quick attendance actions apply to a status
//!
//! ### Grouping (`grouping`)
//! - [`group_and_sort()`] - Snapshot to time-slot groups, flat sequence and stats
//! - [`GroupedSessions`], [`TimeSlotGroup`], [`SessionStats`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tutordesk_core::prelude::*;
//! ```

pub mod error;
pub mod grouping;
pub mod logging;
pub mod status;
pub mod types;

/// Prelude for common imports used throughout all Tutordesk crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use grouping::{
    group_and_sort, status_distribution, strip_honorific, GroupedSessions, SessionStats,
    StatusCount, TimeSlotGroup, TutorBlock,
};
pub use status::{
    is_markable, status_color, status_glyph, status_priority, MakeupReason, StatusColor,
    StatusKind, STATUS_VOCABULARY,
};
pub use types::{SessionId, SessionRecord, TestEvent, UNSCHEDULED};
