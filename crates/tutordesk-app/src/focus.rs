//! Keyboard focus coordinator
//!
//! Exactly one [`FocusSection`] owns keyboard input at a time. The cyclic
//! sections are walked with [`FocusCoordinator::next`] / [`FocusCoordinator::prev`];
//! [`FocusSection::Detail`] is entered and left only explicitly, and while it is
//! active cyclic navigation does nothing.

use serde::{Deserialize, Serialize};
use tutordesk_core::prelude::*;

/// A logical panel that can own keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusSection {
    #[default]
    Sessions,
    Tests,
    Activity,
    Distribution,
    Command,
    /// Per-session overlay; never part of the cycle
    Detail,
}

/// Order walked by Tab / Shift+Tab
pub const FOCUS_CYCLE: [FocusSection; 5] = [
    FocusSection::Sessions,
    FocusSection::Tests,
    FocusSection::Activity,
    FocusSection::Distribution,
    FocusSection::Command,
];

impl FocusSection {
    pub fn label(self) -> &'static str {
        match self {
            FocusSection::Sessions => "Sessions",
            FocusSection::Tests => "Tests",
            FocusSection::Activity => "Activity",
            FocusSection::Distribution => "Distribution",
            FocusSection::Command => "Command",
            FocusSection::Detail => "Detail",
        }
    }

    pub fn is_cyclic(self) -> bool {
        self != FocusSection::Detail
    }

    fn cycle_index(self) -> Option<usize> {
        FOCUS_CYCLE.iter().position(|s| *s == self)
    }
}

/// Single owner of the focused section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusCoordinator {
    current: FocusSection,
    default: FocusSection,
    /// Section to return to when the detail overlay closes
    restore: Option<FocusSection>,
}

impl Default for FocusCoordinator {
    fn default() -> Self {
        Self::new(FocusSection::Sessions)
    }
}

impl FocusCoordinator {
    /// Start focused on `default`; `Detail` is not a valid default and falls
    /// back to `Sessions`.
    pub fn new(default: FocusSection) -> Self {
        let default = if default.is_cyclic() {
            default
        } else {
            FocusSection::Sessions
        };
        Self {
            current: default,
            default,
            restore: None,
        }
    }

    pub fn current(&self) -> FocusSection {
        self.current
    }

    pub fn default_section(&self) -> FocusSection {
        self.default
    }

    /// Whether `section` owns keyboard input right now
    pub fn is_focused(&self, section: FocusSection) -> bool {
        self.current == section
    }

    pub fn in_detail(&self) -> bool {
        self.current == FocusSection::Detail
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(FOCUS_CYCLE.len() - 1);
    }

    fn step(&mut self, offset: usize) {
        let Some(index) = self.current.cycle_index() else {
            return;
        };
        self.current = FOCUS_CYCLE[(index + offset) % FOCUS_CYCLE.len()];
        trace!("Focus -> {:?}", self.current);
    }

    /// Focus a section directly.
    ///
    /// Setting `Detail` is the same as [`Self::enter_detail`]. While the
    /// overlay holds focus, requests for a cyclic section are ignored; use
    /// [`Self::exit_detail`] to leave it. Returns whether focus changed.
    pub fn set_focused_section(&mut self, section: FocusSection) -> bool {
        if section == FocusSection::Detail {
            let changed = !self.in_detail();
            self.enter_detail();
            return changed;
        }
        if self.in_detail() || self.current == section {
            return false;
        }
        self.current = section;
        true
    }

    /// Overlay opened: remember where focus was and take it
    pub fn enter_detail(&mut self) {
        if self.in_detail() {
            return;
        }
        self.restore = Some(self.current);
        self.current = FocusSection::Detail;
        debug!("Focus -> Detail (restore {:?})", self.restore);
    }

    /// Overlay closed explicitly: return to the section focused before it
    pub fn exit_detail(&mut self) {
        if !self.in_detail() {
            return;
        }
        self.current = self.restore.take().unwrap_or(self.default);
        debug!("Focus restored -> {:?}", self.current);
    }

    /// Overlay torn down without an explicit close
    pub fn detail_unmounted(&mut self) {
        if !self.in_detail() {
            return;
        }
        self.restore = None;
        self.current = self.default;
        debug!("Detail unmounted, focus -> {:?}", self.current);
    }
}
