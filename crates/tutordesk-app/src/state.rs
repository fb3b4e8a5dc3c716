//! Application state (Model in TEA pattern)

use std::collections::HashSet;
use std::time::Instant;

use tutordesk_core::prelude::*;
use tutordesk_core::{
    group_and_sort, status_distribution, GroupedSessions, SessionId, SessionRecord, StatusCount,
    TestEvent,
};

use crate::config::Settings;
use crate::detail::{DetailOverlay, Generation};
use crate::focus::FocusCoordinator;
use crate::notifications::NotificationBus;
use crate::selection::SessionSelection;

/// Application run phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    /// Waiting for the first snapshot
    #[default]
    Loading,
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    /// Last snapshot as delivered, before grouping
    pub sessions: Vec<SessionRecord>,
    /// Render-ready view of `sessions`
    pub grouped: GroupedSessions,
    pub selection: SessionSelection,
    pub focus: FocusCoordinator,

    pub detail: Option<DetailOverlay>,
    next_generation: Generation,

    /// Sessions with a status update in flight
    pub busy: HashSet<SessionId>,
    /// Bulk requests still in flight; the selection is cleared once all succeed
    pub bulk_pending: HashSet<SessionId>,
    /// Some request of the current bulk run failed, so the selection stays
    pub bulk_failed: bool,

    pub notifications: NotificationBus,

    pub tests: Vec<TestEvent>,
    pub tests_cursor: usize,
    pub activity_scroll: usize,
    pub distribution: Vec<StatusCount>,
    pub distribution_cursor: usize,

    pub command_input: String,

    /// A session fetch is running
    pub fetch_in_flight: bool,
    /// Another fetch was requested while one was running
    pub refetch_pending: bool,
    pub last_refresh: Option<Instant>,
    /// Error from the last failed session fetch, cleared on success
    pub load_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let focus = FocusCoordinator::new(settings.ui.default_focus);
        let notifications =
            NotificationBus::new(settings.notification_ttl(), settings.ui.activity_history);

        Self {
            phase: AppPhase::Loading,
            settings,
            sessions: Vec::new(),
            grouped: GroupedSessions::default(),
            selection: SessionSelection::new(),
            focus,
            detail: None,
            next_generation: 0,
            busy: HashSet::new(),
            bulk_pending: HashSet::new(),
            bulk_failed: false,
            notifications,
            tests: Vec::new(),
            tests_cursor: 0,
            activity_scroll: 0,
            distribution: Vec::new(),
            distribution_cursor: 0,
            command_input: String::new(),
            fetch_in_flight: false,
            refetch_pending: false,
            last_refresh: None,
            load_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Session under the cursor
    pub fn cursor_session(&self) -> Option<&SessionRecord> {
        self.grouped.get(self.selection.cursor())
    }

    /// Session shown in the open overlay
    pub fn detail_session(&self) -> Option<&SessionRecord> {
        self.detail
            .as_ref()
            .and_then(|overlay| self.grouped.find(overlay.session_id))
    }

    pub fn is_busy(&self, id: SessionId) -> bool {
        self.busy.contains(&id)
    }

    /// Fresh generation for a new overlay opening
    pub fn next_generation(&mut self) -> Generation {
        self.next_generation += 1;
        self.next_generation
    }

    /// Install a new snapshot: regroup, keep the cursor on the same session
    /// where possible, prune the selection and tear down a stale overlay.
    ///
    /// Returns `true` when an open overlay lost its session.
    pub fn apply_snapshot(&mut self, sessions: Vec<SessionRecord>) -> bool {
        let follow = self.cursor_session().map(|s| s.id);

        self.sessions = sessions;
        self.regroup(follow);

        let stale_detail = self
            .detail
            .as_ref()
            .is_some_and(|overlay| self.grouped.find(overlay.session_id).is_none());

        if stale_detail {
            self.detail = None;
            self.focus.detail_unmounted();
        }
        stale_detail
    }

    /// Replace one record (after a successful update) and regroup
    pub fn replace_session(&mut self, record: SessionRecord) {
        let follow = self.cursor_session().map(|s| s.id);

        match self.sessions.iter_mut().find(|s| s.id == record.id) {
            Some(existing) => *existing = record,
            None => {
                debug!("Updated session {} not in snapshot, ignoring", record.id);
                return;
            }
        }
        self.regroup(follow);
    }

    fn regroup(&mut self, follow: Option<SessionId>) {
        self.grouped = group_and_sort(&self.sessions);
        self.selection.reconcile(&self.grouped.flat, follow);
        self.distribution = status_distribution(&self.grouped.flat);
        self.distribution_cursor = clamp(self.distribution_cursor, self.distribution.len());
    }

    pub fn set_tests(&mut self, tests: Vec<TestEvent>) {
        self.tests = tests;
        self.tests.sort_by_key(|t| t.test_date);
        self.tests_cursor = clamp(self.tests_cursor, self.tests.len());
    }

    /// Whether the periodic refresh should fire at `now`
    pub fn refresh_due(&self, now: Instant) -> bool {
        let Some(interval) = self.settings.refresh_interval() else {
            return false;
        };
        if self.fetch_in_flight {
            return false;
        }
        match self.last_refresh {
            Some(last) => now.duration_since(last) >= interval,
            None => false,
        }
    }
}

pub(crate) fn clamp(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}
