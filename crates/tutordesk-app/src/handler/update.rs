//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tutordesk_core::prelude::*;
use tutordesk_core::{is_markable, SessionId};

use crate::detail::DetailOverlay;
use crate::focus::FocusSection;
use crate::message::Message;
use crate::quick_actions::QuickAction;
use crate::state::{clamp, AppPhase, AppState};

use super::command::parse_command;
use super::keys::handle_key;
use super::{StatusRequest, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.refresh_due(Instant::now()) {
                UpdateResult::message(Message::RefreshRequested)
            } else {
                UpdateResult::none()
            }
        }

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.focus.prev();
            UpdateResult::none()
        }
        Message::FocusSection(section) => {
            if section == FocusSection::Detail {
                // only OpenDetail may enter the overlay
                return UpdateResult::none();
            }
            state.focus.set_focused_section(section);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Session list (Sessions focus only)
        // ─────────────────────────────────────────────────────────
        Message::CursorUp
        | Message::CursorDown
        | Message::CursorPageUp
        | Message::CursorPageDown
        | Message::CursorFirst
        | Message::CursorLast
        | Message::CursorTo(_) => {
            if state.focus.is_focused(FocusSection::Sessions) {
                move_cursor(state, &message);
            }
            UpdateResult::none()
        }

        Message::ToggleSelect => {
            if !state.focus.is_focused(FocusSection::Sessions) {
                return UpdateResult::none();
            }
            let Some(id) = state.cursor_session().map(|s| s.id) else {
                return UpdateResult::none();
            };
            if !state.selection.toggle_select(id, &state.grouped.flat) {
                return UpdateResult::message(Message::info(
                    "Only Scheduled, Trial Class and Make-up Class sessions can be selected",
                ));
            }
            UpdateResult::none()
        }

        Message::SelectAll => {
            state.selection.select_all(&state.grouped.flat);
            UpdateResult::none()
        }
        Message::SelectActionable => {
            state.selection.select_actionable(&state.grouped.flat);
            UpdateResult::none()
        }
        Message::ClearSelection => {
            state.selection.clear_selection();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail overlay & quick actions
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail => {
            if !state.focus.is_focused(FocusSection::Sessions) {
                return UpdateResult::none();
            }
            let Some(id) = state.cursor_session().map(|s| s.id) else {
                return UpdateResult::none();
            };
            let generation = state.next_generation();
            state.detail = Some(DetailOverlay::new(id, generation));
            state.focus.enter_detail();
            debug!("Opened detail for session {} (generation {})", id, generation);
            UpdateResult::none()
        }

        Message::CloseDetail => {
            if state.detail.take().is_some() {
                state.focus.exit_detail();
            } else if state.focus.in_detail() {
                // focused without an overlay behind it
                state.focus.detail_unmounted();
            }
            UpdateResult::none()
        }

        Message::QuickAction(action) => handle_quick_action(state, action),

        Message::StatusUpdated {
            session,
            generation,
        } => {
            let id = session.id;
            state.busy.remove(&id);

            let note = format!(
                "{} marked {}",
                display_name(&session.student_name, id),
                session.session_status
            );
            state.replace_session(session);
            settle_bulk(state, id, true);

            if state.detail.as_ref().is_some_and(|d| d.owns(generation)) {
                state.detail = None;
                state.focus.exit_detail();
            }

            UpdateResult {
                message: Some(Message::success(note)),
                action: request_fetch(state),
            }
        }

        Message::StatusUpdateFailed {
            id,
            error,
            generation,
        } => {
            warn!("Status update for session {} failed: {}", id, error);
            state.busy.remove(&id);
            settle_bulk(state, id, false);

            if let Some(overlay) = state.detail.as_mut().filter(|d| d.owns(generation)) {
                overlay.pending = false;
                overlay.error = Some(error.clone());
            }

            let name = state
                .grouped
                .find(id)
                .map(|s| display_name(&s.student_name, id))
                .unwrap_or_else(|| display_name("", id));
            UpdateResult::message(Message::error(format!("Failed to update {name}: {error}")))
        }

        // ─────────────────────────────────────────────────────────
        // Data loading
        // ─────────────────────────────────────────────────────────
        Message::RefreshRequested => {
            state.last_refresh = Some(Instant::now());
            let fetch = request_fetch(state);
            UpdateResult {
                message: Some(Message::RefreshTests),
                action: fetch,
            }
        }

        Message::RefreshTests => UpdateResult::action(UpdateAction::FetchTests),

        Message::SessionsLoaded(sessions) => {
            debug!("Loaded {} sessions", sessions.len());
            state.fetch_in_flight = false;
            state.load_error = None;
            state.phase = match state.phase {
                AppPhase::Quitting => AppPhase::Quitting,
                _ => AppPhase::Running,
            };

            let detail_removed = state.apply_snapshot(sessions);

            let follow_up = if state.refetch_pending {
                state.refetch_pending = false;
                state.fetch_in_flight = true;
                Some(UpdateAction::FetchSessions)
            } else {
                None
            };

            UpdateResult {
                message: detail_removed
                    .then(|| Message::info("Session is no longer available; detail closed")),
                action: follow_up,
            }
        }

        Message::SessionsLoadFailed { error } => {
            warn!("Session fetch failed: {}", error);
            state.fetch_in_flight = false;
            state.refetch_pending = false;
            state.load_error = Some(error.clone());
            if state.phase == AppPhase::Loading {
                state.phase = AppPhase::Running;
            }
            UpdateResult::message(Message::error(format!("Could not load sessions: {error}")))
        }

        Message::TestsLoaded(tests) => {
            state.set_tests(tests);
            UpdateResult::none()
        }

        Message::TestsLoadFailed { error } => {
            warn!("Test fetch failed: {}", error);
            UpdateResult::message(Message::warning(format!("Could not load tests: {error}")))
        }

        // ─────────────────────────────────────────────────────────
        // Notifications
        // ─────────────────────────────────────────────────────────
        Message::Notify { level, text } => {
            let id = state.notifications.publish(level, text);
            state.activity_scroll = 0;
            UpdateResult::action(UpdateAction::ExpireNotification {
                id,
                after: state.notifications.ttl(),
            })
        }

        Message::NotificationExpired { id } => {
            state.notifications.dismiss(id);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Side panels
        // ─────────────────────────────────────────────────────────
        Message::TestsUp | Message::TestsDown => {
            if state.focus.is_focused(FocusSection::Tests) {
                let up = message == Message::TestsUp;
                state.tests_cursor = step(state.tests_cursor, up, state.tests.len());
            }
            UpdateResult::none()
        }

        Message::ActivityUp | Message::ActivityDown => {
            if state.focus.is_focused(FocusSection::Activity) {
                let up = message == Message::ActivityUp;
                state.activity_scroll =
                    step(state.activity_scroll, up, state.notifications.history_len());
            }
            UpdateResult::none()
        }

        Message::DistributionPrev | Message::DistributionNext => {
            if state.focus.is_focused(FocusSection::Distribution) {
                let prev = message == Message::DistributionPrev;
                state.distribution_cursor =
                    step(state.distribution_cursor, prev, state.distribution.len());
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Command bar (Command focus only)
        // ─────────────────────────────────────────────────────────
        Message::CommandInput(_)
        | Message::CommandBackspace
        | Message::CommandClear
        | Message::CommandSubmit
        | Message::CommandCancel => {
            if !state.focus.is_focused(FocusSection::Command) {
                return UpdateResult::none();
            }
            handle_command_bar(state, message)
        }
    }
}

fn move_cursor(state: &mut AppState, message: &Message) {
    let len = state.grouped.len();
    let selection = &mut state.selection;
    match message {
        Message::CursorUp => selection.move_up(len),
        Message::CursorDown => selection.move_down(len),
        Message::CursorPageUp => selection.page_up(len),
        Message::CursorPageDown => selection.page_down(len),
        Message::CursorFirst => selection.move_cursor(0, len),
        Message::CursorLast => selection.move_cursor(len.saturating_sub(1), len),
        Message::CursorTo(index) => selection.move_cursor(*index, len),
        _ => {}
    }
}

/// Decrement (`back`) or increment an index within `[0, len - 1]`
fn step(index: usize, back: bool, len: usize) -> usize {
    let next = if back {
        index.saturating_sub(1)
    } else {
        index.saturating_add(1)
    };
    clamp(next, len)
}

/// Issue a session fetch unless one is already running
fn request_fetch(state: &mut AppState) -> Option<UpdateAction> {
    if state.fetch_in_flight {
        state.refetch_pending = true;
        return None;
    }
    state.fetch_in_flight = true;
    Some(UpdateAction::FetchSessions)
}

/// Account for one finished bulk request. Marked sessions leave the
/// selection; the rest of it is cleared only when the whole run succeeded.
fn settle_bulk(state: &mut AppState, id: SessionId, ok: bool) {
    if !state.bulk_pending.remove(&id) {
        return;
    }
    if ok {
        state.selection.deselect(id);
    } else {
        state.bulk_failed = true;
    }
    if state.bulk_pending.is_empty() {
        if !state.bulk_failed {
            state.selection.clear_selection();
        }
        state.bulk_failed = false;
    }
}

fn display_name(student_name: &str, id: SessionId) -> String {
    if student_name.trim().is_empty() {
        format!("session {id}")
    } else {
        student_name.to_string()
    }
}

fn handle_quick_action(state: &mut AppState, action: QuickAction) -> UpdateResult {
    let target = action.target_status();

    match state.focus.current() {
        FocusSection::Detail => {
            let Some(session) = state.detail_session() else {
                return UpdateResult::none();
            };
            let id = session.id;

            if !is_markable(&session.session_status) {
                let note = format!(
                    "{} is {} and cannot be marked",
                    display_name(&session.student_name, id),
                    session.session_status
                );
                return UpdateResult::message(Message::warning(note));
            }
            if state.is_busy(id) {
                trace!("Session {} busy, ignoring {:?}", id, action);
                return UpdateResult::none();
            }

            let Some(overlay) = state.detail.as_mut() else {
                return UpdateResult::none();
            };
            overlay.pending = true;
            overlay.error = None;
            let generation = Some(overlay.generation);

            state.busy.insert(id);
            info!("Marking session {} as {}", id, target);
            UpdateResult::action(UpdateAction::UpdateStatuses {
                requests: vec![StatusRequest {
                    id,
                    status: target.to_string(),
                    generation,
                }],
            })
        }

        FocusSection::Sessions => {
            let bulk = state.selection.has_selection();
            let candidates: Vec<SessionId> = if bulk {
                state.selection.selected().iter().copied().collect()
            } else {
                state.cursor_session().map(|s| s.id).into_iter().collect()
            };

            if candidates.is_empty() {
                return UpdateResult::none();
            }

            let targets: Vec<SessionId> = candidates
                .iter()
                .copied()
                .filter(|id| {
                    state
                        .grouped
                        .find(*id)
                        .is_some_and(|s| is_markable(&s.session_status))
                })
                .filter(|id| !state.is_busy(*id))
                .collect();

            if targets.is_empty() {
                if candidates.iter().any(|id| state.is_busy(*id)) {
                    return UpdateResult::none();
                }
                return UpdateResult::message(Message::warning(
                    "Nothing to mark: no Scheduled, Trial Class or Make-up Class session selected",
                ));
            }

            state.busy.extend(targets.iter().copied());
            if bulk && state.settings.behavior.clear_selection_after_bulk {
                state.bulk_pending.extend(targets.iter().copied());
            }

            info!("Marking {} session(s) as {}", targets.len(), target);
            let requests = targets
                .into_iter()
                .map(|id| StatusRequest {
                    id,
                    status: target.to_string(),
                    generation: None,
                })
                .collect();
            UpdateResult::action(UpdateAction::UpdateStatuses { requests })
        }

        other => {
            trace!("Quick action {:?} ignored in {:?}", action, other);
            UpdateResult::none()
        }
    }
}

fn handle_command_bar(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::CommandInput(c) => state.command_input.push(c),
        Message::CommandBackspace => {
            state.command_input.pop();
        }
        Message::CommandClear => state.command_input.clear(),
        Message::CommandCancel => {
            state.command_input.clear();
            let default = state.focus.default_section();
            state.focus.set_focused_section(default);
        }
        Message::CommandSubmit => {
            let input = std::mem::take(&mut state.command_input);
            let default = state.focus.default_section();
            state.focus.set_focused_section(default);
            debug!("Command submitted: {:?}", input);
            if let Some(msg) = parse_command(&input) {
                return UpdateResult::message(msg);
            }
        }
        _ => {}
    }
    UpdateResult::none()
}
