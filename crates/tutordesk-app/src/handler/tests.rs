use super::*;
use crate::focus::FocusSection;
use crate::input_key::InputKey;
use crate::notifications::NotificationLevel;
use crate::quick_actions::QuickAction;
use crate::state::{AppPhase, AppState};
use tutordesk_core::SessionRecord;

fn sessions() -> Vec<SessionRecord> {
    vec![
        SessionRecord::new(1, "Scheduled")
            .with_time_slot("09:00 - 10:00")
            .with_tutor("Ms. Chan")
            .with_student("Ho Ka Yan", "1001")
            .with_grade("F1", "E"),
        SessionRecord::new(2, "Cancelled")
            .with_time_slot("09:00 - 10:00")
            .with_tutor("Ms. Chan")
            .with_student("Lam Tsz", "1002")
            .with_grade("F1", "E"),
        SessionRecord::new(3, "Trial Class")
            .with_time_slot("11:00 - 12:00")
            .with_tutor("Mr. Wong")
            .with_student("Lee Ming", "1003")
            .with_grade("F2", "C"),
    ]
}

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::SessionsLoaded(sessions()));
    state
}

/// Run a message and its follow-ups, collecting every action
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn key(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

fn status_requests(actions: &[UpdateAction]) -> Vec<StatusRequest> {
    actions
        .iter()
        .filter_map(|a| match a {
            UpdateAction::UpdateStatuses { requests } => Some(requests.clone()),
            _ => None,
        })
        .flatten()
        .collect()
}

fn cursor_id(state: &AppState) -> i64 {
    state.cursor_session().map(|s| s.id).unwrap_or_default()
}

// ─────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────

#[test]
fn test_sessions_loaded_enters_running() {
    let state = loaded_state();
    assert_eq!(state.phase, AppPhase::Running);
    assert_eq!(state.grouped.len(), 3);
    // 09:00 slot first, regular Scheduled class ahead of the cancellation
    assert_eq!(cursor_id(&state), 1);
}

#[test]
fn test_refresh_fetches_sessions_and_tests() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::RefreshRequested);
    assert_eq!(
        actions,
        vec![UpdateAction::FetchSessions, UpdateAction::FetchTests]
    );
    assert!(state.fetch_in_flight);
}

#[test]
fn test_refresh_while_in_flight_is_coalesced() {
    let mut state = AppState::new();
    run(&mut state, Message::RefreshRequested);
    let actions = run(&mut state, Message::RefreshRequested);
    assert_eq!(actions, vec![UpdateAction::FetchTests]);
    assert!(state.refetch_pending);

    let actions = run(&mut state, Message::SessionsLoaded(sessions()));
    assert_eq!(actions, vec![UpdateAction::FetchSessions]);
    assert!(!state.refetch_pending);
}

#[test]
fn test_load_failure_notifies() {
    let mut state = AppState::new();
    let actions = run(
        &mut state,
        Message::SessionsLoadFailed {
            error: "connection refused".into(),
        },
    );
    assert_eq!(state.load_error.as_deref(), Some("connection refused"));
    let current = state.notifications.current().unwrap();
    assert_eq!(current.level, NotificationLevel::Error);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::ExpireNotification { .. }]
    ));
}

// ─────────────────────────────────────────────────────────
// Key dispatch and focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_cycles_focus() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Tab);
    assert_eq!(state.focus.current(), FocusSection::Tests);
    key(&mut state, InputKey::BackTab);
    key(&mut state, InputKey::BackTab);
    assert_eq!(state.focus.current(), FocusSection::Command);
}

#[test]
fn test_keys_only_reach_focused_section() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Tab); // Tests
    key(&mut state, InputKey::Char('j'));
    assert_eq!(state.selection.cursor(), 0);

    // a cursor message that bypasses dispatch is still ignored
    run(&mut state, Message::CursorDown);
    assert_eq!(state.selection.cursor(), 0);
}

#[test]
fn test_cursor_moves_and_clamps() {
    let mut state = loaded_state();
    for _ in 0..10 {
        key(&mut state, InputKey::Char('j'));
    }
    assert_eq!(state.selection.cursor(), 2);
    key(&mut state, InputKey::Char('g'));
    assert_eq!(state.selection.cursor(), 0);
    key(&mut state, InputKey::End);
    assert_eq!(state.selection.cursor(), 2);
}

#[test]
fn test_ctrl_c_quits_from_any_focus() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Enter);
    assert!(state.focus.in_detail());
    key(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_space_toggles_markable_only() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char(' '));
    assert!(state.selection.is_selected(1));

    key(&mut state, InputKey::Char('j')); // Cancelled
    key(&mut state, InputKey::Char(' '));
    assert!(!state.selection.is_selected(2));
    assert_eq!(
        state.notifications.current().map(|n| n.level),
        Some(NotificationLevel::Info)
    );
}

#[test]
fn test_select_actionable_and_all_keys() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char('a'));
    assert_eq!(state.selection.selected_count(), 2);
    key(&mut state, InputKey::Char('c'));
    assert_eq!(state.selection.selected_count(), 0);
    key(&mut state, InputKey::Char('A'));
    assert_eq!(state.selection.selected_count(), 3);
}

#[test]
fn test_selection_survives_resort() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char('a'));

    let mut next = sessions();
    next.reverse();
    next[0].time_slot = Some("08:00 - 09:00".into());
    run(&mut state, Message::SessionsLoaded(next));

    assert!(state.selection.is_selected(1));
    assert!(state.selection.is_selected(3));
}

// ─────────────────────────────────────────────────────────
// Detail overlay
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_opens_detail_and_esc_restores() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Enter);
    assert!(state.focus.in_detail());
    assert_eq!(state.detail.as_ref().map(|d| d.session_id), Some(1));

    // cyclic navigation is consumed by the overlay
    key(&mut state, InputKey::Tab);
    assert!(state.focus.in_detail());

    key(&mut state, InputKey::Esc);
    assert!(state.detail.is_none());
    assert_eq!(state.focus.current(), FocusSection::Sessions);
}

#[test]
fn test_close_without_overlay_falls_back_to_default_focus() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Tab);
    state.focus.set_focused_section(FocusSection::Detail);
    assert!(state.detail.is_none());

    key(&mut state, InputKey::Esc);
    assert_eq!(state.focus.current(), FocusSection::Sessions);

    key(&mut state, InputKey::Tab);
    assert_eq!(state.focus.current(), FocusSection::Tests);
}

#[test]
fn test_detail_quick_action_success_closes_overlay() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Enter);
    let generation = state.detail.as_ref().map(|d| d.generation);

    let actions = key(&mut state, InputKey::Char('1'));
    let requests = status_requests(&actions);
    assert_eq!(
        requests,
        vec![StatusRequest {
            id: 1,
            status: "Attended".into(),
            generation,
        }]
    );
    assert!(state.is_busy(1));
    assert!(state.detail.as_ref().is_some_and(|d| d.pending));

    let mut updated = sessions()[0].clone();
    updated.session_status = "Attended".into();
    let actions = run(
        &mut state,
        Message::StatusUpdated {
            session: updated,
            generation,
        },
    );

    assert!(!state.is_busy(1));
    assert!(state.detail.is_none());
    assert_eq!(state.focus.current(), FocusSection::Sessions);
    assert_eq!(
        state.grouped.find(1).map(|s| s.session_status.as_str()),
        Some("Attended")
    );
    assert!(actions.contains(&UpdateAction::FetchSessions));
    assert_eq!(
        state.notifications.current().map(|n| n.level),
        Some(NotificationLevel::Success)
    );
}

#[test]
fn test_detail_quick_action_failure_keeps_overlay_and_focus() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Enter);
    let generation = state.detail.as_ref().map(|d| d.generation);
    key(&mut state, InputKey::Char('2'));

    let selection_before = state.selection.clone();
    run(
        &mut state,
        Message::StatusUpdateFailed {
            id: 1,
            error: "Backend request failed: timeout".into(),
            generation,
        },
    );

    assert!(!state.is_busy(1));
    assert!(state.focus.in_detail());
    let overlay = state.detail.as_ref().unwrap();
    assert!(!overlay.pending);
    assert_eq!(
        overlay.error.as_deref(),
        Some("Backend request failed: timeout")
    );
    assert_eq!(state.selection, selection_before);
    assert_eq!(
        state.notifications.current().map(|n| n.level),
        Some(NotificationLevel::Error)
    );

    // retry is possible once busy is released
    let actions = key(&mut state, InputKey::Char('2'));
    assert_eq!(status_requests(&actions).len(), 1);
}

#[test]
fn test_duplicate_quick_action_while_busy_is_ignored() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Enter);
    let first = key(&mut state, InputKey::Char('1'));
    assert_eq!(status_requests(&first).len(), 1);

    let second = key(&mut state, InputKey::Char('1'));
    assert!(status_requests(&second).is_empty());

    let other = key(&mut state, InputKey::Char('4'));
    assert!(status_requests(&other).is_empty());
}

#[test]
fn test_stale_generation_not_applied_to_new_overlay() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Enter);
    let old_generation = state.detail.as_ref().map(|d| d.generation);
    key(&mut state, InputKey::Char('1'));
    key(&mut state, InputKey::Esc);

    // reopen on the same session before the first result lands
    key(&mut state, InputKey::Enter);
    let new_generation = state.detail.as_ref().map(|d| d.generation);
    assert_ne!(old_generation, new_generation);

    run(
        &mut state,
        Message::StatusUpdateFailed {
            id: 1,
            error: "late failure".into(),
            generation: old_generation,
        },
    );

    let overlay = state.detail.as_ref().unwrap();
    assert!(overlay.error.is_none());
    assert!(state.focus.in_detail());
    assert!(!state.is_busy(1));
}

#[test]
fn test_late_success_after_close_leaves_focus_alone() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Enter);
    let generation = state.detail.as_ref().map(|d| d.generation);
    key(&mut state, InputKey::Char('1'));
    key(&mut state, InputKey::Esc);
    key(&mut state, InputKey::Tab);

    let mut updated = sessions()[0].clone();
    updated.session_status = "Attended".into();
    run(
        &mut state,
        Message::StatusUpdated {
            session: updated,
            generation,
        },
    );

    assert_eq!(state.focus.current(), FocusSection::Tests);
    assert_eq!(
        state.grouped.find(1).map(|s| s.session_status.as_str()),
        Some("Attended")
    );
}

#[test]
fn test_detail_on_non_markable_warns() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char('j')); // Cancelled
    key(&mut state, InputKey::Enter);
    let actions = key(&mut state, InputKey::Char('1'));

    assert!(status_requests(&actions).is_empty());
    assert!(!state.is_busy(2));
    assert_eq!(
        state.notifications.current().map(|n| n.level),
        Some(NotificationLevel::Warning)
    );
}

#[test]
fn test_refetch_removing_detail_session_unmounts() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Enter);
    assert!(state.focus.in_detail());

    let remaining: Vec<_> = sessions().into_iter().filter(|s| s.id != 1).collect();
    run(&mut state, Message::SessionsLoaded(remaining));

    assert!(state.detail.is_none());
    assert_eq!(state.focus.current(), state.focus.default_section());
}

// ─────────────────────────────────────────────────────────
// List quick actions
// ─────────────────────────────────────────────────────────

#[test]
fn test_list_quick_action_uses_cursor_without_selection() {
    let mut state = loaded_state();
    let actions = key(&mut state, InputKey::Char('3'));
    assert_eq!(
        status_requests(&actions),
        vec![StatusRequest {
            id: 1,
            status: "Rescheduled - Pending Make-up".into(),
            generation: None,
        }]
    );
}

#[test]
fn test_bulk_quick_action_skips_non_markable_and_busy() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char('A')); // includes Cancelled session 2
    state.busy.insert(3);

    let actions = key(&mut state, InputKey::Char('5'));
    let ids: Vec<i64> = status_requests(&actions).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
    assert!(state.is_busy(1));
    // kept until the run settles
    assert_eq!(state.selection.selected_count(), 3);

    run(
        &mut state,
        Message::StatusUpdated {
            session: SessionRecord::new(1, "Weather Cancelled - Pending Make-up"),
            generation: None,
        },
    );
    // cleared by default once every bulk request succeeded
    assert!(!state.selection.has_selection());
    assert!(state.bulk_pending.is_empty());
}

#[test]
fn test_failed_bulk_run_keeps_selection_for_retry() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char('a'));
    let before = state.selection.selected().clone();
    assert_eq!(before.len(), 2);

    let actions = key(&mut state, InputKey::Char('1'));
    for request in status_requests(&actions) {
        run(
            &mut state,
            Message::StatusUpdateFailed {
                id: request.id,
                error: "Backend request failed: timeout".into(),
                generation: None,
            },
        );
    }

    assert!(state.busy.is_empty());
    assert_eq!(state.selection.selected(), &before);

    // the same selection can be retried straight away
    let retry = key(&mut state, InputKey::Char('1'));
    assert_eq!(status_requests(&retry).len(), 2);
}

#[test]
fn test_partially_failed_bulk_run_keeps_only_failures() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char('a'));
    key(&mut state, InputKey::Char('1'));

    run(
        &mut state,
        Message::StatusUpdated {
            session: SessionRecord::new(1, "Attended"),
            generation: None,
        },
    );
    run(
        &mut state,
        Message::StatusUpdateFailed {
            id: 3,
            error: "Backend request failed: 500".into(),
            generation: None,
        },
    );

    assert!(!state.selection.is_selected(1));
    assert!(state.selection.is_selected(3));
    assert!(!state.bulk_failed);
}

#[test]
fn test_bulk_keeps_selection_when_configured() {
    let mut state = loaded_state();
    state.settings.behavior.clear_selection_after_bulk = false;
    key(&mut state, InputKey::Char('a'));
    key(&mut state, InputKey::Char('1'));
    assert_eq!(state.selection.selected_count(), 2);
}

#[test]
fn test_list_quick_action_on_cancelled_warns() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char('j'));
    let actions = key(&mut state, InputKey::Char('1'));
    assert!(status_requests(&actions).is_empty());
    assert_eq!(
        state.notifications.current().map(|n| n.level),
        Some(NotificationLevel::Warning)
    );
}

#[test]
fn test_quick_action_ignored_outside_sessions_and_detail() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Tab);
    let actions = run(&mut state, Message::QuickAction(QuickAction::MarkAttended));
    assert!(status_requests(&actions).is_empty());
}

// ─────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────

#[test]
fn test_notify_schedules_expiry_for_its_own_id() {
    let mut state = loaded_state();
    let actions = run(&mut state, Message::info("first"));
    let first_id = state.notifications.current().unwrap().id;
    assert_eq!(
        actions,
        vec![UpdateAction::ExpireNotification {
            id: first_id,
            after: state.notifications.ttl(),
        }]
    );

    run(&mut state, Message::info("second"));
    run(&mut state, Message::NotificationExpired { id: first_id });
    assert_eq!(
        state.notifications.current().map(|n| n.text.as_str()),
        Some("second")
    );
}

// ─────────────────────────────────────────────────────────
// Command bar and side panels
// ─────────────────────────────────────────────────────────

#[test]
fn test_command_bar_select_actionable() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char(':'));
    assert_eq!(state.focus.current(), FocusSection::Command);

    for c in "select actionable".chars() {
        key(&mut state, InputKey::Char(c));
    }
    assert_eq!(state.command_input, "select actionable");

    key(&mut state, InputKey::Enter);
    assert!(state.command_input.is_empty());
    assert_eq!(state.focus.current(), FocusSection::Sessions);
    assert_eq!(state.selection.selected_count(), 2);
}

#[test]
fn test_command_bar_q_is_text_not_quit() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char(':'));
    key(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    key(&mut state, InputKey::Backspace);
    assert!(state.command_input.is_empty());
    key(&mut state, InputKey::Esc);
    assert_eq!(state.focus.current(), FocusSection::Sessions);
}

#[test]
fn test_command_bar_unknown_command() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char(':'));
    for c in "dance".chars() {
        key(&mut state, InputKey::Char(c));
    }
    key(&mut state, InputKey::Enter);
    assert_eq!(
        state.notifications.current().map(|n| n.text.as_str()),
        Some("Unknown command: dance")
    );
}

#[test]
fn test_distribution_cursor_moves_only_when_focused() {
    let mut state = loaded_state();
    run(&mut state, Message::DistributionNext);
    assert_eq!(state.distribution_cursor, 0);

    run(&mut state, Message::FocusSection(FocusSection::Distribution));
    key(&mut state, InputKey::Right);
    key(&mut state, InputKey::Right);
    key(&mut state, InputKey::Right);
    assert_eq!(state.distribution_cursor, 2);
    key(&mut state, InputKey::Left);
    assert_eq!(state.distribution_cursor, 1);
}

#[test]
fn test_focus_section_message_cannot_enter_detail() {
    let mut state = loaded_state();
    run(&mut state, Message::FocusSection(FocusSection::Detail));
    assert_eq!(state.focus.current(), FocusSection::Sessions);
}

#[test]
fn test_q_quits_from_list() {
    let mut state = loaded_state();
    key(&mut state, InputKey::Char('q'));
    assert!(state.should_quit());
}
