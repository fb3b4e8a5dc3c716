//! Time-slot grouping and display ordering for the session list
//!
//! [`group_and_sort`] turns a flat snapshot of sessions into time-slot
//! groups, orders each tutor's sessions so regular-class students come first,
//! and flattens the result into the sequence used for cursor navigation.
//! This module is pure data transformation with no UI dependencies.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::status::{
    StatusKind, ATTENDED, ATTENDED_MAKEUP, CANCELLED, MAKEUP_BOOKED_SUFFIX, MAKEUP_CLASS, NO_SHOW,
    PENDING_MAKEUP_SUFFIX, SCHEDULED, TRIAL_CLASS,
};
use crate::types::{SessionId, SessionRecord, UNSCHEDULED};

/// Leading honorific on a tutor name: `Mr`, `Ms`, `Mrs`, optional period.
static HONORIFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:mrs|mr|ms)(?:\.\s*|\s+)").expect("honorific pattern is valid")
});

// ─────────────────────────────────────────────────────────────────────────────
// Output Types
// ─────────────────────────────────────────────────────────────────────────────

/// One tutor's block inside a time slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorBlock {
    /// Tutor name as delivered (may be empty)
    pub tutor_name: String,
    /// Most common `grade + lang_stream` among the tutor's Scheduled sessions
    pub main_group: Option<String>,
    /// Number of sessions in this block
    pub len: usize,
}

/// Sessions sharing a time slot, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotGroup {
    pub time_slot: String,
    pub sessions: Vec<SessionRecord>,
    /// Tutor blocks in order; their `len`s partition `sessions`
    pub tutors: Vec<TutorBlock>,
}

impl TimeSlotGroup {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Header counts for a snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    pub cancelled: usize,
}

/// Render-ready view of one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedSessions {
    pub groups: Vec<TimeSlotGroup>,
    /// All sessions in group order; the cursor coordinate space
    pub flat: Vec<SessionRecord>,
    pub stats: SessionStats,
}

impl GroupedSessions {
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    /// Flat index of the session with this id
    pub fn position_of(&self, id: SessionId) -> Option<usize> {
        self.flat.iter().position(|s| s.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&SessionRecord> {
        self.flat.get(index)
    }

    pub fn find(&self, id: SessionId) -> Option<&SessionRecord> {
        self.flat.iter().find(|s| s.id == id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// Group, order and flatten a snapshot. Empty input gives an empty view.
pub fn group_and_sort(sessions: &[SessionRecord]) -> GroupedSessions {
    let mut slot_order: Vec<&str> = Vec::new();
    let mut by_slot: HashMap<&str, Vec<&SessionRecord>> = HashMap::new();

    for session in sessions {
        let slot = session.time_slot_label();
        by_slot
            .entry(slot)
            .or_insert_with(|| {
                slot_order.push(slot);
                Vec::new()
            })
            .push(session);
    }

    slot_order.sort_by(|a, b| compare_time_slots(a, b));

    let groups: Vec<TimeSlotGroup> = slot_order
        .into_iter()
        .map(|slot| build_slot_group(slot, by_slot.remove(slot).unwrap_or_default()))
        .collect();

    let flat: Vec<SessionRecord> = groups
        .iter()
        .flat_map(|g| g.sessions.iter().cloned())
        .collect();

    let stats = compute_stats(&flat);

    GroupedSessions {
        groups,
        flat,
        stats,
    }
}

fn build_slot_group(slot: &str, sessions: Vec<&SessionRecord>) -> TimeSlotGroup {
    let mut tutor_order: Vec<&str> = Vec::new();
    let mut by_tutor: HashMap<&str, Vec<&SessionRecord>> = HashMap::new();

    for session in sessions {
        let tutor = session.tutor_name.as_str();
        by_tutor
            .entry(tutor)
            .or_insert_with(|| {
                tutor_order.push(tutor);
                Vec::new()
            })
            .push(session);
    }

    tutor_order.sort_by(|a, b| compare_tutors(a, b));

    let mut ordered = Vec::new();
    let mut tutors = Vec::with_capacity(tutor_order.len());

    for tutor in tutor_order {
        let mut tutor_sessions = by_tutor.remove(tutor).unwrap_or_default();
        let main_group = main_schedule_group(&tutor_sessions);

        tutor_sessions.sort_by(|a, b| compare_in_tutor(a, b, main_group.as_deref()));

        tutors.push(TutorBlock {
            tutor_name: tutor.to_string(),
            main_group,
            len: tutor_sessions.len(),
        });
        ordered.extend(tutor_sessions.into_iter().cloned());
    }

    TimeSlotGroup {
        time_slot: slot.to_string(),
        sessions: ordered,
        tutors,
    }
}

/// Tutor name with a leading `Mr`/`Ms`/`Mrs` removed
pub fn strip_honorific(name: &str) -> &str {
    let trimmed = name.trim();
    match HONORIFIC.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    }
}

fn compare_tutors(a: &str, b: &str) -> Ordering {
    let key_a = strip_honorific(a).to_lowercase();
    let key_b = strip_honorific(b).to_lowercase();
    key_a.cmp(&key_b).then_with(|| a.cmp(b))
}

/// The tutor's regular class: the most frequent schedule group key among
/// Scheduled sessions. Ties go to the key seen first.
pub fn main_schedule_group(sessions: &[&SessionRecord]) -> Option<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for session in sessions.iter().filter(|s| s.session_status == SCHEDULED) {
        let key = session.schedule_group_key();
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (key, count) in counts {
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

/// Display priority of a session within its tutor block; lower first
pub fn display_priority(session: &SessionRecord, main_group: Option<&str>) -> u32 {
    let status = session.session_status.as_str();
    let in_main_group = main_group.is_some_and(|main| session.schedule_group_key() == main);

    match status {
        TRIAL_CLASS => 0,
        SCHEDULED if in_main_group => 1,
        ATTENDED if in_main_group => 2,
        SCHEDULED => 3,
        ATTENDED => 4,
        MAKEUP_CLASS => 5,
        ATTENDED_MAKEUP => 6,
        _ => 10 + u32::from(StatusKind::classify(status).priority()),
    }
}

fn compare_in_tutor(a: &SessionRecord, b: &SessionRecord, main_group: Option<&str>) -> Ordering {
    let pa = display_priority(a, main_group);
    let pb = display_priority(b, main_group);

    pa.cmp(&pb)
        .then_with(|| {
            if pa <= 2 {
                a.school.cmp(&b.school)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| a.school_student_id.cmp(&b.school_student_id))
}

/// Text before the first `-` of a slot label, trimmed
fn slot_start(label: &str) -> &str {
    label.split('-').next().unwrap_or(label).trim()
}

/// Chronological slot order with `"Unscheduled"` always last
pub fn compare_time_slots(a: &str, b: &str) -> Ordering {
    let key = |label: &str| {
        let start = slot_start(label);
        let time = NaiveTime::parse_from_str(start, "%H:%M").ok();
        (label == UNSCHEDULED, time.is_none(), time, start.to_string())
    };
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}

fn compute_stats(sessions: &[SessionRecord]) -> SessionStats {
    let total = sessions.len();
    let completed = sessions
        .iter()
        .filter(|s| matches!(s.session_status.as_str(), ATTENDED | ATTENDED_MAKEUP))
        .count();
    let cancelled = sessions
        .iter()
        .filter(|s| {
            let status = s.session_status.as_str();
            status == CANCELLED
                || status == NO_SHOW
                || status.contains(PENDING_MAKEUP_SUFFIX)
                || status.contains(MAKEUP_BOOKED_SUFFIX)
        })
        .count();

    SessionStats {
        total,
        completed,
        upcoming: total - completed - cancelled,
        cancelled,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Distribution
// ─────────────────────────────────────────────────────────────────────────────

/// Number of sessions carrying one status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Per-status counts ordered by status priority, then name
pub fn status_distribution(sessions: &[SessionRecord]) -> Vec<StatusCount> {
    let mut counts: Vec<StatusCount> = Vec::new();
    for session in sessions {
        match counts.iter_mut().find(|c| c.status == session.session_status) {
            Some(entry) => entry.count += 1,
            None => counts.push(StatusCount {
                status: session.session_status.clone(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| {
        let pa = StatusKind::classify(&a.status).priority();
        let pb = StatusKind::classify(&b.status).priority();
        pa.cmp(&pb).then_with(|| a.status.cmp(&b.status))
    });
    counts
}
