//! Quick status actions shared by the session list and the detail overlay
//!
//! One declarative table maps a number key to an action, the surfaces it is
//! live on and the literal status it writes. Both key handlers consult it.

use tutordesk_core::status::{
    ATTENDED, NO_SHOW, RESCHEDULED_PENDING, SICK_LEAVE_PENDING, WEATHER_CANCELLED_PENDING,
};

use crate::focus::FocusSection;

/// A named quick status transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    MarkAttended,
    MarkNoShow,
    MarkReschedule,
    MarkSick,
    MarkWeatherCancelled,
}

/// One row of [`QUICK_ACTIONS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickActionSpec {
    pub key: char,
    pub action: QuickAction,
    pub label: &'static str,
    pub target_status: &'static str,
    /// Focus sections where the key triggers this action
    pub surfaces: &'static [FocusSection],
}

const LIST_AND_DETAIL: &[FocusSection] = &[FocusSection::Sessions, FocusSection::Detail];

pub const QUICK_ACTIONS: [QuickActionSpec; 5] = [
    QuickActionSpec {
        key: '1',
        action: QuickAction::MarkAttended,
        label: "Attended",
        target_status: ATTENDED,
        surfaces: LIST_AND_DETAIL,
    },
    QuickActionSpec {
        key: '2',
        action: QuickAction::MarkNoShow,
        label: "No Show",
        target_status: NO_SHOW,
        surfaces: LIST_AND_DETAIL,
    },
    QuickActionSpec {
        key: '3',
        action: QuickAction::MarkReschedule,
        label: "Reschedule",
        target_status: RESCHEDULED_PENDING,
        surfaces: LIST_AND_DETAIL,
    },
    QuickActionSpec {
        key: '4',
        action: QuickAction::MarkSick,
        label: "Sick Leave",
        target_status: SICK_LEAVE_PENDING,
        surfaces: LIST_AND_DETAIL,
    },
    QuickActionSpec {
        key: '5',
        action: QuickAction::MarkWeatherCancelled,
        label: "Weather",
        target_status: WEATHER_CANCELLED_PENDING,
        surfaces: LIST_AND_DETAIL,
    },
];

impl QuickAction {
    /// Table row for this action; rows are in declaration order
    pub fn spec(self) -> &'static QuickActionSpec {
        &QUICK_ACTIONS[self as usize]
    }

    pub fn target_status(self) -> &'static str {
        self.spec().target_status
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

/// The action bound to `key` on `surface`, if any
pub fn lookup(key: char, surface: FocusSection) -> Option<&'static QuickActionSpec> {
    QUICK_ACTIONS
        .iter()
        .find(|spec| spec.key == key && spec.surfaces.contains(&surface))
}
