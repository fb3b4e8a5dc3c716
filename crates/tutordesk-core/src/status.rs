//! Session status classification
//!
//! Every status string is first classified into a [`StatusKind`]; the sort
//! priority, display glyph, display color and markability are all derived from
//! that single classification so they can never disagree. Unknown strings
//! classify as [`StatusKind::Unknown`] and get the documented defaults.

use serde::{Deserialize, Serialize};

pub const SCHEDULED: &str = "Scheduled";
pub const TRIAL_CLASS: &str = "Trial Class";
pub const MAKEUP_CLASS: &str = "Make-up Class";
pub const ATTENDED: &str = "Attended";
pub const ATTENDED_MAKEUP: &str = "Attended (Make-up)";
pub const ATTENDED_TRIAL: &str = "Attended (Trial)";
pub const NO_SHOW: &str = "No Show";
pub const CANCELLED: &str = "Cancelled";
pub const RESCHEDULED_PENDING: &str = "Rescheduled - Pending Make-up";
pub const SICK_LEAVE_PENDING: &str = "Sick Leave - Pending Make-up";
pub const WEATHER_CANCELLED_PENDING: &str = "Weather Cancelled - Pending Make-up";
pub const RESCHEDULED_BOOKED: &str = "Rescheduled - Make-up Booked";
pub const SICK_LEAVE_BOOKED: &str = "Sick Leave - Make-up Booked";
pub const WEATHER_CANCELLED_BOOKED: &str = "Weather Cancelled - Make-up Booked";

/// Suffix shared by every "waiting for a make-up" status
pub const PENDING_MAKEUP_SUFFIX: &str = "Pending Make-up";

/// Suffix shared by every "make-up already booked" status
pub const MAKEUP_BOOKED_SUFFIX: &str = "Make-up Booked";

/// The closed status vocabulary, in priority order
pub const STATUS_VOCABULARY: [&str; 14] = [
    TRIAL_CLASS,
    SCHEDULED,
    MAKEUP_CLASS,
    ATTENDED,
    ATTENDED_MAKEUP,
    ATTENDED_TRIAL,
    NO_SHOW,
    RESCHEDULED_PENDING,
    SICK_LEAVE_PENDING,
    WEATHER_CANCELLED_PENDING,
    RESCHEDULED_BOOKED,
    SICK_LEAVE_BOOKED,
    WEATHER_CANCELLED_BOOKED,
    CANCELLED,
];

/// Priority given to statuses outside the vocabulary
pub const UNKNOWN_PRIORITY: u8 = 99;

/// Why a session needs (or got) a make-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MakeupReason {
    Rescheduled,
    SickLeave,
    WeatherCancelled,
}

impl MakeupReason {
    fn parse(reason: &str) -> Option<Self> {
        match reason.trim() {
            "Rescheduled" => Some(Self::Rescheduled),
            "Sick Leave" => Some(Self::SickLeave),
            "Weather Cancelled" => Some(Self::WeatherCancelled),
            _ => None,
        }
    }

    /// Offset within the pending/booked priority bands
    fn offset(self) -> u8 {
        match self {
            Self::Rescheduled => 0,
            Self::SickLeave => 1,
            Self::WeatherCancelled => 2,
        }
    }
}

/// Classification of a raw status string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Scheduled,
    TrialClass,
    MakeupClass,
    Attended,
    AttendedMakeup,
    AttendedTrial,
    NoShow,
    Cancelled,
    /// `"<reason> - Pending Make-up"`; `None` when the reason is not recognised
    PendingMakeup(Option<MakeupReason>),
    /// `"<reason> - Make-up Booked"`; `None` when the reason is not recognised
    MakeupBooked(Option<MakeupReason>),
    Unknown,
}

/// Semantic color class for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Success,
    Error,
    Warning,
    Accent,
    Dim,
}

impl StatusKind {
    /// Classify a raw status string. Never fails.
    pub fn classify(status: &str) -> Self {
        match status {
            SCHEDULED => return Self::Scheduled,
            TRIAL_CLASS => return Self::TrialClass,
            MAKEUP_CLASS => return Self::MakeupClass,
            ATTENDED => return Self::Attended,
            ATTENDED_MAKEUP => return Self::AttendedMakeup,
            ATTENDED_TRIAL => return Self::AttendedTrial,
            NO_SHOW => return Self::NoShow,
            CANCELLED => return Self::Cancelled,
            _ => {}
        }

        if let Some(reason) = status.strip_suffix(PENDING_MAKEUP_SUFFIX) {
            return Self::PendingMakeup(parse_reason_prefix(reason));
        }
        if let Some(reason) = status.strip_suffix(MAKEUP_BOOKED_SUFFIX) {
            return Self::MakeupBooked(parse_reason_prefix(reason));
        }

        Self::Unknown
    }

    /// Sort priority; lower is shown first
    pub fn priority(self) -> u8 {
        match self {
            Self::TrialClass => 1,
            Self::Scheduled => 2,
            Self::MakeupClass => 3,
            Self::Attended => 4,
            Self::AttendedMakeup | Self::AttendedTrial => 5,
            Self::NoShow => 6,
            Self::PendingMakeup(Some(reason)) => 7 + reason.offset(),
            Self::MakeupBooked(Some(reason)) => 10 + reason.offset(),
            Self::Cancelled => 13,
            Self::PendingMakeup(None) | Self::MakeupBooked(None) | Self::Unknown => {
                UNKNOWN_PRIORITY
            }
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Attended | Self::AttendedMakeup | Self::AttendedTrial => '✓',
            Self::Scheduled => '○',
            Self::TrialClass => '◐',
            Self::MakeupClass => '↻',
            Self::NoShow | Self::Cancelled => '✗',
            Self::PendingMakeup(_) => '⋯',
            Self::MakeupBooked(_) => '◷',
            Self::Unknown => '•',
        }
    }

    pub fn color(self) -> StatusColor {
        match self {
            Self::Attended | Self::AttendedMakeup | Self::AttendedTrial => StatusColor::Success,
            Self::NoShow | Self::Cancelled => StatusColor::Error,
            Self::PendingMakeup(_) => StatusColor::Warning,
            Self::Scheduled | Self::TrialClass | Self::MakeupClass | Self::MakeupBooked(_) => {
                StatusColor::Accent
            }
            Self::Unknown => StatusColor::Dim,
        }
    }

    /// Whether a quick attendance-outcome action may be applied
    pub fn is_markable(self) -> bool {
        matches!(self, Self::Scheduled | Self::TrialClass | Self::MakeupClass)
    }

    /// Counted as a completed lesson in the header stats
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Attended | Self::AttendedMakeup)
    }
}

/// `"Sick Leave - "` → `Some(SickLeave)`
fn parse_reason_prefix(prefix: &str) -> Option<MakeupReason> {
    let reason = prefix.trim_end().strip_suffix('-')?;
    MakeupReason::parse(reason)
}

pub fn status_priority(status: &str) -> u8 {
    StatusKind::classify(status).priority()
}

pub fn status_glyph(status: &str) -> char {
    StatusKind::classify(status).glyph()
}

pub fn status_color(status: &str) -> StatusColor {
    StatusKind::classify(status).color()
}

pub fn is_markable(status: &str) -> bool {
    StatusKind::classify(status).is_markable()
}
