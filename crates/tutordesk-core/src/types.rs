//! Domain records delivered by the backend
//!
//! These are read-only snapshots: the front end never mutates a record in
//! place, it asks the backend for a status change and receives a fresh copy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Backend identifier of a session
pub type SessionId = i64;

/// Label used for sessions without a time slot
pub const UNSCHEDULED: &str = "Unscheduled";

/// One scheduled tutoring session for one student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,

    /// Lifecycle status, e.g. `"Scheduled"` or `"Sick Leave - Pending Make-up"`
    pub session_status: String,

    /// `"HH:MM - HH:MM"`; absent for unscheduled sessions
    #[serde(default)]
    pub time_slot: Option<String>,

    #[serde(default)]
    pub tutor_name: String,

    #[serde(default)]
    pub student_name: String,

    #[serde(default)]
    pub school_student_id: String,

    #[serde(default)]
    pub school: String,

    #[serde(default)]
    pub grade: String,

    #[serde(default)]
    pub lang_stream: String,

    #[serde(default)]
    pub session_date: Option<NaiveDate>,

    /// The session this one makes up for
    #[serde(default)]
    pub make_up_for_id: Option<SessionId>,

    /// The make-up session booked for this one
    #[serde(default)]
    pub rescheduled_to_id: Option<SessionId>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl SessionRecord {
    /// Minimal record; remaining fields are blank
    pub fn new(id: SessionId, status: impl Into<String>) -> Self {
        Self {
            id,
            session_status: status.into(),
            time_slot: None,
            tutor_name: String::new(),
            student_name: String::new(),
            school_student_id: String::new(),
            school: String::new(),
            grade: String::new(),
            lang_stream: String::new(),
            session_date: None,
            make_up_for_id: None,
            rescheduled_to_id: None,
            notes: None,
        }
    }

    pub fn with_time_slot(mut self, slot: impl Into<String>) -> Self {
        self.time_slot = Some(slot.into());
        self
    }

    pub fn with_tutor(mut self, tutor: impl Into<String>) -> Self {
        self.tutor_name = tutor.into();
        self
    }

    pub fn with_student(mut self, name: impl Into<String>, school_student_id: impl Into<String>) -> Self {
        self.student_name = name.into();
        self.school_student_id = school_student_id.into();
        self
    }

    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = school.into();
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>, lang_stream: impl Into<String>) -> Self {
        self.grade = grade.into();
        self.lang_stream = lang_stream.into();
        self
    }

    /// Time slot label, with absent or blank slots reported as `"Unscheduled"`
    pub fn time_slot_label(&self) -> &str {
        match self.time_slot.as_deref().map(str::trim) {
            Some(slot) if !slot.is_empty() => slot,
            _ => UNSCHEDULED,
        }
    }

    /// Compound key used to find a tutor's regular class
    pub fn schedule_group_key(&self) -> String {
        format!("{}{}", self.grade, self.lang_stream)
    }

    /// Short `"F2E"`-style label for list rows
    pub fn grade_label(&self) -> String {
        self.schedule_group_key()
    }
}

/// An upcoming school test shown in the tests panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEvent {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub grade: String,
    pub test_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_time_slot_is_unscheduled() {
        let session = SessionRecord::new(1, "Scheduled");
        assert_eq!(session.time_slot_label(), UNSCHEDULED);

        let blank = SessionRecord::new(2, "Scheduled").with_time_slot("   ");
        assert_eq!(blank.time_slot_label(), UNSCHEDULED);

        let slotted = SessionRecord::new(3, "Scheduled").with_time_slot("09:00 - 10:30");
        assert_eq!(slotted.time_slot_label(), "09:00 - 10:30");
    }

    #[test]
    fn test_schedule_group_key_concatenates_grade_and_stream() {
        let session = SessionRecord::new(1, "Scheduled").with_grade("F2", "E");
        assert_eq!(session.schedule_group_key(), "F2E");
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{"id": 12, "session_status": "Attended"}"#;
        let session: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, 12);
        assert_eq!(session.tutor_name, "");
        assert!(session.time_slot.is_none());
        assert!(session.session_date.is_none());
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 5,
            "session_status": "Sick Leave - Make-up Booked",
            "time_slot": "16:45 - 18:15",
            "tutor_name": "Mr. Wong",
            "student_name": "Chan Tai Man",
            "school_student_id": "1042",
            "school": "SKH",
            "grade": "F3",
            "lang_stream": "C",
            "session_date": "2026-10-19",
            "rescheduled_to_id": 88
        }"#;
        let session: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(session.rescheduled_to_id, Some(88));
        assert_eq!(
            session.session_date,
            NaiveDate::from_ymd_opt(2026, 10, 19)
        );
        assert_eq!(session.schedule_group_key(), "F3C");
    }
}
