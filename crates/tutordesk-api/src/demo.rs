//! Seed data for `--demo`

use chrono::{Days, NaiveDate};

use tutordesk_core::{SessionId, SessionRecord, TestEvent};

/// (slot, tutor, student, id, school, grade, stream, status)
type Row = (
    Option<&'static str>,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const DAY: &[Row] = &[
    (Some("09:00 - 10:30"), "Ms. Chan", "Ho Ka Yan", "1021", "SKH", "F1", "E", "Attended"),
    (Some("09:00 - 10:30"), "Ms. Chan", "Lam Tsz Ching", "1034", "SKH", "F1", "E", "Scheduled"),
    (Some("09:00 - 10:30"), "Ms. Chan", "Wong Hoi Lam", "1007", "DBS", "F1", "E", "Scheduled"),
    (Some("09:00 - 10:30"), "Ms. Chan", "Ng Chi Fung", "1102", "DBS", "F2", "E", "Make-up Class"),
    (Some("09:00 - 10:30"), "Mr. Wong", "Cheung Wai", "1055", "LSC", "F3", "C", "Trial Class"),
    (Some("09:00 - 10:30"), "Mr. Wong", "Lee Ming", "1060", "LSC", "F3", "C", "Scheduled"),
    (Some("11:00 - 12:30"), "Mrs. Au", "Tam Hiu Tung", "1088", "SPCC", "F4", "E", "No Show"),
    (Some("11:00 - 12:30"), "Mrs. Au", "Yip Sze Wan", "1091", "SPCC", "F4", "E", "Scheduled"),
    (Some("11:00 - 12:30"), "Mrs. Au", "Fung Long", "1093", "SPCC", "F4", "E", "Sick Leave - Pending Make-up"),
    (Some("14:00 - 15:30"), "Mr. Lee", "Kwok Yan", "1110", "QC", "F5", "C", "Scheduled"),
    (Some("14:00 - 15:30"), "Mr. Lee", "Siu Man", "1112", "QC", "F5", "C", "Rescheduled - Make-up Booked"),
    (Some("14:00 - 15:30"), "Mr. Lee", "Chow Ho", "1115", "QC", "F5", "C", "Attended (Make-up)"),
    (Some("16:45 - 18:15"), "Ms. Chan", "Leung Pak", "1120", "DBS", "F2", "E", "Scheduled"),
    (Some("16:45 - 18:15"), "Ms. Chan", "Mak Yee", "1121", "DBS", "F2", "E", "Weather Cancelled - Pending Make-up"),
    (Some("16:45 - 18:15"), "Ms. Chan", "So Ting", "1125", "SKH", "F2", "E", "Cancelled"),
    (None, "", "Hui Lok", "1130", "LSC", "F6", "E", "Rescheduled - Pending Make-up"),
];

/// A realistic day of sessions on `date`
pub fn demo_sessions(date: NaiveDate) -> Vec<SessionRecord> {
    DAY.iter()
        .enumerate()
        .map(
            |(i, &(slot, tutor, student, ssid, school, grade, stream, status))| {
                let mut session = SessionRecord::new(1000 + i as SessionId, status)
                    .with_tutor(tutor)
                    .with_student(student, ssid)
                    .with_school(school)
                    .with_grade(grade, stream);
                session.time_slot = slot.map(String::from);
                session.session_date = Some(date);
                session
            },
        )
        .collect()
}

/// A few upcoming school tests after `date`
pub fn demo_tests(date: NaiveDate) -> Vec<TestEvent> {
    [
        (1, "Mid-term Mathematics", "SKH", "F1", 3),
        (2, "English Oral", "DBS", "F2", 6),
        (3, "Chemistry Quiz", "QC", "F5", 9),
        (4, "Chinese Dictation", "SPCC", "F4", 12),
    ]
    .into_iter()
    .map(|(id, title, school, grade, offset)| TestEvent {
        id,
        title: title.to_string(),
        school: school.to_string(),
        grade: grade.to_string(),
        test_date: date.checked_add_days(Days::new(offset)).unwrap_or(date),
    })
    .collect()
}
