// ============================================================================
// ATTENDANCE VIEWMODEL - one subject, one date, whole roster
// ============================================================================

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{AttendanceMark, AttendanceRequest, AttendanceStatus, StudentSummary};

/// Everyone starts present; the faculty member ticks the absentees
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AttendanceDraft {
    pub subject_code: String,
    pub semester: u8,
    pub date: String,
    roster: Vec<StudentSummary>,
    absent: BTreeSet<String>,
}

impl AttendanceDraft {
    pub fn new(semester: u8, roster: Vec<StudentSummary>) -> Self {
        Self {
            semester,
            roster,
            ..Self::default()
        }
    }

    pub fn roster(&self) -> &[StudentSummary] {
        &self.roster
    }

    /// Replaces the roster, forgetting marks of students no longer listed
    pub fn set_roster(&mut self, roster: Vec<StudentSummary>) {
        self.absent
            .retain(|id| roster.iter().any(|student| &student.id == id));
        self.roster = roster;
    }

    pub fn status_of(&self, student_id: &str) -> AttendanceStatus {
        if self.absent.contains(student_id) {
            AttendanceStatus::Absent
        } else {
            AttendanceStatus::Present
        }
    }

    pub fn mark(&mut self, student_id: &str, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Absent => {
                self.absent.insert(student_id.to_string());
            }
            AttendanceStatus::Present => {
                self.absent.remove(student_id);
            }
        }
    }

    pub fn toggle(&mut self, student_id: &str) {
        let next = match self.status_of(student_id) {
            AttendanceStatus::Present => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Present,
        };
        self.mark(student_id, next);
    }

    pub fn mark_all(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.absent.clear(),
            AttendanceStatus::Absent => {
                self.absent = self.roster.iter().map(|s| s.id.clone()).collect();
            }
        }
    }

    pub fn present_count(&self) -> usize {
        self.roster
            .iter()
            .filter(|s| !self.absent.contains(&s.id))
            .count()
    }

    pub fn to_request(&self) -> Result<AttendanceRequest, String> {
        let subject_code = self.subject_code.trim();
        if subject_code.is_empty() {
            return Err("Select a subject".to_string());
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Pick a valid date".to_string())?;
        if self.roster.is_empty() {
            return Err("No students to mark".to_string());
        }

        Ok(AttendanceRequest {
            subject_code: subject_code.to_string(),
            semester: self.semester,
            date,
            records: self
                .roster
                .iter()
                .map(|student| AttendanceMark {
                    student_id: student.id.clone(),
                    status: self.status_of(&student.id),
                })
                .collect(),
        })
    }
}
