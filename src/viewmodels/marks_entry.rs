// ============================================================================
// MARKS ENTRY VIEWMODEL - walk a sorted roster, one student at a time
// ============================================================================
// The draft holds marks for the current student only. A successful save
// clears it and moves on to the next roll number.
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{BulkMarksRequest, SavedMarks, StudentSummary, Subject, SubjectMark, MAX_MID_MARKS};

/// Exam tag sent with bulk mid-semester marks
pub const MID_EXAM: &str = "mid";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarksError {
    #[error("{0} is not a subject of this semester")]
    UnknownSubject(String),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("Marks must be between 0 and {max}")]
    OutOfRange { max: u8 },
    #[error("Missing marks for {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("Every student has been graded")]
    Finished,
}

#[derive(Clone, PartialEq, Debug)]
pub struct MarksEntrySession {
    semester: u8,
    subjects: Vec<Subject>,
    roster: Vec<StudentSummary>,
    current: usize,
    draft: BTreeMap<String, u8>,
}

impl MarksEntrySession {
    pub fn new(semester: u8, subjects: Vec<Subject>, mut roster: Vec<StudentSummary>) -> Self {
        roster.sort_by(|a, b| {
            a.roll_number
                .cmp(&b.roll_number)
                .then_with(|| a.name.cmp(&b.name))
        });
        Self {
            semester,
            subjects,
            roster,
            current: 0,
            draft: BTreeMap::new(),
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn roster(&self) -> &[StudentSummary] {
        &self.roster
    }

    pub fn current_student(&self) -> Option<&StudentSummary> {
        self.roster.get(self.current)
    }

    /// 1-based position for "Student 3 of 40"
    pub fn position(&self) -> (usize, usize) {
        ((self.current + 1).min(self.roster.len()), self.roster.len())
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.roster.len()
    }

    pub fn mark(&self, subject_code: &str) -> Option<u8> {
        self.draft.get(subject_code).copied()
    }

    /// Parses and stores one mark; a blank value clears it
    pub fn set_mark(&mut self, subject_code: &str, raw: &str) -> Result<Option<u8>, MarksError> {
        if !self.subjects.iter().any(|s| s.code == subject_code) {
            return Err(MarksError::UnknownSubject(subject_code.to_string()));
        }
        let raw = raw.trim();
        if raw.is_empty() {
            self.draft.remove(subject_code);
            return Ok(None);
        }
        let value: i64 = raw
            .parse()
            .map_err(|_| MarksError::NotANumber(raw.to_string()))?;
        if !(0..=i64::from(MAX_MID_MARKS)).contains(&value) {
            return Err(MarksError::OutOfRange { max: MAX_MID_MARKS });
        }
        let value = value as u8;
        self.draft.insert(subject_code.to_string(), value);
        Ok(Some(value))
    }

    pub fn to_request(&self) -> Result<BulkMarksRequest, MarksError> {
        let student = self.current_student().ok_or(MarksError::Finished)?;

        let missing: Vec<String> = self
            .subjects
            .iter()
            .filter(|s| !self.draft.contains_key(&s.code))
            .map(|s| s.code.clone())
            .collect();
        if !missing.is_empty() {
            return Err(MarksError::Missing(missing));
        }

        Ok(BulkMarksRequest {
            student_id: student.id.clone(),
            semester: self.semester,
            exam: MID_EXAM.to_string(),
            marks: self
                .subjects
                .iter()
                .filter_map(|s| {
                    self.draft.get(&s.code).map(|&marks| SubjectMark {
                        subject_code: s.code.clone(),
                        marks,
                    })
                })
                .collect(),
        })
    }

    /// Clears the draft and advances after the server stored the marks
    pub fn on_saved(&mut self, saved: &SavedMarks) {
        if saved.count != self.draft.len() {
            log::warn!(
                "⚠️ Server stored {} marks, {} were sent",
                saved.count,
                self.draft.len()
            );
        }
        self.advance();
    }

    /// Moves on without saving
    pub fn skip(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.draft.clear();
        if !self.is_complete() {
            self.current += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::loopback::LoopbackTransport;
    use crate::services::ApiClient;
    use crate::state::{Portal, Store};
    use crate::utils::storage::MemoryCredentialStore;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn subjects(count: usize) -> Vec<Subject> {
        (1..=count)
            .map(|i| Subject {
                code: format!("CS50{}", i),
                name: format!("Subject {}", i),
                credits: 4,
                semester: 5,
                faculty: None,
            })
            .collect()
    }

    fn student(id: &str, roll: &str) -> StudentSummary {
        StudentSummary {
            id: id.to_string(),
            roll_number: roll.to_string(),
            name: id.to_uppercase(),
            semester: 5,
        }
    }

    fn session() -> MarksEntrySession {
        MarksEntrySession::new(
            5,
            subjects(6),
            vec![student("zoe", "21CS003"), student("amir", "21CS001"), student("li", "21CS002")],
        )
    }

    #[test]
    fn roster_is_sorted_by_roll_number() {
        let session = session();
        let rolls: Vec<&str> = session.roster().iter().map(|s| s.roll_number.as_str()).collect();
        assert_eq!(rolls, vec!["21CS001", "21CS002", "21CS003"]);
        assert_eq!(session.current_student().map(|s| s.id.as_str()), Some("amir"));
        assert_eq!(session.position(), (1, 3));
    }

    #[test]
    fn marks_outside_range_are_refused() {
        let mut session = session();
        assert_eq!(
            session.set_mark("CS501", "31"),
            Err(MarksError::OutOfRange { max: 30 })
        );
        assert_eq!(session.set_mark("CS501", "-1"), Err(MarksError::OutOfRange { max: 30 }));
        assert_eq!(
            session.set_mark("CS501", "ten"),
            Err(MarksError::NotANumber("ten".to_string()))
        );
        assert_eq!(
            session.set_mark("MA999", "10"),
            Err(MarksError::UnknownSubject("MA999".to_string()))
        );
        assert_eq!(session.set_mark("CS501", " 0 "), Ok(Some(0)));
        assert_eq!(session.set_mark("CS501", ""), Ok(None));
        assert_eq!(session.mark("CS501"), None);
    }

    #[test]
    fn incomplete_draft_names_missing_subjects() {
        let mut session = session();
        for code in ["CS501", "CS502", "CS503", "CS504"] {
            session.set_mark(code, "20").unwrap();
        }
        assert_eq!(
            session.to_request(),
            Err(MarksError::Missing(vec!["CS505".to_string(), "CS506".to_string()]))
        );
        assert_eq!(
            MarksError::Missing(vec!["CS505".to_string(), "CS506".to_string()]).to_string(),
            "Missing marks for CS505, CS506"
        );
    }

    #[test]
    fn saving_six_marks_advances_to_next_student() {
        let transport = LoopbackTransport::new();
        let api = ApiClient::new(
            "http://api.test",
            transport.clone(),
            Rc::new(MemoryCredentialStore::default()),
        );
        let portal = Portal::new(Store::new(), api);
        transport.reply_json(200, json!({ "count": 6 }));

        let mut session = session();
        for (i, subject) in subjects(6).iter().enumerate() {
            session.set_mark(&subject.code, &(i * 6).to_string()).unwrap();
        }
        let request = session.to_request().unwrap();
        assert_eq!(request.student_id, "amir");
        assert_eq!(request.marks.len(), 6);
        assert!(request.marks.iter().all(|m| m.marks <= MAX_MID_MARKS));

        let saved = block_on(portal.save_mid_marks(request)).unwrap();
        assert_eq!(saved, SavedMarks { count: 6 });
        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/marks/bulk"
        );

        session.on_saved(&saved);
        assert_eq!(session.mark("CS501"), None);
        assert_eq!(session.current_student().map(|s| s.id.as_str()), Some("li"));
        assert_eq!(
            portal.store().select(|s| s.academics.mid_marks.data().cloned()),
            Some(SavedMarks { count: 6 })
        );
    }

    #[test]
    fn completes_after_last_student() {
        let mut session = session();
        session.skip();
        session.skip();
        assert!(!session.is_complete());
        session.skip();
        assert!(session.is_complete());
        assert_eq!(session.to_request(), Err(MarksError::Finished));
        session.skip();
        assert_eq!(session.position(), (3, 3));
    }
}
