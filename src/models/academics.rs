use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound for a mid-semester exam mark
pub const MAX_MID_MARKS: u8 = 30;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Subject {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub credits: u8,
    #[serde(default)]
    pub semester: u8,
    #[serde(default)]
    pub faculty: Option<String>,
}

/// `GET /api/curriculum` wraps the subject list
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CurriculumResponse {
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AttendanceMark {
    pub student_id: String,
    pub status: AttendanceStatus,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AttendanceRequest {
    pub subject_code: String,
    pub semester: u8,
    pub date: NaiveDate,
    pub records: Vec<AttendanceMark>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AttendanceReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recorded: usize,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SubjectMark {
    pub subject_code: String,
    pub marks: u8,
}

/// Body of `POST /api/marks/bulk`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BulkMarksRequest {
    pub student_id: String,
    pub semester: u8,
    pub exam: String,
    pub marks: Vec<SubjectMark>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SavedMarks {
    pub count: usize,
}
