use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Certificate,
    Workshop,
    Internship,
    Competition,
    Volunteering,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::Certificate,
        ActivityKind::Workshop,
        ActivityKind::Internship,
        ActivityKind::Competition,
        ActivityKind::Volunteering,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Certificate => "certificate",
            ActivityKind::Workshop => "workshop",
            ActivityKind::Internship => "internship",
            ActivityKind::Competition => "competition",
            ActivityKind::Volunteering => "volunteering",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Certificate => "Certificate",
            ActivityKind::Workshop => "Workshop",
            ActivityKind::Internship => "Internship",
            ActivityKind::Competition => "Competition",
            ActivityKind::Volunteering => "Volunteering",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }

    /// Kinds that cannot be submitted without a proof document
    pub fn requires_proof(&self) -> bool {
        matches!(self, ActivityKind::Certificate | ActivityKind::Internship)
    }

    pub fn requires_organizer(&self) -> bool {
        matches!(self, ActivityKind::Workshop | ActivityKind::Internship)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ActivitySubmission {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub status: ActivityStatus,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// File picked in a form, already read into memory
#[derive(Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Validated upload, ready to be sent as multipart
#[derive(Clone, PartialEq, Debug)]
pub struct UploadActivityRequest {
    pub kind: ActivityKind,
    pub title: String,
    pub description: Option<String>,
    pub organizer: Option<String>,
    pub date: Option<NaiveDate>,
    pub duration_weeks: Option<u32>,
    pub image: Option<FileUpload>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ReviewDecision {
    Approve,
    Reject { remarks: String },
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ReviewRequest {
    pub status: ActivityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl From<ReviewDecision> for ReviewRequest {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approve => ReviewRequest {
                status: ActivityStatus::Approved,
                remarks: None,
            },
            ReviewDecision::Reject { remarks } => ReviewRequest {
                status: ActivityStatus::Rejected,
                remarks: Some(remarks).filter(|r| !r.trim().is_empty()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_reads_type_field() {
        let json = r#"{
            "id": "a1",
            "type": "workshop",
            "title": "Rust 101",
            "status": "pending",
            "date": "2024-02-10"
        }"#;
        let submission: ActivitySubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.kind, ActivityKind::Workshop);
        assert_eq!(submission.status, ActivityStatus::Pending);
        assert_eq!(submission.date, NaiveDate::from_ymd_opt(2024, 2, 10));
        assert!(submission.remarks.is_none());
    }

    #[test]
    fn blank_rejection_remarks_are_dropped() {
        let request = ReviewRequest::from(ReviewDecision::Reject {
            remarks: "  ".to_string(),
        });
        assert_eq!(request.status, ActivityStatus::Rejected);
        assert_eq!(request.remarks, None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "status": "rejected" })
        );
    }
}
