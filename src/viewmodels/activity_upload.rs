// ============================================================================
// ACTIVITY UPLOAD VIEWMODEL - form draft -> validated upload request
// ============================================================================
// Per-kind rules: certificate/internship need a proof file, workshop and
// internship need an organizer, internship needs a duration in weeks.
// Nothing is sent while any field error remains.
// ============================================================================

use std::collections::BTreeMap;
use std::future::Future;

use chrono::NaiveDate;

use crate::models::{ActivityKind, ActivitySubmission, FileUpload, UploadActivityRequest};
use crate::services::ApiError;
use crate::state::Portal;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum DraftField {
    Title,
    Image,
    Organizer,
    Date,
    DurationWeeks,
}

/// Validation messages keyed by field, rendered next to each input
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldErrors(BTreeMap<DraftField, String>);

impl FieldErrors {
    pub fn single(field: DraftField, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ActivityDraft {
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub organizer: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub date: String,
    pub duration_weeks: String,
    pub image: Option<FileUpload>,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self {
            kind: ActivityKind::Certificate,
            title: String::new(),
            description: String::new(),
            organizer: String::new(),
            date: String::new(),
            duration_weeks: String::new(),
            image: None,
        }
    }
}

impl ActivityDraft {
    pub fn new(kind: ActivityKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn validate(&self, max_bytes: u64) -> Result<UploadActivityRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(DraftField::Title, "Title is required");
        }

        match &self.image {
            None if self.kind.requires_proof() => {
                errors.insert(
                    DraftField::Image,
                    format!("A proof document is required for a {}", self.kind.as_str()),
                );
            }
            Some(image) => {
                if !is_accepted_type(&image.content_type) {
                    errors.insert(DraftField::Image, "Only images or PDF files are accepted");
                } else if let Err(message) = check_file_size(image.size(), max_bytes) {
                    errors.insert(DraftField::Image, message);
                }
            }
            None => {}
        }

        let organizer = non_blank(&self.organizer);
        if organizer.is_none() && self.kind.requires_organizer() {
            errors.insert(DraftField::Organizer, "Organizer is required");
        }

        let date = match non_blank(&self.date) {
            Some(raw) => match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.insert(DraftField::Date, "Use the YYYY-MM-DD format");
                    None
                }
            },
            None => None,
        };

        let duration_weeks = match non_blank(&self.duration_weeks) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(weeks) if weeks > 0 => Some(weeks),
                _ => {
                    errors.insert(DraftField::DurationWeeks, "Duration must be a positive number of weeks");
                    None
                }
            },
            None => {
                if self.kind == ActivityKind::Internship {
                    errors.insert(DraftField::DurationWeeks, "Duration is required for an internship");
                }
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UploadActivityRequest {
            kind: self.kind,
            title: title.to_string(),
            description: non_blank(&self.description),
            organizer,
            date,
            duration_weeks,
            image: self.image.clone(),
        })
    }

    /// Validates, then starts the upload. Invalid drafts never reach the network.
    pub fn submit(
        &self,
        portal: &Portal,
        max_bytes: u64,
    ) -> Result<impl Future<Output = Result<ActivitySubmission, ApiError>> + 'static, FieldErrors>
    {
        let request = self.validate(max_bytes)?;
        Ok(portal.upload_activity(request))
    }
}

/// Size gate shared by the file picker (before reading) and `validate`
pub fn check_file_size(size: u64, max_bytes: u64) -> Result<(), String> {
    if size > max_bytes {
        Err(format!("File is too large (max {})", human_size(max_bytes)))
    } else {
        Ok(())
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_accepted_type(content_type: &str) -> bool {
    let content_type = content_type.trim().to_ascii_lowercase();
    content_type.starts_with("image/") || content_type == "application/pdf"
}

fn human_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{} MB", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::loopback::LoopbackTransport;
    use crate::services::ApiClient;
    use crate::state::resource::Status;
    use crate::state::Store;
    use crate::utils::storage::MemoryCredentialStore;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    const MAX: u64 = 1024;

    fn file(content_type: &str, size: usize) -> FileUpload {
        FileUpload {
            file_name: "proof".to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0; size],
        }
    }

    #[test]
    fn empty_certificate_reports_title_and_image() {
        let errors = ActivityDraft::new(ActivityKind::Certificate)
            .validate(MAX)
            .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(DraftField::Title), Some("Title is required"));
        assert!(errors.get(DraftField::Image).is_some());
    }

    #[test]
    fn complete_internship_builds_request() {
        let draft = ActivityDraft {
            kind: ActivityKind::Internship,
            title: "  Summer intern  ".to_string(),
            description: "   ".to_string(),
            organizer: "Acme Labs".to_string(),
            date: "2024-06-01".to_string(),
            duration_weeks: "8".to_string(),
            image: Some(file("application/pdf", 100)),
        };

        let request = draft.validate(MAX).unwrap();

        assert_eq!(request.title, "Summer intern");
        assert_eq!(request.description, None);
        assert_eq!(request.organizer.as_deref(), Some("Acme Labs"));
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(request.duration_weeks, Some(8));
    }

    #[test]
    fn internship_needs_organizer_and_duration() {
        let draft = ActivityDraft {
            title: "Intern".to_string(),
            image: Some(file("image/png", 10)),
            ..ActivityDraft::new(ActivityKind::Internship)
        };

        let errors = draft.validate(MAX).unwrap_err();
        let fields: Vec<DraftField> = errors.fields().collect();
        assert_eq!(fields, vec![DraftField::Organizer, DraftField::DurationWeeks]);
    }

    #[test]
    fn zero_weeks_is_rejected() {
        let draft = ActivityDraft {
            title: "Intern".to_string(),
            organizer: "Acme".to_string(),
            duration_weeks: "0".to_string(),
            image: Some(file("image/png", 10)),
            ..ActivityDraft::new(ActivityKind::Internship)
        };
        assert!(draft
            .validate(MAX)
            .unwrap_err()
            .get(DraftField::DurationWeeks)
            .is_some());
    }

    #[test]
    fn competition_without_proof_is_fine() {
        let draft = ActivityDraft {
            title: "Hackathon".to_string(),
            ..ActivityDraft::new(ActivityKind::Competition)
        };
        let request = draft.validate(MAX).unwrap();
        assert!(request.image.is_none());
        assert_eq!(request.organizer, None);
    }

    #[test]
    fn oversized_or_foreign_files_are_rejected() {
        let mut draft = ActivityDraft {
            title: "Cert".to_string(),
            image: Some(file("image/jpeg", 2048)),
            ..ActivityDraft::default()
        };
        assert_eq!(
            draft.validate(MAX).unwrap_err().get(DraftField::Image),
            Some("File is too large (max 1 KB)")
        );

        draft.image = Some(file("application/zip", 10));
        assert_eq!(
            draft.validate(MAX).unwrap_err().get(DraftField::Image),
            Some("Only images or PDF files are accepted")
        );
    }

    #[test]
    fn malformed_date_is_reported() {
        let draft = ActivityDraft {
            title: "Talk".to_string(),
            organizer: "IEEE".to_string(),
            date: "01/06/2024".to_string(),
            ..ActivityDraft::new(ActivityKind::Workshop)
        };
        assert_eq!(
            draft.validate(MAX).unwrap_err().get(DraftField::Date),
            Some("Use the YYYY-MM-DD format")
        );
    }

    #[test]
    fn size_gate_allows_the_limit_and_rejects_one_byte_more() {
        let five_mb = 5 * 1024 * 1024;
        assert_eq!(check_file_size(five_mb, five_mb), Ok(()));
        assert_eq!(
            check_file_size(five_mb + 1, five_mb),
            Err("File is too large (max 5 MB)".to_string())
        );
        assert_eq!(
            FieldErrors::single(DraftField::Image, "too big").get(DraftField::Image),
            Some("too big")
        );
    }

    fn loopback_portal() -> (Portal, Rc<LoopbackTransport>) {
        let transport = LoopbackTransport::new();
        let api = ApiClient::new(
            "http://api.test",
            transport.clone(),
            Rc::new(MemoryCredentialStore::default()),
        );
        (Portal::new(Store::new(), api), transport)
    }

    #[test]
    fn invalid_draft_sends_nothing() {
        let (portal, transport) = loopback_portal();

        let errors = match ActivityDraft::new(ActivityKind::Certificate).submit(&portal, MAX) {
            Ok(_) => panic!("empty certificate must not be submitted"),
            Err(errors) => errors,
        };

        assert_eq!(errors.len(), 2);
        assert!(transport.requests().is_empty());
        assert_eq!(
            portal.store().select(|s| s.activities.upload.status()),
            Status::Idle
        );
    }

    #[test]
    fn valid_draft_posts_one_upload() {
        let (portal, transport) = loopback_portal();
        transport.reply_json(
            201,
            json!({ "id": "a1", "type": "certificate", "title": "Cert", "status": "pending" }),
        );
        let draft = ActivityDraft {
            title: "Cert".to_string(),
            image: Some(file("image/png", 10)),
            ..ActivityDraft::new(ActivityKind::Certificate)
        };

        let upload = match draft.submit(&portal, MAX) {
            Ok(upload) => upload,
            Err(errors) => panic!("unexpected field errors: {:?}", errors),
        };
        let submission = block_on(upload).unwrap();

        assert_eq!(submission.id, "a1");
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://api.test/student/activities/upload");
    }
}
