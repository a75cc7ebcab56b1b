use crate::models::{ActivitySubmission, UploadActivityRequest};
use crate::services::{ApiClient, ApiError, MultipartForm};

impl ApiClient {
    pub async fn fetch_my_activities(&self) -> Result<Vec<ActivitySubmission>, ApiError> {
        self.get_json("/student/activities", &[]).await
    }

    pub async fn upload_activity(
        &self,
        request: &UploadActivityRequest,
    ) -> Result<ActivitySubmission, ApiError> {
        log::info!("📤 Uploading {} \"{}\"", request.kind.as_str(), request.title);
        self.post_multipart("/student/activities/upload", upload_form(request))
            .await
    }
}

/// Multipart layout: `image` file part plus type-specific text fields
pub fn upload_form(request: &UploadActivityRequest) -> MultipartForm {
    let mut form = MultipartForm::new()
        .text("type", request.kind.as_str())
        .text("title", request.title.clone());
    if let Some(description) = &request.description {
        form = form.text("description", description.clone());
    }
    if let Some(organizer) = &request.organizer {
        form = form.text("organizer", organizer.clone());
    }
    if let Some(date) = request.date {
        form = form.text("date", date.format("%Y-%m-%d").to_string());
    }
    if let Some(weeks) = request.duration_weeks {
        form = form.text("duration_weeks", weeks.to_string());
    }
    if let Some(image) = &request.image {
        form = form.file("image", image.clone());
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, FileUpload};
    use chrono::NaiveDate;

    #[test]
    fn internship_form_carries_type_specific_fields() {
        let request = UploadActivityRequest {
            kind: ActivityKind::Internship,
            title: "Backend intern".to_string(),
            description: None,
            organizer: Some("Acme".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 6, 1),
            duration_weeks: Some(8),
            image: Some(FileUpload {
                file_name: "offer.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: vec![1, 2, 3],
            }),
        };

        let form = upload_form(&request);
        assert_eq!(form.field("type"), Some("internship"));
        assert_eq!(form.field("organizer"), Some("Acme"));
        assert_eq!(form.field("date"), Some("2024-06-01"));
        assert_eq!(form.field("duration_weeks"), Some("8"));
        assert_eq!(form.field("description"), None);
        assert_eq!(form.files.len(), 1);
        assert_eq!(form.files[0].0, "image");
    }
}
