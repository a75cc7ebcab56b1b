use crate::models::{StudentDetails, StudentSummary};
use crate::services::{ApiClient, ApiError};

impl ApiClient {
    /// Profile of the logged-in student
    pub async fn fetch_student_details(&self) -> Result<StudentDetails, ApiError> {
        self.get_json("/all-Details/C-U", &[]).await
    }

    pub async fn fetch_class_roster(&self, semester: u8) -> Result<Vec<StudentSummary>, ApiError> {
        self.get_json("/faculty/students", &[("semester", semester.to_string())])
            .await
    }
}
