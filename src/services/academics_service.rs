use crate::models::{
    AttendanceReceipt, AttendanceRequest, BulkMarksRequest, CurriculumResponse, SavedMarks,
    Subject,
};
use crate::services::{ApiClient, ApiError};

impl ApiClient {
    /// Subjects of one semester (the `subjects` field of the response)
    pub async fn fetch_curriculum(&self, semester: u8) -> Result<Vec<Subject>, ApiError> {
        let response: CurriculumResponse = self
            .get_json("/api/curriculum", &[("semester", semester.to_string())])
            .await?;
        log::info!("📚 Curriculum S{}: {} subjects", semester, response.subjects.len());
        Ok(response.subjects)
    }

    pub async fn submit_attendance(
        &self,
        request: &AttendanceRequest,
    ) -> Result<AttendanceReceipt, ApiError> {
        log::info!(
            "📝 Attendance for {} on {}: {} records",
            request.subject_code,
            request.date,
            request.records.len()
        );
        self.post_json("/api/attendance", request).await
    }

    pub async fn save_mid_marks(&self, request: &BulkMarksRequest) -> Result<SavedMarks, ApiError> {
        log::info!(
            "💾 Saving {} marks for student {}",
            request.marks.len(),
            request.student_id
        );
        self.post_json("/api/marks/bulk", request).await
    }
}
