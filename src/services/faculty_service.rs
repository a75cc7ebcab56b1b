use crate::models::{ActivitySubmission, FacultyMetrics, ReviewRequest};
use crate::services::{ApiClient, ApiError};

impl ApiClient {
    pub async fn fetch_pending_approvals(&self) -> Result<Vec<ActivitySubmission>, ApiError> {
        self.get_json("/faculty/pending-approvals", &[]).await
    }

    pub async fn fetch_faculty_activities(&self) -> Result<Vec<ActivitySubmission>, ApiError> {
        self.get_json("/faculty/activities", &[]).await
    }

    pub async fn fetch_faculty_metrics(&self) -> Result<FacultyMetrics, ApiError> {
        self.get_json("/faculty/metrics", &[]).await
    }

    /// Approve or reject one submission; returns the updated submission
    pub async fn review_submission(
        &self,
        submission_id: &str,
        review: &ReviewRequest,
    ) -> Result<ActivitySubmission, ApiError> {
        log::info!("✅ Review {} -> {:?}", submission_id, review.status);
        let path = format!(
            "/faculty/activities/{}/review",
            urlencoding::encode(submission_id)
        );
        self.patch_json(&path, review).await
    }
}
