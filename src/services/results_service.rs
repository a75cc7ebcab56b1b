use crate::models::{DownloadedFile, SemesterResults};
use crate::services::{ApiClient, ApiError};

impl ApiClient {
    pub async fn fetch_results(&self, semester: u8) -> Result<SemesterResults, ApiError> {
        self.get_json("/api/results", &[("semester", semester.to_string())])
            .await
    }

    /// PDF report for one semester
    pub async fn download_result_report(
        &self,
        semester: u8,
        fallback_name: &str,
    ) -> Result<DownloadedFile, ApiError> {
        let file = self
            .download(
                "/api/results/report",
                &[("semester", semester.to_string())],
                fallback_name,
            )
            .await?;
        log::info!("📄 Report {} ({} bytes)", file.file_name, file.bytes.len());
        Ok(file)
    }
}
