// ============================================================================
// PORTAL - store + API client, injected into views through context
// ============================================================================
// Every operation dispatches Pending synchronously, then returns a future
// that performs the request and dispatches Fulfilled/Rejected. The future
// also yields the result so views can chain one-shot feedback (toasts).
// ============================================================================

use std::future::Future;

use crate::config::CONFIG;
use crate::models::{
    ActivitySubmission, AttendanceReceipt, AttendanceRequest, BulkMarksRequest, DownloadedFile,
    FacultyMetrics, LoginRequest, ReviewDecision, ReviewRequest, SavedMarks, SemesterResults,
    SessionCredential, StudentDetails, StudentSummary, Subject, UploadActivityRequest,
};
use crate::services::{ApiClient, ApiError};
use crate::state::academics_slice::AcademicsAction;
use crate::state::activities_slice::ActivitiesAction;
use crate::state::faculty_slice::FacultyAction;
use crate::state::resource::Lifecycle;
use crate::state::results_slice::ResultsAction;
use crate::state::session_slice::SessionAction;
use crate::state::store::{Action, Store};
use crate::state::students_slice::StudentsAction;

#[derive(Clone)]
pub struct Portal {
    store: Store,
    api: ApiClient,
}

impl PartialEq for Portal {
    fn eq(&self, other: &Self) -> bool {
        self.store.ptr_eq(&other.store)
    }
}

impl Portal {
    pub fn new(store: Store, api: ApiClient) -> Self {
        Self { store, api }
    }

    /// Fresh store talking to the configured backend
    pub fn browser() -> Self {
        Self::new(Store::new(), ApiClient::browser())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn run<T, F, W>(
        &self,
        label: &'static str,
        wrap: W,
        request: F,
    ) -> impl Future<Output = Result<T, ApiError>> + 'static
    where
        T: Clone + 'static,
        F: Future<Output = Result<T, ApiError>> + 'static,
        W: Fn(Lifecycle<T>) -> Action + 'static,
    {
        let request_id = self.store.next_request_id();
        self.store.dispatch(wrap(Lifecycle::Pending(request_id)));

        let store = self.store.clone();
        let api = self.api.clone();
        async move {
            match request.await {
                Ok(data) => {
                    log::info!("✅ {} done", label);
                    store.dispatch(wrap(Lifecycle::Fulfilled(request_id, data.clone())));
                    Ok(data)
                }
                Err(err) => {
                    log::warn!("❌ {} failed: {}", label, err);
                    store.dispatch(wrap(Lifecycle::Rejected(request_id, err.to_string())));
                    if err.is_unauthorized() && store.select(|s| s.session.is_logged_in()) {
                        expire_session(&store, &api);
                    }
                    Err(err)
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // session
    // ------------------------------------------------------------------

    /// Reads the persisted credential, if any, into the store
    pub fn restore_session(&self) -> Option<SessionCredential> {
        let credential = self.api.credentials().load()?;
        log::info!("🔑 Restored {} session", credential.role);
        self.store
            .dispatch(Action::Session(SessionAction::Restored(credential.clone())));
        Some(credential)
    }

    pub fn login(
        &self,
        request: LoginRequest,
    ) -> impl Future<Output = Result<SessionCredential, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "login",
            |step| Action::Session(SessionAction::Login(step)),
            async move {
                let credential = api.login(&request).await?;
                if let Err(e) = api.credentials().save(&credential) {
                    log::error!("❌ Could not persist credential: {}", e);
                }
                Ok(credential)
            },
        )
    }

    pub fn logout(&self) {
        log::info!("👋 Logout");
        if let Err(e) = self.api.credentials().clear() {
            log::error!("❌ Could not clear credential: {}", e);
        }
        self.store.dispatch(Action::Session(SessionAction::LoggedOut));
    }

    // ------------------------------------------------------------------
    // academics
    // ------------------------------------------------------------------

    pub fn select_semester(&self, semester: u8) {
        self.store
            .dispatch(Action::Academics(AcademicsAction::SelectSemester(semester)));
    }

    pub fn fetch_curriculum(
        &self,
        semester: u8,
    ) -> impl Future<Output = Result<Vec<Subject>, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "curriculum",
            |step| Action::Academics(AcademicsAction::Curriculum(step)),
            async move { api.fetch_curriculum(semester).await },
        )
    }

    pub fn submit_attendance(
        &self,
        request: AttendanceRequest,
    ) -> impl Future<Output = Result<AttendanceReceipt, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "attendance",
            |step| Action::Academics(AcademicsAction::Attendance(step)),
            async move { api.submit_attendance(&request).await },
        )
    }

    pub fn save_mid_marks(
        &self,
        request: BulkMarksRequest,
    ) -> impl Future<Output = Result<SavedMarks, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "mid marks",
            |step| Action::Academics(AcademicsAction::MidMarks(step)),
            async move { api.save_mid_marks(&request).await },
        )
    }

    // ------------------------------------------------------------------
    // faculty dashboard
    // ------------------------------------------------------------------

    pub fn fetch_pending_approvals(
        &self,
    ) -> impl Future<Output = Result<Vec<ActivitySubmission>, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "pending approvals",
            |step| Action::Faculty(FacultyAction::PendingApprovals(step)),
            async move { api.fetch_pending_approvals().await },
        )
    }

    pub fn fetch_faculty_activities(
        &self,
    ) -> impl Future<Output = Result<Vec<ActivitySubmission>, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "faculty activities",
            |step| Action::Faculty(FacultyAction::Activities(step)),
            async move { api.fetch_faculty_activities().await },
        )
    }

    pub fn fetch_faculty_metrics(
        &self,
    ) -> impl Future<Output = Result<FacultyMetrics, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "faculty metrics",
            |step| Action::Faculty(FacultyAction::Metrics(step)),
            async move { api.fetch_faculty_metrics().await },
        )
    }

    pub fn review_submission(
        &self,
        submission_id: String,
        decision: ReviewDecision,
    ) -> impl Future<Output = Result<ActivitySubmission, ApiError>> + 'static {
        let api = self.api.clone();
        let review = ReviewRequest::from(decision);
        self.run(
            "review",
            |step| Action::Faculty(FacultyAction::Review(step)),
            async move { api.review_submission(&submission_id, &review).await },
        )
    }

    // ------------------------------------------------------------------
    // students
    // ------------------------------------------------------------------

    pub fn fetch_student_details(
        &self,
    ) -> impl Future<Output = Result<StudentDetails, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "student details",
            |step| Action::Students(StudentsAction::Details(step)),
            async move { api.fetch_student_details().await },
        )
    }

    pub fn fetch_roster(
        &self,
        semester: u8,
    ) -> impl Future<Output = Result<Vec<StudentSummary>, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "class roster",
            |step| Action::Students(StudentsAction::Roster(step)),
            async move { api.fetch_class_roster(semester).await },
        )
    }

    // ------------------------------------------------------------------
    // results
    // ------------------------------------------------------------------

    pub fn fetch_results(
        &self,
        semester: u8,
    ) -> impl Future<Output = Result<SemesterResults, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "results",
            |step| Action::Results(ResultsAction::SemesterResults(step)),
            async move { api.fetch_results(semester).await },
        )
    }

    pub fn download_report(
        &self,
        semester: u8,
    ) -> impl Future<Output = Result<DownloadedFile, ApiError>> + 'static {
        let api = self.api.clone();
        let fallback = CONFIG.report_fallback_name.clone();
        self.run(
            "result report",
            |step| Action::Results(ResultsAction::Report(step)),
            async move { api.download_result_report(semester, &fallback).await },
        )
    }

    // ------------------------------------------------------------------
    // activities
    // ------------------------------------------------------------------

    pub fn fetch_my_activities(
        &self,
    ) -> impl Future<Output = Result<Vec<ActivitySubmission>, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "my activities",
            |step| Action::Activities(ActivitiesAction::Mine(step)),
            async move { api.fetch_my_activities().await },
        )
    }

    pub fn upload_activity(
        &self,
        request: UploadActivityRequest,
    ) -> impl Future<Output = Result<ActivitySubmission, ApiError>> + 'static {
        let api = self.api.clone();
        self.run(
            "activity upload",
            |step| Action::Activities(ActivitiesAction::Upload(step)),
            async move { api.upload_activity(&request).await },
        )
    }
}

fn expire_session(store: &Store, api: &ApiClient) {
    log::warn!("🔒 Session rejected by server, logging out");
    if let Err(e) = api.credentials().clear() {
        log::error!("❌ Could not clear credential: {}", e);
    }
    store.dispatch(Action::Session(SessionAction::Expired));
}
