pub mod auth;
pub mod academics;
pub mod activities;
pub mod faculty;
pub mod students;
pub mod results;

pub use auth::{LoginRequest, LoginResponse, Role, SessionCredential};
pub use academics::{
    AttendanceMark, AttendanceReceipt, AttendanceRequest, AttendanceStatus, BulkMarksRequest,
    CurriculumResponse, SavedMarks, Subject, SubjectMark, MAX_MID_MARKS,
};
pub use activities::{
    ActivityKind, ActivityStatus, ActivitySubmission, FileUpload, ReviewDecision, ReviewRequest,
    UploadActivityRequest,
};
pub use faculty::FacultyMetrics;
pub use students::{StudentDetails, StudentSummary};
pub use results::{DownloadedFile, SemesterResults, SubjectResult};
