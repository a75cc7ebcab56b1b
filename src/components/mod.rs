pub mod app;
pub mod login_form;
pub mod status_panel;
pub mod toasts;
pub mod semester_select;
pub mod student_dashboard;
pub mod activity_upload_form;
pub mod faculty_dashboard;
pub mod attendance_form;
pub mod marks_entry;

pub use app::App;
pub use login_form::LoginForm;
pub use status_panel::{PanelState, StatusPanel};
pub use toasts::ToastProvider;
pub use semester_select::SemesterSelect;
pub use student_dashboard::StudentDashboard;
pub use activity_upload_form::ActivityUploadForm;
pub use faculty_dashboard::FacultyDashboard;
pub use attendance_form::AttendanceForm;
pub use marks_entry::MarksEntry;
