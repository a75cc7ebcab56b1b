// ============================================================================
// VIEWMODELS - form drafts and their validation, no browser access
// ============================================================================

pub mod activity_upload;
pub mod attendance;
pub mod marks_entry;
pub mod login;

pub use activity_upload::{check_file_size, ActivityDraft, DraftField, FieldErrors};
pub use attendance::AttendanceDraft;
pub use marks_entry::{MarksEntrySession, MarksError, MID_EXAM};
pub use login::LoginDraft;
