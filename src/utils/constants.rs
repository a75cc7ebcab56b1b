/// Cookie holding the bearer token
pub const COOKIE_TOKEN: &str = "token";
/// Cookie holding the role tag ("student" | "faculty")
pub const COOKIE_ROLE: &str = "role";

/// localStorage key for the last semester picked on a dashboard
pub const PREF_SELECTED_SEMESTER: &str = "portal_selected_semester";

pub const FIRST_SEMESTER: u8 = 1;
pub const LAST_SEMESTER: u8 = 8;

/// How long a toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 4_000;
