use serde::{Deserialize, Serialize};

/// Counters shown on the faculty dashboard
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct FacultyMetrics {
    pub total_students: u32,
    pub pending_approvals: u32,
    pub approved_this_month: u32,
    pub rejected_this_month: u32,
    pub average_attendance: f32,
}
