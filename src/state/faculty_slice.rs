// ============================================================================
// FACULTY SLICE - dashboard data and approval workflow
// ============================================================================

use crate::models::{ActivitySubmission, FacultyMetrics};
use crate::state::resource::{Lifecycle, Resource};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct FacultySlice {
    pub pending_approvals: Resource<Vec<ActivitySubmission>>,
    pub activities: Resource<Vec<ActivitySubmission>>,
    pub metrics: Resource<FacultyMetrics>,
    pub review: Resource<ActivitySubmission>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FacultyAction {
    PendingApprovals(Lifecycle<Vec<ActivitySubmission>>),
    Activities(Lifecycle<Vec<ActivitySubmission>>),
    Metrics(Lifecycle<FacultyMetrics>),
    Review(Lifecycle<ActivitySubmission>),
}

impl FacultySlice {
    pub fn reduce(&mut self, action: FacultyAction) -> bool {
        match action {
            FacultyAction::PendingApprovals(step) => self.pending_approvals.apply(step),
            FacultyAction::Activities(step) => self.activities.apply(step),
            FacultyAction::Metrics(step) => self.metrics.apply(step),
            FacultyAction::Review(step) => {
                let reviewed_id = match &step {
                    Lifecycle::Fulfilled(_, submission) => Some(submission.id.clone()),
                    _ => None,
                };
                let applied = self.review.apply(step);
                // A committed review leaves the queue even when a newer
                // review owns the `review` flags
                let dequeued = match (reviewed_id, self.pending_approvals.data_mut()) {
                    (Some(id), Some(queue)) => {
                        let before = queue.len();
                        queue.retain(|s| s.id != id);
                        queue.len() != before
                    }
                    _ => false,
                };
                applied || dequeued
            }
        }
    }
}
