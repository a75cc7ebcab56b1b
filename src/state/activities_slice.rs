// ============================================================================
// ACTIVITIES SLICE - the student's own submissions
// ============================================================================

use crate::models::ActivitySubmission;
use crate::state::resource::{Lifecycle, Resource};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ActivitiesSlice {
    pub mine: Resource<Vec<ActivitySubmission>>,
    pub upload: Resource<ActivitySubmission>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActivitiesAction {
    Mine(Lifecycle<Vec<ActivitySubmission>>),
    Upload(Lifecycle<ActivitySubmission>),
}

impl ActivitiesSlice {
    pub fn reduce(&mut self, action: ActivitiesAction) -> bool {
        match action {
            ActivitiesAction::Mine(step) => self.mine.apply(step),
            ActivitiesAction::Upload(step) => {
                let uploaded = match &step {
                    Lifecycle::Fulfilled(_, submission) => Some(submission.clone()),
                    _ => None,
                };
                let applied = self.upload.apply(step);
                // Every stored upload is listed, whichever request settles last
                let prepended = match (uploaded, self.mine.data_mut()) {
                    (Some(submission), Some(mine)) if !mine.iter().any(|a| a.id == submission.id) => {
                        mine.insert(0, submission);
                        true
                    }
                    _ => false,
                };
                applied || prepended
            }
        }
    }
}
