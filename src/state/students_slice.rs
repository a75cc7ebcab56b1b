use crate::models::{StudentDetails, StudentSummary};
use crate::state::resource::{Lifecycle, Resource};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct StudentsSlice {
    pub details: Resource<StudentDetails>,
    pub roster: Resource<Vec<StudentSummary>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StudentsAction {
    Details(Lifecycle<StudentDetails>),
    Roster(Lifecycle<Vec<StudentSummary>>),
}

impl StudentsSlice {
    pub fn reduce(&mut self, action: StudentsAction) -> bool {
        match action {
            StudentsAction::Details(step) => self.details.apply(step),
            StudentsAction::Roster(step) => self.roster.apply(step),
        }
    }
}
