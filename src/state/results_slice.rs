use crate::models::{DownloadedFile, SemesterResults};
use crate::state::resource::{Lifecycle, Resource};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ResultsSlice {
    pub semester_results: Resource<SemesterResults>,
    pub report: Resource<DownloadedFile>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultsAction {
    SemesterResults(Lifecycle<SemesterResults>),
    Report(Lifecycle<DownloadedFile>),
}

impl ResultsSlice {
    pub fn reduce(&mut self, action: ResultsAction) -> bool {
        match action {
            ResultsAction::SemesterResults(step) => self.semester_results.apply(step),
            ResultsAction::Report(step) => self.report.apply(step),
        }
    }
}
