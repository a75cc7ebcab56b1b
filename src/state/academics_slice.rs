// ============================================================================
// ACADEMICS SLICE - curriculum, attendance and marks submission
// ============================================================================

use crate::models::{AttendanceReceipt, SavedMarks, Subject};
use crate::state::resource::{Lifecycle, Resource};
use crate::utils::constants::FIRST_SEMESTER;

#[derive(Clone, Debug, PartialEq)]
pub struct AcademicsSlice {
    pub curriculum: Resource<Vec<Subject>>,
    pub attendance: Resource<AttendanceReceipt>,
    pub mid_marks: Resource<SavedMarks>,
    pub selected_semester: u8,
}

impl Default for AcademicsSlice {
    fn default() -> Self {
        Self {
            curriculum: Resource::default(),
            attendance: Resource::default(),
            mid_marks: Resource::default(),
            selected_semester: FIRST_SEMESTER,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AcademicsAction {
    Curriculum(Lifecycle<Vec<Subject>>),
    Attendance(Lifecycle<AttendanceReceipt>),
    MidMarks(Lifecycle<SavedMarks>),
    SelectSemester(u8),
}

impl AcademicsSlice {
    pub fn reduce(&mut self, action: AcademicsAction) -> bool {
        match action {
            AcademicsAction::Curriculum(step) => self.curriculum.apply(step),
            AcademicsAction::Attendance(step) => self.attendance.apply(step),
            AcademicsAction::MidMarks(step) => self.mid_marks.apply(step),
            AcademicsAction::SelectSemester(semester) => {
                self.selected_semester = semester;
                true
            }
        }
    }
}
