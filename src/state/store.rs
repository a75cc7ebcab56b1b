// ============================================================================
// STORE - every slice in one tree, one dispatch entry point
// ============================================================================
// Reducers run synchronously inside dispatch; subscribers are notified
// afterwards. No cross-slice transactions.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::state::academics_slice::{AcademicsAction, AcademicsSlice};
use crate::state::activities_slice::{ActivitiesAction, ActivitiesSlice};
use crate::state::faculty_slice::{FacultyAction, FacultySlice};
use crate::state::reactivity::{ReactiveState, Subscription};
use crate::state::resource::RequestId;
use crate::state::results_slice::{ResultsAction, ResultsSlice};
use crate::state::session_slice::{SessionAction, SessionSlice};
use crate::state::students_slice::{StudentsAction, StudentsSlice};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PortalState {
    pub session: SessionSlice,
    pub academics: AcademicsSlice,
    pub faculty: FacultySlice,
    pub students: StudentsSlice,
    pub results: ResultsSlice,
    pub activities: ActivitiesSlice,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Session(SessionAction),
    Academics(AcademicsAction),
    Faculty(FacultyAction),
    Students(StudentsAction),
    Results(ResultsAction),
    Activities(ActivitiesAction),
}

impl PortalState {
    /// Routes an action to its slice. False when the action was stale.
    pub fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::Session(a) => self.session.reduce(a),
            Action::Academics(a) => self.academics.reduce(a),
            Action::Faculty(a) => self.faculty.reduce(a),
            Action::Students(a) => self.students.reduce(a),
            Action::Results(a) => self.results.reduce(a),
            Action::Activities(a) => self.activities.reduce(a),
        }
    }
}

#[derive(Clone)]
pub struct Store {
    state: ReactiveState<PortalState>,
    next_request: Rc<Cell<u64>>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(PortalState::default())
    }

    pub fn with_state(initial: PortalState) -> Self {
        Self {
            state: ReactiveState::new(initial),
            next_request: Rc::new(Cell::new(1)),
        }
    }

    pub fn next_request_id(&self) -> RequestId {
        let id = self.next_request.get();
        self.next_request.set(id + 1);
        RequestId(id)
    }

    pub fn dispatch(&self, action: Action) {
        log::trace!("dispatch {:?}", action);
        let applied = self.state.update_if(|state| state.reduce(action));
        if !applied {
            log::debug!("🗑️ Discarded a superseded response");
        }
    }

    /// Reads the tree without cloning it
    pub fn select<R>(&self, reader: impl FnOnce(&PortalState) -> R) -> R {
        self.state.with(reader)
    }

    pub fn snapshot(&self) -> PortalState {
        self.select(|state| state.clone())
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn ptr_eq(&self, other: &Store) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacultyMetrics, Subject};
    use crate::state::resource::Lifecycle;
    use std::cell::RefCell;

    fn subject(code: &str) -> Subject {
        Subject {
            code: code.to_string(),
            name: code.to_string(),
            credits: 4,
            semester: 1,
            faculty: None,
        }
    }

    #[test]
    fn request_ids_increase() {
        let store = Store::new();
        let a = store.next_request_id();
        let b = store.next_request_id();
        assert!(b > a);
    }

    #[test]
    fn slices_are_independent() {
        let store = Store::new();
        let curriculum = store.next_request_id();
        let metrics = store.next_request_id();

        store.dispatch(Action::Academics(AcademicsAction::Curriculum(
            Lifecycle::Pending(curriculum),
        )));
        store.dispatch(Action::Faculty(FacultyAction::Metrics(Lifecycle::Pending(
            metrics,
        ))));
        store.dispatch(Action::Faculty(FacultyAction::Metrics(Lifecycle::Fulfilled(
            metrics,
            FacultyMetrics::default(),
        ))));

        let state = store.snapshot();
        assert!(state.academics.curriculum.loading());
        assert!(!state.faculty.metrics.loading());
        assert!(state.faculty.metrics.data().is_some());
    }

    #[test]
    fn subscribers_skip_stale_actions() {
        let store = Store::new();
        let notified = Rc::new(RefCell::new(0));
        let counter = notified.clone();
        let _sub = store.subscribe(move || *counter.borrow_mut() += 1);

        let first = store.next_request_id();
        let second = store.next_request_id();
        store.dispatch(Action::Academics(AcademicsAction::Curriculum(
            Lifecycle::Pending(first),
        )));
        store.dispatch(Action::Academics(AcademicsAction::Curriculum(
            Lifecycle::Pending(second),
        )));
        store.dispatch(Action::Academics(AcademicsAction::Curriculum(
            Lifecycle::Fulfilled(first, vec![subject("OLD")]),
        )));

        assert_eq!(*notified.borrow(), 2);
        assert!(store.select(|s| s.academics.curriculum.data().is_none()));
    }

    #[test]
    fn clones_share_the_tree() {
        let store = Store::new();
        let view_copy = store.clone();
        store.dispatch(Action::Academics(AcademicsAction::SelectSemester(4)));
        assert_eq!(view_copy.select(|s| s.academics.selected_semester), 4);
        assert!(store.ptr_eq(&view_copy));
    }
}
