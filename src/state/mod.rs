// ============================================================================
// STATE MODULE - resource slices in one store, Rc<RefCell> + notifications
// ============================================================================

pub mod reactivity;
pub mod resource;
pub mod session_slice;
pub mod academics_slice;
pub mod faculty_slice;
pub mod students_slice;
pub mod results_slice;
pub mod activities_slice;
pub mod store;
pub mod portal;

pub use reactivity::{ReactiveState, Subscription};
pub use resource::{Lifecycle, RequestId, Resource, ResourceView, Status};
pub use session_slice::{SessionAction, SessionSlice};
pub use academics_slice::{AcademicsAction, AcademicsSlice};
pub use faculty_slice::{FacultyAction, FacultySlice};
pub use students_slice::{StudentsAction, StudentsSlice};
pub use results_slice::{ResultsAction, ResultsSlice};
pub use activities_slice::{ActivitiesAction, ActivitiesSlice};
pub use store::{Action, PortalState, Store};
pub use portal::Portal;
