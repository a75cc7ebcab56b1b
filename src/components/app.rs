// ============================================================================
// APP - builds the Portal, restores the session and routes by role
// ============================================================================

use yew::prelude::*;

use crate::components::{FacultyDashboard, LoginForm, StudentDashboard, ToastProvider};
use crate::hooks::{use_portal, use_selector};
use crate::models::Role;
use crate::state::Portal;
use crate::utils::storage::load_preference;
use crate::utils::{FIRST_SEMESTER, LAST_SEMESTER, PREF_SELECTED_SEMESTER};

#[function_component(App)]
pub fn app() -> Html {
    let portal = use_memo((), |_| Portal::browser());

    {
        let portal = (*portal).clone();
        use_effect_with((), move |_| {
            if portal.restore_session().is_none() {
                log::info!("🔓 No stored session");
            }
            if let Some(semester) = load_preference::<u8>(PREF_SELECTED_SEMESTER) {
                if (FIRST_SEMESTER..=LAST_SEMESTER).contains(&semester) {
                    portal.select_semester(semester);
                }
            }
            || ()
        });
    }

    html! {
        <ContextProvider<Portal> context={(*portal).clone()}>
            <ToastProvider>
                <Shell />
            </ToastProvider>
        </ContextProvider<Portal>>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let portal = use_portal();
    let (role, expired) = use_selector(|state| (state.session.role(), state.session.expired));

    let on_logout = Callback::from(move |_: MouseEvent| portal.logout());

    let content = match role {
        None => html! { <LoginForm {expired} /> },
        Some(Role::Student) => html! { <StudentDashboard /> },
        Some(Role::Faculty) => html! { <FacultyDashboard /> },
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-title">{"Activity Portal"}</h1>
                if let Some(role) = role {
                    <div class="app-user">
                        <span class="role-badge">{role.to_string()}</span>
                        <button type="button" class="btn-logout" onclick={on_logout}>
                            {"Log out"}
                        </button>
                    </div>
                }
            </header>
            <main class="app-main">{content}</main>
        </div>
    }
}
