use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{spawn_operation, use_portal, use_selector};
use crate::models::Role;
use crate::viewmodels::LoginDraft;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    /// Previous session was rejected by the backend
    #[prop_or_default]
    pub expired: bool,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let portal = use_portal();
    let login = use_selector(|state| state.session.login.clone());
    let draft = use_state(LoginDraft::default);
    let invalid = use_state(|| None::<String>);

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.email = input.value();
            draft.set(next);
        })
    };

    let on_password = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.password = input.value();
            draft.set(next);
        })
    };

    let on_role = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(role) = select.value().parse::<Role>() {
                let mut next = (*draft).clone();
                next.role = role;
                draft.set(next);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let invalid = invalid.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.to_request() {
                Ok(request) => {
                    invalid.set(None);
                    log::info!("🔐 Login as {}", request.role);
                    spawn_operation(portal.login(request));
                }
                Err(message) => invalid.set(Some(message)),
            }
        })
    };

    let message = (*invalid)
        .clone()
        .or_else(|| login.error().map(str::to_string));

    html! {
        <div class="login-screen">
            <form class="login-form" onsubmit={on_submit}>
                <h2>{"Sign in"}</h2>
                if props.expired {
                    <p class="login-notice">{"Your session has expired. Please sign in again."}</p>
                }
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" value={draft.email.clone()} oninput={on_email} />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input type="password" id="password" value={draft.password.clone()} oninput={on_password} />
                </div>
                <div class="form-group">
                    <label for="role">{"I am a"}</label>
                    <select id="role" onchange={on_role}>
                        <option value="student" selected={draft.role == Role::Student}>{"Student"}</option>
                        <option value="faculty" selected={draft.role == Role::Faculty}>{"Faculty member"}</option>
                    </select>
                </div>
                if let Some(message) = message {
                    <p class="form-error" role="alert">{message}</p>
                }
                <button type="submit" class="btn-login" disabled={login.loading()}>
                    { if login.loading() { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
