// ============================================================================
// MARKS ENTRY - mid-semester marks, one student at a time
// ============================================================================

use std::collections::BTreeMap;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_portal, use_selector, use_toaster};
use crate::models::{StudentSummary, Subject, MAX_MID_MARKS};
use crate::viewmodels::MarksEntrySession;

#[derive(Properties, PartialEq)]
pub struct MarksEntryProps {
    pub semester: u8,
    pub subjects: Vec<Subject>,
    pub roster: Vec<StudentSummary>,
}

#[function_component(MarksEntry)]
pub fn marks_entry(props: &MarksEntryProps) -> Html {
    let portal = use_portal();
    let toaster = use_toaster();
    let saving = use_selector(|state| state.academics.mid_marks.loading());
    let session = use_state(|| {
        MarksEntrySession::new(props.semester, props.subjects.clone(), props.roster.clone())
    });
    let field_errors = use_state(BTreeMap::<String, String>::new);

    {
        let session = session.clone();
        let field_errors = field_errors.clone();
        use_effect_with(
            (props.semester, props.subjects.clone(), props.roster.clone()),
            move |(semester, subjects, roster)| {
                session.set(MarksEntrySession::new(*semester, subjects.clone(), roster.clone()));
                field_errors.set(BTreeMap::new());
                || ()
            },
        );
    }

    let on_mark = {
        let session = session.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |(code, raw): (String, String)| {
            let mut next = (*session).clone();
            let mut errors = (*field_errors).clone();
            match next.set_mark(&code, &raw) {
                Ok(_) => {
                    errors.remove(&code);
                }
                Err(e) => {
                    errors.insert(code, e.to_string());
                }
            }
            session.set(next);
            field_errors.set(errors);
        })
    };

    let on_skip = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.skip();
            session.set(next);
        })
    };

    let on_restart = {
        let session = session.clone();
        let semester = props.semester;
        let subjects = props.subjects.clone();
        let roster = props.roster.clone();
        Callback::from(move |_: MouseEvent| {
            session.set(MarksEntrySession::new(semester, subjects.clone(), roster.clone()));
        })
    };

    let on_submit = {
        let session = session.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match session.to_request() {
                Ok(request) => request,
                Err(e) => {
                    toaster.error(e.to_string());
                    return;
                }
            };
            let save = portal.save_mid_marks(request);
            let session = session.clone();
            let field_errors = field_errors.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match save.await {
                    Ok(saved) => {
                        toaster.success(format!("Saved {} marks", saved.count));
                        let mut next = (*session).clone();
                        next.on_saved(&saved);
                        session.set(next);
                        field_errors.set(BTreeMap::new());
                    }
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        })
    };

    if props.subjects.is_empty() || props.roster.is_empty() {
        return html! {
            <section class="marks-entry">
                <h2>{"Mid-semester marks"}</h2>
                <p class="empty">{"Load a semester with subjects and students to enter marks"}</p>
            </section>
        };
    }

    let body = match session.current_student() {
        None => html! {
            <div class="marks-complete">
                <p>{"All students graded"}</p>
                <button type="button" class="btn-secondary" onclick={on_restart}>{"Start over"}</button>
            </div>
        },
        Some(student) => {
            let (position, total) = session.position();
            html! {
                <form onsubmit={on_submit}>
                    <p class="marks-student">
                        {format!("{} · {} ({} of {})", student.roll_number, student.name, position, total)}
                    </p>
                    { for session.subjects().iter().map(|subject| {
                        let code = subject.code.clone();
                        let on_mark = on_mark.clone();
                        let oninput = Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            on_mark.emit((code.clone(), input.value()));
                        });
                        let value = session
                            .mark(&subject.code)
                            .map(|m| m.to_string())
                            .unwrap_or_default();
                        html! {
                            <div key={subject.code.clone()} class="form-group">
                                <label>{format!("{} - {}", subject.code, subject.name)}</label>
                                <input type="number" min="0" max={MAX_MID_MARKS.to_string()}
                                       {value} {oninput} />
                                if let Some(error) = field_errors.get(&subject.code) {
                                    <span class="field-error">{error.clone()}</span>
                                }
                            </div>
                        }
                    }) }
                    <div class="form-row">
                        <button type="button" class="btn-link" onclick={on_skip}>{"Skip"}</button>
                        <button type="submit" class="btn-primary" disabled={saving}>
                            { if saving { "Saving..." } else { "Save and next" } }
                        </button>
                    </div>
                </form>
            }
        }
    };

    html! {
        <section class="marks-entry">
            <h2>{"Mid-semester marks"}</h2>
            {body}
        </section>
    }
}
