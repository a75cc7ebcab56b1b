use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::{use_portal, use_selector, use_toaster};
use crate::models::{AttendanceStatus, StudentSummary, Subject};
use crate::viewmodels::AttendanceDraft;

#[derive(Properties, PartialEq)]
pub struct AttendanceFormProps {
    pub semester: u8,
    pub subjects: Vec<Subject>,
    pub roster: Vec<StudentSummary>,
}

#[function_component(AttendanceForm)]
pub fn attendance_form(props: &AttendanceFormProps) -> Html {
    let portal = use_portal();
    let toaster = use_toaster();
    let submitting = use_selector(|state| state.academics.attendance.loading());
    let draft = use_state(|| AttendanceDraft::new(props.semester, props.roster.clone()));

    {
        let draft = draft.clone();
        use_effect_with((props.semester, props.roster.clone()), move |(semester, roster)| {
            draft.set(AttendanceDraft::new(*semester, roster.clone()));
            || ()
        });
    }

    let on_subject = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.subject_code = select.value();
            draft.set(next);
        })
    };

    let on_date = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.date = input.value();
            draft.set(next);
        })
    };

    let on_toggle = {
        let draft = draft.clone();
        Callback::from(move |student_id: String| {
            let mut next = (*draft).clone();
            next.toggle(&student_id);
            draft.set(next);
        })
    };

    let on_all_present = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.mark_all(AttendanceStatus::Present);
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match draft.to_request() {
                Ok(request) => request,
                Err(message) => {
                    toaster.error(message);
                    return;
                }
            };
            let submit = portal.submit_attendance(request);
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit.await {
                    Ok(receipt) => toaster.success(receipt.message.unwrap_or_else(|| {
                        format!("Attendance recorded for {} students", receipt.recorded)
                    })),
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        })
    };

    html! {
        <section class="attendance-form">
            <h2>{"Attendance"}</h2>
            <form onsubmit={on_submit}>
                <div class="form-row">
                    <select onchange={on_subject}>
                        <option value="" selected={draft.subject_code.is_empty()}>{"Select subject"}</option>
                        { for props.subjects.iter().map(|subject| html! {
                            <option value={subject.code.clone()} selected={subject.code == draft.subject_code}>
                                {format!("{} - {}", subject.code, subject.name)}
                            </option>
                        }) }
                    </select>
                    <input type="date" value={draft.date.clone()} oninput={on_date} />
                    <button type="button" class="btn-link" onclick={on_all_present}>{"All present"}</button>
                </div>
                <ul class="attendance-list">
                    { for draft.roster().iter().map(|student| {
                        let absent = draft.status_of(&student.id) == AttendanceStatus::Absent;
                        let id = student.id.clone();
                        let on_toggle = on_toggle.clone();
                        html! {
                            <li key={student.id.clone()} class={classes!("attendance-row", absent.then_some("absent"))}>
                                <label>
                                    <input type="checkbox" checked={!absent}
                                           onchange={Callback::from(move |_: Event| on_toggle.emit(id.clone()))} />
                                    <span class="roll">{student.roll_number.clone()}</span>
                                    <span class="name">{student.name.clone()}</span>
                                </label>
                            </li>
                        }
                    }) }
                </ul>
                <p class="attendance-summary">
                    {format!("{} of {} present", draft.present_count(), draft.roster().len())}
                </p>
                <button type="submit" class="btn-primary" disabled={submitting}>
                    { if submitting { "Saving..." } else { "Save attendance" } }
                </button>
            </form>
        </section>
    }
}
