// ============================================================================
// ACTIVITY UPLOAD FORM - per-kind fields, proof file, multipart submit
// ============================================================================

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_portal, use_selector, use_toaster};
use crate::models::{ActivityKind, FileUpload};
use crate::utils::browser_files::read_file;
use crate::viewmodels::{check_file_size, ActivityDraft, DraftField, FieldErrors};

fn field_error(errors: &FieldErrors, field: DraftField) -> Html {
    match errors.get(field) {
        Some(message) => html! { <span class="field-error">{message}</span> },
        None => html! {},
    }
}

/// Text input bound to one draft field
fn text_setter(
    draft: &UseStateHandle<ActivityDraft>,
    write: fn(&mut ActivityDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        write(&mut next, input.value());
        draft.set(next);
    })
}

#[function_component(ActivityUploadForm)]
pub fn activity_upload_form() -> Html {
    let portal = use_portal();
    let toaster = use_toaster();
    let uploading = use_selector(|state| state.activities.upload.loading());

    let draft = use_state(ActivityDraft::default);
    let proof = use_state(|| None::<FileUpload>);
    let errors = use_state(FieldErrors::default);
    let file_input = use_node_ref();

    let on_kind = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(kind) = ActivityKind::from_str_opt(&select.value()) {
                let mut next = (*draft).clone();
                next.kind = kind;
                draft.set(next);
            }
        })
    };

    let on_title = text_setter(&draft, |d, v| d.title = v);
    let on_organizer = text_setter(&draft, |d, v| d.organizer = v);
    let on_date = text_setter(&draft, |d, v| d.date = v);
    let on_duration = text_setter(&draft, |d, v| d.duration_weeks = v);

    let on_description = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.description = area.value();
            draft.set(next);
        })
    };

    let on_file = {
        let proof = proof.clone();
        let errors = errors.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                proof.set(None);
                return;
            };
            if let Err(message) = check_file_size(file.size() as u64, CONFIG.max_upload_bytes) {
                log::warn!("⚠️ {} is {} bytes, not reading it", file.name(), file.size());
                errors.set(FieldErrors::single(DraftField::Image, message));
                proof.set(None);
                input.set_value("");
                return;
            }
            let proof = proof.clone();
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_file(&file, CONFIG.max_upload_bytes).await {
                    Ok(upload) => {
                        log::info!("📎 Picked {} ({} bytes)", upload.file_name, upload.size());
                        proof.set(Some(upload));
                    }
                    Err(e) => {
                        log::error!("❌ {}", e);
                        toaster.error(e);
                    }
                }
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let proof = proof.clone();
        let errors = errors.clone();
        let file_input = file_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let candidate = ActivityDraft {
                image: (*proof).clone(),
                ..(*draft).clone()
            };
            let upload = match candidate.submit(&portal, CONFIG.max_upload_bytes) {
                Ok(upload) => upload,
                Err(field_errors) => {
                    log::warn!("⚠️ Upload form has {} invalid fields", field_errors.len());
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::default());

            let draft = draft.clone();
            let proof = proof.clone();
            let file_input = file_input.clone();
            let toaster = toaster.clone();
            let kind = candidate.kind;
            wasm_bindgen_futures::spawn_local(async move {
                match upload.await {
                    Ok(submission) => {
                        toaster.success(format!("\"{}\" submitted for review", submission.title));
                        draft.set(ActivityDraft::new(kind));
                        proof.set(None);
                        if let Some(input) = file_input.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                    }
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        })
    };

    let kind = draft.kind;

    html! {
        <section class="upload-form">
            <h2>{"Submit an activity"}</h2>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="activity-kind">{"Type"}</label>
                    <select id="activity-kind" onchange={on_kind}>
                        { for ActivityKind::ALL.iter().map(|k| html! {
                            <option value={k.as_str()} selected={*k == kind}>{k.label()}</option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="activity-title">{"Title"}</label>
                    <input id="activity-title" type="text" value={draft.title.clone()} oninput={on_title} />
                    {field_error(&errors, DraftField::Title)}
                </div>
                <div class="form-group">
                    <label for="activity-description">{"Description"}</label>
                    <textarea id="activity-description" value={draft.description.clone()} oninput={on_description} />
                </div>
                if kind.requires_organizer() {
                    <div class="form-group">
                        <label for="activity-organizer">{"Organizer"}</label>
                        <input id="activity-organizer" type="text" value={draft.organizer.clone()} oninput={on_organizer} />
                        {field_error(&errors, DraftField::Organizer)}
                    </div>
                }
                <div class="form-group">
                    <label for="activity-date">{"Date"}</label>
                    <input id="activity-date" type="date" value={draft.date.clone()} oninput={on_date} />
                    {field_error(&errors, DraftField::Date)}
                </div>
                if kind == ActivityKind::Internship {
                    <div class="form-group">
                        <label for="activity-weeks">{"Duration (weeks)"}</label>
                        <input id="activity-weeks" type="number" min="1" value={draft.duration_weeks.clone()} oninput={on_duration} />
                        {field_error(&errors, DraftField::DurationWeeks)}
                    </div>
                }
                <div class="form-group">
                    <label for="activity-proof">
                        { if kind.requires_proof() { "Proof document" } else { "Proof document (optional)" } }
                    </label>
                    <input id="activity-proof" type="file" accept="image/*,application/pdf"
                           ref={file_input} onchange={on_file} />
                    {field_error(&errors, DraftField::Image)}
                </div>
                <button type="submit" class="btn-primary" disabled={uploading}>
                    { if uploading { "Uploading..." } else { "Submit" } }
                </button>
            </form>
        </section>
    }
}
