// ============================================================================
// FACULTY DASHBOARD - metrics, approval queue, class tools
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::student_dashboard::activity_item;
use crate::components::{AttendanceForm, MarksEntry, PanelState, SemesterSelect, StatusPanel};
use crate::hooks::{spawn_operation, use_portal, use_selector, use_semester, use_toaster};
use crate::models::{ActivitySubmission, ReviewDecision};

#[function_component(FacultyDashboard)]
pub fn faculty_dashboard() -> Html {
    let portal = use_portal();
    let (semester, select_semester) = use_semester();

    let metrics = use_selector(|state| state.faculty.metrics.clone());
    let pending = use_selector(|state| state.faculty.pending_approvals.clone());
    let activities = use_selector(|state| state.faculty.activities.clone());
    let curriculum = use_selector(|state| state.academics.curriculum.clone());
    let roster = use_selector(|state| state.students.roster.clone());

    {
        let portal = portal.clone();
        use_effect_with((), move |_| {
            spawn_operation(portal.fetch_faculty_metrics());
            spawn_operation(portal.fetch_pending_approvals());
            spawn_operation(portal.fetch_faculty_activities());
            || ()
        });
    }
    {
        let portal = portal.clone();
        use_effect_with(semester, move |semester| {
            spawn_operation(portal.fetch_curriculum(*semester));
            spawn_operation(portal.fetch_roster(*semester));
            || ()
        });
    }

    let retry_metrics = {
        let portal = portal.clone();
        Callback::from(move |_: ()| spawn_operation(portal.fetch_faculty_metrics()))
    };
    let retry_pending = {
        let portal = portal.clone();
        Callback::from(move |_: ()| spawn_operation(portal.fetch_pending_approvals()))
    };
    let retry_activities = {
        let portal = portal.clone();
        Callback::from(move |_: ()| spawn_operation(portal.fetch_faculty_activities()))
    };
    let retry_class = {
        let portal = portal.clone();
        Callback::from(move |_: ()| {
            spawn_operation(portal.fetch_curriculum(semester));
            spawn_operation(portal.fetch_roster(semester));
        })
    };

    let class_state = match (PanelState::of(&curriculum), PanelState::of(&roster)) {
        (PanelState::Failed(message), _) | (_, PanelState::Failed(message)) => {
            PanelState::Failed(message)
        }
        (PanelState::Ready, PanelState::Ready) => PanelState::Ready,
        (PanelState::Idle, PanelState::Idle) => PanelState::Idle,
        _ => PanelState::Loading,
    };
    let subjects = curriculum.data().cloned().unwrap_or_default();
    let students = roster.data().cloned().unwrap_or_default();

    html! {
        <div class="dashboard faculty-dashboard">
            <StatusPanel title="Overview" state={PanelState::of(&metrics)} on_retry={retry_metrics}>
                if let Some(m) = metrics.data() {
                    <div class="metrics-grid">
                        <div class="metric"><span class="value">{m.total_students.to_string()}</span><span class="label">{"Students"}</span></div>
                        <div class="metric"><span class="value">{m.pending_approvals.to_string()}</span><span class="label">{"Pending"}</span></div>
                        <div class="metric"><span class="value">{m.approved_this_month.to_string()}</span><span class="label">{"Approved this month"}</span></div>
                        <div class="metric"><span class="value">{m.rejected_this_month.to_string()}</span><span class="label">{"Rejected this month"}</span></div>
                        <div class="metric"><span class="value">{format!("{:.1}%", m.average_attendance)}</span><span class="label">{"Average attendance"}</span></div>
                    </div>
                }
            </StatusPanel>

            <StatusPanel title="Pending approvals" state={PanelState::of(&pending)} on_retry={retry_pending}>
                <ul class="approval-list">
                    { for pending.data().into_iter().flatten().map(|submission| html! {
                        <PendingRow key={submission.id.clone()} submission={submission.clone()} />
                    }) }
                </ul>
                if pending.data().map_or(false, |queue| queue.is_empty()) {
                    <p class="empty">{"Nothing waiting for review"}</p>
                }
            </StatusPanel>

            <StatusPanel title="Recent activities" state={PanelState::of(&activities)} on_retry={retry_activities}>
                <ul class="activity-list">
                    { for activities.data().into_iter().flatten().map(activity_item) }
                </ul>
            </StatusPanel>

            <SemesterSelect value={semester} on_change={select_semester} />

            <StatusPanel title="Class" state={class_state} on_retry={retry_class}>
                <AttendanceForm semester={semester} subjects={subjects.clone()} roster={students.clone()} />
                <MarksEntry semester={semester} subjects={subjects} roster={students} />
            </StatusPanel>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PendingRowProps {
    submission: ActivitySubmission,
}

#[function_component(PendingRow)]
fn pending_row(props: &PendingRowProps) -> Html {
    let portal = use_portal();
    let toaster = use_toaster();
    let reviewing = use_selector(|state| state.faculty.review.loading());
    let remarks = use_state(String::new);

    let review = {
        let id = props.submission.id.clone();
        let title = props.submission.title.clone();
        Callback::from(move |decision: ReviewDecision| {
            let verb = match decision {
                ReviewDecision::Approve => "approved",
                ReviewDecision::Reject { .. } => "rejected",
            };
            let request = portal.review_submission(id.clone(), decision);
            let portal = portal.clone();
            let toaster = toaster.clone();
            let title = title.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request.await {
                    Ok(_) => {
                        toaster.success(format!("\"{}\" {}", title, verb));
                        spawn_operation(portal.fetch_faculty_metrics());
                    }
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        })
    };

    let on_remarks = {
        let remarks = remarks.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            remarks.set(input.value());
        })
    };
    let on_approve = review.reform(|_: MouseEvent| ReviewDecision::Approve);
    let on_reject = {
        let remarks = remarks.clone();
        review.reform(move |_: MouseEvent| ReviewDecision::Reject {
            remarks: (*remarks).clone(),
        })
    };

    let submission = &props.submission;
    html! {
        <li class="approval-item">
            <div class="approval-main">
                <span class="activity-kind">{submission.kind.label()}</span>
                <span class="activity-title">{submission.title.clone()}</span>
                if let Some(name) = &submission.student_name {
                    <span class="activity-student">{name.clone()}</span>
                }
                if let Some(organizer) = &submission.organizer {
                    <span class="activity-organizer">{organizer.clone()}</span>
                }
                if let Some(url) = &submission.image_url {
                    <a href={url.clone()} target="_blank" rel="noopener">{"View proof"}</a>
                }
            </div>
            <div class="approval-actions">
                <input type="text" placeholder="Remarks (optional)" value={(*remarks).clone()} oninput={on_remarks} />
                <button type="button" class="btn-approve" onclick={on_approve} disabled={reviewing}>{"Approve"}</button>
                <button type="button" class="btn-reject" onclick={on_reject} disabled={reviewing}>{"Reject"}</button>
            </div>
        </li>
    }
}
