// ============================================================================
// STUDENT DASHBOARD - profile, curriculum, results and own activities
// ============================================================================

use yew::prelude::*;

use crate::components::{ActivityUploadForm, PanelState, SemesterSelect, StatusPanel};
use crate::hooks::{spawn_operation, use_portal, use_selector, use_semester, use_toaster};
use crate::models::{ActivityStatus, ActivitySubmission};
use crate::state::Portal;
use crate::utils::browser_files::save_download;

pub fn status_badge(status: ActivityStatus) -> Html {
    let (class, label) = match status {
        ActivityStatus::Pending => ("badge badge-pending", "Pending"),
        ActivityStatus::Approved => ("badge badge-approved", "Approved"),
        ActivityStatus::Rejected => ("badge badge-rejected", "Rejected"),
    };
    html! { <span class={class}>{label}</span> }
}

pub fn activity_item(activity: &ActivitySubmission) -> Html {
    html! {
        <li key={activity.id.clone()} class="activity-item">
            <div class="activity-main">
                <span class="activity-kind">{activity.kind.label()}</span>
                <span class="activity-title">{activity.title.clone()}</span>
                if let Some(name) = &activity.student_name {
                    <span class="activity-student">{name.clone()}</span>
                }
            </div>
            <div class="activity-meta">
                if let Some(date) = activity.date {
                    <span class="activity-date">{date.format("%d %b %Y").to_string()}</span>
                }
                {status_badge(activity.status)}
            </div>
            if let Some(remarks) = &activity.remarks {
                <p class="activity-remarks">{remarks.clone()}</p>
            }
        </li>
    }
}

#[function_component(StudentDashboard)]
pub fn student_dashboard() -> Html {
    let portal = use_portal();
    let toaster = use_toaster();
    let (semester, select_semester) = use_semester();

    let details = use_selector(|state| state.students.details.clone());
    let curriculum = use_selector(|state| state.academics.curriculum.clone());
    let results = use_selector(|state| state.results.semester_results.clone());
    let downloading = use_selector(|state| state.results.report.loading());
    let mine = use_selector(|state| state.activities.mine.clone());

    {
        let portal = portal.clone();
        use_effect_with((), move |_| {
            spawn_operation(portal.fetch_student_details());
            spawn_operation(portal.fetch_my_activities());
            || ()
        });
    }
    {
        let portal = portal.clone();
        use_effect_with(semester, move |semester| {
            spawn_operation(portal.fetch_curriculum(*semester));
            spawn_operation(portal.fetch_results(*semester));
            || ()
        });
    }

    let retry = |op: fn(&Portal, u8)| {
        let portal = portal.clone();
        Callback::from(move |_: ()| op(&portal, semester))
    };
    let retry_details = retry(|p, _| spawn_operation(p.fetch_student_details()));
    let retry_curriculum = retry(|p, s| spawn_operation(p.fetch_curriculum(s)));
    let retry_results = retry(|p, s| spawn_operation(p.fetch_results(s)));
    let retry_mine = retry(|p, _| spawn_operation(p.fetch_my_activities()));

    let on_download = {
        let portal = portal.clone();
        Callback::from(move |_: MouseEvent| {
            let download = portal.download_report(semester);
            let toaster = toaster.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match download.await {
                    Ok(file) => {
                        if let Err(e) = save_download(&file) {
                            log::error!("❌ Could not save {}: {:?}", file.file_name, e);
                            toaster.error("Could not save the report");
                        }
                    }
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        })
    };

    html! {
        <div class="dashboard student-dashboard">
            <StatusPanel title="Profile" state={PanelState::of(&details)} on_retry={retry_details}>
                if let Some(profile) = details.data() {
                    <div class="profile-card">
                        <h3>{profile.name.clone()}</h3>
                        <p>{format!("{} · {}", profile.roll_number, profile.email)}</p>
                        if let Some(department) = &profile.department {
                            <p>{department.clone()}</p>
                        }
                        <p>
                            {format!("Semester {}", profile.semester)}
                            if let Some(cgpa) = profile.cgpa {
                                {format!(" · CGPA {:.2}", cgpa)}
                            }
                            {format!(" · {} activity points", profile.activity_points)}
                        </p>
                    </div>
                }
            </StatusPanel>

            <SemesterSelect value={semester} on_change={select_semester} />

            <StatusPanel title="Curriculum" state={PanelState::of(&curriculum)} on_retry={retry_curriculum}>
                <table class="curriculum-table">
                    <thead>
                        <tr><th>{"Code"}</th><th>{"Subject"}</th><th>{"Credits"}</th><th>{"Faculty"}</th></tr>
                    </thead>
                    <tbody>
                        { for curriculum.data().into_iter().flatten().map(|subject| html! {
                            <tr key={subject.code.clone()}>
                                <td>{subject.code.clone()}</td>
                                <td>{subject.name.clone()}</td>
                                <td>{subject.credits.to_string()}</td>
                                <td>{subject.faculty.clone().unwrap_or_default()}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </StatusPanel>

            <StatusPanel title="Results" state={PanelState::of(&results)} on_retry={retry_results}>
                if let Some(sheet) = results.data() {
                    <div class="results">
                        <p class="sgpa">
                            { match sheet.sgpa {
                                Some(sgpa) => format!("SGPA {:.2}", sgpa),
                                None => "SGPA not published".to_string(),
                            } }
                        </p>
                        <table class="results-table">
                            <thead>
                                <tr><th>{"Code"}</th><th>{"Subject"}</th><th>{"Grade"}</th></tr>
                            </thead>
                            <tbody>
                                { for sheet.subjects.iter().map(|row| html! {
                                    <tr key={row.subject_code.clone()}>
                                        <td>{row.subject_code.clone()}</td>
                                        <td>{row.subject_name.clone()}</td>
                                        <td>{row.grade.clone()}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                        <button type="button" class="btn-secondary" onclick={on_download} disabled={downloading}>
                            { if downloading { "Preparing report..." } else { "Download report" } }
                        </button>
                    </div>
                }
            </StatusPanel>

            <StatusPanel title="My activities" state={PanelState::of(&mine)} on_retry={retry_mine}>
                <ul class="activity-list">
                    { for mine.data().into_iter().flatten().map(activity_item) }
                </ul>
                if mine.data().map_or(false, |list| list.is_empty()) {
                    <p class="empty">{"No activities submitted yet"}</p>
                }
            </StatusPanel>

            <ActivityUploadForm />
        </div>
    }
}
