use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::utils::{FIRST_SEMESTER, LAST_SEMESTER};

#[derive(Properties, PartialEq)]
pub struct SemesterSelectProps {
    pub value: u8,
    pub on_change: Callback<u8>,
}

#[function_component(SemesterSelect)]
pub fn semester_select(props: &SemesterSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(semester) = select.value().parse::<u8>() {
                on_change.emit(semester);
            }
        })
    };

    html! {
        <label class="semester-select">
            <span>{"Semester"}</span>
            <select {onchange}>
                { for (FIRST_SEMESTER..=LAST_SEMESTER).map(|n| html! {
                    <option value={n.to_string()} selected={n == props.value}>
                        {format!("Semester {}", n)}
                    </option>
                }) }
            </select>
        </label>
    }
}
