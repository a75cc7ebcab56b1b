use yew::prelude::*;

use crate::hooks::{use_portal, use_selector};
use crate::utils::storage::save_preference;
use crate::utils::PREF_SELECTED_SEMESTER;

/// Selected semester plus a setter that also remembers it in localStorage
#[hook]
pub fn use_semester() -> (u8, Callback<u8>) {
    let portal = use_portal();
    let semester = use_selector(|state| state.academics.selected_semester);

    let select = Callback::from(move |semester: u8| {
        portal.select_semester(semester);
        if let Err(e) = save_preference(PREF_SELECTED_SEMESTER, &semester) {
            log::error!("❌ Could not remember semester: {}", e);
        }
    });

    (semester, select)
}
