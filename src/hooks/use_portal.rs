use yew::prelude::*;

use crate::state::Portal;

/// Portal provided by `App`. Outside the provider a private one is built
/// on first use so isolated previews still render.
#[hook]
pub fn use_portal() -> Portal {
    let context = use_context::<Portal>();
    let fallback = use_mut_ref(|| None::<Portal>);
    match context {
        Some(portal) => portal,
        None => fallback
            .borrow_mut()
            .get_or_insert_with(|| {
                log::warn!("⚠️ use_portal called outside the Portal provider");
                Portal::browser()
            })
            .clone(),
    }
}
