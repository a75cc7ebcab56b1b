// ============================================================================
// USE SELECTOR - subscribe a component to one slice of the store
// ============================================================================
// Re-renders only when the selected value changes. The latest selector is
// kept in a ref so captured props are never stale.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_portal;
use crate::state::PortalState;

type Selector<T> = Rc<dyn Fn(&PortalState) -> T>;

#[hook]
pub fn use_selector<T, F>(selector: F) -> T
where
    T: Clone + PartialEq + 'static,
    F: Fn(&PortalState) -> T + 'static,
{
    let portal = use_portal();
    let selector: Selector<T> = Rc::new(selector);
    let value = portal.store().select(|state| selector(state));

    let latest = use_mut_ref(|| None::<(Selector<T>, T)>);
    *latest.borrow_mut() = Some((selector, value.clone()));

    let rerender = use_force_update();
    use_effect_with(portal, move |portal| {
        let store = portal.store().clone();
        let subscription = portal.store().subscribe(move || {
            let changed = match &*latest.borrow() {
                Some((select, last)) => store.select(|state| select(state)) != *last,
                None => true,
            };
            if changed {
                rerender.force_update();
            }
        });
        move || drop(subscription)
    });

    value
}
