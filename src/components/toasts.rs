// ============================================================================
// TOASTS - one-shot feedback for submits, dismissed after a timeout
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

use crate::hooks::{ToastKind, Toaster};
use crate::utils::TOAST_TIMEOUT_MS;

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ToastList {
    pub items: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(toast) => items.push(toast),
            ToastAction::Dismiss(id) => items.retain(|t| t.id != id),
        }
        Rc::new(ToastList { items })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let toaster = {
        let toasts = toasts.clone();
        use_memo((), move |_| Toaster {
            push: Callback::from(move |(kind, message): (ToastKind, String)| {
                let id = Uuid::new_v4();
                toasts.dispatch(ToastAction::Push(Toast { id, kind, message }));
                let toasts = toasts.clone();
                Timeout::new(TOAST_TIMEOUT_MS, move || {
                    toasts.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            }),
        })
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            {props.children.clone()}
            <div class="toast-stack" aria-live="polite">
                { for toasts.items.iter().map(|toast| {
                    let id = toast.id;
                    let on_dismiss = on_dismiss.clone();
                    html! {
                        <div key={id.to_string()} class={toast.kind.class()}
                             onclick={Callback::from(move |_| on_dismiss.emit(id))}>
                            {toast.message.clone()}
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}
