use yew::prelude::*;

use crate::state::{Resource, ResourceView};

/// Owned summary of a resource for rendering
#[derive(Clone, PartialEq, Debug)]
pub enum PanelState {
    Idle,
    Loading,
    Failed(String),
    Ready,
}

impl PanelState {
    pub fn of<T>(resource: &Resource<T>) -> Self {
        match resource.view() {
            ResourceView::Idle => PanelState::Idle,
            ResourceView::Loading => PanelState::Loading,
            ResourceView::Failed(message) => PanelState::Failed(message.to_string()),
            ResourceView::Ready(_) => PanelState::Ready,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusPanelProps {
    pub title: AttrValue,
    pub state: PanelState,
    pub on_retry: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Loading placeholder, error with retry, or the panel content
#[function_component(StatusPanel)]
pub fn status_panel(props: &StatusPanelProps) -> Html {
    let body = match &props.state {
        PanelState::Loading => html! {
            <div class="panel-loading">
                <span class="spinner"></span>
                <span>{"Loading..."}</span>
            </div>
        },
        PanelState::Failed(message) => html! {
            <div class="panel-error" role="alert">
                <span class="error-icon">{"⚠️"}</span>
                <span class="error-text">{message.clone()}</span>
                <button type="button" class="btn-retry" onclick={props.on_retry.reform(|_| ())}>
                    {"Retry"}
                </button>
            </div>
        },
        PanelState::Idle => html! {
            <div class="panel-empty">{"Nothing loaded yet"}</div>
        },
        PanelState::Ready => html! { <>{props.children.clone()}</> },
    };

    html! {
        <section class="status-panel">
            <h2 class="panel-title">{props.title.clone()}</h2>
            {body}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Lifecycle, RequestId};

    #[test]
    fn panel_state_follows_resource() {
        let mut resource: Resource<u8> = Resource::default();
        assert_eq!(PanelState::of(&resource), PanelState::Idle);

        resource.apply(Lifecycle::Pending(RequestId(1)));
        assert_eq!(PanelState::of(&resource), PanelState::Loading);

        resource.apply(Lifecycle::Rejected(RequestId(1), "down".to_string()));
        assert_eq!(PanelState::of(&resource), PanelState::Failed("down".to_string()));

        resource.apply(Lifecycle::Pending(RequestId(2)));
        resource.apply(Lifecycle::Fulfilled(RequestId(2), 4));
        assert_eq!(PanelState::of(&resource), PanelState::Ready);
    }
}
