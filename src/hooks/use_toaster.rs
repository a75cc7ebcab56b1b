use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Handle to push one-shot notifications, provided by `ToastProvider`
#[derive(Clone, PartialEq)]
pub struct Toaster {
    pub(crate) push: Callback<(ToastKind, String)>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastKind::Error, message.into()));
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| Toaster {
        push: Callback::from(|(kind, message): (ToastKind, String)| {
            log::info!("🔔 [{:?}] {}", kind, message);
        }),
    })
}
