pub mod use_portal;
pub mod use_selector;
pub mod use_toaster;
pub mod use_semester;

pub use use_portal::use_portal;
pub use use_selector::use_selector;
pub use use_toaster::{use_toaster, ToastKind, Toaster};
pub use use_semester::use_semester;

use std::future::Future;

use crate::services::ApiError;

/// Fires an operation whose outcome is only read back through the store
pub fn spawn_operation<T, F>(operation: F)
where
    T: 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let _ = operation.await;
    });
}
