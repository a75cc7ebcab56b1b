// Browser file helpers: read a picked File into memory, hand a blob to the user

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use crate::models::{DownloadedFile, FileUpload};
use crate::viewmodels::check_file_size;

/// Reads the bytes of a file chosen in an `<input type="file">`.
/// Files over `max_bytes` are refused before any byte is read.
pub async fn read_file(file: &File, max_bytes: u64) -> Result<FileUpload, String> {
    check_file_size(file.size() as u64, max_bytes)?;
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Could not read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FileUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}

/// Triggers a browser "save as" for a downloaded file
pub fn save_download(file: &DownloadedFile) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(file.content_type.as_deref().unwrap_or("application/pdf"));
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}
