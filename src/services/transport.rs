// ============================================================================
// TRANSPORT - the only place that touches the network
// ============================================================================

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::models::FileUpload;
use crate::services::error::ApiError;

pub type TransportFuture<'a> = LocalBoxFuture<'a, Result<HttpResponse, ApiError>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// Text fields and file parts of a multipart upload
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, FileUpload)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    pub fn file(mut self, name: &str, file: FileUpload) -> Self {
        self.files.push((name.to_string(), file));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn to_form_data(&self) -> Result<FormData, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value).map_err(js_error)?;
        }
        for (name, file) in &self.files {
            let parts = js_sys::Array::new();
            parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
            let options = BlobPropertyBag::new();
            options.set_type(&file.content_type);
            let blob =
                Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
            form.append_with_blob_and_filename(name, &blob, &file.file_name)
                .map_err(js_error)?;
        }
        Ok(form)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Sends one request and hands back the raw response, whatever its status
pub trait Transport {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Browser `fetch` via gloo-net
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let HttpRequest {
                method,
                url,
                headers,
                body,
            } = request;

            let mut builder = match method {
                HttpMethod::Get => Request::get(&url),
                HttpMethod::Post => Request::post(&url),
                HttpMethod::Put => Request::put(&url),
                HttpMethod::Patch => Request::patch(&url),
                HttpMethod::Delete => Request::delete(&url),
            };
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }

            let built = match body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder.json(&value),
                RequestBody::Multipart(form) => builder.body(form.to_form_data()?),
            }
            .map_err(|e| ApiError::Request(e.to_string()))?;

            let response = built
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let status_text = response.status_text();
            let headers = response.headers().entries().collect();
            let body = response
                .binary()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            Ok(HttpResponse {
                status,
                status_text,
                headers,
                body,
            })
        })
    }
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Request(format!("{:?}", err))
}
