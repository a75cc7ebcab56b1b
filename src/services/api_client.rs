// ============================================================================
// API CLIENT - single outbound HTTP entry point (stateless)
// ============================================================================
// Attaches the bearer credential and content negotiation headers, turns
// non-2xx responses into ApiError::Http with the server's own message.
// No retries: callers decide.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::models::DownloadedFile;
use crate::services::error::ApiError;
use crate::services::transport::{
    FetchTransport, HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody, Transport,
};
use crate::utils::content_disposition::filename_from_content_disposition;
use crate::utils::storage::{CookieCredentialStore, CredentialStore};

const MAX_RAW_MESSAGE_CHARS: usize = 200;

pub type Query<'a> = &'a [(&'a str, String)];

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    credentials: Rc<dyn CredentialStore>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn Transport>,
        credentials: Rc<dyn CredentialStore>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            credentials,
        }
    }

    /// fetch + cookie credentials against the configured backend
    pub fn browser() -> Self {
        Self::new(
            CONFIG.backend_url(),
            Rc::new(FetchTransport),
            Rc::new(CookieCredentialStore),
        )
    }

    pub fn credentials(&self) -> &Rc<dyn CredentialStore> {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: Query<'_>) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(credential) = self.credentials.load() {
            headers.push((
                "Authorization".to_string(),
                format!("Bearer {}", credential.token),
            ));
        }
        headers
    }

    /// Sends a request and rejects on transport failure or non-2xx status
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: Query<'_>,
        body: RequestBody,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: self.url(path, query),
            headers: self.headers(),
            body,
        };
        log::debug!("➡️ {:?} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            let message = server_message(&response);
            log::warn!("⚠️ HTTP {} on {}: {}", response.status, path, message);
            Err(ApiError::Http {
                status: response.status,
                message,
            })
        }
    }

    pub async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Query<'_>,
    ) -> Result<R, ApiError> {
        let response = self
            .send(HttpMethod::Get, path, query, RequestBody::Empty)
            .await?;
        decode(&response)
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self
            .send(HttpMethod::Post, path, &[], json_body(body)?)
            .await?;
        decode(&response)
    }

    pub async fn patch_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self
            .send(HttpMethod::Patch, path, &[], json_body(body)?)
            .await?;
        decode(&response)
    }

    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> Result<R, ApiError> {
        let response = self
            .send(HttpMethod::Post, path, &[], RequestBody::Multipart(form))
            .await?;
        decode(&response)
    }

    /// Binary GET; filename comes from `content-disposition` or the fallback
    pub async fn download(
        &self,
        path: &str,
        query: Query<'_>,
        fallback_name: &str,
    ) -> Result<DownloadedFile, ApiError> {
        let response = self
            .send(HttpMethod::Get, path, query, RequestBody::Empty)
            .await?;
        let file_name =
            filename_from_content_disposition(response.header("content-disposition"), fallback_name);
        Ok(DownloadedFile {
            file_name,
            content_type: response.header("content-type").map(str::to_string),
            bytes: response.body,
        })
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Request(e.to_string()))
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Error text for a failed response. Never empty.
pub fn server_message(response: &HttpResponse) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(&response.body) {
        for key in ["message", "error", "msg"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
    } else {
        let raw = response.text();
        let raw = raw.trim();
        if !raw.is_empty() && !raw.starts_with('<') {
            return raw.chars().take(MAX_RAW_MESSAGE_CHARS).collect();
        }
    }

    if !response.status_text.trim().is_empty() {
        return response.status_text.trim().to_string();
    }
    format!("Request failed with status {}", response.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, SessionCredential};
    use crate::services::loopback::{json_response, LoopbackTransport};
    use crate::utils::storage::MemoryCredentialStore;
    use futures::executor::block_on;

    fn client(transport: &Rc<LoopbackTransport>, store: &Rc<MemoryCredentialStore>) -> ApiClient {
        ApiClient::new("http://api.test/", transport.clone(), store.clone())
    }

    fn response(status: u16, status_text: &str, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn attaches_bearer_token_and_accept_header() {
        let transport = LoopbackTransport::new();
        let store = Rc::new(MemoryCredentialStore::default());
        store
            .save(&SessionCredential::new("tok-1", Role::Faculty))
            .unwrap();
        transport.reply(json_response(200, serde_json::json!({ "ok": true })));

        let value: serde_json::Value =
            block_on(client(&transport, &store).get_json("/faculty/metrics", &[])).unwrap();

        assert_eq!(value["ok"], true);
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://api.test/faculty/metrics");
        assert_eq!(sent[0].header("authorization"), Some("Bearer tok-1"));
        assert_eq!(sent[0].header("accept"), Some("application/json"));
    }

    #[test]
    fn anonymous_requests_carry_no_authorization() {
        let transport = LoopbackTransport::new();
        let store = Rc::new(MemoryCredentialStore::default());
        transport.reply(json_response(200, serde_json::json!([])));

        let _: Vec<serde_json::Value> =
            block_on(client(&transport, &store).get_json("student/activities", &[])).unwrap();

        assert_eq!(transport.requests()[0].header("Authorization"), None);
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let transport = LoopbackTransport::new();
        let store = Rc::new(MemoryCredentialStore::default());
        transport.reply(json_response(200, serde_json::json!(null)));

        let _: Option<u8> = block_on(client(&transport, &store).get_json(
            "/api/search",
            &[("q", "a b&c".to_string()), ("semester", "3".to_string())],
        ))
        .unwrap();

        assert_eq!(
            transport.requests()[0].url,
            "http://api.test/api/search?q=a%20b%26c&semester=3"
        );
    }

    #[test]
    fn non_success_status_carries_server_message() {
        let transport = LoopbackTransport::new();
        let store = Rc::new(MemoryCredentialStore::default());
        transport.reply(json_response(
            422,
            serde_json::json!({ "message": "Semester must be between 1 and 8" }),
        ));

        let err = block_on(
            client(&transport, &store).get_json::<serde_json::Value>("/api/curriculum", &[]),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ApiError::Http {
                status: 422,
                message: "Semester must be between 1 and 8".to_string()
            }
        );
        assert_eq!(err.to_string(), "Semester must be between 1 and 8");
    }

    #[test]
    fn transport_failures_reject() {
        let transport = LoopbackTransport::new();
        let store = Rc::new(MemoryCredentialStore::default());
        transport.fail(ApiError::Network("connection refused".to_string()));

        let err = block_on(
            client(&transport, &store).get_json::<serde_json::Value>("/faculty/activities", &[]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let transport = LoopbackTransport::new();
        let store = Rc::new(MemoryCredentialStore::default());
        transport.reply(response(200, "OK", "{not json"));

        let err = block_on(client(&transport, &store).get_json::<Vec<u8>>("/x", &[])).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn server_message_falls_back_in_order() {
        assert_eq!(
            server_message(&response(400, "Bad Request", r#"{"error":"Missing semester"}"#)),
            "Missing semester"
        );
        assert_eq!(
            server_message(&response(400, "Bad Request", r#"{"msg":"Too late"}"#)),
            "Too late"
        );
        assert_eq!(
            server_message(&response(500, "Internal Server Error", "database down")),
            "database down"
        );
        assert_eq!(
            server_message(&response(502, "Bad Gateway", "<html>oops</html>")),
            "Bad Gateway"
        );
        assert_eq!(
            server_message(&response(503, "", r#"{"message":""}"#)),
            "Request failed with status 503"
        );
    }

    #[test]
    fn download_resolves_filename() {
        let transport = LoopbackTransport::new();
        let store = Rc::new(MemoryCredentialStore::default());
        transport.reply(HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers: vec![
                (
                    "Content-Disposition".to_string(),
                    "attachment; filename=\"sem-4.pdf\"".to_string(),
                ),
                ("Content-Type".to_string(), "application/pdf".to_string()),
            ],
            body: b"%PDF-1.7".to_vec(),
        });
        transport.reply(response(200, "OK", "%PDF-1.7"));

        let api = client(&transport, &store);
        let named = block_on(api.download("/api/results/report", &[], "fallback.pdf")).unwrap();
        assert_eq!(named.file_name, "sem-4.pdf");
        assert_eq!(named.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(named.bytes, b"%PDF-1.7".to_vec());

        let unnamed = block_on(api.download("/api/results/report", &[], "fallback.pdf")).unwrap();
        assert_eq!(unnamed.file_name, "fallback.pdf");
    }
}
