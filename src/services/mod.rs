pub mod error;
pub mod transport;
pub mod api_client;
pub mod auth_service;
pub mod academics_service;
pub mod faculty_service;
pub mod students_service;
pub mod results_service;
pub mod activities_service;

#[cfg(test)]
pub mod loopback;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use transport::{FetchTransport, HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody, Transport};
