pub mod transport;
pub mod api_client;
pub mod auth_service;
pub mod activity_service;
pub mod blood_requirement_service;
pub mod attendance_service;
pub mod volunteer_service;

pub use transport::{GlooTransport, HttpRequest, HttpResponse, HttpTransport, Method};
pub use api_client::ApiClient;
