//! Backend service clients

mod http;

pub use http::{HttpClientProvider, HttpServiceClient};
