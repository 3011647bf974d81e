//! # Services Layer
//!
//! Services own access to external resources. The store drives them; they
//! hold no search state of their own.

pub mod http;
pub mod search;

pub use http::{HttpClient, HttpResponse};
pub use search::SearchGateway;
