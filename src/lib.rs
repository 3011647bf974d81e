//! # Engster - Subtitle Line Search Client
//!
//! Searches English subtitle lines and their Korean translations through the
//! Engster search API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   actions   ┌──────────────┐    GET     ┌──────────────┐
//! │   Caller    │────────────▶│  LinesStore  │───────────▶│SearchGateway │
//! │ (CLI / UI)  │◀────────────│              │            │              │
//! └─────────────┘   results   │ - sequencing │            │ - paths      │
//!                             │ - state      │            └──────┬───────┘
//!                             └──────────────┘                   │
//!                                                        ┌──────▼───────┐
//!                                                        │  HttpClient  │
//!                                                        │ - base URL   │
//!                                                        │ - JSON hdrs  │
//!                                                        └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod profile;
pub mod services;
pub mod store;

pub use error::{Result, SearchError};
pub use models::{EnglishLine, KoreanLine, Language, LinesState, SearchPage, SearchResult};
pub use profile::{HttpConnectionProfile, IniProfile, IniProfileStore};
pub use services::{HttpClient, HttpResponse, SearchGateway};
pub use store::{DispatchOutcome, LinesStore};
