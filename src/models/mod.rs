//! # Models
//!
//! Plain data: search languages, decoded response bodies and the store state.

pub mod language;
pub mod lines_state;
pub mod search_page;

pub use language::Language;
pub use lines_state::{LinesState, SearchResult};
pub use search_page::{
    Category, ContentRef, ContextLine, ContextPage, EnglishLine, Genre, KoreanLine, LineRef,
    SearchPage, TranslationRef,
};
