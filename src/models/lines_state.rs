//! # Lines State
//!
//! Search results committed by the lines store, readable by whatever displays them.

use super::language::Language;
use super::search_page::{ContextPage, EnglishLine, KoreanLine, SearchPage};

/// A committed search page and the keyword it answers
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<T> {
    pub keyword: String,
    pub page: SearchPage<T>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinesState {
    english: Option<SearchResult<EnglishLine>>,
    korean: Option<SearchResult<KoreanLine>>,
    context: Option<ContextPage>,
    english_error: Option<String>,
    korean_error: Option<String>,
}

impl LinesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn english(&self) -> Option<&SearchResult<EnglishLine>> {
        self.english.as_ref()
    }

    pub fn korean(&self) -> Option<&SearchResult<KoreanLine>> {
        self.korean.as_ref()
    }

    pub fn context(&self) -> Option<&ContextPage> {
        self.context.as_ref()
    }

    pub fn last_error(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => self.english_error.as_deref(),
            Language::Korean => self.korean_error.as_deref(),
        }
    }

    /// Replace the English result and clear its error
    pub fn set_english(&mut self, result: SearchResult<EnglishLine>) {
        self.english = Some(result);
        self.english_error = None;
    }

    /// Replace the Korean result and clear its error
    pub fn set_korean(&mut self, result: SearchResult<KoreanLine>) {
        self.korean = Some(result);
        self.korean_error = None;
    }

    pub fn set_context(&mut self, page: ContextPage) {
        self.context = Some(page);
    }

    /// Record a failed search. The previous result is kept.
    pub fn set_error(&mut self, language: Language, message: String) {
        match language {
            Language::English => self.english_error = Some(message),
            Language::Korean => self.korean_error = Some(message),
        }
    }
}
