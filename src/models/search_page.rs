//! # Search Result Models
//!
//! Bodies returned by the line search endpoints. Every field defaults when
//! absent so a partially populated body still decodes.

use serde::{Deserialize, Serialize};

/// One page of search hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage<T> {
    #[serde(default)]
    pub max_page: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub lines: Vec<T>,
}

impl<T> SearchPage<T> {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether another page can be requested after this one
    pub fn has_next(&self) -> bool {
        self.page < self.max_page
    }
}

impl<T> Default for SearchPage<T> {
    fn default() -> Self {
        Self {
            max_page: 0,
            page: 0,
            lines: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub genre: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub line: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRef {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub translation: String,
}

/// English subtitle line matching the keyword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnglishLine {
    pub id: i64,
    pub line: String,
    pub like_count: u64,
    pub translation_count: u64,
    pub content: ContentRef,
    pub category: Category,
    pub genres: Vec<Genre>,
}

/// Korean translation matching the keyword, with the line it translates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoreanLine {
    pub id: i64,
    pub translation: String,
    pub line: LineRef,
    pub like_count: u64,
    pub translation_count: u64,
    pub content: ContentRef,
    pub category: Category,
    pub genres: Vec<Genre>,
}

/// Lines surrounding a hit, each with its most liked translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextPage {
    #[serde(default)]
    pub lines: Vec<ContextLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextLine {
    pub id: i64,
    pub line: String,
    pub translation: Option<TranslationRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn english_page_should_decode_full_body() {
        let body = json!({
            "max_page": 3,
            "page": 1,
            "lines": [{
                "id": 7,
                "line": "Hello there.",
                "like_count": 2,
                "translation_count": 1,
                "content": {"id": 1, "title": "Friends"},
                "category": {"id": 2, "category": "drama"},
                "genres": [{"id": 4, "genre": "comedy"}]
            }]
        });

        let page: SearchPage<EnglishLine> = serde_json::from_value(body).unwrap();

        assert_eq!(page.max_page, 3);
        assert!(page.has_next());
        assert_eq!(page.lines.len(), 1);
        assert_eq!(page.lines[0].line, "Hello there.");
        assert_eq!(page.lines[0].content.title, "Friends");
        assert_eq!(page.lines[0].genres[0].genre, "comedy");
    }

    #[test]
    fn korean_page_should_decode_with_missing_fields() {
        let body = json!({
            "lines": [{"id": 9, "translation": "안녕하세요", "line": {"id": 7, "line": "Hello."}}]
        });

        let page: SearchPage<KoreanLine> = serde_json::from_value(body).unwrap();

        assert_eq!(page.page, 0);
        assert!(!page.has_next());
        assert_eq!(page.lines[0].translation, "안녕하세요");
        assert_eq!(page.lines[0].line.line, "Hello.");
        assert_eq!(page.lines[0].like_count, 0);
        assert!(page.lines[0].genres.is_empty());
    }

    #[test]
    fn empty_result_page_should_decode() {
        let page: SearchPage<EnglishLine> =
            serde_json::from_value(json!({"max_page": 0, "page": 0, "lines": []})).unwrap();

        assert!(page.is_empty());
        assert_eq!(page, SearchPage::default());
    }

    #[test]
    fn context_page_should_decode_optional_translation() {
        let body = json!({
            "lines": [
                {"id": 1, "line": "Before.", "translation": {"id": 3, "translation": "전에."}},
                {"id": 2, "line": "After."}
            ]
        });

        let page: ContextPage = serde_json::from_value(body).unwrap();

        assert_eq!(page.lines.len(), 2);
        assert_eq!(page.lines[0].translation.as_ref().unwrap().translation, "전에.");
        assert_eq!(page.lines[1].translation, None);
    }
}
