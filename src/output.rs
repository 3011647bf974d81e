//! # Output Formatting
//!
//! Plain-text rendering of search results for the terminal.

use crate::models::{ContextPage, EnglishLine, Genre, KoreanLine, SearchPage};
use std::fmt::Write;

pub fn format_english_page(page: &SearchPage<EnglishLine>) -> String {
    let mut text = page_header(page);
    for line in &page.lines {
        let _ = writeln!(text, "[{}] {}", line.id, line.line);
        let _ = writeln!(
            text,
            "    {} ({}{}) likes: {}, translations: {}",
            line.content.title,
            line.category.category,
            genre_suffix(&line.genres),
            line.like_count,
            line.translation_count
        );
    }
    text
}

pub fn format_korean_page(page: &SearchPage<KoreanLine>) -> String {
    let mut text = page_header(page);
    for line in &page.lines {
        let _ = writeln!(text, "[{}] {}", line.id, line.translation);
        let _ = writeln!(text, "    <- [{}] {}", line.line.id, line.line.line);
        let _ = writeln!(
            text,
            "    {} ({}{}) likes: {}",
            line.content.title,
            line.category.category,
            genre_suffix(&line.genres),
            line.like_count
        );
    }
    text
}

pub fn format_context_page(page: &ContextPage) -> String {
    let mut text = String::new();
    for line in &page.lines {
        let _ = writeln!(text, "[{}] {}", line.id, line.line);
        if let Some(translation) = &line.translation {
            let _ = writeln!(text, "    {}", translation.translation);
        }
    }
    text
}

fn page_header<T>(page: &SearchPage<T>) -> String {
    if page.is_empty() {
        "No lines found\n".to_string()
    } else {
        format!("Page {}/{}\n", page.page, page.max_page)
    }
}

fn genre_suffix(genres: &[Genre]) -> String {
    if genres.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = genres.iter().map(|g| g.genre.as_str()).collect();
    format!("; {}", names.join(", "))
}
