//! Search language selector.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Korean,
}

impl Language {
    /// Path segment naming this language in search endpoints
    pub fn path_segment(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Korean => "korean",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "ko" | "kor" | "korean" => Ok(Language::Korean),
            other => Err(format!("unknown language '{other}'")),
        }
    }
}
