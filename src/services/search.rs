//! # Search Gateway
//!
//! Thin wrappers that put a keyword into the search endpoint paths. Responses
//! are returned as received; decoding is left to the caller.

use super::http::{HttpClient, HttpResponse};
use crate::error::Result;
use crate::models::Language;

const LINES_SEGMENT: &str = "lines";
const SEARCH_SEGMENT: &str = "search";
const CONTEXT_SEGMENT: &str = "context";
const PAGE_PARAM: &str = "page";

#[derive(Debug, Clone)]
pub struct SearchGateway {
    client: HttpClient,
}

impl SearchGateway {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// `GET {base}/lines/search/english/{keyword}`
    pub async fn fetch_english(&self, keyword: &str) -> Result<HttpResponse> {
        self.fetch(Language::English, keyword, None).await
    }

    /// `GET {base}/lines/search/korean/{keyword}`
    pub async fn fetch_korean(&self, keyword: &str) -> Result<HttpResponse> {
        self.fetch(Language::Korean, keyword, None).await
    }

    /// Search one language, optionally asking for a specific result page.
    /// The keyword is sent as-is apart from percent-encoding.
    pub async fn fetch(
        &self,
        language: Language,
        keyword: &str,
        page: Option<u32>,
    ) -> Result<HttpResponse> {
        let segments = [
            LINES_SEGMENT,
            SEARCH_SEGMENT,
            language.path_segment(),
            keyword,
        ];
        let page = page.map(|page| page.to_string());
        let query: Vec<(&str, &str)> = page
            .as_deref()
            .map(|page| (PAGE_PARAM, page))
            .into_iter()
            .collect();
        self.client.get(&segments, &query).await
    }

    /// `GET {base}/lines/search/context/{content_id}/{line_id}`: the lines
    /// around one hit
    pub async fn fetch_context(&self, content_id: i64, line_id: i64) -> Result<HttpResponse> {
        let content_id = content_id.to_string();
        let line_id = line_id.to_string();
        self.client
            .get(
                &[
                    LINES_SEGMENT,
                    SEARCH_SEGMENT,
                    CONTEXT_SEGMENT,
                    &content_id,
                    &line_id,
                ],
                &[],
            )
            .await
    }
}

