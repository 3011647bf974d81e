//! # HTTP Service
//!
//! The shared HTTP client and the single path-join rule every request uses.

use crate::error::{Result, SearchError};
use crate::profile::HttpConnectionProfile;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Instant;

const JSON_MIME: &str = "application/json";

/// HTTP client bound to one base URL.
///
/// Cloning is cheap: clones share the underlying connection pool. Every
/// request carries `Accept: application/json` and
/// `Content-Type: application/json`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Build a client from a connection profile
    pub fn new(profile: &impl HttpConnectionProfile) -> Result<Self> {
        let base_url = parse_base_url(profile.base_url())?;

        let mut headers = HeaderMap::new();
        for (key, value) in profile.headers() {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| SearchError::Profile(format!("invalid header name '{key}': {e}")))?;
            if name == ACCEPT || name == CONTENT_TYPE {
                tracing::warn!("Ignoring profile override of fixed header '{}'", name);
                continue;
            }
            let value = HeaderValue::from_str(value)
                .map_err(|e| SearchError::Profile(format!("invalid value for '{key}': {e}")))?;
            headers.insert(name, value);
        }
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(profile.insecure());
        if let Some(timeout) = profile.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SearchError::ClientBuild)?;

        tracing::info!("HttpClient created for {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL.
    ///
    /// Each segment is percent-encoded as a whole, so a keyword containing
    /// `/`, `?`, `#`, spaces or non-ASCII text stays one segment. `.` and `..`
    /// are refused: URL normalization removes them (encoded or not), so they
    /// can never reach the server as a segment.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(SearchError::DotSegment(segment.to_string()));
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Issue a single GET request. Non-2xx statuses are errors; nothing is retried.
    pub async fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<HttpResponse> {
        let url = self.endpoint(segments, query)?;
        tracing::debug!("GET {}", url);

        let start_time = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(SearchError::Network)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(SearchError::Network)?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        tracing::debug!(
            "GET {} -> {} ({}ms, {} bytes)",
            url,
            status.as_u16(),
            duration_ms,
            body.len()
        );

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            url,
            status,
            headers,
            body,
            duration_ms,
        })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<Url> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(SearchError::MissingBaseUrl);
    };

    let invalid = |reason: String| SearchError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_string()));
    }
    Ok(url)
}

/// A successful (2xx) response, body already read
#[derive(Debug, Clone)]
pub struct HttpResponse {
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    duration_ms: u64,
}

impl HttpResponse {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{get_blank_profile, IniProfile};

    fn client_for(base_url: &str) -> HttpClient {
        HttpClient::new(&IniProfile::with_base_url(base_url)).unwrap()
    }

    #[test]
    fn new_should_fail_without_base_url() {
        let err = HttpClient::new(&get_blank_profile()).unwrap_err();
        assert!(matches!(err, SearchError::MissingBaseUrl));

        let err = HttpClient::new(&IniProfile::with_base_url("  ")).unwrap_err();
        assert!(matches!(err, SearchError::MissingBaseUrl));
    }

    #[test]
    fn new_should_reject_invalid_base_urls() {
        for raw in ["not a url", "ftp://files.example", "mailto:someone@example.com"] {
            let err = HttpClient::new(&IniProfile::with_base_url(raw)).unwrap_err();
            assert!(
                matches!(err, SearchError::InvalidBaseUrl { .. }),
                "expected invalid base url for {raw}"
            );
        }
    }

    #[test]
    fn new_should_reject_bad_profile_header() {
        let mut profile = IniProfile::with_base_url("http://api.test");
        profile.set_header("Bad Header".to_string(), "x".to_string());

        let err = HttpClient::new(&profile).unwrap_err();
        assert!(matches!(err, SearchError::Profile(_)));
    }

    #[test]
    fn endpoint_should_join_with_single_separator() {
        let expected = "http://api.test/lines/search/english/hello";

        for base in ["http://api.test", "http://api.test/"] {
            let url = client_for(base)
                .endpoint(&["lines", "search", "english", "hello"], &[])
                .unwrap();
            assert_eq!(url.as_str(), expected);
        }
    }

    #[test]
    fn endpoint_should_keep_base_path_prefix() {
        let url = client_for("https://example.com/api/")
            .endpoint(&["lines", "search", "korean", "x"], &[])
            .unwrap();

        assert_eq!(url.as_str(), "https://example.com/api/lines/search/korean/x");
    }

    #[test]
    fn endpoint_should_encode_segment_as_a_whole() {
        let client = client_for("http://api.test");

        let url = client.endpoint(&["q", "안녕"], &[]).unwrap();
        assert_eq!(url.path(), "/q/%EC%95%88%EB%85%95");

        let url = client.endpoint(&["q", "a/b?c#d e"], &[]).unwrap();
        assert_eq!(url.path(), "/q/a%2Fb%3Fc%23d%20e");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn endpoint_should_append_query_pairs() {
        let url = client_for("http://api.test").endpoint(&["q", "hi"], &[("page", "2")])
            .unwrap();

        assert_eq!(url.as_str(), "http://api.test/q/hi?page=2");
    }

    #[test]
    fn endpoint_should_keep_empty_and_dotted_keywords() {
        let client = client_for("http://api.test");

        let url = client.endpoint(&["q", ""], &[]).unwrap();
        assert_eq!(url.path(), "/q/");

        let url = client.endpoint(&["q", "..."], &[]).unwrap();
        assert_eq!(url.path(), "/q/...");
    }

    #[test]
    fn endpoint_should_refuse_dot_segments() {
        let client = client_for("http://api.test");

        for keyword in [".", ".."] {
            let err = client.endpoint(&["q", keyword], &[]).unwrap_err();
            assert!(
                matches!(&err, SearchError::DotSegment(s) if s == keyword),
                "got {err:?}"
            );
        }
    }
}
