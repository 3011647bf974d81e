//! # Lines Store
//!
//! Search actions and the state they commit into. Actions may overlap; for
//! each language only the most recently started search is allowed to commit,
//! so a slow earlier response can never overwrite a newer one.

use crate::error::{Result, SearchError};
use crate::models::{
    ContextPage, EnglishLine, KoreanLine, Language, LinesState, SearchPage, SearchResult,
};
use crate::services::{HttpResponse, SearchGateway};
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// What happened to the page an action fetched
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome<T> {
    /// The page is now the current result for its language
    Committed(SearchPage<T>),
    /// A newer search started meanwhile; state was left alone
    Stale(SearchPage<T>),
}

impl<T> DispatchOutcome<T> {
    pub fn is_committed(&self) -> bool {
        matches!(self, DispatchOutcome::Committed(_))
    }

    pub fn page(&self) -> &SearchPage<T> {
        match self {
            DispatchOutcome::Committed(page) | DispatchOutcome::Stale(page) => page,
        }
    }

    pub fn into_page(self) -> SearchPage<T> {
        match self {
            DispatchOutcome::Committed(page) | DispatchOutcome::Stale(page) => page,
        }
    }
}

/// A line type the store knows where to keep
pub trait StoredLine: DeserializeOwned + Clone + Send + 'static {
    const LANGUAGE: Language;

    fn commit(state: &mut LinesState, result: SearchResult<Self>);
}

impl StoredLine for EnglishLine {
    const LANGUAGE: Language = Language::English;

    fn commit(state: &mut LinesState, result: SearchResult<Self>) {
        state.set_english(result);
    }
}

impl StoredLine for KoreanLine {
    const LANGUAGE: Language = Language::Korean;

    fn commit(state: &mut LinesState, result: SearchResult<Self>) {
        state.set_korean(result);
    }
}

#[derive(Debug, Default)]
struct Sequences {
    english: AtomicU64,
    korean: AtomicU64,
    context: AtomicU64,
}

impl Sequences {
    fn for_language(&self, language: Language) -> &AtomicU64 {
        match language {
            Language::English => &self.english,
            Language::Korean => &self.korean,
        }
    }
}

/// Search actions plus shared result state. Clones share the same state.
#[derive(Debug, Clone)]
pub struct LinesStore {
    gateway: SearchGateway,
    state: Arc<RwLock<LinesState>>,
    sequences: Arc<Sequences>,
}

impl LinesStore {
    pub fn new(gateway: SearchGateway) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(LinesState::new())),
            sequences: Arc::new(Sequences::default()),
        }
    }

    pub fn gateway(&self) -> &SearchGateway {
        &self.gateway
    }

    /// Search English lines
    pub async fn fetch_line_english(&self, keyword: &str) -> Result<DispatchOutcome<EnglishLine>> {
        self.fetch_line(keyword, None).await
    }

    /// Search Korean translations
    pub async fn fetch_line_korean(&self, keyword: &str) -> Result<DispatchOutcome<KoreanLine>> {
        self.fetch_line(keyword, None).await
    }

    /// Run one search and commit the decoded page if no newer search for the
    /// same language has started since.
    pub async fn fetch_line<T: StoredLine>(
        &self,
        keyword: &str,
        page: Option<u32>,
    ) -> Result<DispatchOutcome<T>> {
        let language = T::LANGUAGE;
        let sequence = self.sequences.for_language(language);
        let token = sequence.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Dispatching {} search #{} for '{}'", language, token, keyword);

        let decoded = self
            .gateway
            .fetch(language, keyword, page)
            .await
            .and_then(|response| {
                log_response(&response);
                response.json::<SearchPage<T>>()
            });

        let mut state = self.write_state();
        let is_latest = sequence.load(Ordering::SeqCst) == token;

        match decoded {
            Ok(page) if is_latest => {
                T::commit(
                    &mut state,
                    SearchResult {
                        keyword: keyword.to_string(),
                        page: page.clone(),
                    },
                );
                tracing::debug!(
                    "Committed {} search #{} ({} lines)",
                    language,
                    token,
                    page.lines.len()
                );
                Ok(DispatchOutcome::Committed(page))
            }
            Ok(page) => {
                tracing::debug!("Discarding stale {} search #{}", language, token);
                Ok(DispatchOutcome::Stale(page))
            }
            Err(e) => {
                tracing::warn!("{} search for '{}' failed: {}", language, keyword, e);
                if is_latest {
                    state.set_error(language, describe(&e));
                }
                Err(e)
            }
        }
    }

    /// Fetch the lines around a hit. Returns `None` when a newer context
    /// request started while this one was in flight.
    pub async fn fetch_context(&self, content_id: i64, line_id: i64) -> Result<Option<ContextPage>> {
        let token = self.sequences.context.fetch_add(1, Ordering::SeqCst) + 1;

        let response = self.gateway.fetch_context(content_id, line_id).await?;
        log_response(&response);
        let page: ContextPage = response.json()?;

        let mut state = self.write_state();
        if self.sequences.context.load(Ordering::SeqCst) != token {
            return Ok(None);
        }
        state.set_context(page.clone());
        Ok(Some(page))
    }

    /// Snapshot of the whole state
    pub fn state(&self) -> LinesState {
        self.read_state().clone()
    }

    pub fn english(&self) -> Option<SearchResult<EnglishLine>> {
        self.read_state().english().cloned()
    }

    pub fn korean(&self) -> Option<SearchResult<KoreanLine>> {
        self.read_state().korean().cloned()
    }

    pub fn context(&self) -> Option<ContextPage> {
        self.read_state().context().cloned()
    }

    pub fn last_error(&self, language: Language) -> Option<String> {
        self.read_state().last_error(language).map(str::to_string)
    }

    // The lock is never held across an await, so a poisoned lock still holds
    // consistent state.
    fn read_state(&self) -> RwLockReadGuard<'_, LinesState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, LinesState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_response(response: &HttpResponse) {
    tracing::debug!(
        "Response from {}: {} ({}ms) {}",
        response.url(),
        response.status().as_u16(),
        response.duration_ms(),
        response.body()
    );
}

fn describe(error: &SearchError) -> String {
    match error {
        SearchError::Status { status, body } if !body.is_empty() => {
            format!("{error}: {body}")
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_outcome_should_expose_page() {
        let page = SearchPage::<EnglishLine> {
            max_page: 1,
            page: 1,
            lines: vec![EnglishLine::default()],
        };

        let committed = DispatchOutcome::Committed(page.clone());
        let stale = DispatchOutcome::Stale(page.clone());

        assert!(committed.is_committed());
        assert!(!stale.is_committed());
        assert_eq!(stale.page(), &page);
        assert_eq!(committed.into_page(), page);
    }

    #[test]
    fn describe_should_include_status_body() {
        let err = SearchError::Status {
            status: 400,
            body: "keyword length must be greater than 2".to_string(),
        };

        assert_eq!(
            describe(&err),
            "server responded with status 400: keyword length must be greater than 2"
        );
        assert_eq!(
            describe(&SearchError::MissingBaseUrl),
            SearchError::MissingBaseUrl.to_string()
        );
    }

    #[test]
    fn sequences_should_be_independent_per_language() {
        let sequences = Sequences::default();

        sequences.for_language(Language::English).fetch_add(1, Ordering::SeqCst);

        assert_eq!(sequences.english.load(Ordering::SeqCst), 1);
        assert_eq!(sequences.korean.load(Ordering::SeqCst), 0);
    }
}
