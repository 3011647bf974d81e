//! # Connection Profiles
//!
//! Named connection settings loaded from an INI file. Each section is one
//! profile, typically one per deployment environment:
//!
//! ```ini
//! [dev]
//! base_url = http://localhost:8000
//!
//! [prod]
//! base_url = https://api.engster.example
//! timeout_secs = 10
//! @X-Client = engster-cli
//! ```
//!
//! Keys starting with `@` become extra request headers.

use crate::error::{Result, SearchError};
use ini::Ini;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

const BASE_URL_KEY: &str = "base_url";
const INSECURE_KEY: &str = "insecure";
const TIMEOUT_KEY: &str = "timeout_secs";
const HEADER_PREFIX: char = '@';

/// Settings the HTTP client factory needs to build a client
pub trait HttpConnectionProfile {
    fn base_url(&self) -> Option<&str>;
    fn headers(&self) -> &HashMap<String, String>;
    fn insecure(&self) -> bool;
    fn timeout(&self) -> Option<Duration>;
}

/// Profile backed by one INI section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniProfile {
    base_url: Option<String>,
    headers: HashMap<String, String>,
    insecure: bool,
    timeout: Option<Duration>,
}

impl IniProfile {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn set_base_url(&mut self, base_url: String) {
        self.base_url = Some(base_url);
    }

    pub fn set_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }
}

impl HttpConnectionProfile for IniProfile {
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn insecure(&self) -> bool {
        self.insecure
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Profile with nothing configured
pub fn get_blank_profile() -> IniProfile {
    IniProfile::default()
}

/// Reads profiles from an INI file on disk
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: shellexpand::tilde(path).into_owned(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a profile by name. A missing file or section is `Ok(None)`.
    pub fn get_profile(&self, name: &str) -> Result<Option<IniProfile>> {
        if !Path::new(&self.path).exists() {
            tracing::debug!("Profile file '{}' does not exist", self.path);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path)
            .map_err(|e| SearchError::Profile(format!("cannot read '{}': {e}", self.path)))?;

        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let mut profile = IniProfile::default();
        for (key, value) in section.iter() {
            let value = value.trim();
            match key {
                BASE_URL_KEY => profile.base_url = Some(value.to_string()),
                INSECURE_KEY => profile.insecure = parse_bool(key, value)?,
                TIMEOUT_KEY => {
                    let secs: u64 = value.parse().map_err(|_| {
                        SearchError::Profile(format!("'{key}' must be a whole number of seconds"))
                    })?;
                    profile.timeout = Some(Duration::from_secs(secs));
                }
                _ => match key.strip_prefix(HEADER_PREFIX) {
                    Some(header) => {
                        profile.headers.insert(header.to_string(), value.to_string());
                    }
                    None => tracing::warn!("Ignoring unknown profile key '{}'", key),
                },
            }
        }

        Ok(Some(profile))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(SearchError::Profile(format!(
            "'{key}' must be true or false, got '{value}'"
        ))),
    }
}

/// Resolve the effective profile: the named section (or a blank profile when
/// absent) with the base URL replaced by `base_url_override` when given.
pub fn resolve_profile(
    store: &IniProfileStore,
    name: &str,
    base_url_override: Option<String>,
) -> Result<IniProfile> {
    let mut profile = match store.get_profile(name)? {
        Some(p) => {
            tracing::debug!("Profile '{}' loaded, base_url: {:?}", name, p.base_url());
            p
        }
        None => {
            tracing::debug!("Profile '{}' not found, using blank profile", name);
            get_blank_profile()
        }
    };

    if let Some(url) = base_url_override {
        tracing::debug!("Base URL overridden from environment: {}", url);
        profile.set_base_url(url);
    }

    Ok(profile)
}
