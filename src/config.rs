//! Configuration constants and utilities for engster
//!
//! Connection settings come from an INI profile file, with the base URL
//! overridable from the environment the same way the web frontend picked it
//! from its per-environment env files.

/// Default profile file path for engster
pub const DEFAULT_PROFILE_PATH: &str = "~/.engster/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "ENGSTER_PROFILE_PATH";

/// Environment variable name for overriding the API base URL
pub const BASE_URL_ENV_VAR: &str = "ENGSTER_BASE_URL";

/// Environment variable holding the tracing filter directive
pub const LOG_ENV_VAR: &str = "ENGSTER_LOG";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Get the base URL override from the environment, ignoring blank values
pub fn get_base_url_override() -> Option<String> {
    std::env::var_os(BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_path() {
        assert_eq!(DEFAULT_PROFILE_PATH, "~/.engster/profile");
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(PROFILE_PATH_ENV_VAR, "ENGSTER_PROFILE_PATH");
        assert_eq!(BASE_URL_ENV_VAR, "ENGSTER_BASE_URL");
    }

    #[test]
    fn test_get_profile_path_default_and_override() {
        // Both cases live in one test so nothing else races on the variable
        let original = std::env::var_os(PROFILE_PATH_ENV_VAR);

        std::env::remove_var(PROFILE_PATH_ENV_VAR);
        assert_eq!(get_profile_path(), DEFAULT_PROFILE_PATH);

        let test_path = "/custom/profile/path";
        std::env::set_var(PROFILE_PATH_ENV_VAR, test_path);
        assert_eq!(get_profile_path(), test_path);

        match original {
            Some(val) => std::env::set_var(PROFILE_PATH_ENV_VAR, val),
            None => std::env::remove_var(PROFILE_PATH_ENV_VAR),
        }
    }

    #[test]
    fn test_get_base_url_override() {
        let original = std::env::var_os(BASE_URL_ENV_VAR);

        std::env::set_var(BASE_URL_ENV_VAR, "   ");
        assert_eq!(get_base_url_override(), None);

        std::env::set_var(BASE_URL_ENV_VAR, "http://api.test");
        assert_eq!(get_base_url_override().as_deref(), Some("http://api.test"));

        std::env::remove_var(BASE_URL_ENV_VAR);
        assert_eq!(get_base_url_override(), None);

        if let Some(val) = original {
            std::env::set_var(BASE_URL_ENV_VAR, val);
        }
    }
}
