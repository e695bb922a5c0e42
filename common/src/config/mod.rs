//! Client configuration for the roster screen.
//!
//! The backend builds a `ClientConfig` from its environment and serves it at
//! `GET /api/config`. The frontend fetches it once on start-up and falls back
//! to `ClientConfig::default()` when the request fails, so the bundle also
//! works when served by a plain dev server.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Base URL of the public student API the screen talks to by default.
pub const DEFAULT_API_BASE: &str = "https://express-gen.vercel.app/api";

/// DOM id of the "add student" modal.
pub const DEFAULT_MODAL_ID: &str = "tambahMahasiswaModal";

pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// How the initial loading indicator settles when several sources load in
/// parallel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingMode {
    /// Loading until every source has reported, successfully or not.
    #[default]
    AllSources,
    /// Loading until the first source reports.
    FirstResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown loading mode `{0}` (expected `all_sources` or `first_response`)")]
pub struct ParseLoadingModeError(pub String);

impl FromStr for LoadingMode {
    type Err = ParseLoadingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all_sources" | "all" => Ok(LoadingMode::AllSources),
            "first_response" | "first" => Ok(LoadingMode::FirstResponse),
            _ => Err(ParseLoadingModeError(s.to_string())),
        }
    }
}

impl fmt::Display for LoadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadingMode::AllSources => "all_sources",
            LoadingMode::FirstResponse => "first_response",
        })
    }
}

/// Everything the roster component needs to know about its environment.
///
/// Missing keys in the served JSON take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub students_url: String,
    pub programs_url: String,
    pub items_per_page: usize,
    pub loading_mode: LoadingMode,
    pub modal_id: String,
}

impl ClientConfig {
    /// Configuration pointing both endpoints below `base`.
    pub fn with_api_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            students_url: format!("{}/mahasiswa", base),
            programs_url: format!("{}/prodi", base),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base = DEFAULT_API_BASE;
        Self {
            students_url: format!("{}/mahasiswa", base),
            programs_url: format!("{}/prodi", base),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            loading_mode: LoadingMode::default(),
            modal_id: DEFAULT_MODAL_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.students_url, "https://express-gen.vercel.app/api/mahasiswa");
        assert_eq!(config.programs_url, "https://express-gen.vercel.app/api/prodi");
        assert_eq!(config.items_per_page, 5);
        assert_eq!(config.loading_mode, LoadingMode::AllSources);
        assert_eq!(config.modal_id, "tambahMahasiswaModal");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"items_per_page":10,"loading_mode":"first_response"}"#).unwrap();
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.loading_mode, LoadingMode::FirstResponse);
        assert_eq!(config.modal_id, DEFAULT_MODAL_ID);
    }

    #[test]
    fn api_base_ignores_trailing_slash() {
        let config = ClientConfig::with_api_base("http://localhost:3000/api/");
        assert_eq!(config.students_url, "http://localhost:3000/api/mahasiswa");
        assert_eq!(config.programs_url, "http://localhost:3000/api/prodi");
    }

    #[test]
    fn parses_loading_mode_names() {
        assert_eq!("all_sources".parse(), Ok(LoadingMode::AllSources));
        assert_eq!("First-Response".parse(), Ok(LoadingMode::FirstResponse));
        assert_eq!(
            "whenever".parse::<LoadingMode>(),
            Err(ParseLoadingModeError("whenever".into()))
        );
        assert_eq!(LoadingMode::FirstResponse.to_string(), "first_response");
    }
}
