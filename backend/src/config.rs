//! Server configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first (if present) with
//! `dotenvy`; real environment variables take precedence over it. Parsing
//! goes through `ServerConfig::from_lookup` so it can be exercised without
//! touching the process environment.
//!
//! | variable                    | default                                 |
//! |-----------------------------|-----------------------------------------|
//! | `MAHASISWA_HOST`            | `127.0.0.1`                             |
//! | `MAHASISWA_PORT`            | `8080`                                  |
//! | `MAHASISWA_OPEN_BROWSER`    | `true`                                  |
//! | `MAHASISWA_API_BASE`        | `https://express-gen.vercel.app/api`    |
//! | `MAHASISWA_STUDENTS_URL`    | `<api base>/mahasiswa`                  |
//! | `MAHASISWA_PROGRAMS_URL`    | `<api base>/prodi`                      |
//! | `MAHASISWA_ITEMS_PER_PAGE`  | `5`                                     |
//! | `MAHASISWA_LOADING_MODE`    | `all_sources` (or `first_response`)     |
//! | `MAHASISWA_MODAL_ID`        | `tambahMahasiswaModal`                  |

use common::config::{ClientConfig, LoadingMode, DEFAULT_API_BASE};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Served to the frontend at `GET /api/config`.
    pub client: ClientConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base = get("MAHASISWA_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let mut client = ClientConfig::with_api_base(&api_base);
        if let Some(url) = get("MAHASISWA_STUDENTS_URL") {
            client.students_url = url;
        }
        if let Some(url) = get("MAHASISWA_PROGRAMS_URL") {
            client.programs_url = url;
        }
        if let Some(raw) = get("MAHASISWA_ITEMS_PER_PAGE") {
            client.items_per_page = parse_items_per_page(&raw)?;
        }
        if let Some(raw) = get("MAHASISWA_LOADING_MODE") {
            client.loading_mode = raw.parse::<LoadingMode>().map_err(|e| ConfigError::Invalid {
                key: "MAHASISWA_LOADING_MODE",
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        }
        if let Some(id) = get("MAHASISWA_MODAL_ID") {
            client.modal_id = id;
        }

        let port = match get("MAHASISWA_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "MAHASISWA_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => 8080,
        };

        let open_browser = match get("MAHASISWA_OPEN_BROWSER") {
            Some(raw) => parse_flag("MAHASISWA_OPEN_BROWSER", &raw)?,
            None => true,
        };

        Ok(Self {
            host: get("MAHASISWA_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            open_browser,
            client,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_items_per_page(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "MAHASISWA_ITEMS_PER_PAGE",
        value: raw.to_string(),
        reason,
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(e.to_string())),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
