//! Configuration for the memo search engine.
//!
//! All knobs are optional with sensible defaults, so the engine is usable
//! with `EngineConfig::default()` and overridable through environment
//! variables (a `.env` file is honored when present).

use crate::error::{ConfigError, ConfigResult};
use crate::highlight::HighlightMarker;
use std::env;

/// Configuration for the search engine facade.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How many note lines each search hit previews (default: 3)
    pub note_preview_lines: usize,

    /// Markup wrapped around highlighted spans (default: `<mark>`/`</mark>`)
    pub highlight_marker: HighlightMarker,

    /// Log level (default: "error")
    pub log_level: String,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MEMO_NOTE_PREVIEW_LINES`: note lines per search hit (default: 3)
    /// - `MEMO_HIGHLIGHT_OPEN`: opening highlight markup (default: `<mark>`)
    /// - `MEMO_HIGHLIGHT_CLOSE`: closing highlight markup (default: `</mark>`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Honor a .env file if one exists, without failing when it doesn't.
        let _ = dotenvy::dotenv();

        let note_preview_lines = Self::parse_env_usize("MEMO_NOTE_PREVIEW_LINES", 3)?;

        let defaults = HighlightMarker::default();
        let open = env::var("MEMO_HIGHLIGHT_OPEN").unwrap_or(defaults.open);
        let close = env::var("MEMO_HIGHLIGHT_CLOSE").unwrap_or(defaults.close);

        // A one-sided marker would produce unbalanced markup.
        if open.is_empty() != close.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "MEMO_HIGHLIGHT_OPEN/MEMO_HIGHLIGHT_CLOSE".to_string(),
                reason: "Must both be set or both be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(EngineConfig {
            note_preview_lines,
            highlight_marker: HighlightMarker { open, close },
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            note_preview_lines: 3,
            highlight_marker: HighlightMarker::default(),
            log_level: "error".to_string(),
        }
    }
}
