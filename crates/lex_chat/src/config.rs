//! Client configuration.
//!
//! Settings are resolved in layers: `settings.json` in the data directory
//! first, then environment variables, then defaults. No endpoint configured
//! means the built-in keyword responder is used.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::keyword::KeywordResponder;
use crate::responder::{HttpResponder, Responder};

/// Environment variable for the remote responder endpoint
pub const API_URL_ENV: &str = "LEXBUDDY_API_URL";
/// Environment variable for the identity provider base URL
pub const AUTH_URL_ENV: &str = "LEXBUDDY_AUTH_URL";

const SETTINGS_FILE: &str = "settings.json";

/// Resolved client configuration.
#[derive(Debug, Clone, Default)]
pub struct ChatConfig {
    /// Remote responder endpoint; None selects the built-in responder
    pub api_url: Option<String>,
    /// Identity provider base URL
    pub auth_url: Option<String>,
    /// Slug of the domain to open the conversation with
    pub domain: Option<String>,
}

// Shape of settings.json
#[derive(Debug, Deserialize, Default)]
struct Settings {
    #[serde(rename = "apiUrl")]
    api_url: Option<String>,
    #[serde(rename = "authUrl")]
    auth_url: Option<String>,
    domain: Option<String>,
}

impl ChatConfig {
    /// Resolve configuration from environment variables only
    pub fn from_env() -> Self {
        Self {
            api_url: non_empty_env(API_URL_ENV),
            auth_url: non_empty_env(AUTH_URL_ENV),
            domain: None,
        }
    }

    /// Resolve configuration from `settings.json` in the data directory,
    /// falling back to the environment per field
    pub fn from_settings(data_dir: &Path) -> Self {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let settings = if settings_path.exists() {
            std::fs::read_to_string(&settings_path)
                .ok()
                .and_then(|content| serde_json::from_str::<Settings>(&content).ok())
                .unwrap_or_default()
        } else {
            Settings::default()
        };

        let env = Self::from_env();
        Self {
            api_url: settings.api_url.or(env.api_url),
            auth_url: settings.auth_url.or(env.auth_url),
            domain: settings.domain,
        }
    }

    /// Build the responder this configuration selects.
    ///
    /// The credential token, when present, is attached to the HTTP responder;
    /// the built-in responder needs none.
    pub fn build_responder(&self, token: Option<String>) -> Box<dyn Responder> {
        match self.api_url {
            Some(ref url) => {
                let mut responder = HttpResponder::new(url.clone());
                if let Some(token) = token {
                    responder = responder.with_token(token);
                }
                Box::new(responder)
            }
            None => {
                info!("No responder endpoint configured, using built-in responses");
                Box::new(KeywordResponder::new())
            }
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
