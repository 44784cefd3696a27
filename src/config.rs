use secrecy::{ExposeSecret, SecretString};
use std::env;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub llm_api_key: Option<SecretString>,
    pub llm_api_base: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub wikipedia_api_url: String,
    pub max_article_chars: usize,
    pub http_timeout_secs: u64,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            llm_api_key: env::var("GEMINI_API_KEY")
                .or_else(|_| env::var("OPENAI_API_KEY"))
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            llm_temperature: env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            wikipedia_api_url: env::var("WIKIPEDIA_API_URL")
                .unwrap_or_else(|_| DEFAULT_WIKIPEDIA_API_URL.to_string()),
            max_article_chars: env::var("MAX_ARTICLE_CHARS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(12_000),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|o| !o.trim().is_empty()),
        }
    }

    /// Checks settings the server cannot start without.
    pub fn validate(&self) -> AppResult<()> {
        if self.llm_api_key.is_none() {
            return Err(AppError::ConfigError(
                "GEMINI_API_KEY is not set. Add GEMINI_API_KEY=\"YOUR_KEY\" to the environment or .env file."
                    .to_string(),
            ));
        }

        if self.max_article_chars == 0 {
            return Err(AppError::ConfigError(
                "MAX_ARTICLE_CHARS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The API key with everything but the first and last four characters hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        self.llm_api_key
            .as_ref()
            .map(|key| mask_secret(key.expose_secret()))
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            llm_api_key: Some(SecretString::from("test_api_key_value".to_string())),
            llm_api_base: "http://localhost:9999/v1".to_string(),
            llm_model: "test-model".to_string(),
            llm_temperature: 0.7,
            wikipedia_api_url: "http://localhost:9998/w/api.php".to_string(),
            max_article_chars: 12_000,
            http_timeout_secs: 5,
            cors_allowed_origin: None,
        }
    }
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
