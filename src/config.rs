//! Backend configuration from environment and CLI overrides.

use anyhow::{anyhow, Result};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash";

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl Config {
    /// Resolve the completion backend. Explicit CLI values win; otherwise
    /// key priority is Gemini (the default deployment) then OpenAI.
    pub fn resolve(
        base_url: Option<&str>,
        model: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Self> {
        let (default_url, default_model, key) = if let Some(key) = api_key {
            (GEMINI_BASE_URL, GEMINI_DEFAULT_MODEL, key.to_string())
        } else if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            (GEMINI_BASE_URL, GEMINI_DEFAULT_MODEL, key)
        } else if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            (OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL, key)
        } else {
            return Err(anyhow!(
                "No API key configured. Set GEMINI_API_KEY or OPENAI_API_KEY, or pass --api-key."
            ));
        };

        Ok(Self {
            base_url: base_url.unwrap_or(default_url).to_string(),
            model: model.unwrap_or(default_model).to_string(),
            api_key: key,
        })
    }
}
