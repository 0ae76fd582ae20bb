//! AI provider settings, persisted as pretty JSON under the data
//! directory so the CLI and any embedding frontend read the same file.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

fn settings_path() -> PathBuf {
    store::data_dir().join("settings.json")
}

/// Read settings, falling back to defaults when the file is missing or
/// unreadable. A corrupt settings file should never block the app.
pub fn read_settings() -> AiSettings {
    let path = settings_path();
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &AiSettings) -> Result<(), std::io::Error> {
    let dir = store::data_dir();
    fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(settings_path(), json)
}

/// Whether enough is configured to call a model. Ollama runs locally and
/// needs no API key.
pub fn ai_configured(settings: &AiSettings) -> bool {
    !settings.provider.is_empty()
        && !settings.model.is_empty()
        && (settings.provider == "ollama" || !settings.api_key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_not_configured() {
        assert!(!ai_configured(&AiSettings::default()));
    }

    #[test]
    fn ollama_needs_no_api_key() {
        let settings = AiSettings {
            provider: "ollama".into(),
            api_key: String::new(),
            model: "llama3.1".into(),
        };
        assert!(ai_configured(&settings));
    }

    #[test]
    fn hosted_providers_need_an_api_key() {
        let mut settings = AiSettings {
            provider: "anthropic".into(),
            api_key: String::new(),
            model: "claude-sonnet-4-20250514".into(),
        };
        assert!(!ai_configured(&settings));
        settings.api_key = "sk-test".into();
        assert!(ai_configured(&settings));
    }
}
