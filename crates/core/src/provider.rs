use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::{Result, ScriptError};

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
    /// Key looked up in the secrets store when the env var is unset
    pub secret_key: &'static str,
}

pub const OPENAI: ProviderConfig = ProviderConfig {
    api_url: "https://api.openai.com/v1/chat/completions",
    model: "gpt-4o",
    env_var: "OPENAI_API_KEY",
    secret_key: "OPENAI_API_KEY",
};

/// Env var that points at an alternative secrets file
pub const SECRETS_PATH_ENV: &str = "FOREXSCRIPT_SECRETS";

/// Flat key/value secrets read from a TOML file
#[derive(Debug, Default, Clone)]
pub struct SecretsStore {
    values: HashMap<String, String>,
}

impl SecretsStore {
    /// Load secrets from `path`. A missing file is an empty store.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no secrets file");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_toml(&content).map_err(|reason| ScriptError::Secrets {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| e.to_string())?;
        let values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Default secrets file location: `<config dir>/forexscript/secrets.toml`
pub fn default_secrets_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("forexscript")
        .join("secrets.toml")
}

impl ProviderConfig {
    /// Resolve the API key: environment first, then the secrets file at
    /// `secrets_path`. The file is only read when the env var is unset or empty.
    pub async fn resolve_api_key(&self, secrets_path: &Path) -> Result<String> {
        self.pick_api_key(std::env::var(self.env_var).ok(), secrets_path)
            .await
    }

    async fn pick_api_key(&self, env_value: Option<String>, secrets_path: &Path) -> Result<String> {
        if let Some(key) = env_value.filter(|key| !key.trim().is_empty()) {
            return Ok(key);
        }
        let secrets = SecretsStore::load(secrets_path).await?;
        self.key_from_store(&secrets)
    }

    fn key_from_store(&self, secrets: &SecretsStore) -> Result<String> {
        secrets
            .get(self.secret_key)
            .filter(|key| !key.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| ScriptError::MissingCredential {
                env_var: self.env_var.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(content: &str) -> SecretsStore {
        SecretsStore::from_toml(content).unwrap()
    }

    /// Write `content` to a fresh secrets file, returning its directory and path
    async fn secrets_file(content: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(uuid::Uuid::new_v4().to_string());
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("secrets.toml");
        tokio::fs::write(&path, content).await.unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn env_wins_over_secrets() {
        let (dir, path) = secrets_file(r#"OPENAI_API_KEY = "from-store""#).await;
        let key = OPENAI
            .pick_api_key(Some("from-env".into()), &path)
            .await
            .unwrap();
        assert_eq!(key, "from-env");
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn env_key_skips_a_broken_secrets_file() {
        let (dir, path) = secrets_file("OPENAI_API_KEY = ").await;
        let key = OPENAI
            .pick_api_key(Some("sk-from-env".into()), &path)
            .await
            .unwrap();
        assert_eq!(key, "sk-from-env");

        // without the env var the same file is reported
        let err = OPENAI.pick_api_key(None, &path).await.unwrap_err();
        assert!(matches!(err, ScriptError::Secrets { .. }));
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn falls_back_to_secrets() {
        let (dir, path) = secrets_file(r#"OPENAI_API_KEY = "from-store""#).await;
        assert_eq!(OPENAI.pick_api_key(None, &path).await.unwrap(), "from-store");
        assert_eq!(
            OPENAI
                .pick_api_key(Some(String::new()), &path)
                .await
                .unwrap(),
            "from-store"
        );
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[test]
    fn missing_everywhere_is_missing_credential() {
        let err = OPENAI.key_from_store(&SecretsStore::default()).unwrap_err();
        assert!(matches!(err, ScriptError::MissingCredential { ref env_var } if env_var == "OPENAI_API_KEY"));

        let blank = store(r#"OPENAI_API_KEY = "  ""#);
        assert!(OPENAI.key_from_store(&blank).is_err());
    }

    #[test]
    fn non_string_values_are_ignored() {
        let secrets = store("OPENAI_API_KEY = 42\nOTHER = \"x\"");
        assert_eq!(secrets.get("OPENAI_API_KEY"), None);
        assert_eq!(secrets.get("OTHER"), Some("x"));
    }

    #[tokio::test]
    async fn missing_file_is_empty_store() {
        let path = std::env::temp_dir()
            .join(uuid::Uuid::new_v4().to_string())
            .join("secrets.toml");
        let secrets = SecretsStore::load(&path).await.unwrap();
        assert_eq!(secrets.get("OPENAI_API_KEY"), None);

        let err = OPENAI.pick_api_key(None, &path).await.unwrap_err();
        assert!(matches!(err, ScriptError::MissingCredential { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let (dir, path) = secrets_file("OPENAI_API_KEY = ").await;
        let err = SecretsStore::load(&path).await.unwrap_err();
        assert!(matches!(err, ScriptError::Secrets { .. }));
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
