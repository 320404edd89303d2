use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct OriiConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    /// Mount point of the JSON API. Empty mounts it at the root.
    pub api_prefix: String,
}

impl OriiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(OriiConfig {
            common: common_config,
            service_name: get_env("SERVICE_NAME", Some("orii-service"), is_prod)?,
            api_prefix: normalize_prefix(&get_env("API_PREFIX", Some("/api"), is_prod)?)?,
        })
    }
}

impl Default for OriiConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: "orii-service".to_string(),
            api_prefix: "/api".to_string(),
        }
    }
}

/// Canonical form of an API prefix: leading `/`, no trailing `/`, `""` for the root.
pub fn normalize_prefix(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.'));
    if !valid || trimmed.contains("//") {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "API_PREFIX '{}' is not a plain path",
            raw
        )));
    }

    Ok(format!("/{}", trimmed))
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
