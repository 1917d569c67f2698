//! Global configuration loader for Notely.
//!
//! Reads `config.toml` from the data directory (`~/.notely/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed. The `PORT` environment variable
//! takes precedence over the file.

use std::path::{Path, PathBuf};

use notely_types::config::GlobalConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `NOTELY_DATA_DIR` environment variable
/// 2. `~/.notely`
/// 3. `.notely` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NOTELY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".notely");
    }

    PathBuf::from(".notely")
}

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Apply overrides from the process environment (currently `PORT`).
pub fn apply_env_overrides(config: &mut GlobalConfig) {
    let port = std::env::var("PORT").ok();
    apply_port_override(config, port.as_deref());
}

/// Override the listen port with `raw` when it parses as a port number.
///
/// Unparsable values are ignored with a warning so a typo in the
/// environment doesn't silently bind somewhere unexpected.
pub fn apply_port_override(config: &mut GlobalConfig, raw: Option<&str>) {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return;
    };

    match raw.parse::<u16>() {
        Ok(port) => config.port = port,
        Err(err) => {
            tracing::warn!(value = raw, "Ignoring invalid PORT: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config, GlobalConfig::default());
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
host = "127.0.0.1"
port = 9090
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.cors_allowed_origins, GlobalConfig::default().cors_allowed_origins);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn port_override_applies_valid_value() {
        let mut config = GlobalConfig::default();
        apply_port_override(&mut config, Some("3000"));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn port_override_ignores_invalid_or_empty() {
        let mut config = GlobalConfig::default();
        apply_port_override(&mut config, Some("eighty"));
        apply_port_override(&mut config, Some("70000"));
        apply_port_override(&mut config, Some("  "));
        apply_port_override(&mut config, None);
        assert_eq!(config.port, 8080);
    }
}
