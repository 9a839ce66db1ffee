//! Collector configuration.
//!
//! Loaded once at process entry from a TOML file and passed into the
//! orchestrator; nothing reads ambient state after that.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use shopsnap_catalog::AssetRules;

/// One run's configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// WebSocket URL of the game service.
    pub server_url: String,

    /// Collector account. Must own nothing, or the run is rejected when
    /// the catalog arrives.
    pub username: String,
    pub password_hash: String,

    /// Room to land in after login.
    #[serde(default = "default_start_room")]
    pub start_room: String,

    /// Target archive directory. Must not exist yet.
    pub archive_dir: PathBuf,

    /// Asset-derivation overrides; anything omitted keeps the defaults.
    #[serde(default)]
    pub rules: AssetRules,
}

fn default_start_room() -> String {
    "*#shopsnap".into()
}

impl Config {
    /// Loads configuration from the given TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopsnap.toml");
        std::fs::write(
            &path,
            r#"
server_url = "ws://game.example.com:11801"
username = "collector"
password_hash = "deadbeef"
archive_dir = "/tmp/shop-archive"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.username, "collector");
        assert_eq!(config.start_room, "*#shopsnap");
        assert_eq!(config.rules, AssetRules::default());
    }

    #[test]
    fn rules_section_overrides_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopsnap.toml");
        std::fs::write(
            &path,
            r#"
server_url = "ws://game.example.com:11801"
username = "collector"
password_hash = "deadbeef"
archive_dir = "/tmp/shop-archive"

[rules]
max_static_fur_id = 300
fur_category_ids = [22]

[[rules.max_static_skin]]
base = 1
ceiling = 150
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.rules.max_static_fur_id, 300);
        assert_eq!(config.rules.fur_category_ids, vec![22]);
        assert_eq!(config.rules.skin_ceiling(1), Some(150));
        // Untouched fields keep their defaults.
        assert_eq!(config.rules.static_fur_libraries.len(), 5);
    }

    #[test]
    fn missing_file_is_an_error_naming_the_path() {
        let err = Config::load(Path::new("/nonexistent/shopsnap.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/shopsnap.toml"));
    }
}
