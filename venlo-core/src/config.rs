use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_TIMEZONE: &str = "Europe/Amsterdam";
pub const DEFAULT_RADAR_URL: &str =
    "https://api.buienradar.nl/image/1.0/RadarMapNL?width=550&height=512";

/// Upper bound for `cache_ttl_secs`: one week.
pub const MAX_CACHE_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_base_url = "https://api.open-meteo.com"
/// timezone = "Europe/Amsterdam"
/// timeout_secs = 10
/// cache_ttl_secs = 600
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme and host of the forecast API; `/v1/forecast` is appended.
    pub api_base_url: String,
    pub timezone: String,
    pub forecast_days: u8,
    pub timeout_secs: u64,
    pub cache_ttl_secs: u64,
    pub radar_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            forecast_days: 7,
            timeout_secs: 10,
            cache_ttl_secs: 600,
            radar_url: DEFAULT_RADAR_URL.to_string(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Freshness window, clamped to [`MAX_CACHE_TTL_SECS`].
    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_ttl_secs.min(MAX_CACHE_TTL_SECS) as i64)
    }

    /// Reject values that cannot be used as-is.
    pub fn validate(&self) -> Result<()> {
        if self.cache_ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(anyhow!(
                "cache_ttl_secs = {} exceeds the maximum of {MAX_CACHE_TTL_SECS} seconds",
                self.cache_ttl_secs
            ));
        }
        Ok(())
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("nl", "venlo-weer", "venlo")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_dashboard_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.cache_ttl(), chrono::Duration::minutes(10));
        assert_eq!(cfg.forecast_days, 7);
        assert_eq!(cfg.timezone, "Europe/Amsterdam");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let cfg = Config::load_from(&dir.path().join("nope.toml")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config { timeout_secs: 3, cache_ttl_secs: 60, ..Config::default() };
        cfg.save_to(&path).expect("save");

        assert_eq!(Config::load_from(&path).expect("load"), cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = 5\n").expect("write");

        let cfg = Config::load_from(&path).expect("load");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn oversized_cache_ttl_is_rejected_on_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "cache_ttl_secs = 10000000000000000\n").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the maximum"));
    }

    #[test]
    fn oversized_cache_ttl_is_clamped() {
        let cfg = Config { cache_ttl_secs: 10_000_000_000_000_000, ..Config::default() };
        assert!(cfg.validate().is_err());
        assert_eq!(cfg.cache_ttl(), chrono::Duration::weeks(1));

        let cfg = Config { cache_ttl_secs: MAX_CACHE_TTL_SECS, ..Config::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
