use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{DaybreakError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning the image-of-the-day archive document.
    pub archive_url: String,
    /// Host the relative `urlbase` fragment is resolved against.
    pub image_host: String,
    /// Fixed resolution suffix appended to the url base.
    pub resolution_suffix: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesktopConfig {
    /// Overrides the platform pictures directory when set.
    pub pictures_dir: Option<String>,
    /// Album directory created under the pictures root.
    pub album_dir: String,
    /// Screen resolution the fit decision is made against. Falls back to
    /// 1920x1080 when unset.
    pub screen_resolution: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaybreakConfig {
    pub source: SourceConfig,
    pub desktop: DesktopConfig,
    pub ops: OpsConfig,
}

impl DaybreakConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| {
            DaybreakError::Configuration(format!(
                "unable to read config file {}: {err}",
                path_ref.display()
            ))
        })?;
        toml::from_str(&contents).map_err(|err| {
            DaybreakError::Configuration(format!(
                "failed to parse config file {}: {err}",
                path_ref.display()
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.archive_url.is_empty() {
            return Err(DaybreakError::Configuration(
                "source.archive_url must not be empty".into(),
            ));
        }
        if self.source.image_host.is_empty() {
            return Err(DaybreakError::Configuration(
                "source.image_host must not be empty".into(),
            ));
        }
        if self.source.timeout_secs == 0 {
            return Err(DaybreakError::Configuration(
                "source.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.desktop.album_dir.is_empty() {
            return Err(DaybreakError::Configuration(
                "desktop.album_dir must not be empty".into(),
            ));
        }
        if let Some((width, height)) = self.desktop.screen_resolution {
            if width == 0 || height == 0 {
                return Err(DaybreakError::Configuration(
                    "desktop.screen_resolution axes must be greater than zero".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_config() -> DaybreakConfig {
        DaybreakConfig {
            source: SourceConfig {
                archive_url: "https://example.com/archive?format=js&idx=0&n=1".into(),
                image_host: "https://example.com".into(),
                resolution_suffix: "_1920x1080.jpg".into(),
                timeout_secs: 30,
            },
            desktop: DesktopConfig {
                pictures_dir: None,
                album_dir: "Bing Backgrounds".into(),
                screen_resolution: Some((2560, 1440)),
            },
            ops: OpsConfig {
                log_level: "debug".into(),
            },
        }
    }

    #[test]
    fn load_daybreak_config_from_file() {
        let temp_path = std::env::temp_dir().join("daybreak-config-test.toml");
        let config = sample_config();

        let doc = toml::to_string(&config).expect("serialize config");
        fs::write(&temp_path, doc).expect("write temp config");

        let loaded = DaybreakConfig::from_file(&temp_path).expect("load config");
        assert_eq!(loaded.source.archive_url, config.source.archive_url);
        assert_eq!(loaded.desktop.album_dir, config.desktop.album_dir);
        assert_eq!(
            loaded.desktop.screen_resolution,
            config.desktop.screen_resolution
        );
        fs::remove_file(&temp_path).expect("cleanup temp config");
    }

    #[test]
    fn validate_configuration_rules() {
        let mut config = sample_config();
        assert!(config.validate().is_ok());

        config.source.archive_url.clear();
        assert!(config.validate().is_err());
        config.source.archive_url = "https://example.com/archive".into();

        config.source.image_host.clear();
        assert!(config.validate().is_err());
        config.source.image_host = "https://example.com".into();

        config.source.timeout_secs = 0;
        assert!(config.validate().is_err());
        config.source.timeout_secs = 30;

        config.desktop.album_dir.clear();
        assert!(config.validate().is_err());
        config.desktop.album_dir = "Backgrounds".into();

        config.desktop.screen_resolution = Some((1920, 0));
        assert!(config.validate().is_err());
        config.desktop.screen_resolution = Some((1920, 1080));
        assert!(config.validate().is_ok());
    }
}
