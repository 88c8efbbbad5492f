//! Desktop boundary: image persistence, style settings, and the refresh call.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{Datelike, Local};
use daybreak_types::{
    config::DesktopConfig,
    geometry::{Dimensions, FitMode, StyleParameters},
    image::DecodedImage,
    DaybreakError, Result,
};
use image::{ImageBuffer, Rgba};
use tracing::info;

const DEFAULT_SCREEN: Dimensions = Dimensions {
    width: 1920,
    height: 1080,
};

/// Queryable display the wallpaper will be rendered on.
pub trait ScreenProbe: Send + Sync {
    fn screen_size(&self) -> Result<Dimensions>;
}

/// Probe reporting a resolution fixed at configuration time.
pub struct FixedScreenProbe {
    size: Dimensions,
}

impl FixedScreenProbe {
    pub fn new(resolution: Option<(u32, u32)>) -> Self {
        let size = resolution
            .map(|(width, height)| Dimensions::new(width, height))
            .unwrap_or(DEFAULT_SCREEN);
        Self { size }
    }
}

impl ScreenProbe for FixedScreenProbe {
    fn screen_size(&self) -> Result<Dimensions> {
        Ok(self.size)
    }
}

/// Handle to the desktop settings the wallpaper style lives in.
pub trait SettingsStore: Send + Sync {
    /// Persist the style parameters derived from the fit mode.
    fn persist_style(&self, mode: FitMode) -> Result<()>;
    /// Trigger a wallpaper refresh from the saved file.
    fn refresh(&self, path: &Path) -> Result<()>;
}

/// In-memory store used for early integration and testing.
#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    styles: Arc<Mutex<Vec<StyleParameters>>>,
    refreshed: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles(&self) -> Vec<StyleParameters> {
        self.styles.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn refreshed(&self) -> Vec<PathBuf> {
        self.refreshed.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn persist_style(&self, mode: FitMode) -> Result<()> {
        let mut styles = self
            .styles
            .lock()
            .map_err(|_| DaybreakError::Platform("failed to lock style records".into()))?;
        styles.push(mode.style_parameters());
        Ok(())
    }

    fn refresh(&self, path: &Path) -> Result<()> {
        let mut refreshed = self
            .refreshed
            .lock()
            .map_err(|_| DaybreakError::Platform("failed to lock refresh records".into()))?;
        refreshed.push(path.to_path_buf());
        Ok(())
    }
}

/// Store backed by the operating system's desktop settings.
pub struct DesktopSettingsStore;

impl SettingsStore for DesktopSettingsStore {
    fn persist_style(&self, mode: FitMode) -> Result<()> {
        wallpaper::set_mode(desktop_mode(mode)).map_err(|err| {
            DaybreakError::Platform(format!("failed to persist wallpaper style: {err}"))
        })
    }

    fn refresh(&self, path: &Path) -> Result<()> {
        let path_str = path
            .to_str()
            .ok_or_else(|| DaybreakError::Platform("wallpaper path is not valid UTF-8".into()))?;
        wallpaper::set_from_path(path_str)
            .map_err(|err| DaybreakError::Platform(format!("failed to set wallpaper: {err}")))
    }
}

fn desktop_mode(mode: FitMode) -> wallpaper::Mode {
    match mode {
        FitMode::Tile => wallpaper::Mode::Tile,
        FitMode::Center => wallpaper::Mode::Center,
        FitMode::Stretch => wallpaper::Mode::Stretch,
        FitMode::Fit => wallpaper::Mode::Fit,
        FitMode::Fill => wallpaper::Mode::Crop,
    }
}

#[async_trait]
pub trait WallpaperApplier: Send + Sync {
    /// Persist the image to its dated path and apply it with the given mode.
    /// Returns the path the image was saved to.
    async fn apply(&self, image: &DecodedImage, mode: FitMode) -> Result<PathBuf>;
}

/// Applier writing to `<pictures>/<album>/<year>/<month>-<day>-<year>.bmp`
/// and pushing the style through a settings store.
pub struct DesktopApplier<S: SettingsStore> {
    config: DesktopConfig,
    settings: S,
}

impl<S: SettingsStore> DesktopApplier<S> {
    pub fn new(config: DesktopConfig, settings: S) -> Self {
        Self { config, settings }
    }

    fn resolve_save_path(&self) -> Result<PathBuf> {
        let root = match &self.config.pictures_dir {
            Some(dir) => PathBuf::from(dir),
            None => dirs::picture_dir().ok_or_else(|| {
                DaybreakError::Filesystem("could not determine the pictures directory".into())
            })?,
        };
        let now = Local::now();
        let dir = root
            .join(&self.config.album_dir)
            .join(now.year().to_string());
        fs::create_dir_all(&dir).map_err(|err| {
            DaybreakError::Filesystem(format!("failed to create {}: {err}", dir.display()))
        })?;
        Ok(dir.join(format!("{}-{}-{}.bmp", now.month(), now.day(), now.year())))
    }

    fn persist_image(&self, image: &DecodedImage, path: &Path) -> Result<()> {
        let Some(buffer) =
            ImageBuffer::<Rgba<u8>, _>::from_raw(image.width, image.height, image.data.clone())
        else {
            return Err(DaybreakError::Decode(
                "pixel buffer does not match its dimensions".into(),
            ));
        };
        buffer.save(path).map_err(|err| {
            DaybreakError::Filesystem(format!("failed to save {}: {err}", path.display()))
        })
    }
}

#[async_trait]
impl<S: SettingsStore> WallpaperApplier for DesktopApplier<S> {
    async fn apply(&self, image: &DecodedImage, mode: FitMode) -> Result<PathBuf> {
        let path = self.resolve_save_path()?;
        self.persist_image(image, &path)?;
        info!("Saved background image to {}", path.display());
        self.settings.persist_style(mode)?;
        self.settings.refresh(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn solid_image(width: u32, height: u32) -> DecodedImage {
        DecodedImage {
            width,
            height,
            data: vec![0x40; (width * height * 4) as usize],
            fetched_at: Utc::now(),
        }
    }

    fn temp_config(test_name: &str) -> DesktopConfig {
        let root = std::env::temp_dir().join(format!("daybreak-apply-{test_name}"));
        DesktopConfig {
            pictures_dir: Some(root.to_string_lossy().into_owned()),
            album_dir: "Backgrounds".into(),
            screen_resolution: None,
        }
    }

    fn cleanup(config: &DesktopConfig) {
        if let Some(dir) = &config.pictures_dir {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn fixed_probe_defaults_to_full_hd() {
        let probe = FixedScreenProbe::new(None);
        assert_eq!(
            probe.screen_size().expect("probe"),
            Dimensions::new(1920, 1080)
        );

        let probe = FixedScreenProbe::new(Some((2560, 1440)));
        assert_eq!(
            probe.screen_size().expect("probe"),
            Dimensions::new(2560, 1440)
        );
    }

    #[tokio::test]
    async fn apply_saves_image_and_pushes_style() {
        let config = temp_config("apply-success");
        let store = MemorySettingsStore::new();
        let applier = DesktopApplier::new(config.clone(), store.clone());

        let path = applier
            .apply(&solid_image(4, 2), FitMode::Fill)
            .await
            .expect("apply wallpaper");

        assert!(path.exists());
        assert!(path
            .extension()
            .map(|ext| ext == "bmp")
            .unwrap_or(false));
        assert_eq!(store.styles(), vec![FitMode::Fill.style_parameters()]);
        assert_eq!(store.refreshed(), vec![path.clone()]);
        cleanup(&config);
    }

    #[tokio::test]
    async fn save_path_is_organized_by_date() {
        let config = temp_config("apply-path");
        let applier = DesktopApplier::new(config.clone(), MemorySettingsStore::new());

        let path = applier
            .apply(&solid_image(2, 2), FitMode::Fit)
            .await
            .expect("apply wallpaper");

        let now = Local::now();
        let expected = PathBuf::from(config.pictures_dir.clone().unwrap())
            .join("Backgrounds")
            .join(now.year().to_string())
            .join(format!("{}-{}-{}.bmp", now.month(), now.day(), now.year()));
        assert_eq!(path, expected);
        cleanup(&config);
    }

    #[tokio::test]
    async fn mismatched_buffer_leaves_settings_untouched() {
        let config = temp_config("apply-bad-buffer");
        let store = MemorySettingsStore::new();
        let applier = DesktopApplier::new(config.clone(), store.clone());

        let broken = DecodedImage {
            width: 4,
            height: 4,
            data: vec![0x40; 7],
            fetched_at: Utc::now(),
        };
        let err = applier
            .apply(&broken, FitMode::Fill)
            .await
            .expect_err("short buffer must fail");
        assert!(matches!(err, DaybreakError::Decode(_)));
        assert!(store.styles().is_empty());
        assert!(store.refreshed().is_empty());
        cleanup(&config);
    }
}
