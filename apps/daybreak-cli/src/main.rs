use std::env;

use anyhow::Result;
use daybreak_apply::{DesktopApplier, DesktopSettingsStore, FixedScreenProbe};
use daybreak_ops::init_tracing;
use daybreak_orchestrator::Orchestrator;
use daybreak_source::HttpImageSource;
use daybreak_types::config::{DaybreakConfig, DesktopConfig, OpsConfig, SourceConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config();
    init_tracing(&config.ops)?;

    let source = HttpImageSource::new(config.source.clone())?;
    let applier = DesktopApplier::new(config.desktop.clone(), DesktopSettingsStore);
    let probe = FixedScreenProbe::new(config.desktop.screen_resolution);

    let orchestrator = Orchestrator::new(source.clone(), source, applier, probe);
    let report = orchestrator.run_once().await?;
    info!(
        "Background updated: \"{}\" ({:?}, saved to {})",
        report.title,
        report.mode,
        report.saved_path.display()
    );
    Ok(())
}

fn load_config() -> DaybreakConfig {
    let from_env = env::var("DAYBREAK_CONFIG").ok();
    let from_args = env::args().nth(1);
    let Some(path) = from_args.or(from_env) else {
        return default_config();
    };
    match DaybreakConfig::from_file(&path) {
        Ok(cfg) => {
            if let Err(err) = cfg.validate() {
                eprintln!(
                    "Invalid config in '{}': {err}. Falling back to internal defaults.",
                    path
                );
                default_config()
            } else {
                cfg
            }
        }
        Err(err) => {
            eprintln!(
                "Failed to load config from '{}': {err}. Falling back to internal defaults.",
                path
            );
            default_config()
        }
    }
}

fn default_config() -> DaybreakConfig {
    let config = DaybreakConfig {
        source: SourceConfig {
            archive_url: "https://www.bing.com/HPImageArchive.aspx?format=js&idx=0&n=1&mkt=en-US"
                .into(),
            image_host: "https://www.bing.com".into(),
            resolution_suffix: "_1920x1080.jpg".into(),
            timeout_secs: 30,
        },
        desktop: DesktopConfig {
            pictures_dir: None,
            album_dir: "Bing Backgrounds".into(),
            screen_resolution: None,
        },
        ops: OpsConfig {
            log_level: "info".into(),
        },
    };
    debug_assert!(config.validate().is_ok());
    config
}
