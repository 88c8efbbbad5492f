//! High-level orchestrator sequencing the fetch-then-apply pipeline.

use std::path::PathBuf;

use daybreak_apply::{ScreenProbe, WallpaperApplier};
use daybreak_fit::plan_fit;
use daybreak_source::{ImageAcquirer, MetadataFetcher};
use daybreak_types::{geometry::FitMode, Result};
use tracing::info;

/// Outcome of a completed wallpaper run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub title: String,
    pub mode: FitMode,
    pub saved_path: PathBuf,
}

pub struct Orchestrator<M, A, W, P>
where
    M: MetadataFetcher,
    A: ImageAcquirer,
    W: WallpaperApplier,
    P: ScreenProbe,
{
    fetcher: M,
    acquirer: A,
    applier: W,
    probe: P,
}

impl<M, A, W, P> Orchestrator<M, A, W, P>
where
    M: MetadataFetcher,
    A: ImageAcquirer,
    W: WallpaperApplier,
    P: ScreenProbe,
{
    pub fn new(fetcher: M, acquirer: A, applier: W, probe: P) -> Self {
        Self {
            fetcher,
            acquirer,
            applier,
            probe,
        }
    }

    /// Execute the pipeline once: metadata, image, fit decision, application.
    /// Steps run strictly in order; the first failure aborts the run and
    /// propagates to the caller, with no retries and no partial recovery.
    pub async fn run_once(&self) -> Result<RunReport> {
        let metadata = self.fetcher.fetch_today().await?;
        info!("Today's image: {}", metadata.title());

        let image = self.acquirer.acquire(&metadata).await?;
        let screen = self.probe.screen_size()?;
        let mode = plan_fit(image.dimensions(), screen);
        info!(
            "Planned fit mode {:?} for image {}x{} on screen {}x{}",
            mode, image.width, image.height, screen.width, screen.height
        );

        let saved_path = self.applier.apply(&image, mode).await?;
        Ok(RunReport {
            title: metadata.title().to_owned(),
            mode,
            saved_path,
        })
    }
}
