//! Remote image-of-the-day source boundary.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use daybreak_types::{
    config::SourceConfig, geometry::Dimensions, image::DecodedImage, metadata::ImageMetadata,
    DaybreakError, Result,
};
use serde::Deserialize;
use tokio::time::sleep;
use tracing::info;

#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Retrieve the descriptor of today's featured image.
    async fn fetch_today(&self) -> Result<ImageMetadata>;
}

#[async_trait]
pub trait ImageAcquirer: Send + Sync {
    /// Download and decode the full-resolution image for the metadata.
    async fn acquire(&self, metadata: &ImageMetadata) -> Result<DecodedImage>;
}

/// Wire shape of the archive endpoint. The service returns an array of
/// descriptors; only the first is used.
#[derive(Debug, Deserialize)]
struct ArchiveDocument {
    images: Vec<ArchiveImage>,
}

#[derive(Debug, Deserialize)]
struct ArchiveImage {
    urlbase: String,
    copyright: String,
}

/// Decode the archive document into the metadata for today's image.
fn parse_archive(body: &[u8]) -> Result<ImageMetadata> {
    let document: ArchiveDocument = serde_json::from_slice(body)
        .map_err(|err| DaybreakError::Parse(format!("malformed archive document: {err}")))?;
    let first = document
        .images
        .into_iter()
        .next()
        .ok_or_else(|| DaybreakError::Parse("archive document lists no images".into()))?;
    Ok(ImageMetadata {
        url_base: first.urlbase,
        attribution: first.copyright,
    })
}

/// HTTP-backed source for both metadata and image bytes.
#[derive(Clone)]
pub struct HttpImageSource {
    client: reqwest::Client,
    config: SourceConfig,
}

impl HttpImageSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| DaybreakError::Network(format!("failed to build http client: {err}")))?;
        Ok(Self { client, config })
    }

    /// Full download URL for the image described by the metadata.
    pub fn image_url(&self, metadata: &ImageMetadata) -> String {
        format!(
            "{}{}{}",
            self.config.image_host, metadata.url_base, self.config.resolution_suffix
        )
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| DaybreakError::Network(format!("request to {url} failed: {err}")))?;
        if !response.status().is_success() {
            return Err(DaybreakError::Network(format!(
                "request to {url} returned {}",
                response.status()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|err| DaybreakError::Network(format!("failed to read body of {url}: {err}")))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl MetadataFetcher for HttpImageSource {
    async fn fetch_today(&self) -> Result<ImageMetadata> {
        info!(
            "Fetching image-of-the-day metadata from {}",
            self.config.archive_url
        );
        let body = self.get_bytes(&self.config.archive_url).await?;
        parse_archive(&body)
    }
}

#[async_trait]
impl ImageAcquirer for HttpImageSource {
    async fn acquire(&self, metadata: &ImageMetadata) -> Result<DecodedImage> {
        let url = self.image_url(metadata);
        info!("Downloading background image from {url}");
        let bytes = self.get_bytes(&url).await?;
        let decoded = image::load_from_memory(&bytes).map_err(|err| {
            DaybreakError::Decode(format!("bytes from {url} are not a valid image: {err}"))
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(DecodedImage {
            width,
            height,
            data: rgba.into_raw(),
            fetched_at: Utc::now(),
        })
    }
}

/// Canned source used for early integration and testing.
pub struct MockImageSource {
    metadata: ImageMetadata,
    image_size: Dimensions,
}

impl MockImageSource {
    pub fn new(metadata: ImageMetadata, image_size: Dimensions) -> Self {
        Self {
            metadata,
            image_size,
        }
    }
}

#[async_trait]
impl MetadataFetcher for MockImageSource {
    async fn fetch_today(&self) -> Result<ImageMetadata> {
        info!("Serving canned metadata for {}", self.metadata.title());
        sleep(Duration::from_millis(5)).await;
        Ok(self.metadata.clone())
    }
}

#[async_trait]
impl ImageAcquirer for MockImageSource {
    async fn acquire(&self, _metadata: &ImageMetadata) -> Result<DecodedImage> {
        sleep(Duration::from_millis(5)).await;
        let pixels = (self.image_size.width * self.image_size.height * 4) as usize;
        Ok(DecodedImage {
            width: self.image_size.width,
            height: self.image_size.height,
            data: vec![0x80; pixels],
            fetched_at: Utc::now(),
        })
    }
}
