use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::Dimensions;

/// A downloaded and decoded image, owned by the orchestrator for the
/// duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Raw RGBA pixel buffer, row-major, 4 bytes per pixel.
    pub data: Vec<u8>,
    pub fetched_at: DateTime<Utc>,
}

impl DecodedImage {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}
