use serde::{Deserialize, Serialize};

/// Description of the featured image for a single day, produced once per run
/// by the metadata fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Relative URL fragment the full image URL is built from.
    pub url_base: String,
    /// Attribution text, e.g. `"Aurora over Iceland (© Somebody/Somewhere)"`.
    pub attribution: String,
}

impl ImageMetadata {
    /// Title portion of the attribution: everything before the `" ("` marker,
    /// or the whole text when no marker is present.
    pub fn title(&self) -> &str {
        match self.attribution.find(" (") {
            Some(idx) => &self.attribution[..idx],
            None => &self.attribution,
        }
    }
}
