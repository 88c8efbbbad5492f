use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image or a screen. Widths and heights are expected
/// to be strictly positive; a decoded image or a probed display can never
/// report zero on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// How the desktop should render the wallpaper image.
///
/// The planner only ever produces `Fill`, `Fit`, or `Stretch`; `Tile` and
/// `Center` stay in the set so the desktop parameter mapping remains total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitMode {
    Tile,
    Center,
    Stretch,
    Fit,
    Fill,
}

/// The two numeric desktop settings derived from a fit mode. The default is
/// the centered pair (0, 0), which is also what an unrecognized style
/// collapses to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleParameters {
    pub style: u8,
    pub tile: u8,
}

impl FitMode {
    /// Desktop style/tile parameter pair for this mode.
    pub fn style_parameters(&self) -> StyleParameters {
        let (style, tile) = match self {
            FitMode::Tile => (0, 1),
            FitMode::Center => (0, 0),
            FitMode::Stretch => (2, 0),
            FitMode::Fit => (6, 0),
            FitMode::Fill => (10, 0),
        };
        StyleParameters { style, tile }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_divides_width_by_height() {
        let screen = Dimensions::new(1920, 1080);
        assert!((screen.aspect_ratio() - 1.777_777_8).abs() < 1e-6);
    }

    #[test]
    fn style_parameters_cover_every_mode() {
        let expected = [
            (FitMode::Tile, 0, 1),
            (FitMode::Center, 0, 0),
            (FitMode::Stretch, 2, 0),
            (FitMode::Fit, 6, 0),
            (FitMode::Fill, 10, 0),
        ];
        for (mode, style, tile) in expected {
            let params = mode.style_parameters();
            assert_eq!(params.style, style, "style for {:?}", mode);
            assert_eq!(params.tile, tile, "tile for {:?}", mode);
        }
    }

    #[test]
    fn default_parameters_are_centered() {
        assert_eq!(
            StyleParameters::default(),
            FitMode::Center.style_parameters()
        );
    }
}
