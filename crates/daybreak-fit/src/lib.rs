//! Fit-mode planning: decide how a wallpaper image should be displayed.

use daybreak_types::geometry::{Dimensions, FitMode};

/// Aspect ratios closer than this are treated as equivalent, so the image
/// can be cropped to fill the screen with minimal content loss.
pub const ASPECT_TOLERANCE: f64 = 0.1;

/// Choose the fit mode for an image on a screen.
///
/// Pure function of the two aspect ratios. Dimensions must be strictly
/// positive; both come from a successfully decoded image and a queryable
/// display. Only `Fill`, `Fit`, and `Stretch` are ever produced; `Tile` and
/// `Center` exist solely on the desktop parameter side.
pub fn plan_fit(image: Dimensions, screen: Dimensions) -> FitMode {
    let screen_aspect = screen.aspect_ratio();
    let image_aspect = image.aspect_ratio();

    if (screen_aspect - image_aspect).abs() < ASPECT_TOLERANCE {
        FitMode::Fill
    } else if screen_aspect > image_aspect {
        FitMode::Fit
    } else {
        FitMode::Stretch
    }
}
