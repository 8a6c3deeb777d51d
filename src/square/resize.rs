use super::SquareTransform;
use crate::config::ResizeFilter;
use image::imageops::FilterType;
use image::DynamicImage;

/// Resamples the whole image to `min(width, height)` on both sides.
pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new(filter: ResizeFilter) -> Self {
        Self {
            filter: filter.into(),
        }
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new(ResizeFilter::CatmullRom)
    }
}

impl SquareTransform for Resizer {
    fn name(&self) -> &str {
        "Resize"
    }

    fn suffix(&self) -> &str {
        "-resize"
    }

    fn apply(&self, image: &DynamicImage) -> crate::Result<Option<DynamicImage>> {
        let (width, height) = (image.width(), image.height());
        if width == height {
            return Ok(None);
        }

        let side = width.min(height);
        tracing::trace!(side, filter = ?self.filter, "Resizing");
        Ok(Some(image.resize_exact(side, side, self.filter)))
    }
}
