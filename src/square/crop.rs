use super::SquareTransform;
use image::DynamicImage;

/// Pixel bounds of a crop, right and bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRegion {
    /// Largest square centered on a `width`×`height` image, or `None` if the
    /// image is already square.
    ///
    /// Bounds are float midpoints rounded up, so on an odd difference the
    /// square sits one pixel past center.
    pub fn centered_square(width: u32, height: u32) -> Option<Self> {
        let (w, h) = (f64::from(width), f64::from(height));

        if width < height {
            Some(Self {
                left: 0,
                top: (h / 2.0 - w / 2.0).ceil() as u32,
                right: width,
                bottom: (h / 2.0 + w / 2.0).ceil() as u32,
            })
        } else if width > height {
            Some(Self {
                left: (w / 2.0 - h / 2.0).ceil() as u32,
                top: 0,
                right: (w / 2.0 + h / 2.0).ceil() as u32,
                bottom: height,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Centered square crop covering the full shorter dimension.
pub struct Cropper;

impl SquareTransform for Cropper {
    fn name(&self) -> &str {
        "Crop"
    }

    fn suffix(&self) -> &str {
        "-crop"
    }

    fn apply(&self, image: &DynamicImage) -> crate::Result<Option<DynamicImage>> {
        let Some(region) = CropRegion::centered_square(image.width(), image.height()) else {
            return Ok(None);
        };

        tracing::trace!(?region, "Cropping");
        Ok(Some(image.crop_imm(
            region.left,
            region.top,
            region.width(),
            region.height(),
        )))
    }
}
