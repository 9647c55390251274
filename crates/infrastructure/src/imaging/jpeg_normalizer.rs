use crate::config::ImagingConfig;
use domain::{DomainError, ImageNormalizer, NormalizedImage};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

/// Re-encodes every upload as a width-bounded JPEG.
///
/// Re-encoding happens even when the upload is already small, so the ledger
/// only ever holds one storage format.
#[derive(Debug, Clone)]
pub struct JpegImageNormalizer {
    max_width: u32,
    quality: u8,
}

impl JpegImageNormalizer {
    pub fn new(max_width: u32, quality: u8) -> Self {
        Self {
            max_width: max_width.max(1),
            quality: quality.clamp(1, 100),
        }
    }

    pub fn from_config(config: &ImagingConfig) -> Self {
        Self::new(config.max_width, config.jpeg_quality)
    }

    fn bound_width(&self, image: DynamicImage) -> DynamicImage {
        let (width, height) = (image.width(), image.height());
        if width <= self.max_width {
            return image;
        }

        let target_height = scaled_height(width, height, self.max_width);
        debug!(width, height, target_width = self.max_width, target_height, "Downscaling proof image");
        image.resize_exact(self.max_width, target_height, FilterType::Lanczos3)
    }
}

impl Default for JpegImageNormalizer {
    fn default() -> Self {
        Self::from_config(&ImagingConfig::default())
    }
}

/// Height that keeps the aspect ratio at `target_width`, rounded down, at least 1.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = u64::from(height) * u64::from(target_width) / u64::from(width.max(1));
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

/// Alpha and palette layouts become opaque RGB. Alpha is dropped, not
/// composited over a background.
fn flatten(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

impl ImageNormalizer for JpegImageNormalizer {
    fn normalize(&self, raw: &[u8]) -> Result<NormalizedImage, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::ImageDecode("upload is empty".to_string()));
        }

        let decoded =
            image::load_from_memory(raw).map_err(|e| DomainError::ImageDecode(e.to_string()))?;
        let image = self.bound_width(flatten(decoded));

        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, self.quality);
        image
            .write_with_encoder(encoder)
            .map_err(|e| DomainError::ImageEncode(e.to_string()))?;

        debug!(
            input_bytes = raw.len(),
            output_bytes = bytes.len(),
            width = image.width(),
            height = image.height(),
            "Proof image normalized"
        );

        Ok(NormalizedImage {
            width: image.width(),
            height: image.height(),
            bytes,
        })
    }
}
