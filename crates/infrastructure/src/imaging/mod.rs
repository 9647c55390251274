mod jpeg_normalizer;

pub use jpeg_normalizer::{JpegImageNormalizer, scaled_height};
