// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — trim, resize, flatten onto white, and JPEG export.
// Operates on in-memory images using the `image` crate.

use image::{DynamicImage, Rgb, RgbImage};
use specset_core::error::SpecsetError;
use tracing::{debug, info, instrument};

use crate::trim::{BorderTrimmer, TrimOutcome};

/// Image processing pipeline operating on a single in-memory image.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so the
/// steps chain:
///
/// ```ignore
/// ImageProcessor::open("spec.png")?
///     .resize_exact(224, 224)
///     .flatten_onto_white()
///     .save_jpeg("spec.jpg", 100)?;
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, SpecsetError> {
        let img = image::open(path.as_ref()).map_err(|err| {
            SpecsetError::ImageError(format!(
                "failed to open {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image loaded"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Whether the image carries an alpha channel usable as a paste mask.
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Trim the uniform border. The caller branches on the outcome.
    pub fn trim(self, trimmer: &BorderTrimmer) -> TrimOutcome {
        trimmer.trim(self.image)
    }

    /// Resize the image to exactly `width` x `height`, ignoring aspect ratio.
    /// Uses bilinear (triangle) filtering.
    #[instrument(skip(self))]
    pub fn resize_exact(self, width: u32, height: u32) -> Self {
        info!(
            from_w = self.image.width(),
            from_h = self.image.height(),
            width,
            height,
            "Resizing image"
        );
        let resized =
            self.image
                .resize_exact(width, height, image::imageops::FilterType::Triangle);
        Self { image: resized }
    }

    /// Composite the image onto an opaque white canvas of the same size, using
    /// its alpha channel as the mask. Images without alpha are already opaque
    /// and are simply converted to RGB.
    #[instrument(skip(self))]
    pub fn flatten_onto_white(self) -> Self {
        if !self.has_alpha() {
            debug!("No alpha channel, converting straight to RGB");
            return Self {
                image: DynamicImage::ImageRgb8(self.image.to_rgb8()),
            };
        }

        let rgba = self.image.to_rgba8();
        let flattened = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            let image::Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
            Rgb([blend_white(r, a), blend_white(g, a), blend_white(b, a)])
        });
        Self {
            image: DynamicImage::ImageRgb8(flattened),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as JPEG bytes with the given quality (1-100).
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>, SpecsetError> {
        let mut buffer = Vec::new();
        let rgb = self.image.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
        rgb.write_with_encoder(encoder).map_err(|err| {
            SpecsetError::ImageError(format!("JPEG encoding failed: {}", err))
        })?;
        Ok(buffer)
    }

    /// Encode as JPEG and write to `path`, replacing any existing file.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), quality = quality))]
    pub fn save_jpeg(
        &self,
        path: impl AsRef<std::path::Path>,
        quality: u8,
    ) -> Result<(), SpecsetError> {
        let bytes = self.to_jpeg_bytes(quality)?;
        std::fs::write(path.as_ref(), &bytes)
            .map_err(|err| SpecsetError::io_at(path.as_ref(), err))?;
        debug!(bytes = bytes.len(), "JPEG written");
        Ok(())
    }
}

/// Paste one channel over white with `alpha` as the mask, rounding to nearest.
fn blend_white(channel: u8, alpha: u8) -> u8 {
    let c = u32::from(channel);
    let a = u32::from(alpha);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn blend_extremes() {
        assert_eq!(blend_white(0, 0), 255);
        assert_eq!(blend_white(0, 255), 0);
        assert_eq!(blend_white(200, 255), 200);
        assert_eq!(blend_white(0, 128), 127);
    }

    #[test]
    fn transparent_pixels_become_white() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 1, Rgba([10, 20, 30, 255]));

        let out = ImageProcessor::from_dynamic(DynamicImage::ImageRgba8(img))
            .flatten_onto_white()
            .into_dynamic();

        let rgb = out.as_rgb8().expect("flattened output is RGB8");
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(rgb.get_pixel(1, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn opaque_input_is_converted_to_rgb() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 2, Luma([90u8])));
        let processor = ImageProcessor::from_dynamic(img);
        assert!(!processor.has_alpha());

        let out = processor.flatten_onto_white().into_dynamic();
        let rgb = out.as_rgb8().expect("flattened output is RGB8");
        assert_eq!((rgb.width(), rgb.height()), (3, 2));
        assert_eq!(rgb.get_pixel(2, 1), &Rgb([90, 90, 90]));
    }

    #[test]
    fn resize_exact_ignores_aspect_ratio() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(30, 10, Rgba([1, 2, 3, 255])));
        let out = ImageProcessor::from_dynamic(img).resize_exact(8, 8);
        assert_eq!((out.width(), out.height()), (8, 8));
    }

    #[test]
    fn trim_reports_unchanged_for_blank_image() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 6, Rgba([9, 9, 9, 255])));
        let outcome = ImageProcessor::from_dynamic(img).trim(&BorderTrimmer::default());
        assert!(matches!(outcome, TrimOutcome::Unchanged(ref i) if i.width() == 6 && i.height() == 6));
    }

    #[test]
    fn jpeg_bytes_decode_back() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 9, Rgb([255, 255, 255])));
        let bytes = ImageProcessor::from_dynamic(img).to_jpeg_bytes(100).unwrap();

        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 9));
    }
}
