// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Border trimmer — crops away a uniform border whose colour is taken from the
// top-left pixel.

use image::{DynamicImage, Rgba};
use imageproc::rect::Rect;
use tracing::{debug, instrument};

/// Result of a trim attempt. The caller decides what to do when nothing
/// differs from the background.
#[derive(Debug, Clone)]
pub enum TrimOutcome {
    /// The image was cropped to `bounds` (coordinates in the original image).
    Cropped { image: DynamicImage, bounds: Rect },
    /// No pixel stood out from the background; the input is returned as-is.
    Unchanged(DynamicImage),
}

impl TrimOutcome {
    /// The image to continue the pipeline with, cropped or not.
    pub fn into_image(self) -> DynamicImage {
        match self {
            TrimOutcome::Cropped { image, .. } => image,
            TrimOutcome::Unchanged(image) => image,
        }
    }

    /// Crop bounds, if a crop happened.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            TrimOutcome::Cropped { bounds, .. } => Some(*bounds),
            TrimOutcome::Unchanged(_) => None,
        }
    }
}

/// Finds the content box of an image by diffing every pixel against the
/// top-left corner colour.
///
/// Each channel difference `d` is amplified as `(d + d) / scale + offset`,
/// truncated and clipped to `0..=255`. With the defaults (scale 2.0, offset
/// -100) only channels differing by more than 100 survive, so faint noise in
/// the border does not widen the box.
#[derive(Debug, Clone, Copy)]
pub struct BorderTrimmer {
    pub scale: f32,
    pub offset: f32,
}

impl Default for BorderTrimmer {
    fn default() -> Self {
        Self {
            scale: 2.0,
            offset: -100.0,
        }
    }
}

impl BorderTrimmer {
    /// Crop `image` to the bounding box of its non-background content.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn trim(&self, image: DynamicImage) -> TrimOutcome {
        match self.bounding_box(&image) {
            Some(bounds) => {
                debug!(
                    left = bounds.left(),
                    top = bounds.top(),
                    width = bounds.width(),
                    height = bounds.height(),
                    "Trimming border"
                );
                let cropped = image.crop_imm(
                    bounds.left() as u32,
                    bounds.top() as u32,
                    bounds.width(),
                    bounds.height(),
                );
                TrimOutcome::Cropped {
                    image: cropped,
                    bounds,
                }
            }
            None => {
                debug!("No content differs from the background, leaving image untouched");
                TrimOutcome::Unchanged(image)
            }
        }
    }

    /// Bounding box of every pixel whose amplified difference from the
    /// background is non-zero in any channel. `None` for an all-background
    /// or empty image.
    pub fn bounding_box(&self, image: &DynamicImage) -> Option<Rect> {
        if image.width() == 0 || image.height() == 0 {
            return None;
        }

        // Channels are compared at 8 bits; grey images expand to (l, l, l, 255)
        // so the per-channel result is unchanged.
        let rgba = image.to_rgba8();
        let background = *rgba.get_pixel(0, 0);

        let mut extent: Option<(u32, u32, u32, u32)> = None;
        for (x, y, pixel) in rgba.enumerate_pixels() {
            if !self.stands_out(pixel, &background) {
                continue;
            }
            extent = Some(match extent {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }

        extent.map(|(x0, y0, x1, y1)| {
            Rect::at(x0 as i32, y0 as i32).of_size(x1 - x0 + 1, y1 - y0 + 1)
        })
    }

    fn stands_out(&self, pixel: &Rgba<u8>, background: &Rgba<u8>) -> bool {
        pixel
            .0
            .iter()
            .zip(background.0.iter())
            .any(|(&p, &b)| self.amplify(p.abs_diff(b)) != 0)
    }

    fn amplify(&self, diff: u8) -> u8 {
        let d = f32::from(diff);
        ((d + d) / self.scale + self.offset).clamp(0.0, 255.0) as u8
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbImage, RgbaImage};
    use imageproc::drawing::draw_filled_rect_mut;

    /// A uniform image has nothing to trim and must come back untouched.
    #[test]
    fn uniform_image_is_unchanged() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 30, Rgba([12, 34, 56, 255])));
        let outcome = BorderTrimmer::default().trim(img);

        assert!(outcome.bounds().is_none());
        let out = outcome.into_image();
        assert_eq!((out.width(), out.height()), (40, 30));
    }

    #[test]
    fn single_rectangle_is_cropped_exactly() {
        let mut img = RgbaImage::from_pixel(100, 80, Rgba([255, 255, 255, 0]));
        let rect = Rect::at(17, 9).of_size(41, 23);
        draw_filled_rect_mut(&mut img, rect, Rgba([10, 20, 30, 255]));

        let outcome = BorderTrimmer::default().trim(DynamicImage::ImageRgba8(img));

        assert_eq!(outcome.bounds(), Some(rect));
        let out = outcome.into_image();
        assert_eq!((out.width(), out.height()), (41, 23));
        assert_eq!(out.to_rgba8().get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    /// Differences of 100 or less are treated as background noise.
    #[test]
    fn faint_noise_is_ignored() {
        let mut img = RgbImage::from_pixel(50, 50, image::Rgb([200, 200, 200]));
        img.put_pixel(2, 2, image::Rgb([100, 200, 200]));
        img.put_pixel(45, 45, image::Rgb([200, 255, 150]));
        let content = Rect::at(20, 20).of_size(5, 6);
        draw_filled_rect_mut(&mut img, content, image::Rgb([0, 0, 0]));

        let bounds = BorderTrimmer::default().bounding_box(&DynamicImage::ImageRgb8(img));
        assert_eq!(bounds, Some(content));
    }

    #[test]
    fn difference_just_above_threshold_counts() {
        let trimmer = BorderTrimmer::default();
        assert_eq!(trimmer.amplify(100), 0);
        assert_eq!(trimmer.amplify(101), 1);
        assert_eq!(trimmer.amplify(255), 155);
    }

    #[test]
    fn grayscale_image_is_trimmed() {
        let mut img = GrayImage::from_pixel(30, 30, Luma([0u8]));
        for y in 5..10 {
            for x in 12..20 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }

        let outcome = BorderTrimmer::default().trim(DynamicImage::ImageLuma8(img));
        assert_eq!(outcome.bounds(), Some(Rect::at(12, 5).of_size(8, 5)));
    }

    /// Content touching the top-left corner changes the sampled background,
    /// which makes the rest of the image "content".
    #[test]
    fn content_at_origin_sets_background() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));

        let bounds = BorderTrimmer::default().bounding_box(&DynamicImage::ImageRgba8(img));
        assert_eq!(bounds, Some(Rect::at(0, 0).of_size(10, 10)));
    }

    #[test]
    fn alpha_only_difference_is_content() {
        let mut img = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 0]));
        img.put_pixel(7, 11, Rgba([255, 255, 255, 255]));

        let bounds = BorderTrimmer::default().bounding_box(&DynamicImage::ImageRgba8(img));
        assert_eq!(bounds, Some(Rect::at(7, 11).of_size(1, 1)));
    }
}
