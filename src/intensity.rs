//! Conversion of arbitrary source images to single-channel floating point
//! intensity, and back to 8-bit grayscale for saving.

use crate::definitions::{Clamp, GrayFloatImage, Image};
use image::{GenericImageView, GrayImage, Luma, Pixel, Primitive};
use num::ToPrimitive;

/// Converts an image of any pixel type to a grayscale image whose
/// intensities are scaled to `[0, 1]`.
///
/// Colour images are reduced to luma using the `image` crate's conversion.
/// Subpixel values are then divided by the maximum value of the subpixel
/// type, so 8-bit images map `255` to `1.0` and float images are passed
/// through (clamped to `[0, 1]`).
///
/// # Examples
/// ```
/// use hog_grid::intensity::to_gray_float;
/// use image::{Luma, RgbImage, Rgb};
///
/// let image = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
/// let gray = to_gray_float(&image);
///
/// assert_eq!(gray.dimensions(), (2, 2));
/// assert_eq!(gray.get_pixel(0, 0), &Luma([1.0]));
/// ```
pub fn to_gray_float<I>(image: &I) -> GrayFloatImage
where
    I: GenericImageView,
{
    let max = <<I::Pixel as Pixel>::Subpixel as Primitive>::DEFAULT_MAX_VALUE
        .to_f32()
        .unwrap_or(1f32);
    let (width, height) = image.dimensions();

    Image::from_fn(width, height, |x, y| {
        let luma = image.get_pixel(x, y).to_luma();
        let value = luma[0].to_f32().unwrap_or(0f32) / max;
        Luma([value.clamp(0f32, 1f32)])
    })
}

/// Converts an intensity image in `[0, 1]` to an 8-bit grayscale image,
/// clamping out of range values.
pub fn to_gray8(image: &GrayFloatImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let value = image.get_pixel(x, y)[0] * 255f32;
        Luma([<u8 as Clamp<f32>>::clamp(value.round())])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    #[test]
    fn test_to_gray_float_u8() {
        let image = gray_image!(
            0, 51, 255;
            102, 204, 153);

        let gray = to_gray_float(&image);

        assert_eq!(gray.dimensions(), (3, 2));
        assert_approx_eq!(gray.get_pixel(0, 0)[0], 0.0);
        assert_approx_eq!(gray.get_pixel(1, 0)[0], 0.2);
        assert_approx_eq!(gray.get_pixel(2, 0)[0], 1.0);
        assert_approx_eq!(gray.get_pixel(0, 1)[0], 0.4);
        assert_approx_eq!(gray.get_pixel(1, 1)[0], 0.8);
        assert_approx_eq!(gray.get_pixel(2, 1)[0], 0.6);
    }

    #[test]
    fn test_to_gray_float_rgb_stays_in_unit_range() {
        let image = RgbImage::from_fn(4, 3, |x, y| {
            Rgb([(x * 60) as u8, (y * 100) as u8, 255 - (x * 20) as u8])
        });

        let gray = to_gray_float(&image);

        assert_eq!(gray.dimensions(), (4, 3));
        assert!(gray.pixels().all(|p| p[0] >= 0.0 && p[0] <= 1.0));
    }

    #[test]
    fn test_to_gray_float_dynamic_image() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 5, Rgb([0, 0, 0])));
        let gray = to_gray_float(&image);

        assert_eq!(gray.dimensions(), (3, 5));
        assert!(gray.pixels().all(|p| p[0] == 0.0));
    }

    #[test]
    fn test_to_gray8_clamps() {
        let image = gray_image!(type: f32,
            -0.5, 0.0, 0.5, 1.0, 2.0);

        let gray = to_gray8(&image);

        assert_eq!(gray, gray_image!(0, 0, 128, 255, 255));
    }
}
