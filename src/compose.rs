//! Functions for reading and writing rectangular regions of images.

use image::math::Rect;
use image::{GenericImageView, Pixel, SubImage};

use crate::definitions::Image;

/// Returns a read-only view of the given rectangle of an image.
///
/// No pixels are copied.
///
/// # Panics
///
/// - If `rect.x + rect.width > image.width()`
/// - If `rect.y + rect.height > image.height()`
///
/// # Examples
/// ```
/// use hog_grid::compose::sub_region;
/// use image::math::Rect;
/// use image::GenericImageView;
/// use hog_grid::gray_image;
///
/// let image = gray_image!(
///     0, 0, 0, 0;
///     0, 1, 2, 0;
///     0, 3, 4, 0);
///
/// let region = sub_region(&image, Rect {x: 1, y: 1, width: 2, height: 2});
///
/// assert_eq!(region.to_image(), gray_image!(
///     1, 2;
///     3, 4));
/// ```
pub fn sub_region<P>(image: &Image<P>, rect: Rect) -> SubImage<&Image<P>>
where
    P: Pixel,
{
    assert!(rect.x + rect.width <= image.width());
    assert!(rect.y + rect.height <= image.height());

    image.view(rect.x, rect.y, rect.width, rect.height)
}

/// Copies `src` into the rectangle `rect` of `dest`.
///
/// # Panics
///
/// - If `rect` does not have the same dimensions as `src`
/// - If `rect` does not lie within `dest`
///
/// # Examples
/// ```
/// use hog_grid::compose::copy_into;
/// use image::math::Rect;
/// use hog_grid::gray_image;
///
/// let mut dest = gray_image!(
///     0, 0, 0;
///     0, 0, 0);
/// let src = gray_image!(7, 8);
///
/// copy_into(&mut dest, Rect {x: 1, y: 1, width: 2, height: 1}, &src);
///
/// assert_eq!(dest, gray_image!(
///     0, 0, 0;
///     0, 7, 8));
/// ```
pub fn copy_into<P>(dest: &mut Image<P>, rect: Rect, src: &Image<P>)
where
    P: Pixel,
{
    assert_eq!(
        (rect.width, rect.height),
        src.dimensions(),
        "source image must match the destination rectangle"
    );
    assert!(rect.x + rect.width <= dest.width());
    assert!(rect.y + rect.height <= dest.height());

    for (x, y, pixel) in src.enumerate_pixels() {
        dest.put_pixel(rect.x + x, rect.y + y, *pixel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn test_sub_region_full_image() {
        let image = gray_image!(type: f32,
            0.1, 0.2;
            0.3, 0.4);

        let region = sub_region(&image, Rect { x: 0, y: 0, width: 2, height: 2 });

        assert_eq!(region.to_image(), image);
    }

    #[test]
    fn test_sub_region_reads_offset_pixels() {
        let image = gray_image!(type: f32,
            0.0, 0.1, 0.2;
            0.3, 0.4, 0.5;
            0.6, 0.7, 0.8);

        let region = sub_region(&image, Rect { x: 1, y: 1, width: 2, height: 1 });

        assert_eq!(region.dimensions(), (2, 1));
        assert_eq!(region.get_pixel(0, 0)[0], 0.4);
        assert_eq!(region.get_pixel(1, 0)[0], 0.5);
    }

    #[test]
    #[should_panic]
    fn test_sub_region_rejects_out_of_bounds() {
        let image = gray_image!(
            1, 2;
            3, 4);
        let _ = sub_region(&image, Rect { x: 1, y: 0, width: 2, height: 1 });
    }

    #[test]
    fn test_copy_into_leaves_other_pixels() {
        let mut dest = gray_image!(
            9, 9, 9;
            9, 9, 9;
            9, 9, 9);
        let src = gray_image!(
            1;
            2);

        copy_into(&mut dest, Rect { x: 2, y: 0, width: 1, height: 2 }, &src);

        assert_eq!(
            dest,
            gray_image!(
                9, 9, 1;
                9, 9, 2;
                9, 9, 9)
        );
    }

    #[test]
    #[should_panic]
    fn test_copy_into_rejects_mismatched_dimensions() {
        let mut dest = gray_image!(
            0, 0;
            0, 0);
        let src = gray_image!(1, 2);
        copy_into(&mut dest, Rect { x: 0, y: 0, width: 1, height: 1 }, &src);
    }
}
