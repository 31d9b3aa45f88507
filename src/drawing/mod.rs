//! Helpers for drawing line segments on images.

mod line;
pub use self::line::{draw_line_segment_mut, BresenhamLineIter};

use image::GenericImage;

// Set pixel at (x, y) to color if this point lies within image bounds,
// otherwise do nothing.
fn draw_if_in_bounds<I>(image: &mut I, x: i32, y: i32, color: I::Pixel)
where
    I: GenericImage,
{
    if x >= 0 && x < image.width() as i32 && y >= 0 && y < image.height() as i32 {
        image.put_pixel(x as u32, y as u32, color);
    }
}
