use crate::drawing::draw_if_in_bounds;
use image::GenericImage;
use std::mem::swap;

/// Integer coordinates of a line segment, from
/// [Bresenham's algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm).
pub struct BresenhamLineIter {
    dx: f32,
    dy: f32,
    x: i32,
    y: i32,
    error: f32,
    end_x: i32,
    is_steep: bool,
    y_step: i32,
}

impl BresenhamLineIter {
    /// Iterates over the integer coordinates between `start` and `end`,
    /// both included.
    pub fn new(start: (f32, f32), end: (f32, f32)) -> BresenhamLineIter {
        let (mut x0, mut y0) = (start.0, start.1);
        let (mut x1, mut y1) = (end.0, end.1);

        let is_steep = (y1 - y0).abs() > (x1 - x0).abs();
        if is_steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }

        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;

        BresenhamLineIter {
            dx,
            dy: (y1 - y0).abs(),
            x: x0 as i32,
            y: y0 as i32,
            error: dx / 2f32,
            end_x: x1 as i32,
            is_steep,
            y_step: if y0 < y1 { 1 } else { -1 },
        }
    }
}

impl Iterator for BresenhamLineIter {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x > self.end_x {
            None
        } else {
            let ret = if self.is_steep {
                (self.y, self.x)
            } else {
                (self.x, self.y)
            };

            self.x += 1;
            self.error -= self.dy;
            if self.error < 0f32 {
                self.y += self.y_step;
                self.error += self.dx;
            }

            Some(ret)
        }
    }
}

/// Draws the part of the segment from `start` to `end` that lies inside
/// `image`, using [`BresenhamLineIter`].
pub fn draw_line_segment_mut<I>(
    image: &mut I,
    start: (f32, f32),
    end: (f32, f32),
    color: I::Pixel,
) where
    I: GenericImage,
{
    for (x, y) in BresenhamLineIter::new(start, end) {
        draw_if_in_bounds(image, x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::GrayFloatImage;
    use image::Luma;

    // Octants for line directions:
    //
    //   \ 5 | 6 /
    //   4 \ | / 7
    //   ---   ---
    //   3 / | \ 0
    //   / 2 | 1 \

    // A 5x5 black image with one segment drawn on it.
    fn segment(start: (f32, f32), end: (f32, f32), value: f32) -> GrayFloatImage {
        let mut image = GrayFloatImage::new(5, 5);
        draw_line_segment_mut(&mut image, start, end, Luma([value]));
        image
    }

    #[test]
    fn test_bresenham_iter_single_point() {
        let points: Vec<_> = BresenhamLineIter::new((2.0, 3.0), (2.0, 3.0)).collect();
        assert_eq!(points, vec![(2, 3)]);
    }

    #[test]
    fn test_draw_line_segment_clips_to_image() {
        let expected = gray_image!(type: f32,
            0.0, 0.0, 0.0, 0.0, 0.0;
            1.0, 1.0, 1.0, 1.0, 1.0;
            0.0, 0.0, 0.0, 0.0, 0.0;
            0.0, 0.0, 0.0, 0.0, 0.0;
            0.0, 0.0, 0.0, 0.0, 0.0);

        let right = segment((-3.0, 1.0), (6.0, 1.0), 1.0);
        assert_eq!(right, expected);

        let left = segment((6.0, 1.0), (-3.0, 1.0), 1.0);
        assert_eq!(left, expected);
    }

    #[test]
    fn test_draw_line_segment_oct0_and_oct4() {
        let expected = gray_image!(type: f32,
            0.0, 0.0, 0.0, 0.0, 0.0;
            0.0, 0.5, 0.5, 0.0, 0.0;
            0.0, 0.0, 0.0, 0.5, 0.5;
            0.0, 0.0, 0.0, 0.0, 0.0;
            0.0, 0.0, 0.0, 0.0, 0.0);

        let oct0 = segment((1.0, 1.0), (4.0, 2.0), 0.5);
        assert_eq!(oct0, expected);

        let oct4 = segment((4.0, 2.0), (1.0, 1.0), 0.5);
        assert_eq!(oct4, expected);
    }

    #[test]
    fn test_draw_line_segment_vertical() {
        let expected = gray_image!(type: f32,
            0.0, 0.0, 0.0, 0.0, 0.0;
            0.0, 0.0, 0.0, 1.0, 0.0;
            0.0, 0.0, 0.0, 1.0, 0.0;
            0.0, 0.0, 0.0, 1.0, 0.0;
            0.0, 0.0, 0.0, 0.0, 0.0);

        let down = segment((3.0, 1.0), (3.0, 3.0), 1.0);
        assert_eq!(down, expected);

        let up = segment((3.0, 3.0), (3.0, 1.0), 1.0);
        assert_eq!(up, expected);
    }

    #[test]
    fn test_draw_line_segment_anti_diagonal() {
        let expected = gray_image!(type: f32,
            0.0, 0.0, 0.0, 0.0, 0.0;
            0.0, 0.0, 0.0, 1.0, 0.0;
            0.0, 0.0, 1.0, 0.0, 0.0;
            0.0, 1.0, 0.0, 0.0, 0.0;
            0.0, 0.0, 0.0, 0.0, 0.0);

        let image = segment((1.0, 3.0), (3.0, 1.0), 1.0);
        assert_eq!(image, expected);
    }
}
