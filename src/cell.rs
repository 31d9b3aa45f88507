//! Gradient orientation histogram for a single cell of a [`Grid`](crate::grid::Grid).
//!
//! Gradients are unscaled central differences, `I(x + 1, y) - I(x - 1, y)`
//! and `I(x, y + 1) - I(x, y - 1)`, evaluated on the interior of a region
//! (its one pixel border only contributes as neighbours). Each gradient adds
//! its magnitude to the histogram according to the cell's [`Binning`].

use crate::definitions::{GrayFloatImage, HasBlack, HasWhite};
use crate::drawing::draw_line_segment_mut;
use crate::math::scaled_length;
use crate::options::Binning;
use image::{GenericImageView, Luma};
use std::f32::consts::PI;

/// Orientation histogram of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    bins: Vec<f32>,
    ignore_sign: bool,
    binning: Binning,
    region_dimensions: (u32, u32),
}

impl Cell {
    /// An empty histogram with `num_bins` bins and interpolated binning.
    pub fn new(num_bins: usize, ignore_sign: bool) -> Cell {
        Cell::with_binning(num_bins, ignore_sign, Binning::default())
    }

    /// An empty histogram with the given binning policy.
    pub fn with_binning(num_bins: usize, ignore_sign: bool, binning: Binning) -> Cell {
        Cell {
            bins: vec![0f32; num_bins],
            ignore_sign,
            binning,
            region_dimensions: (0, 0),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_bins(bins: Vec<f32>, ignore_sign: bool, binning: Binning) -> Cell {
        Cell {
            bins,
            ignore_sign,
            binning,
            region_dimensions: (1, 1),
        }
    }

    /// Adds the gradients of `region` to this histogram.
    ///
    /// Repeated calls accumulate; use [`clear`](Cell::clear) to reset.
    /// Regions narrower or shorter than three pixels have no interior and
    /// leave the histogram unchanged.
    pub fn accumulate<I>(&mut self, region: &I)
    where
        I: GenericImageView<Pixel = Luma<f32>>,
    {
        let (width, height) = region.dimensions();
        self.region_dimensions = (width, height);
        if self.bins.is_empty() || width < 3 || height < 3 {
            return;
        }

        let at = |x: u32, y: u32| region.get_pixel(x, y)[0];

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                let dx = at(x + 1, y) - at(x - 1, y);
                let dy = at(x, y + 1) - at(x, y - 1);
                self.add_gradient(dx, dy);
            }
        }
    }

    fn add_gradient(&mut self, dx: f32, dy: f32) {
        let magnitude = (dx * dx + dy * dy).sqrt();
        if magnitude == 0f32 {
            return;
        }

        let range = orientation_range(self.ignore_sign);
        let angle = fold_angle(dy.atan2(dx), range);
        let position = angle / bin_width(range, self.bins.len());

        let inter = match self.binning {
            Binning::Nearest => Interpolation::nearest(position, self.bins.len()),
            Binning::Interpolated => {
                Interpolation::from_position_wrapping(position - 0.5, self.bins.len())
            }
        };

        for (&index, &weight) in inter.indices.iter().zip(inter.weights.iter()) {
            self.bins[index] += weight * magnitude;
        }
    }

    /// Accumulated magnitude in bin `i`.
    ///
    /// # Panics
    ///
    /// If `i >= self.num_bins()`.
    pub fn bin(&self, i: usize) -> f32 {
        assert!(
            i < self.bins.len(),
            "bin index {} out of range for a histogram with {} bins",
            i,
            self.bins.len()
        );
        self.bins[i]
    }

    /// All bins, in ascending bin index order.
    pub fn bins(&self) -> &[f32] {
        &self.bins
    }

    /// Number of orientation bins.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Whether opposite gradient directions share a bin.
    pub fn ignore_sign(&self) -> bool {
        self.ignore_sign
    }

    /// The binning policy used by [`accumulate`](Cell::accumulate).
    pub fn binning(&self) -> Binning {
        self.binning
    }

    /// Largest bin value, or zero for an empty histogram.
    pub fn max_bin(&self) -> f32 {
        self.bins.iter().fold(0f32, |acc, &b| acc.max(b))
    }

    /// Representative angle of bin `i` in radians: the center of its range.
    ///
    /// # Panics
    ///
    /// If `i >= self.num_bins()`.
    pub fn bin_center(&self, i: usize) -> f32 {
        assert!(i < self.bins.len(), "bin index {} out of range", i);
        let width = bin_width(orientation_range(self.ignore_sign), self.bins.len());
        (i as f32 + 0.5) * width
    }

    /// Resets every bin to zero.
    pub fn clear(&mut self) {
        self.bins.iter_mut().for_each(|b| *b = 0f32);
    }

    /// Dimensions of the region most recently passed to
    /// [`accumulate`](Cell::accumulate), or `(0, 0)` if there has been none.
    pub fn region_dimensions(&self) -> (u32, u32) {
        self.region_dimensions
    }

    /// Renders this histogram at `scale` times the size of the accumulated region.
    /// See [`render`](Cell::render).
    ///
    /// # Panics
    ///
    /// If either scaled dimension does not fit in a `u32`.
    pub fn draw_hog(&self, scale: u32) -> GrayFloatImage {
        let (width, height) = self.region_dimensions;
        self.render(scaled_length(width, scale), scaled_length(height, scale))
    }

    /// Renders this histogram as a `width` x `height` glyph.
    ///
    /// The glyph is black with one white line segment per non-empty bin,
    /// passing through the glyph's center at the bin's representative
    /// angle. A segment's length is proportional to its bin's value relative
    /// to the largest bin, with the largest bin spanning the glyph's smaller
    /// dimension.
    pub fn render(&self, width: u32, height: u32) -> GrayFloatImage {
        let mut glyph = GrayFloatImage::from_pixel(width, height, Luma::<f32>::black());
        let max = self.max_bin();
        if width == 0 || height == 0 || max <= 0f32 {
            return glyph;
        }

        let center_x = (width as f32 - 1f32) / 2f32;
        let center_y = (height as f32 - 1f32) / 2f32;
        let radius = width.min(height) as f32 / 2f32;

        for (i, &value) in self.bins.iter().enumerate() {
            if value <= 0f32 {
                continue;
            }
            let theta = self.bin_center(i);
            let length = radius * value / max;
            let (dx, dy) = (length * theta.cos(), length * theta.sin());
            let start = ((center_x - dx).round(), (center_y - dy).round());
            let end = ((center_x + dx).round(), (center_y + dy).round());
            draw_line_segment_mut(&mut glyph, start, end, Luma::<f32>::white());
        }

        glyph
    }
}

/// Angular range covered by a histogram, in radians.
fn orientation_range(ignore_sign: bool) -> f32 {
    if ignore_sign {
        PI
    } else {
        2f32 * PI
    }
}

/// Width of an orientation histogram bin in radians.
fn bin_width(range: f32, num_bins: usize) -> f32 {
    range / num_bins as f32
}

/// Maps an angle from `atan2` into `[0, range)`.
fn fold_angle(angle: f32, range: f32) -> f32 {
    let folded = angle.rem_euclid(range);
    // rem_euclid can round up to `range` for tiny negative angles
    if folded >= range {
        0f32
    } else {
        folded
    }
}

/// Indices and weights for an interpolated value.
#[derive(Debug, PartialEq)]
struct Interpolation {
    indices: [usize; 2],
    weights: [f32; 2],
}

impl Interpolation {
    /// All weight on the index containing `pos`.
    fn nearest(pos: f32, length: usize) -> Interpolation {
        let index = (pos.max(0f32) as usize).min(length - 1);
        Interpolation {
            indices: [index, index],
            weights: [1f32, 0f32],
        }
    }

    /// Interpolates between `floor(pos)` and the next index, wrapping both
    /// indices into `[0, length)`.
    fn from_position_wrapping(pos: f32, length: usize) -> Interpolation {
        let floor = pos.floor();
        let fraction = pos - floor;
        let left = (floor as isize).rem_euclid(length as isize) as usize;
        let right = (left + 1) % length;
        Interpolation {
            indices: [left, right],
            weights: [1f32 - fraction, fraction],
        }
    }
}
