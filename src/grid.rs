//! Histogram of oriented gradients over a fixed grid of cells, and helpers
//! for visualizing it.
//! <http://lear.inrialpes.fr/people/triggs/pubs/Dalal-cvpr05.pdf>
//!
//! A [`Grid`] tiles an image with non-overlapping cells, computes an
//! orientation histogram per cell, and then slides a
//! [`BLOCK_WIDTH`] x [`BLOCK_WIDTH`] window of cells over the grid with a
//! stride of one cell. Each window position yields one [`DescriptorVector`],
//! normalized independently of the others.

use crate::cell::Cell;
use crate::compose::{copy_into, sub_region};
use crate::definitions::GrayFloatImage;
use crate::error::HogError;
use crate::intensity::to_gray_float;
use crate::math::{regularized_l2_norm, scaled_length};
use crate::options::HogOptions;
use image::math::Rect;
use image::GenericImageView;
use itertools::iproduct;
use log::{debug, trace};
use std::ops::Range;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Width and height, in cells, of the blocks used for descriptor vectors.
pub const BLOCK_WIDTH: usize = 4;

/// Added to the sum of squares of a descriptor vector before taking its
/// square root, so near-zero vectors are not amplified.
pub const NORMALIZATION_EPSILON: f64 = 0.1;

/// Concatenated cell histograms of one block.
pub type DescriptorVector = Vec<f32>;

/// Cell histograms and normalized block descriptors of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    options: HogOptions,
    dim_x: usize,
    dim_y: usize,
    /// Row-major, indexed by [`cell_index`].
    cells: Vec<Cell>,
    descriptors: Vec<DescriptorVector>,
}

impl Grid {
    /// Converts `image` to intensity and computes its cell histograms and
    /// block descriptors.
    ///
    /// Any trailing pixels that do not fill a whole cell are ignored. Images
    /// too small to contain a single cell or block are not an error: they
    /// produce empty grids or empty descriptor collections.
    ///
    /// # Examples
    /// ```
    /// use hog_grid::grid::Grid;
    /// use hog_grid::options::HogOptions;
    /// use image::{GrayImage, Luma};
    ///
    /// let image = GrayImage::from_fn(50, 40, |x, y| Luma([((x * y) % 256) as u8]));
    /// let grid = Grid::new(&image, HogOptions::new(8, 8, 9, true)).unwrap();
    ///
    /// assert_eq!((grid.dim_x(), grid.dim_y()), (6, 5));
    /// // Blocks of 4x4 cells can be anchored at x in 2..4 and y in 2..3.
    /// assert_eq!(grid.descriptor_vectors().len(), 2);
    /// assert_eq!(grid.descriptor_vectors()[0].len(), 4 * 4 * 9);
    /// ```
    pub fn new<I>(image: &I, options: HogOptions) -> Result<Grid, HogError>
    where
        I: GenericImageView,
    {
        options.validate()?;
        Ok(Grid::build(to_gray_float(image), options))
    }

    /// As [`new`](Grid::new), for an image that is already single-channel
    /// intensity in `[0, 1]`.
    ///
    /// Values outside `[0, 1]` or NaN are a caller error: they are not
    /// clamped and propagate into the histograms.
    ///
    /// # Panics
    ///
    /// In debug builds, if any pixel of `source` is NaN or outside `[0, 1]`.
    pub fn from_intensity(source: GrayFloatImage, options: HogOptions) -> Result<Grid, HogError> {
        options.validate()?;
        debug_assert!(
            source.pixels().all(|p| (0f32..=1f32).contains(&p[0])),
            "intensity values must lie in [0, 1]"
        );
        Ok(Grid::build(source, options))
    }

    fn build(source: GrayFloatImage, options: HogOptions) -> Grid {
        let (dim_x, dim_y) = grid_dimensions(
            source.width(),
            source.height(),
            options.cell_width,
            options.cell_height,
        );
        debug!(
            "building {}x{} grid of {}x{} px cells from {}x{} image",
            dim_x,
            dim_y,
            options.cell_width,
            options.cell_height,
            source.width(),
            source.height()
        );

        let empty = Cell::with_binning(options.orientations, options.ignore_sign, options.binning);
        let mut cells = vec![empty; dim_x * dim_y];
        populate_cells(&source, &options, dim_x, &mut cells);

        let mut grid = Grid {
            options,
            dim_x,
            dim_y,
            cells,
            descriptors: Vec::new(),
        };

        let mut descriptors = grid.create_descriptor_vectors(BLOCK_WIDTH);
        normalize_descriptor_vectors(&mut descriptors);
        grid.descriptors = descriptors;
        grid
    }

    /// Number of cells across the grid.
    pub fn dim_x(&self) -> usize {
        self.dim_x
    }

    /// Number of cells down the grid.
    pub fn dim_y(&self) -> usize {
        self.dim_y
    }

    /// Width and height of each cell in pixels.
    pub fn cell_dims(&self) -> (u32, u32) {
        (self.options.cell_width, self.options.cell_height)
    }

    /// Options this grid was built with.
    pub fn options(&self) -> &HogOptions {
        &self.options
    }

    /// The cell in column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// If `x >= self.dim_x()` or `y >= self.dim_y()`.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        assert!(
            x < self.dim_x && y < self.dim_y,
            "cell ({}, {}) out of range for a {}x{} grid",
            x,
            y,
            self.dim_x,
            self.dim_y
        );
        &self.cells[cell_index(x, y, self.dim_x)]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Normalized descriptors of every [`BLOCK_WIDTH`] block, in row-major
    /// order of block position.
    pub fn descriptor_vectors(&self) -> &[DescriptorVector] {
        &self.descriptors
    }

    /// All descriptor vectors concatenated in storage order.
    pub fn descriptor(&self) -> Vec<f32> {
        self.descriptors.concat()
    }

    /// Builds un-normalized descriptor vectors for blocks of
    /// `block_width` x `block_width` cells.
    ///
    /// A block is anchored at the cell `block_width / 2` cells right of and
    /// below its top-left corner. Anchors range over [`block_range`] in each
    /// direction, and the result is ordered row-major by anchor: the block
    /// anchored at `(x, y)` is at index `(x - start_x) + (y - start_y) * range_width`.
    ///
    /// Within a vector, cells are visited column by column (outer loop over
    /// the block's x offset, inner loop over its y offset) and each cell
    /// contributes its bins in ascending order. Consumers of the descriptor
    /// layout depend on this ordering.
    ///
    /// # Panics
    ///
    /// If `block_width == 0`.
    pub fn create_descriptor_vectors(&self, block_width: usize) -> Vec<DescriptorVector> {
        assert!(block_width > 0, "block width must be positive");

        let range_x = block_range(self.dim_x, block_width);
        let range_y = block_range(self.dim_y, block_width);
        debug!(
            "anchoring {}x{} blocks at x in {:?}, y in {:?}",
            block_width, block_width, range_x, range_y
        );

        let anchors: Vec<(usize, usize)> = iproduct!(range_y, range_x)
            .map(|(y, x)| (x, y))
            .collect();
        let build = |&(x, y): &(usize, usize)| self.block_descriptor(x, y, block_width);

        #[cfg(feature = "rayon")]
        let descriptors: Vec<DescriptorVector> = anchors.par_iter().map(build).collect();
        #[cfg(not(feature = "rayon"))]
        let descriptors: Vec<DescriptorVector> = anchors.iter().map(build).collect();

        debug!("built {} descriptor vectors", descriptors.len());
        descriptors
    }

    fn block_descriptor(&self, x: usize, y: usize, block_width: usize) -> DescriptorVector {
        let block_radius = block_width / 2;
        let cells_x = x - block_radius..x - block_radius + block_width;
        let cells_y = y - block_radius..y - block_radius + block_width;

        let capacity = block_width * block_width * self.options.orientations;
        let mut descriptor = Vec::with_capacity(capacity);
        for (cell_x, cell_y) in iproduct!(cells_x, cells_y) {
            descriptor.extend_from_slice(self.cell(cell_x, cell_y).bins());
        }
        descriptor
    }

    /// Renders every cell's histogram (see [`Cell::render`]) into a single
    /// image of `(dim_x * cell_width * scale, dim_y * cell_height * scale)`
    /// pixels, each cell occupying its own tile.
    ///
    /// # Panics
    ///
    /// If `scale == 0`, or if either output dimension does not fit in a `u32`.
    pub fn create_hog_image(&self, scale: u32) -> GrayFloatImage {
        assert!(scale > 0, "visualization scale must be positive");

        let tile_width = scaled_length(self.options.cell_width, scale);
        let tile_height = scaled_length(self.options.cell_height, scale);
        let mut hog = GrayFloatImage::new(
            scaled_length(self.dim_x as u32, tile_width),
            scaled_length(self.dim_y as u32, tile_height),
        );

        for y in 0..self.dim_y {
            for x in 0..self.dim_x {
                let tile = Rect {
                    x: x as u32 * tile_width,
                    y: y as u32 * tile_height,
                    width: tile_width,
                    height: tile_height,
                };
                copy_into(&mut hog, tile, &self.cell(x, y).render(tile_width, tile_height));
            }
        }

        hog
    }
}

/// Linear index of the cell at `(x, y)` in a row-major grid `dim_x` cells wide.
pub fn cell_index(x: usize, y: usize, dim_x: usize) -> usize {
    x + y * dim_x
}

/// Number of whole cells that fit across and down an image.
pub fn grid_dimensions(
    width: u32,
    height: u32,
    cell_width: u32,
    cell_height: u32,
) -> (usize, usize) {
    ((width / cell_width) as usize, (height / cell_height) as usize)
}

/// Anchor positions for blocks of `block_width` cells along an axis of `dim`
/// cells: `[block_width / 2, dim - block_width / 2)`, or an empty range if
/// the axis is too short.
pub fn block_range(dim: usize, block_width: usize) -> Range<usize> {
    let block_radius = block_width / 2;
    let end = dim.saturating_sub(block_radius);
    block_radius..end.max(block_radius)
}

/// Divides each descriptor vector by its own regularized L2 norm.
pub fn normalize_descriptor_vectors(descriptors: &mut [DescriptorVector]) {
    for descriptor in descriptors.iter_mut() {
        normalize_descriptor_vector(descriptor);
    }
}

/// Divides every element by `sqrt(sum of squares + NORMALIZATION_EPSILON)`.
pub fn normalize_descriptor_vector(descriptor: &mut [f32]) {
    let norm = regularized_l2_norm(descriptor, NORMALIZATION_EPSILON);
    for value in descriptor.iter_mut() {
        *value /= norm;
    }
}

fn cell_rect(x: usize, y: usize, options: &HogOptions) -> Rect {
    Rect {
        x: x as u32 * options.cell_width,
        y: y as u32 * options.cell_height,
        width: options.cell_width,
        height: options.cell_height,
    }
}

// Each cell reads a disjoint region of the source and writes only its own
// histogram.
fn populate_cells(source: &GrayFloatImage, options: &HogOptions, dim_x: usize, cells: &mut [Cell]) {
    let accumulate = |index: usize, cell: &mut Cell| {
        let (x, y) = (index % dim_x, index / dim_x);
        let region = sub_region(source, cell_rect(x, y, options));
        cell.accumulate(&*region);
        trace!("cell ({}, {}) max bin {}", x, y, cell.max_bin());
    };

    #[cfg(feature = "rayon")]
    cells
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, cell)| accumulate(index, cell));
    #[cfg(not(feature = "rayon"))]
    cells
        .iter_mut()
        .enumerate()
        .for_each(|(index, cell)| accumulate(index, cell));
}
