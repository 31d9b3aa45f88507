//! Histogram of oriented gradients (HoG) descriptors over a fixed grid of
//! cells, built on the [image] crate.
//!
//! A [`Grid`](grid::Grid) partitions an image into cells, accumulates a
//! gradient orientation histogram per [`Cell`](cell::Cell), and concatenates
//! overlapping blocks of cell histograms into L2-normalized descriptor
//! vectors. The histograms can also be rendered as an image for inspection.
//!
//! ```
//! use hog_grid::grid::Grid;
//! use hog_grid::options::HogOptions;
//! use image::{Rgb, RgbImage};
//!
//! let image = RgbImage::from_fn(64, 48, |x, y| Rgb([(x * 4) as u8, (y * 5) as u8, 0]));
//! let grid = Grid::new(&image, HogOptions::default()).unwrap();
//!
//! // 8x6 cells of 8x8 pixels leave room for 4x2 blocks of 4x4 cells.
//! assert_eq!(grid.descriptor_vectors().len(), 8);
//!
//! let visualization = grid.create_hog_image(2);
//! assert_eq!(visualization.dimensions(), (128, 96));
//! ```
//!
//! [image]: https://github.com/image-rs/image
#![deny(missing_docs)]
#![cfg_attr(feature = "benchmarks", feature(test))]
#![allow(clippy::needless_range_loop, clippy::many_single_char_names)]

#[cfg(all(test, feature = "benchmarks"))]
extern crate test;
#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

#[macro_use]
pub mod utils;
pub mod cell;
pub mod compose;
pub mod definitions;
pub mod drawing;
pub mod error;
pub mod grid;
pub mod intensity;
pub mod math;
pub mod options;
#[cfg(test)]
mod proptest_utils;

pub use crate::cell::Cell;
pub use crate::error::HogError;
pub use crate::grid::{DescriptorVector, Grid};
pub use crate::options::{Binning, HogOptions};
