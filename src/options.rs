//! Parameters for building a [`Grid`](crate::grid::Grid).

use crate::error::HogError;

/// How a gradient's magnitude is assigned to orientation bins.
///
/// Bin `i` of `n` covers the angles `[i * w, (i + 1) * w)`, where `w` is the
/// angular range (`pi` when ignoring sign, `2 * pi` otherwise) divided by `n`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Binning {
    /// The whole magnitude is added to the bin containing the gradient angle,
    /// i.e. the bin whose center is nearest to it.
    Nearest,
    /// The magnitude is split linearly between the two bins whose centers
    /// bracket the gradient angle. Wraps around the ends of the range.
    #[default]
    Interpolated,
}

/// Parameters for HoG descriptors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HogOptions {
    /// Width of a cell in pixels.
    pub cell_width: u32,
    /// Height of a cell in pixels.
    pub cell_height: u32,
    /// Number of gradient orientation bins.
    pub orientations: usize,
    /// Whether gradients in opposite directions are treated as equal.
    pub ignore_sign: bool,
    /// Assignment of gradient magnitudes to bins.
    pub binning: Binning,
}

impl HogOptions {
    /// Options with the default (interpolated) binning.
    pub fn new(
        cell_width: u32,
        cell_height: u32,
        orientations: usize,
        ignore_sign: bool,
    ) -> HogOptions {
        HogOptions {
            cell_width,
            cell_height,
            orientations,
            ignore_sign,
            binning: Binning::default(),
        }
    }

    /// Returns a copy of these options using the given binning policy.
    pub fn with_binning(self, binning: Binning) -> HogOptions {
        HogOptions { binning, ..self }
    }

    /// Checks that cell dimensions and bin count are positive.
    pub fn validate(&self) -> Result<(), HogError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(HogError::InvalidCellDimensions {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        if self.orientations == 0 {
            return Err(HogError::InvalidBinCount);
        }
        Ok(())
    }
}

impl Default for HogOptions {
    /// 8x8 pixel cells, 9 unsigned orientation bins.
    fn default() -> Self {
        HogOptions::new(8, 8, 9, true)
    }
}
