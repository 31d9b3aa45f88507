//! Trait definitions and type aliases.

use image::{ImageBuffer, Luma, Pixel};
use num::{Bounded, NumCast};

/// An `ImageBuffer` containing Pixels of type P with storage `Vec<P::Subpixel>`.
/// Most operations in this library only support inputs of type `Image`, rather
/// than arbitrary `image::GenericImage`s.
pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Single-channel floating point intensity image. Values produced by this
/// crate lie in `[0, 1]`.
pub type GrayFloatImage = Image<Luma<f32>>;

/// Pixels which have a named Black value.
pub trait HasBlack {
    /// Returns a black pixel of this type.
    fn black() -> Self;
}

/// Pixels which have a named White value.
pub trait HasWhite {
    /// Returns a white pixel of this type.
    fn white() -> Self;
}

impl HasBlack for Luma<f32> {
    fn black() -> Self {
        Luma([0f32])
    }
}

impl HasWhite for Luma<f32> {
    fn white() -> Self {
        Luma([1f32])
    }
}

/// A type to which we can clamp a value of type T.
/// Implementations are not required to handle NaNs gracefully.
pub trait Clamp<T> {
    /// Clamp `x` to a valid value for this type.
    fn clamp(x: T) -> Self;
}

/// Creates an implementation of Clamp<From> for type To.
macro_rules! implement_clamp {
    ($from:ty, $to:ty) => {
        impl Clamp<$from> for $to {
            fn clamp(x: $from) -> $to {
                clamp_impl(x)
            }
        }
    };
}

implement_clamp!(f32, u8);

/// Clamp a value from a type with larger range to one with a smaller range.
/// Should be used via the Clamp trait.
fn clamp_impl<From, To>(x: From) -> To
where
    From: NumCast + PartialOrd + Copy,
    To: NumCast + Bounded,
{
    let to_max = <From as NumCast>::from(To::max_value()).unwrap();
    let to_min = <From as NumCast>::from(To::min_value()).unwrap();
    let clamped = if x > to_max {
        to_max
    } else if x < to_min {
        to_min
    } else {
        x
    };
    To::from(clamped).unwrap()
}
