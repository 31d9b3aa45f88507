use crate::definitions::GrayFloatImage;
use proptest::{
    sample::SizeRange,
    strategy::{BoxedStrategy, Strategy},
};
use std::ops::RangeInclusive;

/// Create a strategy to generate intensity images with values in `[0, 1]`
/// and arbitrary dimensions selected within the specified ranges.
pub(crate) fn arbitrary_intensity_image(
    width_range: impl Into<SizeRange>,
    height_range: impl Into<SizeRange>,
) -> BoxedStrategy<GrayFloatImage> {
    dims(width_range, height_range)
        .prop_flat_map(|(w, h)| arbitrary_intensity_image_fixed(w, h))
        .boxed()
}

fn arbitrary_intensity_image_fixed(width: u32, height: u32) -> BoxedStrategy<GrayFloatImage> {
    let size = (width * height) as usize;
    let vecs = proptest::collection::vec(0f32..=1f32, size);

    vecs.prop_map(move |v| GrayFloatImage::from_vec(width, height, v).unwrap())
        .boxed()
}

fn dims(width: impl Into<SizeRange>, height: impl Into<SizeRange>) -> BoxedStrategy<(u32, u32)> {
    let width = dim(width);
    let height = dim(height);
    width
        .prop_flat_map(move |w| height.clone().prop_map(move |h| (w, h)))
        .boxed()
}

fn dim(range: impl Into<SizeRange>) -> RangeInclusive<u32> {
    let range = range.into();
    range.start() as u32..=range.end_incl() as u32
}

#[cfg(not(miri))]
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_arbitrary_fixed_dimensions(img in arbitrary_intensity_image(3, 7)) {
            assert_eq!(img.width(), 3);
            assert_eq!(img.height(), 7);
        }

        #[test]
        fn test_arbitrary_intensity_in_unit_range(img in arbitrary_intensity_image(1..30, 2..=50)) {
            assert!((1..30).contains(&img.width()));
            assert!((2..=50).contains(&img.height()));
            assert!(img.pixels().all(|p| (0.0..=1.0).contains(&p[0])));
        }
    }
}
