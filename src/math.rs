//! Assorted mathematical helper functions.

/// Sum of the squares of the entries of a vector, accumulated in `f64`.
pub fn sum_of_squares(xs: &[f32]) -> f64 {
    xs.iter().fold(0f64, |acc, &x| acc + (x as f64) * (x as f64))
}

/// L2 norm of a vector.
pub fn l2_norm(xs: &[f32]) -> f32 {
    sum_of_squares(xs).sqrt() as f32
}

/// L2 norm of a vector with `epsilon` added under the square root,
/// i.e. `sqrt(sum(x_i^2) + epsilon)`. Bounded below by `sqrt(epsilon)`.
pub fn regularized_l2_norm(xs: &[f32], epsilon: f64) -> f32 {
    (sum_of_squares(xs) + epsilon).sqrt() as f32
}

/// `length * scale`, for sizing rendered images.
///
/// # Panics
///
/// If the product does not fit in a `u32`.
pub(crate) fn scaled_length(length: u32, scale: u32) -> u32 {
    length.checked_mul(scale).unwrap_or_else(|| {
        panic!(
            "scaled length {} x {} does not fit in u32 image dimensions",
            length, scale
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_norm() {
        assert_approx_eq!(l2_norm(&[3.0, 4.0]), 5.0);
        assert_eq!(l2_norm(&[]), 0.0);
    }

    #[test]
    fn test_regularized_l2_norm() {
        assert_approx_eq!(regularized_l2_norm(&[3.0, 4.0], 0.1), 25.1f32.sqrt());
        assert_approx_eq!(regularized_l2_norm(&[0.0, 0.0], 0.1), 0.1f32.sqrt());
    }

    #[test]
    fn test_scaled_length() {
        assert_eq!(scaled_length(8, 3), 24);
        assert_eq!(scaled_length(0, u32::MAX), 0);
        assert_eq!(scaled_length(1, u32::MAX), u32::MAX);
    }

    #[test]
    #[should_panic(expected = "does not fit in u32")]
    fn test_scaled_length_overflow() {
        let _ = scaled_length(8, 1 << 29);
    }

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares(&[1.0, -2.0, 0.5]), 5.25);
    }
}
