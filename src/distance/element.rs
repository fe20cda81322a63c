// ============================================================================
// Distance Element Trait
// Per-element contribution to a Euclidean distance, for real and complex scalars
// ============================================================================

use num::Complex;

/// Scalar that can appear in a vector passed to the distance functions.
///
/// The only operation needed is the squared magnitude of the difference of
/// two elements, `|a - b|^2`, as an `f64`. Taking the magnitude before
/// squaring keeps the result real and non-negative for complex elements.
///
/// # Precision
/// Real elements are widened to `f64` before subtracting. Integer elements
/// use `abs_diff`, so unsigned differences never wrap.
pub trait DistanceElement: Copy {
    /// Squared magnitude of `self - other`.
    fn abs_diff_squared(self, other: Self) -> f64;
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl DistanceElement for $t {
                #[inline]
                fn abs_diff_squared(self, other: Self) -> f64 {
                    let diff = f64::from(self) - f64::from(other);
                    diff * diff
                }
            }
        )*
    };
}

macro_rules! impl_integer_element {
    ($($t:ty),*) => {
        $(
            impl DistanceElement for $t {
                #[inline]
                fn abs_diff_squared(self, other: Self) -> f64 {
                    let diff = self.abs_diff(other) as f64;
                    diff * diff
                }
            }
        )*
    };
}

impl_float_element!(f32, f64);
impl_integer_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl DistanceElement for Complex<f32> {
    #[inline]
    fn abs_diff_squared(self, other: Self) -> f64 {
        let re = f64::from(self.re) - f64::from(other.re);
        let im = f64::from(self.im) - f64::from(other.im);
        re * re + im * im
    }
}

impl DistanceElement for Complex<f64> {
    #[inline]
    fn abs_diff_squared(self, other: Self) -> f64 {
        (self - other).norm_sqr()
    }
}
