//! Element algebra for matrix cells.
//!
//! A [`LinearValue`] can be accumulated and scaled by a real coefficient.
//! Only genuinely linear types implement it; presence flags such as `bool`
//! can still be stored in a [`Matrix`](crate::matrix::Matrix), but the
//! linear matrix operations are simply not available for them.

/// A value supporting vector addition and scaling by a real coefficient.
///
/// `Default` must be the additive identity: matrices are created filled
/// with `T::default()` and treat it as the zero value.
///
/// # Examples
///
/// ```
/// use tether_core::value::LinearValue;
///
/// let total = LinearValue::add(1.5f32, 2.0);
/// assert_eq!(LinearValue::scale(total, 2.0), 7.0);
/// ```
pub trait LinearValue: Copy + Default {
    /// Returns the sum of `self` and `other`.
    fn add(self, other: Self) -> Self;

    /// Returns `self` multiplied by `coefficient`.
    fn scale(self, coefficient: f32) -> Self;
}

impl LinearValue for f32 {
    fn add(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, coefficient: f32) -> Self {
        self * coefficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_zero_is_identity() {
        assert_eq!(LinearValue::add(f32::default(), 4.25), 4.25);
    }

    #[test]
    fn test_f32_scale() {
        assert_eq!(LinearValue::scale(3.0f32, -0.5), -1.5);
    }
}
