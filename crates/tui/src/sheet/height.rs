//! Fraction of the container height occupied by sheet content.

use coversheet_config::constants::{HALF_SHEET_FACTOR, QUARTER_SHEET_FACTOR};

use super::SheetError;

/// A fraction in (0, 1] fixing the sheet's height relative to its container.
///
/// Constant for the lifetime of a `CoverSheet`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeightFactor(f32);

impl HeightFactor {
    pub const HALF: Self = Self(HALF_SHEET_FACTOR);
    pub const QUARTER: Self = Self(QUARTER_SHEET_FACTOR);
    pub const FULL: Self = Self(1.0);

    /// Validate a height factor.
    ///
    /// Rejects NaN, zero, negatives, and anything above 1.
    pub fn new(factor: f32) -> Result<Self, SheetError> {
        if factor > 0.0 && factor <= 1.0 {
            Ok(Self(factor))
        } else {
            Err(SheetError::InvalidHeightFactor(factor))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Rows the content occupies in a container `container_height` rows tall.
    ///
    /// Rounded to the nearest row and clamped to `[1, container_height]`;
    /// an empty container yields 0.
    pub fn rows_of(self, container_height: u16) -> u16 {
        if container_height == 0 {
            return 0;
        }
        let rows = (f32::from(container_height) * self.0).round() as u16;
        rows.clamp(1, container_height)
    }
}

impl TryFrom<f32> for HeightFactor {
    type Error = SheetError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_and_quarter_are_exact_on_divisible_heights() {
        assert_eq!(HeightFactor::HALF.rows_of(24), 12);
        assert_eq!(HeightFactor::QUARTER.rows_of(24), 6);
        assert_eq!(HeightFactor::HALF.rows_of(40), 20);
        assert_eq!(HeightFactor::QUARTER.rows_of(40), 10);
    }

    #[test]
    fn test_full_height_fills_container() {
        assert_eq!(HeightFactor::FULL.rows_of(17), 17);
    }

    #[test]
    fn test_rows_never_zero_for_non_empty_container() {
        let tiny = HeightFactor::new(0.01).unwrap();
        assert_eq!(tiny.rows_of(3), 1);
        assert_eq!(tiny.rows_of(0), 0);
    }

    #[test]
    fn test_odd_heights_round_to_nearest() {
        assert_eq!(HeightFactor::HALF.rows_of(25), 13);
        assert_eq!(HeightFactor::QUARTER.rows_of(10), 3);
    }

    #[test]
    fn test_invalid_factors_rejected() {
        for bad in [0.0, -0.5, 1.01, f32::NAN, f32::INFINITY] {
            assert!(
                HeightFactor::new(bad).is_err(),
                "{bad} should be rejected"
            );
        }
        assert_eq!(
            HeightFactor::try_from(2.0),
            Err(SheetError::InvalidHeightFactor(2.0))
        );
    }

    #[test]
    fn test_boundary_factor_accepted() {
        assert_eq!(HeightFactor::new(1.0).unwrap(), HeightFactor::FULL);
    }
}
