//! Shared argument checks for dense and grid arrays.

use sweeplog_core::GridError;

/// Check that a per-axis vector has one entry per axis.
pub(crate) fn check_dimension(expected: usize, got: usize) -> Result<(), GridError> {
    if expected != got {
        return Err(GridError::DimensionMismatch { expected, got });
    }
    Ok(())
}

/// Overflow-checked element count for the given axis lengths.
///
/// The empty product is 1, so a 0-dimensional array holds one element.
pub(crate) fn checked_size(lengths: &[usize]) -> Result<usize, GridError> {
    let mut size: usize = 1;
    for (axis, &len) in lengths.iter().enumerate() {
        if len == 0 {
            return Err(GridError::EmptyAxis { axis });
        }
        size = size.checked_mul(len).ok_or(GridError::SizeOverflow)?;
    }
    Ok(size)
}

/// Every spacing must be finite and strictly positive.
pub(crate) fn check_step_sizes(step_size: &[f64]) -> Result<(), GridError> {
    for (axis, &value) in step_size.iter().enumerate() {
        if !(value.is_finite() && value > 0.0) {
            return Err(GridError::InvalidStepSize { axis, value });
        }
    }
    Ok(())
}

/// Every anchor coordinate must be finite.
pub(crate) fn check_anchor(anchor: &[f64]) -> Result<(), GridError> {
    for (axis, &value) in anchor.iter().enumerate() {
        if !value.is_finite() {
            return Err(GridError::InvalidAnchor { axis, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_product_is_one() {
        assert_eq!(checked_size(&[]), Ok(1));
    }

    #[test]
    fn size_is_product_of_lengths() {
        assert_eq!(checked_size(&[5, 2, 10, 1, 4]), Ok(400));
    }

    #[test]
    fn zero_length_axis_rejected() {
        assert_eq!(
            checked_size(&[3, 0, 2]),
            Err(GridError::EmptyAxis { axis: 1 })
        );
    }

    #[test]
    fn overflowing_size_rejected() {
        assert_eq!(
            checked_size(&[usize::MAX, 2]),
            Err(GridError::SizeOverflow)
        );
    }

    #[test]
    fn step_sizes_must_be_positive_and_finite() {
        assert!(check_step_sizes(&[1.0, 0.5, 2.0]).is_ok());
        assert_eq!(
            check_step_sizes(&[1.0, 0.0]),
            Err(GridError::InvalidStepSize {
                axis: 1,
                value: 0.0
            })
        );
        assert!(matches!(
            check_step_sizes(&[f64::NAN]),
            Err(GridError::InvalidStepSize { axis: 0, .. })
        ));
        assert!(check_step_sizes(&[f64::INFINITY]).is_err());
        assert!(check_step_sizes(&[-1.0]).is_err());
    }

    #[test]
    fn anchor_must_be_finite() {
        assert!(check_anchor(&[-3.0, 0.0, 1e300]).is_ok());
        assert!(matches!(
            check_anchor(&[0.0, f64::NEG_INFINITY]),
            Err(GridError::InvalidAnchor { axis: 1, .. })
        ));
    }

    #[test]
    fn dimension_check() {
        assert!(check_dimension(3, 3).is_ok());
        assert_eq!(
            check_dimension(3, 2),
            Err(GridError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }
}
