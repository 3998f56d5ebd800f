use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use emachine_models::support::constraint::{Constrained, NonNegative};
///
/// let weight = Constrained::<_, NonNegative>::new(0.3).unwrap();
/// assert_eq!(weight.into_inner(), 0.3);
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-0.2).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn weights() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(0.05).is_ok());
        assert_eq!(NonNegative::new(-0.05), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn lengths() {
        assert!(NonNegative::new(Length::new::<millimeter>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<millimeter>(-1.0)).is_err());
    }
}
