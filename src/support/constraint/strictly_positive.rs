use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Rated power, rated speed, pole pairs and coil turn counts all carry this
/// constraint.
///
/// # Examples
///
/// ```
/// use emachine_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Power, power::kilowatt};
///
/// let pole_pairs = Constrained::<u32, StrictlyPositive>::new(4).unwrap();
/// assert_eq!(pole_pairs.into_inner(), 4);
///
/// let power = StrictlyPositive::new(Power::new::<kilowatt>(50.0)).unwrap();
/// assert_eq!(power.into_inner().get::<kilowatt>(), 50.0);
///
/// assert!(StrictlyPositive::new(0_u32).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        angular_velocity::revolution_per_minute,
        f64::{AngularVelocity, Power},
        power::watt,
    };

    #[test]
    fn pole_pairs() {
        let p = Constrained::<u32, StrictlyPositive>::new(3).unwrap();
        assert_eq!(p.into_inner(), 3);
        assert_eq!(StrictlyPositive::new(0_u32), Err(ConstraintError::Zero));
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(0.1).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn ratings() {
        assert!(StrictlyPositive::new(Power::new::<watt>(75_000.0)).is_ok());
        assert!(StrictlyPositive::new(Power::new::<watt>(0.0)).is_err());

        let speed = AngularVelocity::new::<revolution_per_minute>(-3000.0);
        assert!(StrictlyPositive::new(speed).is_err());
    }
}
