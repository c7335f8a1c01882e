use std::cmp::Ordering;

use num_traits::Zero;

use super::ConstraintError;

/// A wrapper type representing values that are guaranteed to be greater
/// than zero.
///
/// `StrictlyPositive<T>` verifies the invariant `value > 0` at construction
/// time. Unlike [`NonNegative`], zero itself is rejected, which makes the
/// wrapped value safe to divide by.
///
/// # Examples
///
/// ```
/// use magbranch_core::{ConstraintError, StrictlyPositive};
///
/// let x = StrictlyPositive::new(0.01).unwrap();
/// assert_eq!(x.into_inner(), 0.01);
///
/// assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
/// ```
///
/// [`NonNegative`]: super::NonNegative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive<T>(T);

impl<T> StrictlyPositive<T>
where
    T: PartialOrd + Zero,
{
    /// Constructs a new `StrictlyPositive<T>` if the input value is greater
    /// than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`] if `value == 0`,
    /// [`ConstraintError::Negative`] if `value < 0`, or
    /// [`ConstraintError::NotANumber`] if the value is unordered (NaN).
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(Self(value)),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for StrictlyPositive<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{electric_current::ampere, f64::ElectricCurrent};

    #[test]
    fn strictly_positive_integers() {
        let one = StrictlyPositive::new(1).unwrap();
        assert_eq!(one.into_inner(), 1);

        assert_eq!(StrictlyPositive::new(0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-1), Err(ConstraintError::Negative));
    }

    #[test]
    fn strictly_positive_floats() {
        assert!(StrictlyPositive::new(0.01).is_ok(), "Positive value is ok");
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.5), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn strictly_positive_current() {
        let current = ElectricCurrent::new::<ampere>(1.0);
        assert!(StrictlyPositive::new(current).is_ok());

        let current = ElectricCurrent::new::<ampere>(0.0);
        assert_eq!(StrictlyPositive::new(current), Err(ConstraintError::Zero));
    }
}
