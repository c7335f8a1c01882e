use std::cmp::Ordering;

use num_traits::Zero;

use super::ConstraintError;

/// A wrapper type representing values that are guaranteed to be non-negative.
///
/// `NonNegative<T>` is a lightweight newtype that wraps a value of type `T`
/// and enforces the invariant `value >= 0`. The invariant is verified at
/// construction time.
///
/// # Type Constraints
///
/// `T` must implement both [`PartialOrd`] and [`Zero`].
/// Common examples include primitive numeric types (`i32`, `f64`, etc.) and
/// unit-safe types like `Quantity` from [`uom`].
///
/// # Examples
///
/// ```
/// use magbranch_core::NonNegative;
///
/// let x = NonNegative::new(3).unwrap();
/// assert_eq!(x.into_inner(), 3);
///
/// assert!(NonNegative::new(-5).is_err());
/// ```
///
/// [`Zero`]: https://docs.rs/num-traits/latest/num_traits/identities/trait.Zero.html
/// [`uom`]: https://docs.rs/uom/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative<T>(T);

impl<T> NonNegative<T>
where
    T: PartialOrd + Zero,
{
    /// Constructs a new `NonNegative<T>` if the input value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Negative`] if `value < 0`, or
    /// [`ConstraintError::NotANumber`] if the value is unordered (NaN).
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(Self(value)),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for NonNegative<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
