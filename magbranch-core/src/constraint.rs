//! Construction-time numeric constraints for component inputs.
//!
//! These newtypes verify a numeric invariant once, when the value enters the
//! system, so that downstream code can trust it without re-checking:
//!
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//!
//! Both constructors reject NaN, since an unordered value satisfies no
//! numeric constraint.

mod non_negative;
mod strictly_positive;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// An error returned when a constrained value fails its invariant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}
