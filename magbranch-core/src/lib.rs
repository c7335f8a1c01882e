mod component;
pub mod constraint;

pub use component::Component;
pub use constraint::{ConstraintError, NonNegative, StrictlyPositive};
