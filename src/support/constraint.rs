//! Type-level numeric constraints checked once at construction.
//!
//! Die parameters arrive as plain numbers and quantities from whatever front
//! end collected them. Wrapping a value in [`Constrained<T, C>`] proves it
//! satisfied constraint `C` when it was built, so downstream geometry never
//! has to re-check it.
//!
//! # Provided constraints
//!
//! - [`Finite`]: Neither infinite nor `NaN` (every die input)
//! - [`StrictlyPositive`]: Greater than zero (dimensions, counts)
//! - [`NonNegative`]: Zero or greater (margins)
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1` (fractions such as fat content)
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//! Each marker also provides an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(5.0)`).
//!
//! # Extending
//!
//! Custom invariants are added by implementing [`Constraint<T>`] for a new
//! zero-sized marker type.

mod finite;
mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite::{Finite, Finiteness};
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`NonNegative`] or [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use die_plate_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let thickness = Constrained::<_, StrictlyPositive>::new(Length::new::<millimeter>(20.0));
/// let thickness = thickness.unwrap();
/// assert!((thickness.into_inner().get::<millimeter>() - 20.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Checks that `value` does not exceed `max`.
///
/// Upper bounds that depend on other inputs (a channel can be no longer than
/// its plate is thick) cannot live in a zero-sized marker, so they are checked
/// with this helper instead.
///
/// # Errors
///
/// Returns [`ConstraintError::AboveMaximum`] if `value > max`, or
/// [`ConstraintError::NotANumber`] if the comparison is undefined.
pub fn at_most<T: PartialOrd>(value: &T, max: &T) -> ConstraintResult<()> {
    match value.partial_cmp(max) {
        Some(std::cmp::Ordering::Greater) => Err(ConstraintError::AboveMaximum),
        Some(_) => Ok(()),
        None => Err(ConstraintError::NotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn at_most_accepts_bound() {
        let max = Length::new::<millimeter>(35.0);
        assert!(at_most(&Length::new::<millimeter>(10.0), &max).is_ok());
        assert!(at_most(&max, &max).is_ok());
    }

    #[test]
    fn at_most_rejects_overshoot_and_nan() {
        let max = Length::new::<millimeter>(20.0);
        assert_eq!(
            at_most(&Length::new::<millimeter>(20.5), &max),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            at_most(&Length::new::<millimeter>(f64::NAN), &max),
            Err(ConstraintError::NotANumber)
        );
    }
}
