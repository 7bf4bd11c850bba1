use uom::si::{Dimension, Quantity, Units};

use super::{Constrained, Constraint, ConstraintError};

/// Reports whether a value is a finite number.
///
/// Integers are always finite. Floats and float-backed quantities are finite
/// when they are neither infinite nor `NaN`.
pub trait Finiteness {
    fn is_finite_value(&self) -> bool;

    fn is_nan_value(&self) -> bool;
}

impl Finiteness for f64 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }

    fn is_nan_value(&self) -> bool {
        self.is_nan()
    }
}

impl Finiteness for u32 {
    fn is_finite_value(&self) -> bool {
        true
    }

    fn is_nan_value(&self) -> bool {
        false
    }
}

impl<D, U> Finiteness for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn is_finite_value(&self) -> bool {
        self.value.is_finite()
    }

    fn is_nan_value(&self) -> bool {
        self.value.is_nan()
    }
}

/// Marker type enforcing that a value is a finite number.
///
/// Geometry built from an infinite dimension is meaningless, so every die
/// input passes this check before any sign or range check.
///
/// # Examples
///
/// ```
/// use die_plate_models::support::constraint::{Constrained, ConstraintError, Finite};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let pcd = Constrained::<_, Finite>::new(Length::new::<millimeter>(300.0));
/// assert!(pcd.is_ok());
///
/// assert_eq!(
///     Finite::new(Length::new::<millimeter>(f64::INFINITY)),
///     Err(ConstraintError::NotFinite)
/// );
/// assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is infinite or not a number (`NaN`).
    pub fn new<T: Finiteness>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Finiteness> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan_value() {
            Err(ConstraintError::NotANumber)
        } else if value.is_finite_value() {
            Ok(())
        } else {
            Err(ConstraintError::NotFinite)
        }
    }
}
