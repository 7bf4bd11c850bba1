use uom::si::{f64::Length, length::millimeter};

use crate::models::extrusion::die_plate::core::{InvalidParameter, Parameter};
use crate::support::constraint::NonNegative;

/// Settings for the hole-ring layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Space added beyond the outermost pitch circle when sizing the view.
    pub margin: Length,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: Length::new::<millimeter>(10.0),
        }
    }
}

impl LayoutConfig {
    pub(crate) fn check(&self) -> Result<(), InvalidParameter> {
        NonNegative::new(self.margin)
            .map(|_| ())
            .map_err(InvalidParameter::out_of_range(Parameter::LayoutMargin))
    }
}
