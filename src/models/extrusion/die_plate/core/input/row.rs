use uom::si::{f64::Length, length::millimeter};

/// How many holes each pitch-circle row carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowCountPolicy {
    /// Every row declares its own hole count in [`RowSpec::hole_count`].
    #[default]
    PerRow,

    /// Every row carries `floor(total_holes / number_of_rows)` holes.
    ///
    /// Any remainder is dropped rather than redistributed, and per-row
    /// counts are ignored.
    Uniform,
}

/// One ring of holes on the die face.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSpec {
    /// Diameter of the circle the hole centers lie on.
    pub pitch_circle_diameter: Length,

    /// Number of holes in this row.
    ///
    /// Required under [`RowCountPolicy::PerRow`], ignored under
    /// [`RowCountPolicy::Uniform`].
    pub hole_count: Option<u32>,
}

impl RowSpec {
    /// A row with its own hole count.
    #[must_use]
    pub fn new(pitch_circle_diameter: Length, hole_count: u32) -> Self {
        Self {
            pitch_circle_diameter,
            hole_count: Some(hole_count),
        }
    }

    /// A row whose hole count comes from the uniform split.
    #[must_use]
    pub fn pitch_only(pitch_circle_diameter: Length) -> Self {
        Self {
            pitch_circle_diameter,
            hole_count: None,
        }
    }

    /// Convenience constructor taking the pitch circle diameter in millimeters.
    #[must_use]
    pub fn from_millimeters(pitch_circle_diameter: f64, hole_count: u32) -> Self {
        Self::new(
            Length::new::<millimeter>(pitch_circle_diameter),
            hole_count,
        )
    }
}
