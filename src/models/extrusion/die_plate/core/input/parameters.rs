use uom::si::f64::{Length, MassDensity, MassRate, Ratio};

use crate::models::extrusion::die_plate::core::{InvalidParameter, resolved::Resolved};

use super::{RowCountPolicy, RowSpec};

/// Longest channel (land) a die plate is drilled with, in millimeters.
///
/// The effective limit is the smaller of this and the plate thickness.
pub const MAX_CHANNEL_LENGTH_MM: f64 = 35.0;

/// Everything needed to describe one die plate design.
///
/// This is a plain value: fields can be filled from any source (interactive
/// controls, a batch file, a test) and are validated each time geometry is
/// computed from them.
///
/// Bulk density and final fat are carried for the caller's records only and
/// do not influence any geometry.
///
/// # Example
///
/// ```
/// use die_plate_models::models::extrusion::die_plate::{
///     DieParameters, RowCountPolicy, RowSpec, compute_metrics,
/// };
/// use die_plate_models::support::units::Throughput;
/// use uom::si::{
///     angle::degree,
///     f64::{Length, MassDensity, MassRate, Ratio},
///     length::millimeter,
///     mass_density::kilogram_per_cubic_meter,
///     ratio::percent,
/// };
///
/// let mm = Length::new::<millimeter>;
/// let params = DieParameters {
///     pellet_size: mm(5.0),
///     bulk_density: MassDensity::new::<kilogram_per_cubic_meter>(500.0),
///     final_fat: Ratio::new::<percent>(20.0),
///     dry_meal_throughput: MassRate::from_tonnes_per_hour(10.0),
///     plate_thickness: mm(20.0),
///     final_diameter: mm(10.0),
///     cone_diameter: mm(15.0),
///     channel_length: mm(10.0),
///     total_holes: 100,
///     number_of_rows: 1,
///     rows: vec![RowSpec::new(mm(100.0), 10)],
///     row_count_policy: RowCountPolicy::PerRow,
/// };
///
/// let metrics = compute_metrics(&params).unwrap();
/// assert!((metrics.cone_angle.get::<degree>() - 14.036).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DieParameters {
    /// Target pellet size.
    ///
    /// Only used for the expansion metric, which falls back to zero when this
    /// is not positive.
    pub pellet_size: Length,

    /// Bulk density of the finished product (1 kg/m³ is 1 g/l).
    pub bulk_density: MassDensity,

    /// Fat content of the finished product, 0 % to 100 %.
    pub final_fat: Ratio,

    /// Dry meal throughput of the mill.
    ///
    /// Only used for open area per tonne, which falls back to zero when this
    /// is not positive.
    pub dry_meal_throughput: MassRate,

    /// Total plate thickness, entry face to exit face.
    pub plate_thickness: Length,

    /// Final bore diameter of each hole.
    pub final_diameter: Length,

    /// Opening diameter of the entry cone.
    pub cone_diameter: Length,

    /// Length of the straight channel (land) ending at the exit face.
    pub channel_length: Length,

    /// Number of holes in the plate.
    pub total_holes: u32,

    /// Number of pitch-circle rows; must match `rows.len()`.
    pub number_of_rows: u32,

    /// Pitch-circle rows, in the order they are reported.
    pub rows: Vec<RowSpec>,

    /// How hole counts per row are determined.
    pub row_count_policy: RowCountPolicy,
}

impl DieParameters {
    /// Checks every constraint on these parameters.
    ///
    /// All geometry operations validate on their own; this is for callers that
    /// want to reject input before asking for anything.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidParameter`] found.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        Resolved::new(self).map(|_| ())
    }

    /// Length of the entry cone (`plate_thickness - channel_length`).
    ///
    /// Zero or negative when the channel takes up the whole plate.
    #[must_use]
    pub fn cone_length(&self) -> Length {
        self.plate_thickness - self.channel_length
    }
}
