use uom::si::{
    f64::{Length, MassDensity, MassRate, Ratio},
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    ratio::percent,
};

use crate::support::units::Throughput;

use super::{DieParameters, RowCountPolicy, RowSpec};

pub(super) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

/// A five-row die with a 15 mm cone narrowing to a 10 mm bore.
///
/// The plate is 20 mm thick with a 10 mm channel, so the cone is 10 mm long.
pub(super) fn params() -> DieParameters {
    DieParameters {
        pellet_size: mm(5.0),
        bulk_density: MassDensity::new::<kilogram_per_cubic_meter>(500.0),
        final_fat: Ratio::new::<percent>(20.0),
        dry_meal_throughput: MassRate::from_tonnes_per_hour(10.0),
        plate_thickness: mm(20.0),
        final_diameter: mm(10.0),
        cone_diameter: mm(15.0),
        channel_length: mm(10.0),
        total_holes: 100,
        number_of_rows: 5,
        rows: vec![
            RowSpec::from_millimeters(300.0, 12),
            RowSpec::from_millimeters(340.0, 16),
            RowSpec::from_millimeters(380.0, 20),
            RowSpec::from_millimeters(420.0, 24),
            RowSpec::from_millimeters(460.0, 28),
        ],
        row_count_policy: RowCountPolicy::PerRow,
    }
}

/// The fixture reduced to a single row.
pub(super) fn single_row(pitch_circle_diameter: f64, hole_count: u32) -> DieParameters {
    DieParameters {
        number_of_rows: 1,
        rows: vec![RowSpec::from_millimeters(pitch_circle_diameter, hole_count)],
        ..params()
    }
}
