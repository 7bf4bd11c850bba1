//! Scalar engineering metrics of a die plate.

use std::{f64::consts::PI, fmt};

use uom::si::{
    angle::{degree, radian},
    area::square_millimeter,
    f64::{Angle, Area, Length, MassRate, Ratio},
    length::millimeter,
    mass_rate::kilogram_per_second,
    ratio::{percent, ratio},
};

use crate::support::units::{OpenAreaPerThroughput, OpenAreaPerThroughputUnits};

use super::resolved::Resolved;

/// Metrics derived from a set of die parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DieMetrics {
    /// Length of the entry cone, `plate_thickness - channel_length`.
    pub cone_length: Length,

    /// Half angle of the entry cone; zero when there is no cone.
    pub cone_angle: Angle,

    /// Cross-section of one bore at its final diameter.
    pub open_area_one_hole: Area,

    /// Cross-section of all bores together.
    pub total_open_area: Area,

    /// Total open area per unit of dry meal throughput; zero when the
    /// throughput is not positive.
    pub open_area_per_tonne: OpenAreaPerThroughput,

    /// `1 - final_diameter / pellet_size`; zero when the pellet size is not positive.
    pub expansion: Ratio,

    /// Holes in every row, present only under the uniform row count policy.
    pub holes_per_row: Option<u32>,

    /// Edge-to-edge arc spacing between neighbouring holes, one entry per row.
    pub row_spacing: Vec<Length>,

    /// Mean gap between consecutive pitch circle diameters after sorting;
    /// zero for a single row.
    pub row_pitch_gap: Length,
}

pub(super) fn compute(die: &Resolved) -> DieMetrics {
    let zero = Length::new::<millimeter>(0.0);

    let cone_angle = if die.is_cone_degenerate() {
        Angle::new::<radian>(0.0)
    } else {
        let taper = (die.cone_diameter - die.final_diameter) / 2.0;
        let slope = (taper / die.cone_length).get::<ratio>().abs();
        Angle::new::<radian>(slope.atan())
    };

    let final_radius = die.final_diameter / 2.0;
    let open_area_one_hole: Area = final_radius * final_radius * PI;
    let total_open_area = open_area_one_hole * f64::from(die.total_holes);

    let stalled = MassRate::new::<kilogram_per_second>(0.0);
    let open_area_per_tonne = if die.dry_meal_throughput > stalled {
        total_open_area / die.dry_meal_throughput
    } else {
        OpenAreaPerThroughput::from_square_millimeters_per_tonne_hour(0.0)
    };

    let expansion = if die.pellet_size > zero {
        Ratio::new::<ratio>(1.0) - die.final_diameter / die.pellet_size
    } else {
        Ratio::new::<ratio>(0.0)
    };

    let row_spacing = die
        .rows
        .iter()
        .map(|row| {
            row.pitch_circle_diameter * PI / f64::from(row.hole_count) - die.final_diameter
        })
        .collect();

    DieMetrics {
        cone_length: die.cone_length,
        cone_angle,
        open_area_one_hole,
        total_open_area,
        open_area_per_tonne,
        expansion,
        holes_per_row: die.holes_per_row,
        row_spacing,
        row_pitch_gap: row_pitch_gap(die),
    }
}

/// Mean of the consecutive differences of the sorted pitch circle diameters.
fn row_pitch_gap(die: &Resolved) -> Length {
    let mut diameters: Vec<f64> = die
        .rows
        .iter()
        .map(|row| row.pitch_circle_diameter.get::<millimeter>())
        .collect();

    if diameters.len() < 2 {
        return Length::new::<millimeter>(0.0);
    }

    diameters.sort_by(f64::total_cmp);
    let gaps: f64 = diameters.windows(2).map(|pair| pair[1] - pair[0]).sum();

    #[allow(clippy::cast_precision_loss)]
    let mean = gaps / (diameters.len() - 1) as f64;
    Length::new::<millimeter>(mean)
}

/// Writes the metrics as a plain-text report, one value per line.
impl fmt::Display for DieMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cone Length: {:.2} mm", self.cone_length.get::<millimeter>())?;
        writeln!(f, "Cone Angle: {:.2}°", self.cone_angle.get::<degree>())?;
        writeln!(
            f,
            "Open Area of One Hole: {:.2} mm²",
            self.open_area_one_hole.get::<square_millimeter>()
        )?;
        writeln!(
            f,
            "Total Plate Open Area: {:.2} mm²",
            self.total_open_area.get::<square_millimeter>()
        )?;
        writeln!(
            f,
            "Open Area per Tonne: {:.2} mm²/t/h",
            self.open_area_per_tonne.square_millimeters_per_tonne_hour()
        )?;
        if let Some(holes) = self.holes_per_row {
            writeln!(f, "Number of Holes per Row: {holes}")?;
        }
        for (row, spacing) in self.row_spacing.iter().enumerate() {
            writeln!(
                f,
                "Row {} - Space Between Holes: {:.2} mm",
                row + 1,
                spacing.get::<millimeter>()
            )?;
        }
        writeln!(
            f,
            "Space Between Rows (calculated): {:.2} mm",
            self.row_pitch_gap.get::<millimeter>()
        )?;
        write!(f, "Expansion: {:.2} %", self.expansion.get::<percent>())
    }
}
