//! Validation of die parameters into the quantities geometry is built from.

use num_traits::Zero;
use uom::si::{
    f64::{Length, MassRate},
    length::millimeter,
    ratio::ratio,
};

use crate::support::constraint::{
    Constrained, Finite, Finiteness, StrictlyPositive, UnitInterval, at_most,
};

use super::{
    DieParameters, InvalidParameter, MAX_CHANNEL_LENGTH_MM, Parameter, RowCountPolicy,
};

/// Die parameters after every constraint has been checked.
///
/// Hole counts are settled here according to the row count policy, so no
/// builder has to know which policy was in force.
#[derive(Debug, Clone)]
pub(super) struct Resolved {
    pub pellet_size: Length,
    pub dry_meal_throughput: MassRate,
    pub plate_thickness: Length,
    pub final_diameter: Length,
    pub cone_diameter: Length,
    pub channel_length: Length,
    pub cone_length: Length,
    pub total_holes: u32,
    pub holes_per_row: Option<u32>,
    pub rows: Vec<ResolvedRow>,
}

/// A pitch-circle row with its hole count settled.
#[derive(Debug, Clone, Copy)]
pub(super) struct ResolvedRow {
    pub pitch_circle_diameter: Length,
    pub hole_count: u32,
}

impl ResolvedRow {
    pub fn pitch_radius(&self) -> Length {
        self.pitch_circle_diameter / 2.0
    }
}

impl Resolved {
    pub fn new(params: &DieParameters) -> Result<Self, InvalidParameter> {
        let pellet_size = number(params.pellet_size, Parameter::PelletSize)?;
        let dry_meal_throughput =
            number(params.dry_meal_throughput, Parameter::DryMealThroughput)?;

        positive(params.bulk_density, Parameter::BulkDensity)?;
        Constrained::<_, UnitInterval>::new(params.final_fat)
            .map_err(InvalidParameter::out_of_range(Parameter::FinalFat))?;

        let plate_thickness = positive(params.plate_thickness, Parameter::PlateThickness)?;
        let final_diameter = positive(params.final_diameter, Parameter::FinalDiameter)?;
        let cone_diameter = positive(params.cone_diameter, Parameter::ConeDiameter)?;

        let channel_length = positive(params.channel_length, Parameter::ChannelLength)?;
        let drill_limit = Length::new::<millimeter>(MAX_CHANNEL_LENGTH_MM);
        let channel_limit = if plate_thickness < drill_limit {
            plate_thickness
        } else {
            drill_limit
        };
        at_most(&channel_length, &channel_limit)
            .map_err(InvalidParameter::out_of_range(Parameter::ChannelLength))?;

        let total_holes = positive(params.total_holes, Parameter::TotalHoles)?;
        let number_of_rows = positive(params.number_of_rows, Parameter::NumberOfRows)?;

        if params.rows.len() != number_of_rows as usize {
            return Err(InvalidParameter::RowCountMismatch {
                expected: number_of_rows,
                found: params.rows.len(),
            });
        }

        let holes_per_row = match params.row_count_policy {
            RowCountPolicy::PerRow => None,
            RowCountPolicy::Uniform => match total_holes / number_of_rows {
                0 => {
                    return Err(InvalidParameter::NoHolesPerRow {
                        total_holes,
                        rows: number_of_rows,
                    });
                }
                n => Some(n),
            },
        };

        let rows = params
            .rows
            .iter()
            .enumerate()
            .map(|(row, spec)| {
                let pitch_circle_diameter = positive(
                    spec.pitch_circle_diameter,
                    Parameter::PitchCircleDiameter { row },
                )?;

                let declared = spec
                    .hole_count
                    .map(|count| positive(count, Parameter::HoleCount { row }))
                    .transpose()?;

                let hole_count = match (holes_per_row, declared) {
                    (Some(uniform), _) => uniform,
                    (None, Some(count)) => count,
                    (None, None) => return Err(InvalidParameter::MissingHoleCount { row }),
                };

                Ok(ResolvedRow {
                    pitch_circle_diameter,
                    hole_count,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            pellet_size,
            dry_meal_throughput,
            plate_thickness,
            final_diameter,
            cone_diameter,
            channel_length,
            cone_length: plate_thickness - channel_length,
            total_holes,
            holes_per_row,
            rows,
        })
    }

    /// True when the channel takes up the whole plate and there is no cone.
    pub fn is_cone_degenerate(&self) -> bool {
        self.cone_length <= Length::new::<millimeter>(0.0)
    }

    /// Radius of the bore at `depth` below the entry face.
    ///
    /// The cone narrows linearly from the opening radius at the entry face to
    /// the final radius at the cone length; the channel keeps the final radius.
    pub fn bore_radius_at(&self, depth: Length) -> Length {
        let final_radius = self.final_diameter / 2.0;
        if self.is_cone_degenerate() || depth >= self.cone_length {
            return final_radius;
        }

        let taper = (self.cone_diameter - self.final_diameter) / 2.0;
        let fraction = (depth / self.cone_length).get::<ratio>();
        self.cone_diameter / 2.0 - taper * fraction
    }
}

fn positive<T: PartialOrd + Zero + Finiteness>(
    value: T,
    parameter: Parameter,
) -> Result<T, InvalidParameter> {
    Constrained::<T, Finite>::new(value)
        .and_then(|finite| Constrained::<T, StrictlyPositive>::new(finite.into_inner()))
        .map(Constrained::into_inner)
        .map_err(InvalidParameter::out_of_range(parameter))
}

/// Accepts any finite value; non-positive values are handled by the zero
/// fallbacks in the metrics.
fn number<T: Finiteness>(value: T, parameter: Parameter) -> Result<T, InvalidParameter> {
    Constrained::<T, Finite>::new(value)
        .map(Constrained::into_inner)
        .map_err(InvalidParameter::out_of_range(parameter))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::extrusion::die_plate::core::test_support::{mm, params};

    #[test]
    fn per_row_counts_are_kept() {
        let die = Resolved::new(&params()).unwrap();
        let counts: Vec<_> = die.rows.iter().map(|r| r.hole_count).collect();
        assert_eq!(counts, vec![12, 16, 20, 24, 28]);
        assert_eq!(die.holes_per_row, None);
    }

    #[test]
    fn uniform_counts_drop_the_remainder() {
        let mut p = params();
        p.row_count_policy = RowCountPolicy::Uniform;
        p.total_holes = 103;

        let die = Resolved::new(&p).unwrap();
        assert_eq!(die.holes_per_row, Some(20));
        assert!(die.rows.iter().all(|r| r.hole_count == 20));
    }

    #[test]
    fn bore_narrows_through_the_cone() {
        let die = Resolved::new(&params()).unwrap();

        assert_relative_eq!(die.bore_radius_at(mm(0.0)).get::<millimeter>(), 7.5, epsilon = 1e-9);
        assert_relative_eq!(die.bore_radius_at(mm(5.0)).get::<millimeter>(), 6.25, epsilon = 1e-9);
        assert_relative_eq!(die.bore_radius_at(mm(10.0)).get::<millimeter>(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(die.bore_radius_at(mm(18.0)).get::<millimeter>(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_cone_has_constant_radius() {
        let mut p = params();
        p.channel_length = p.plate_thickness;

        let die = Resolved::new(&p).unwrap();
        assert!(die.is_cone_degenerate());
        assert_relative_eq!(die.bore_radius_at(mm(0.0)).get::<millimeter>(), 5.0, epsilon = 1e-9);
    }
}
