//! Die plate geometry engine.
//!
//! Every operation takes a [`DieParameters`] snapshot, validates it, and
//! returns plain data. Nothing is cached between calls: results depend only
//! on the arguments, so callers may recompute on every input change.

mod drawing;
mod error;
mod input;
mod layout;
mod mesh;
mod metrics;
mod profile;
mod resolved;

#[cfg(test)]
mod test_support;

pub use drawing::{Dimension, DimensionKind, Orientation, TechnicalDrawing};
pub use error::{InvalidParameter, Parameter};
pub use input::{DieParameters, MAX_CHANNEL_LENGTH_MM, RowCountPolicy, RowSpec};
pub use layout::{HoleCenter, LayoutConfig, RingLayout};
pub use mesh::{MeshConfig, RevolutionMesh, SurfaceGrid};
pub use metrics::DieMetrics;
pub use profile::{ChannelRect, Profile};

use resolved::Resolved;

use crate::support::units::Throughput;

/// Computes the scalar metrics of a die.
///
/// # Errors
///
/// Returns [`InvalidParameter`] if the parameters violate a constraint.
pub fn compute_metrics(params: &DieParameters) -> Result<DieMetrics, InvalidParameter> {
    resolve(params).map(|die| metrics::compute(&die))
}

/// Builds the axial section outline of one hole.
///
/// # Errors
///
/// Returns [`InvalidParameter`] if the parameters violate a constraint.
pub fn build_profile(params: &DieParameters) -> Result<Profile, InvalidParameter> {
    resolve(params).map(|die| profile::build(&die))
}

/// Builds the centerline and dimension lines for the hole section.
///
/// # Errors
///
/// Returns [`InvalidParameter`] if the parameters violate a constraint.
pub fn build_technical_drawing(
    params: &DieParameters,
) -> Result<TechnicalDrawing, InvalidParameter> {
    resolve(params).map(|die| drawing::build(&die))
}

/// Samples the bore as a surface of revolution.
///
/// # Errors
///
/// Returns [`InvalidParameter`] if the parameters violate a constraint or a
/// sample count in `config` is below 2.
pub fn build_revolution_mesh(
    params: &DieParameters,
    config: &MeshConfig,
) -> Result<RevolutionMesh, InvalidParameter> {
    config.check()?;
    resolve(params).map(|die| mesh::build(&die, config))
}

/// Places every hole center on its pitch circle.
///
/// # Errors
///
/// Returns [`InvalidParameter`] if the parameters violate a constraint or the
/// margin in `config` is negative.
pub fn build_ring_layout(
    params: &DieParameters,
    config: &LayoutConfig,
) -> Result<RingLayout, InvalidParameter> {
    config.check()?;
    resolve(params).map(|die| layout::build(&die, config))
}

/// Metrics and all drawable geometry of one die.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DieDesign {
    pub metrics: DieMetrics,
    pub profile: Profile,
    pub drawing: TechnicalDrawing,
    pub mesh: RevolutionMesh,
    pub layout: RingLayout,
}

/// Validates once and builds every result.
///
/// Either every structure is produced or none is.
///
/// # Errors
///
/// Returns [`InvalidParameter`] if the parameters or either config are invalid.
pub fn design(
    params: &DieParameters,
    mesh_config: &MeshConfig,
    layout_config: &LayoutConfig,
) -> Result<DieDesign, InvalidParameter> {
    mesh_config.check()?;
    layout_config.check()?;
    let die = resolve(params)?;

    let design = DieDesign {
        metrics: metrics::compute(&die),
        profile: profile::build(&die),
        drawing: drawing::build(&die),
        mesh: mesh::build(&die, mesh_config),
        layout: layout::build(&die, layout_config),
    };

    tracing::debug!(
        rows = die.rows.len(),
        holes = design.layout.holes.len(),
        throughput_tph = die.dry_meal_throughput.tonnes_per_hour(),
        cone_degenerate = die.is_cone_degenerate(),
        "computed die design"
    );

    Ok(design)
}

fn resolve(params: &DieParameters) -> Result<Resolved, InvalidParameter> {
    Resolved::new(params).inspect_err(|err| {
        tracing::debug!(parameter = %err.parameter(), %err, "rejected die parameters");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::millimeter;

    use super::test_support::{mm, params, single_row};

    #[test]
    fn design_bundles_every_result() {
        let p = params();
        let design = design(&p, &MeshConfig::default(), &LayoutConfig::default()).unwrap();

        assert_eq!(design.metrics, compute_metrics(&p).unwrap());
        assert_eq!(design.profile, build_profile(&p).unwrap());
        assert_eq!(design.drawing, build_technical_drawing(&p).unwrap());
        assert_eq!(
            design.mesh,
            build_revolution_mesh(&p, &MeshConfig::default()).unwrap()
        );
        assert_eq!(
            design.layout,
            build_ring_layout(&p, &LayoutConfig::default()).unwrap()
        );
    }

    #[test]
    fn invalid_parameters_produce_nothing() {
        let mut p = params();
        p.channel_length = mm(25.0);

        let expected = Parameter::ChannelLength;
        assert_eq!(compute_metrics(&p).unwrap_err().parameter(), expected);
        assert_eq!(build_profile(&p).unwrap_err().parameter(), expected);
        assert_eq!(build_technical_drawing(&p).unwrap_err().parameter(), expected);
        assert_eq!(
            design(&p, &MeshConfig::default(), &LayoutConfig::default())
                .unwrap_err()
                .parameter(),
            expected
        );
    }

    #[test]
    fn infinite_dimensions_produce_nothing() {
        let mut p = params();
        p.plate_thickness = mm(f64::INFINITY);
        assert_eq!(
            design(&p, &MeshConfig::default(), &LayoutConfig::default())
                .unwrap_err()
                .parameter(),
            Parameter::PlateThickness
        );

        let ring = single_row(f64::INFINITY, 4);
        assert_eq!(
            build_ring_layout(&ring, &LayoutConfig::default())
                .unwrap_err()
                .parameter(),
            Parameter::PitchCircleDiameter { row: 0 }
        );
    }

    #[test]
    fn invalid_config_is_reported_before_parameters() {
        let mut p = params();
        p.total_holes = 0;

        let config = MeshConfig {
            angular_resolution: 0,
            ..MeshConfig::default()
        };
        assert_eq!(
            build_revolution_mesh(&p, &config).unwrap_err().parameter(),
            Parameter::AngularResolution
        );
    }

    #[test]
    fn cone_length_is_exact() {
        for (thickness, channel) in [(20.0, 10.0), (40.0, 35.0), (1.5, 0.1), (12.0, 12.0)] {
            let mut p = params();
            p.plate_thickness = mm(thickness);
            p.channel_length = mm(channel);

            let m = compute_metrics(&p).unwrap();
            assert_eq!(m.cone_length, p.plate_thickness - p.channel_length);
            assert_relative_eq!(
                m.cone_length.get::<millimeter>(),
                thickness - channel,
                epsilon = 1e-9
            );
        }
    }
}
