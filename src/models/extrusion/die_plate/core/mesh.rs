//! Surface-of-revolution sampling of the bore.
//!
//! The bore radius as a function of depth is swept around the bore axis
//! (the z axis here, with z measured as depth below the entry face). The cone
//! and the channel are sampled as two separate grids so a renderer can style
//! them independently.

mod config;

pub use config::MeshConfig;

use std::f64::consts::TAU;

use uom::si::{f64::Length, length::millimeter};

use crate::support::geometry::Point3;

use super::resolved::Resolved;

/// A grid of surface points indexed by depth sample, then angle sample.
///
/// Each depth sample is a closed ring: the first and last angle samples
/// coincide at 0 and 2π, so the surface closes without stitching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurfaceGrid {
    depth_samples: usize,
    angular_samples: usize,
    points: Vec<Point3>,
}

impl SurfaceGrid {
    /// Number of rings along the axis.
    #[must_use]
    pub fn depth_samples(&self) -> usize {
        self.depth_samples
    }

    /// Number of points around each ring.
    #[must_use]
    pub fn angular_samples(&self) -> usize {
        self.angular_samples
    }

    /// Point at depth sample `depth` and angle sample `angle`.
    #[must_use]
    pub fn get(&self, depth: usize, angle: usize) -> Option<&Point3> {
        if depth >= self.depth_samples || angle >= self.angular_samples {
            return None;
        }
        self.points.get(depth * self.angular_samples + angle)
    }

    /// Rings of constant depth, from the shallowest to the deepest.
    pub fn rings(&self) -> impl Iterator<Item = &[Point3]> {
        self.points.chunks_exact(self.angular_samples)
    }

    /// All points in row-major order (depth, then angle).
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }
}

/// Sampled cone and channel surfaces of one bore.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RevolutionMesh {
    pub cone: SurfaceGrid,
    pub channel: SurfaceGrid,
}

pub(super) fn build(die: &Resolved, config: &MeshConfig) -> RevolutionMesh {
    let entry = Length::new::<millimeter>(0.0);
    let final_radius = die.final_diameter / 2.0;

    let cone = revolve(
        linspace(entry, die.cone_length, config.cone_depth_samples),
        config.angular_resolution,
        |depth| die.bore_radius_at(depth),
    );

    let channel = revolve(
        linspace(die.cone_length, die.plate_thickness, config.channel_depth_samples),
        config.angular_resolution,
        |_| final_radius,
    );

    tracing::trace!(
        cone_points = cone.points.len(),
        channel_points = channel.points.len(),
        "revolved bore surfaces"
    );

    RevolutionMesh { cone, channel }
}

fn revolve(
    depths: Vec<Length>,
    angular_samples: usize,
    radius_at: impl Fn(Length) -> Length,
) -> SurfaceGrid {
    let angles: Vec<f64> = linspace_f64(0.0, TAU, angular_samples).collect();

    let points = depths
        .iter()
        .flat_map(|&depth| {
            let radius = radius_at(depth);
            angles.iter().map(move |&theta| {
                Point3::new(radius * theta.cos(), radius * theta.sin(), depth)
            })
        })
        .collect();

    SurfaceGrid {
        depth_samples: depths.len(),
        angular_samples,
        points,
    }
}

/// `n` evenly spaced lengths from `start` to `end`, both included.
fn linspace(start: Length, end: Length, n: usize) -> Vec<Length> {
    linspace_f64(start.get::<millimeter>(), end.get::<millimeter>(), n)
        .map(Length::new::<millimeter>)
        .collect()
}

/// `n` evenly spaced values from `start` to `end`, both included; `n >= 2`.
#[allow(clippy::cast_precision_loss)]
fn linspace_f64(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let last = n - 1;
    let step = (end - start) / last as f64;
    (0..n).map(move |i| if i == last { end } else { start + step * i as f64 })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::extrusion::die_plate::core::{DieParameters, test_support::params};

    fn mesh_of(p: &DieParameters) -> RevolutionMesh {
        build(&Resolved::new(p).unwrap(), &MeshConfig::default())
    }

    #[test]
    fn grid_shape_follows_config() {
        let mesh = mesh_of(&params());

        assert_eq!(mesh.cone.depth_samples(), 30);
        assert_eq!(mesh.cone.angular_samples(), 30);
        assert_eq!(mesh.cone.points().len(), 900);
        assert_eq!(mesh.channel.depth_samples(), 10);
        assert_eq!(mesh.channel.rings().count(), 10);
        assert!(mesh.cone.get(30, 0).is_none());
        assert!(mesh.cone.get(0, 30).is_none());
    }

    #[test]
    fn cone_spans_entry_to_cone_length() {
        let mesh = mesh_of(&params());

        let top = mesh.cone.get(0, 0).unwrap();
        let bottom = mesh.cone.get(29, 0).unwrap();
        assert_relative_eq!(top.z.get::<millimeter>(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(top.radial_distance().get::<millimeter>(), 7.5, epsilon = 1e-12);
        assert_relative_eq!(bottom.z.get::<millimeter>(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(
            bottom.radial_distance().get::<millimeter>(),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn cone_radius_interpolates_linearly() {
        let mesh = mesh_of(&params());

        for ring in mesh.cone.rings() {
            let depth = ring[0].z.get::<millimeter>();
            let expected = 7.5 - 2.5 * depth / 10.0;
            for point in ring {
                assert_relative_eq!(
                    point.radial_distance().get::<millimeter>(),
                    expected,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn channel_radius_is_constant() {
        let mesh = mesh_of(&params());

        let first = mesh.channel.get(0, 0).unwrap();
        let last = mesh.channel.get(9, 0).unwrap();
        assert_relative_eq!(first.z.get::<millimeter>(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(last.z.get::<millimeter>(), 20.0, epsilon = 1e-12);

        for point in mesh.channel.points() {
            assert_relative_eq!(
                point.radial_distance().get::<millimeter>(),
                5.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn rings_close_at_the_seam() {
        let mesh = mesh_of(&params());

        for ring in mesh.cone.rings().chain(mesh.channel.rings()) {
            let first = ring[0];
            let last = ring[ring.len() - 1];
            assert_relative_eq!(
                first.x.get::<millimeter>(),
                last.x.get::<millimeter>(),
                epsilon = 1e-9
            );
            assert_relative_eq!(
                first.y.get::<millimeter>(),
                last.y.get::<millimeter>(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn degenerate_cone_keeps_final_radius() {
        let mut p = params();
        p.channel_length = p.plate_thickness;

        let mesh = mesh_of(&p);
        for point in mesh.cone.points() {
            assert_relative_eq!(point.z.get::<millimeter>(), 0.0, epsilon = 1e-9);
            assert_relative_eq!(
                point.radial_distance().get::<millimeter>(),
                5.0,
                epsilon = 1e-9
            );
            assert!(point.x.get::<millimeter>().is_finite());
        }
    }

    #[test]
    fn custom_resolution() {
        let config = MeshConfig {
            angular_resolution: 4,
            cone_depth_samples: 2,
            channel_depth_samples: 3,
        };
        let mesh = build(&Resolved::new(&params()).unwrap(), &config);

        assert_eq!(mesh.cone.points().len(), 8);
        assert_eq!(mesh.channel.points().len(), 12);

        // Angles 0, 2π/3, 4π/3, 2π
        let p = mesh.cone.get(0, 1).unwrap();
        assert_relative_eq!(p.x.get::<millimeter>(), -3.75, epsilon = 1e-9);
    }
}
