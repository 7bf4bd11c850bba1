//! Axial section through one hole.
//!
//! The section plane contains the bore axis, which sits at `x = 0`. Depth runs
//! along `y` from the entry face (`y = 0`) to the exit face
//! (`y = plate_thickness`).

use uom::si::{f64::Length, length::millimeter};

use crate::support::geometry::{Bounds2, Point2};

use super::resolved::Resolved;

/// Space left above the exit face in the suggested view.
const VIEW_HEADROOM_MM: f64 = 5.0;

/// Closed outline of the bore plus the channel rectangle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Profile {
    /// Bore outline, closed by joining the last vertex back to the first.
    ///
    /// Vertices run from the left edge of the cone opening, down the left
    /// wall to the exit face, across it, and back up the right wall.
    pub outline: [Point2; 6],

    /// The straight channel at the bottom of the bore.
    pub channel: ChannelRect,

    /// Suggested view bounds for drawing the section.
    pub view: Bounds2,
}

/// Axis-aligned rectangle covering the channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelRect {
    /// Corner nearest the entry face on the negative-x side.
    pub origin: Point2,
    pub width: Length,
    pub height: Length,
}

impl ChannelRect {
    /// Corners in counterclockwise order starting at the origin.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let Point2 { x, y } = self.origin;
        [
            self.origin,
            Point2::new(x + self.width, y),
            Point2::new(x + self.width, y + self.height),
            Point2::new(x, y + self.height),
        ]
    }
}

pub(super) fn build(die: &Resolved) -> Profile {
    let cone_half = die.cone_diameter / 2.0;
    let final_half = die.final_diameter / 2.0;
    let entry = Length::new::<millimeter>(0.0);

    let outline = [
        Point2::new(-cone_half, entry),
        Point2::new(-final_half, die.cone_length),
        Point2::new(-final_half, die.plate_thickness),
        Point2::new(final_half, die.plate_thickness),
        Point2::new(final_half, die.cone_length),
        Point2::new(cone_half, entry),
    ];

    let channel = ChannelRect {
        origin: Point2::new(-final_half, die.cone_length),
        width: die.final_diameter,
        height: die.channel_length,
    };

    let view = Bounds2 {
        min: Point2::new(-die.cone_diameter, entry),
        max: Point2::new(
            die.cone_diameter,
            die.plate_thickness + Length::new::<millimeter>(VIEW_HEADROOM_MM),
        ),
    };

    Profile {
        outline,
        channel,
        view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::extrusion::die_plate::core::test_support::params;

    fn assert_at(p: Point2, x: f64, y: f64) {
        assert_relative_eq!(p.x.get::<millimeter>(), x, epsilon = 1e-12);
        assert_relative_eq!(p.y.get::<millimeter>(), y, epsilon = 1e-12);
    }

    #[test]
    fn outline_vertices() {
        let profile = build(&Resolved::new(&params()).unwrap());
        let expected = [
            (-7.5, 0.0),
            (-5.0, 10.0),
            (-5.0, 20.0),
            (5.0, 20.0),
            (5.0, 10.0),
            (7.5, 0.0),
        ];

        for (vertex, (x, y)) in profile.outline.into_iter().zip(expected) {
            assert_at(vertex, x, y);
        }
    }

    #[test]
    fn channel_spans_land() {
        let profile = build(&Resolved::new(&params()).unwrap());
        let expected = [(-5.0, 10.0), (5.0, 10.0), (5.0, 20.0), (-5.0, 20.0)];

        for (corner, (x, y)) in profile.channel.corners().into_iter().zip(expected) {
            assert_at(corner, x, y);
        }
    }

    #[test]
    fn view_leaves_headroom() {
        let profile = build(&Resolved::new(&params()).unwrap());
        assert_at(profile.view.min, -15.0, 0.0);
        assert_at(profile.view.max, 15.0, 25.0);
    }

    #[test]
    fn repeated_builds_match() {
        let die = Resolved::new(&params()).unwrap();
        assert_eq!(build(&die), build(&die));
    }

    #[test]
    fn degenerate_cone_collapses_onto_entry_face() {
        let mut p = params();
        p.channel_length = p.plate_thickness;

        let profile = build(&Resolved::new(&p).unwrap());
        assert_at(profile.outline[1], -5.0, 0.0);
        assert_at(profile.channel.origin, -5.0, 0.0);
        assert_relative_eq!(profile.channel.height.get::<millimeter>(), 20.0, epsilon = 1e-9);
    }
}
