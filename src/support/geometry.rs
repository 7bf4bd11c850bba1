//! Points in the section plane and in space.
//!
//! Coordinates are [`Length`] quantities so geometry can be handed to any
//! renderer in whatever unit it prefers.

use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

/// A point in a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point2 {
    pub x: Length,
    pub y: Length,
}

impl Point2 {
    #[must_use]
    pub fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin.
    #[must_use]
    pub fn distance_from_origin(&self) -> Length {
        Length::new::<meter>(self.x.get::<meter>().hypot(self.y.get::<meter>()))
    }

    /// Polar angle measured counterclockwise from the positive x axis, in `(-π, π]`.
    #[must_use]
    pub fn polar_angle(&self) -> Angle {
        Angle::new::<radian>(self.y.get::<meter>().atan2(self.x.get::<meter>()))
    }
}

/// A point in space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point3 {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Point3 {
    #[must_use]
    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Self { x, y, z }
    }

    /// Distance from the z axis.
    #[must_use]
    pub fn radial_distance(&self) -> Length {
        Point2::new(self.x, self.y).distance_from_origin()
    }
}

/// A straight line segment in a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment2 {
    pub start: Point2,
    pub end: Point2,
}

impl Segment2 {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> Length {
        Point2::new(self.end.x - self.start.x, self.end.y - self.start.y).distance_from_origin()
    }
}

/// An axis-aligned rectangle in a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bounds2 {
    pub min: Point2,
    pub max: Point2,
}
