//! Dimensioned technical drawing of the hole section.
//!
//! The drawing is an annotation layer over [`Profile`](super::Profile): a
//! centerline on the bore axis and four dimension lines, each carrying the
//! value it measures.

use std::fmt;

use uom::si::{f64::Length, length::millimeter};

use crate::support::geometry::{Point2, Segment2};

use super::resolved::Resolved;

/// How far the centerline runs past each face.
const CENTERLINE_OVERHANG_MM: f64 = 5.0;

/// Offset of dimension lines from the features they measure.
const DIMENSION_OFFSET_MM: f64 = 2.0;

/// What a dimension line measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DimensionKind {
    ConeLength,
    ChannelLength,
    ConeDiameter,
    HoleDiameter,
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ConeLength => "Cone Length",
            Self::ChannelLength => "Channel Length",
            Self::ConeDiameter => "Cone Ø",
            Self::HoleDiameter => "Hole Ø",
        })
    }
}

/// Direction a dimension line is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Orientation {
    /// Along the bore axis (depth).
    Vertical,
    /// Across the bore.
    Horizontal,
}

/// A double-arrowed dimension line with its measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dimension {
    pub kind: DimensionKind,
    pub line: Segment2,
    pub orientation: Orientation,
    pub value: Length,
}

impl Dimension {
    fn vertical(kind: DimensionKind, x: Length, from: Length, to: Length) -> Self {
        Self {
            kind,
            line: Segment2::new(Point2::new(x, from), Point2::new(x, to)),
            orientation: Orientation::Vertical,
            value: to - from,
        }
    }

    fn horizontal(kind: DimensionKind, y: Length, half_width: Length) -> Self {
        Self {
            kind,
            line: Segment2::new(Point2::new(-half_width, y), Point2::new(half_width, y)),
            orientation: Orientation::Horizontal,
            value: half_width * 2.0,
        }
    }

    /// Text placed beside the line, e.g. `Cone Length: 10.0 mm`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {:.1} mm", self.kind, self.value.get::<millimeter>())
    }

    /// Where the label is anchored: the midpoint of the line.
    #[must_use]
    pub fn anchor(&self) -> Point2 {
        Point2::new(
            (self.line.start.x + self.line.end.x) / 2.0,
            (self.line.start.y + self.line.end.y) / 2.0,
        )
    }
}

/// Centerline and dimension lines for the hole section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TechnicalDrawing {
    pub centerline: Segment2,
    pub dimensions: [Dimension; 4],
}

impl TechnicalDrawing {
    /// Returns the dimension of the given kind.
    #[must_use]
    pub fn dimension(&self, kind: DimensionKind) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.kind == kind)
    }
}

pub(super) fn build(die: &Resolved) -> TechnicalDrawing {
    let overhang = Length::new::<millimeter>(CENTERLINE_OVERHANG_MM);
    let offset = Length::new::<millimeter>(DIMENSION_OFFSET_MM);
    let axis = Length::new::<millimeter>(0.0);
    let entry = Length::new::<millimeter>(0.0);

    let centerline = Segment2::new(
        Point2::new(axis, entry - overhang),
        Point2::new(axis, die.plate_thickness + overhang),
    );

    let depth_x = die.final_diameter / 2.0 + offset;
    let dimensions = [
        Dimension::vertical(DimensionKind::ConeLength, depth_x, entry, die.cone_length),
        Dimension::vertical(
            DimensionKind::ChannelLength,
            depth_x,
            die.cone_length,
            die.plate_thickness,
        ),
        Dimension::horizontal(
            DimensionKind::ConeDiameter,
            entry - offset,
            die.cone_diameter / 2.0,
        ),
        Dimension::horizontal(
            DimensionKind::HoleDiameter,
            die.plate_thickness + offset,
            die.final_diameter / 2.0,
        ),
    ];

    TechnicalDrawing {
        centerline,
        dimensions,
    }
}
