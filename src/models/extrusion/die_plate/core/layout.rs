//! Hole centers on the die face.
//!
//! Holes in a row are spaced evenly around their pitch circle, starting on
//! the positive x axis. Rows are not staggered against each other.

mod config;

pub use config::LayoutConfig;

use std::f64::consts::TAU;

use uom::si::{f64::Length, length::millimeter};

use crate::support::geometry::Point2;

use super::resolved::{Resolved, ResolvedRow};

/// Center of one hole and the row it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HoleCenter {
    /// Zero-based row index, in the order rows were given.
    pub row: usize,
    pub center: Point2,
}

/// Every hole center on the die face.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RingLayout {
    /// Hole centers, grouped by row in input order.
    pub holes: Vec<HoleCenter>,

    /// Radius to draw each hole with (half the final diameter).
    pub hole_radius: Length,

    /// Largest pitch radius plus the configured margin.
    pub bounding_radius: Length,
}

impl RingLayout {
    /// Hole centers of a single row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &HoleCenter> {
        self.holes.iter().filter(move |hole| hole.row == row)
    }
}

pub(super) fn build(die: &Resolved, config: &LayoutConfig) -> RingLayout {
    let holes: Vec<HoleCenter> = die
        .rows
        .iter()
        .enumerate()
        .flat_map(|(row, spec)| {
            let radius = spec.pitch_radius();
            let count = spec.hole_count;
            (0..count).map(move |i| {
                let angle = TAU * f64::from(i) / f64::from(count);
                HoleCenter {
                    row,
                    center: Point2::new(radius * angle.cos(), radius * angle.sin()),
                }
            })
        })
        .collect();

    let outermost = die
        .rows
        .iter()
        .map(ResolvedRow::pitch_radius)
        .fold(Length::new::<millimeter>(0.0), Length::max);

    tracing::trace!(holes = holes.len(), "laid out hole centers");

    RingLayout {
        holes,
        hole_radius: die.final_diameter / 2.0,
        bounding_radius: outermost + config.margin,
    }
}
