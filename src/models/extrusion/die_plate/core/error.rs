use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Names an input that failed validation.
///
/// Row indices are zero-based; the [`Display`](fmt::Display) form numbers rows
/// from one, the way they are presented to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    PelletSize,
    BulkDensity,
    FinalFat,
    DryMealThroughput,
    PlateThickness,
    FinalDiameter,
    ConeDiameter,
    ChannelLength,
    TotalHoles,
    NumberOfRows,
    PitchCircleDiameter { row: usize },
    HoleCount { row: usize },
    AngularResolution,
    ConeDepthSamples,
    ChannelDepthSamples,
    LayoutMargin,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PelletSize => f.write_str("pellet size"),
            Self::BulkDensity => f.write_str("bulk density"),
            Self::FinalFat => f.write_str("final fat"),
            Self::DryMealThroughput => f.write_str("dry meal throughput"),
            Self::PlateThickness => f.write_str("plate thickness"),
            Self::FinalDiameter => f.write_str("final hole diameter"),
            Self::ConeDiameter => f.write_str("cone opening diameter"),
            Self::ChannelLength => f.write_str("channel length"),
            Self::TotalHoles => f.write_str("total number of holes"),
            Self::NumberOfRows => f.write_str("number of rows"),
            Self::PitchCircleDiameter { row } => {
                write!(f, "pitch circle diameter of row {}", row + 1)
            }
            Self::HoleCount { row } => write!(f, "hole count of row {}", row + 1),
            Self::AngularResolution => f.write_str("angular resolution"),
            Self::ConeDepthSamples => f.write_str("cone depth samples"),
            Self::ChannelDepthSamples => f.write_str("channel depth samples"),
            Self::LayoutMargin => f.write_str("layout margin"),
        }
    }
}

/// Errors raised when die parameters or sampling settings are inconsistent.
///
/// No geometry is produced when validation fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    /// A single value lies outside its allowed range.
    #[error("{parameter}: {source}")]
    OutOfRange {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },

    /// The row list does not match the declared number of rows.
    #[error("number of rows is {expected} but {found} rows were given")]
    RowCountMismatch { expected: u32, found: usize },

    /// A row has no hole count while each row is expected to carry its own.
    #[error("row {} has no hole count", .row + 1)]
    MissingHoleCount { row: usize },

    /// Splitting the holes evenly over the rows leaves every row empty.
    #[error("{total_holes} holes over {rows} rows leaves no holes per row")]
    NoHolesPerRow { total_holes: u32, rows: u32 },
}

impl InvalidParameter {
    /// Returns a closure that tags a [`ConstraintError`] with the offending parameter.
    pub(super) fn out_of_range(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::OutOfRange { parameter, source }
    }

    /// The parameter a user would have to change to fix this error.
    #[must_use]
    pub fn parameter(&self) -> Parameter {
        match self {
            Self::OutOfRange { parameter, .. } => *parameter,
            Self::RowCountMismatch { .. } => Parameter::NumberOfRows,
            Self::MissingHoleCount { row } => Parameter::HoleCount { row: *row },
            Self::NoHolesPerRow { .. } => Parameter::TotalHoles,
        }
    }
}
