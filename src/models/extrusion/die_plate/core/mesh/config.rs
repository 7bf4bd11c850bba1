use crate::models::extrusion::die_plate::core::{InvalidParameter, Parameter};
use crate::support::constraint::{Constrained, Constraint, ConstraintError};

/// Sampling density of a revolution mesh.
///
/// Every count includes both ends of its range, so each must be at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshConfig {
    /// Samples around the bore axis, from 0 to 2π inclusive.
    pub angular_resolution: usize,

    /// Depth samples through the cone.
    pub cone_depth_samples: usize,

    /// Depth samples through the channel.
    pub channel_depth_samples: usize,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            angular_resolution: 30,
            cone_depth_samples: 30,
            channel_depth_samples: 10,
        }
    }
}

impl MeshConfig {
    pub(crate) fn check(&self) -> Result<(), InvalidParameter> {
        spans_range(self.angular_resolution, Parameter::AngularResolution)?;
        spans_range(self.cone_depth_samples, Parameter::ConeDepthSamples)?;
        spans_range(self.channel_depth_samples, Parameter::ChannelDepthSamples)?;
        Ok(())
    }
}

/// Marker for sample counts that cover both ends of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpansRange;

impl Constraint<usize> for SpansRange {
    fn check(value: &usize) -> Result<(), ConstraintError> {
        if *value < 2 {
            return Err(ConstraintError::BelowMinimum);
        }
        Ok(())
    }
}

fn spans_range(count: usize, parameter: Parameter) -> Result<(), InvalidParameter> {
    Constrained::<usize, SpansRange>::new(count)
        .map(|_| ())
        .map_err(InvalidParameter::out_of_range(parameter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts() {
        let config = MeshConfig::default();
        assert_eq!(config.angular_resolution, 30);
        assert_eq!(config.cone_depth_samples, 30);
        assert_eq!(config.channel_depth_samples, 10);
        assert!(config.check().is_ok());
    }

    #[test]
    fn single_sample_is_rejected() {
        let config = MeshConfig {
            channel_depth_samples: 1,
            ..MeshConfig::default()
        };
        assert_eq!(
            config.check(),
            Err(InvalidParameter::OutOfRange {
                parameter: Parameter::ChannelDepthSamples,
                source: ConstraintError::BelowMinimum,
            })
        );
    }
}
