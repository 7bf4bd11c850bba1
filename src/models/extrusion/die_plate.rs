//! Pellet-mill die plate model.
//!
//! A die plate is a thick disc drilled with rings of identical holes. Each
//! hole opens into a cone on the entry face, narrows to its final diameter,
//! and finishes with a straight channel (the land) through to the exit face.
//!
//! The computational core is in the internal `core` module; its data types
//! and operations are re-exported here. [`DiePlate`] adapts the core to
//! [`twine_core::Model`].

mod core;

pub use self::core::{
    ChannelRect, DieDesign, DieMetrics, DieParameters, Dimension, DimensionKind, HoleCenter,
    InvalidParameter, LayoutConfig, MAX_CHANNEL_LENGTH_MM, MeshConfig, Orientation, Parameter,
    Profile, RevolutionMesh, RingLayout, RowCountPolicy, RowSpec, SurfaceGrid, TechnicalDrawing,
    build_profile, build_revolution_mesh, build_ring_layout, build_technical_drawing,
    compute_metrics, design,
};

use twine_core::Model;

/// Computes a complete [`DieDesign`] from [`DieParameters`].
///
/// Mesh density and layout margin are fixed per model instance; use
/// [`Default`] for the usual settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiePlate {
    pub mesh: MeshConfig,
    pub layout: LayoutConfig,
}

impl DiePlate {
    #[must_use]
    pub fn new(mesh: MeshConfig, layout: LayoutConfig) -> Self {
        Self { mesh, layout }
    }
}

impl Model for DiePlate {
    type Input = DieParameters;
    type Output = DieDesign;
    type Error = InvalidParameter;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::design(input, &self.mesh, &self.layout)
    }
}
