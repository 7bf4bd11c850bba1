//! # Die Plate Models
//!
//! Parametric geometry of pellet-mill die plates, as models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! From a handful of die dimensions the crate derives engineering metrics
//! (cone angle, open area, expansion, hole spacing) and renderer-agnostic
//! geometry: the axial section of a hole, a dimensioned drawing of it, the
//! bore as a sampled surface of revolution, and the hole-ring layout of the
//! die face. Nothing here draws; every result is plain data.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize` for every result type and
//!   `Serialize`/`Deserialize` for inputs and configuration.
//!
//! ## Logging
//!
//! Events are emitted through [`tracing`] at `debug` and `trace` levels.
//! The crate never installs a subscriber.
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the
//! public API besides the models themselves. Model-internal code is private.

pub mod models;
pub mod support;
