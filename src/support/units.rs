//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for every physical quantity (lengths, areas,
//! throughputs, densities, angles). This module adds the pieces die design
//! needs that [`uom`] does not ship.
//!
//! ## Throughput
//!
//! Pellet mills are rated in tonnes of dry meal per hour. The [`Throughput`]
//! trait converts [`MassRate`](uom::si::f64::MassRate) to and from that unit:
//!
//! ```
//! use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
//! use die_plate_models::support::units::Throughput;
//!
//! let rate = MassRate::from_tonnes_per_hour(3.6);
//! assert!((rate.get::<kilogram_per_second>() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Open area per throughput
//!
//! [`OpenAreaPerThroughput`] is the quotient of an open area and a throughput,
//! reported in mm² per t/h via [`OpenAreaPerThroughputUnits`].

mod quantities;
mod throughput;

pub use quantities::{OpenAreaPerThroughput, OpenAreaPerThroughputUnits};
pub use throughput::Throughput;
