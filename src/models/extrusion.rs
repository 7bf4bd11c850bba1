//! Extrusion tooling models.
//!
//! This module contains models for the tooling that shapes extruded and
//! pelleted feed, starting with the perforated die plate of a pellet mill.

pub mod die_plate;
