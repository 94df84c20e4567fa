//! Core types for the beatv velocity tool.
//!
//! This crate contains the pure domain model: the points-label vocabulary,
//! project-column references, the GitHub card wire types, and the stats
//! computation. No I/O happens here.

pub mod card;
pub mod column;
pub mod points;
pub mod stats;
