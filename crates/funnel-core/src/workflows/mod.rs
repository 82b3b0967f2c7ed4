//! # Workflows Module
//!
//! Top-level entry points that tie the `core` and `engine` layers together.
//!
//! - **Analysis Workflow** ([`analyze`]) - Parses a restraint definition, derives the funnel
//!   geometry, projects the ligand center of mass of a reference structure (and of any extra
//!   poses) onto the funnel axis, and builds the visual scene.

pub mod analyze;
