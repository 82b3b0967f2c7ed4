//! # Core Module
//!
//! The stateless foundation of FunnelView: value types, the geometric model of a funnel
//! restraint, and file I/O.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Funnel parameters, derived geometry, projections, and a light
//!   structure model
//! - **Geometry Model** ([`funnel`]) - Cone/cylinder derivation and axial projection
//! - **File I/O** ([`io`]) - Restraint-definition parsing, PDB/BGF reading, CSV reports
//! - **Utilities** ([`utils`]) - Vector helpers, atomic masses, and element inference
//!
//! Everything here is pure computation over immutable inputs. Errors are returned to the
//! caller; nothing in this module prints.

pub mod funnel;
pub mod io;
pub mod models;
pub mod utils;
