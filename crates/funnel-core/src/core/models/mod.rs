//! # Core Models Module
//!
//! Value types shared by the parser, the geometry model and the structure loaders.
//!
//! - [`funnel`] - Funnel parameters, the derived cone/cylinder geometry, and axial projections
//! - [`structure`] - A flat atom list with residue-name selection and center-of-mass support
//!
//! All funnel types are small `Copy` values; nothing in this module holds shared state.

pub mod funnel;
pub mod structure;
