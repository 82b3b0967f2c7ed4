//! # FunnelView Core Library
//!
//! Geometry of funnel-shaped restraints used in funnel metadynamics: a cone of half-angle
//! `alpha` that narrows from an apex point along a symmetry axis until it meets a cylinder of
//! fixed radius.
//!
//! ## Layers
//!
//! - **[`core`]: The Foundation.** Stateless data models (`FunnelSpec`, `FunnelGeometry`,
//!   `Structure`), the restraint-file parser, the pure geometry derivation and projection, and
//!   structure/report I/O.
//!
//! - **[`render`]: Visualization.** Converts a derived geometry into viewer-neutral primitives
//!   and writes them as a PyMOL script.
//!
//! - **[`engine`]: Shared Plumbing.** Analysis configuration, the aggregated error type, and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** [`workflows::analyze::run`] executes the whole pipeline
//!   from a restraint file and a reference structure to a projected ligand and a scene.

pub mod core;
pub mod engine;
pub mod render;
pub mod workflows;
