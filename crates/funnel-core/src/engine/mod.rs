//! # Engine Module
//!
//! Shared plumbing for the analysis workflows: the validated run configuration, the
//! aggregated error type and progress reporting.
//!
//! - **Configuration** ([`config`]) - Input paths, ligand selection, geometry and visual settings
//! - **Error Handling** ([`error`]) - [`error::EngineError`] wraps every failure a workflow can hit
//! - **Progress Monitoring** ([`progress`]) - Phase events forwarded to an optional observer

pub mod config;
pub mod error;
pub mod progress;
