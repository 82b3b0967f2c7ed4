//! # Funnel Geometry Model
//!
//! Derives the cone/cylinder geometry of a funnel restraint from its [`FunnelSpec`] and
//! projects arbitrary points onto the funnel's symmetry axis.
//!
//! Both operations are pure functions over value types. The axis is parametrized from
//! `axis_point1` (offset 0, the cone apex) along the unit vector towards `axis_point2`:
//!
//! ```text
//!   apex (p1) ----- cone ----- truncation (zcc) --- cylinder --- end (zcc + L)
//! ```
//!
//! [`FunnelSpec`]: crate::core::models::funnel::FunnelSpec

pub mod geometry;
pub mod projection;

pub use geometry::{GeometryConfig, GeometryError, derive_geometry};
pub use projection::project;
