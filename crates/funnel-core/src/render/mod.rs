//! Visual rendering of a funnel geometry.
//!
//! [`scene`] turns a [`FunnelGeometry`](crate::core::models::funnel::FunnelGeometry) and an
//! optional ligand projection into a list of viewer-neutral primitives. [`pymol`] writes those
//! primitives as a PyMOL Python script.

pub mod pymol;
pub mod scene;
