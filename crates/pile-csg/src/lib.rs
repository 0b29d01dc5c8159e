//! Constructive solid geometry primitives for Pile reactor models.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the geometric vocabulary the rest of the workspace composes: surfaces
//! (axis-aligned planes, axial cylinders and cones, rectangular prisms
//! with optional rounded corners), half-space [`Region`]s with boolean
//! composition, [`Cell`]s (region + fill), named [`Universe`]s, and the
//! pitched [`RectLattice`].
//!
//! # Building regions
//!
//! Regions are built from surface half-spaces and combined with the
//! `&` (intersection), `|` (union), and `!` (complement) operators:
//!
//! ```
//! use pile_csg::{HalfSpace, Surface};
//! use std::sync::Arc;
//!
//! let shell = Arc::new(Surface::z_cylinder("shell", 2.0));
//! let top = Arc::new(Surface::z_plane("top", 10.0));
//! let bottom = Arc::new(Surface::z_plane("bottom", 0.0));
//!
//! let interior = shell.inside() & top.below() & bottom.above();
//! assert!(interior.contains([0.0, 0.0, 5.0]));
//! assert!(!interior.contains([0.0, 0.0, 11.0]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod lattice;
pub mod region;
pub mod surface;
pub mod universe;

pub use cell::{Cell, Fill, MaterialHandle};
pub use error::CsgError;
pub use id::{CellId, MaterialId, SurfaceId, UniverseId};
pub use lattice::RectLattice;
pub use region::{rectangular_parallelepiped, HalfSpace, Region, Side};
pub use surface::{Axis, BoundaryKind, Surface, SurfaceKind};
pub use universe::Universe;
