//! Lattice unit builders and the component catalog.
//!
//! Everything that can occupy one position of the core grid lives here:
//! fuel assemblies, rodded assemblies, absorber rods, water cells,
//! dummies, and vertical channels. Each unit kind independently
//! implements the [`LatticeUnit`] capability — `identify()` for its
//! vocabulary name, `construct()` for its geometry universe.
//!
//! Fixed dimensions (tube profiles, axial elevations, rod radii, the
//! lattice pitch, the code vocabulary) live in [`catalog`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembly;
pub mod catalog;
pub mod cells;
pub mod rods;
pub mod unit;

pub use assembly::{BoundaryTreatment, IrtAssembly, TubeCount};
pub use cells::{FuelDummy, RabbitTubeDummy, ReflectorCell, VerticalChannel, WaterCell};
pub use rods::{AbsorberRod, RoddedAssembly};
pub use unit::LatticeUnit;
