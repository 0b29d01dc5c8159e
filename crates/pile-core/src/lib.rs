//! The lattice specification compiler.
//!
//! Takes a small, possibly ragged core map of symbolic component codes
//! and compiles it into positioned CSG geometry: the map is normalized
//! to the canonical 8×8 grid, every code is classified and resolved to
//! a unit builder through the registry, the resulting universes are
//! assembled into an origin-centered pitched lattice inside a bounding
//! universe, and the particle-source region is derived from the lattice
//! extent.
//!
//! ```
//! use pile_core::{lattice, LatticeCompiler};
//! use pile_materials::MaterialCatalog;
//!
//! let mut compiler = LatticeCompiler::new(MaterialCatalog::new());
//! let compiled = compiler
//!     .compile(&lattice![[8, 4, 8], [6, "w", 6], [4, 8, 4]])
//!     .expect("valid core map");
//! assert_eq!(compiled.lattice.shape(), (8, 8));
//! assert!(compiled.source_region.contains([0.0, 0.0, 30.0]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembly;
pub mod code;
pub mod compiler;
pub mod designs;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod source;

pub use assembly::FuelAssembly;
pub use code::ParsedCode;
pub use compiler::{CompiledLattice, LatticeCompiler};
pub use error::{AssemblyError, CodeError, CompileError, NormalizeError, ResolveError};
pub use normalize::{normalize, NormalizedGrid, RawCode, RawLatticeSpec, GRID_SIZE};
pub use registry::{UnitHandle, UnitRegistry};
pub use source::{source_region, SourceRegion};
