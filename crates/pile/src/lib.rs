//! Pile: a declarative reactor-core lattice compiler over CSG geometry.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Pile sub-crates. For most users, adding `pile` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pile::prelude::*;
//!
//! // A core map: integers are assembly-type shorthand, strings are
//! // component codes. Ragged input is fine — it is normalized to the
//! // canonical 8×8 grid with water padding.
//! let map = pile::lattice![
//!     [8, "O", 6],
//!     [6, "w", "AR25.0"],
//!     [4, "X", 4],
//! ];
//!
//! let mut compiler = LatticeCompiler::new(MaterialCatalog::new());
//! let compiled = compiler.compile(&map).expect("valid core map");
//!
//! assert_eq!(compiled.lattice.shape(), (8, 8));
//! assert!(compiled.source_region.contains([0.0, 0.0, 30.0]));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`csg`] | `pile-csg` | Surfaces, regions, cells, universes, lattices |
//! | [`materials`] | `pile-materials` | Material definitions and the catalog |
//! | [`units`] | `pile-units` | Lattice unit builders and the component catalog |
//! | [`compiler`] | `pile-core` | Normalization, code parsing, registry, compiler |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry primitives (`pile-csg`).
pub use pile_csg as csg;

/// Material definitions and the catalog (`pile-materials`).
pub use pile_materials as materials;

/// Lattice unit builders and the component catalog (`pile-units`).
pub use pile_units as units;

/// The lattice specification compiler (`pile-core`).
pub use pile_core as compiler;

pub use pile_core::lattice;

/// The types most applications need.
pub mod prelude {
    pub use pile_core::{
        CompileError, CompiledLattice, FuelAssembly, LatticeCompiler, ParsedCode, SourceRegion,
        UnitRegistry,
    };
    pub use pile_csg::{Cell, Fill, RectLattice, Region, Surface, Universe};
    pub use pile_materials::MaterialCatalog;
    pub use pile_units::{BoundaryTreatment, LatticeUnit};
}
