//! Material definitions and the material catalog.
//!
//! Builders never inspect a material's composition; they receive opaque
//! [`MaterialHandle`]s from a caller-constructed [`MaterialCatalog`] and
//! pass them into cell construction. The catalog is an explicit value —
//! construct it once and thread it through every builder constructor;
//! there is no ambient singleton.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod catalog;
mod material;

pub use catalog::MaterialCatalog;
pub use material::{FractionMode, Material};
pub use pile_csg::MaterialHandle;
