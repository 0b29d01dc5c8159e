//! Cells: a region of space with something filling it.

use crate::id::{CellId, MaterialId};
use crate::lattice::RectLattice;
use crate::region::Region;
use crate::universe::Universe;
use std::sync::Arc;

/// Opaque reference to a material definition.
///
/// The geometry layer never inspects material composition; it only
/// records which material fills a cell. Handles are produced by the
/// material catalog and are cheap to clone.
#[derive(Clone, Debug)]
pub struct MaterialHandle {
    id: MaterialId,
    name: Arc<str>,
}

impl MaterialHandle {
    /// Create a handle for a material with the given ID and name.
    pub fn new(id: MaterialId, name: &str) -> Self {
        Self {
            id,
            name: Arc::from(name),
        }
    }

    /// ID of the referenced material.
    pub fn id(&self) -> MaterialId {
        self.id
    }

    /// Name of the referenced material.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// What occupies a cell's region.
#[derive(Clone, Debug)]
pub enum Fill {
    /// Nothing; particles stream through freely.
    Void,
    /// A homogeneous material.
    Material(MaterialHandle),
    /// Another universe, nested inside this cell.
    Universe(Arc<Universe>),
    /// A repeating lattice of universes.
    Lattice(Arc<RectLattice>),
}

/// A region of space and its fill.
///
/// A cell with no region is unbounded and contains every point; lattice
/// backfill cells use this form.
#[derive(Clone, Debug)]
pub struct Cell {
    id: CellId,
    name: String,
    fill: Fill,
    region: Option<Region>,
}

impl Cell {
    /// Cell covering `region` with the given fill.
    pub fn new(name: &str, fill: Fill, region: Region) -> Self {
        Self {
            id: CellId::next(),
            name: name.to_owned(),
            fill,
            region: Some(region),
        }
    }

    /// Unbounded cell: contains every point not claimed by another cell.
    pub fn unbounded(name: &str, fill: Fill) -> Self {
        Self {
            id: CellId::next(),
            name: name.to_owned(),
            fill,
            region: None,
        }
    }

    /// Unique ID of this cell.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cell's fill.
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// The cell's region, if bounded.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Whether `point` lies inside this cell.
    pub fn contains(&self, point: [f64; 3]) -> bool {
        match &self.region {
            Some(region) => region.contains(point),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::HalfSpace;
    use crate::surface::Surface;

    #[test]
    fn bounded_cell_membership_follows_region() {
        let shell = Arc::new(Surface::z_cylinder("shell", 1.0));
        let cell = Cell::new("inner", Fill::Void, shell.inside());
        assert!(cell.contains([0.0, 0.0, 0.0]));
        assert!(!cell.contains([2.0, 0.0, 0.0]));
    }

    #[test]
    fn unbounded_cell_contains_everything() {
        let cell = Cell::unbounded("everywhere", Fill::Void);
        assert!(cell.contains([1e9, -1e9, 0.0]));
    }
}
