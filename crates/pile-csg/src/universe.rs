//! Universes: named collections of cells.

use crate::cell::Cell;
use crate::id::UniverseId;

/// A named collection of cells that together describe a piece of space.
///
/// Universes are the unit of composition: a cell may be filled with a
/// universe, and a lattice positions one universe per grid slot. Once
/// constructed a universe is immutable, so sharing one instance across
/// many lattice positions is sound.
#[derive(Clone, Debug)]
pub struct Universe {
    id: UniverseId,
    name: String,
    cells: Vec<Cell>,
}

impl Universe {
    /// Create a universe from its cells.
    pub fn new(name: &str, cells: Vec<Cell>) -> Self {
        Self {
            id: UniverseId::next(),
            name: name.to_owned(),
            cells,
        }
    }

    /// Unique ID of this universe.
    pub fn id(&self) -> UniverseId {
        self.id
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cells of this universe, in construction order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// First cell containing `point`, if any.
    ///
    /// Cells are checked in construction order; well-formed universes
    /// have non-overlapping cell regions, making the order immaterial.
    pub fn find_cell(&self, point: [f64; 3]) -> Option<&Cell> {
        self.cells.iter().find(|c| c.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Fill;
    use crate::region::HalfSpace;
    use crate::surface::Surface;
    use std::sync::Arc;

    #[test]
    fn find_cell_picks_the_containing_cell() {
        let inner = Arc::new(Surface::z_cylinder("inner", 1.0));
        let cells = vec![
            Cell::new("core", Fill::Void, inner.inside()),
            Cell::new("rest", Fill::Void, inner.outside()),
        ];
        let u = Universe::new("pin", cells);
        assert_eq!(u.find_cell([0.0, 0.0, 0.0]).map(Cell::name), Some("core"));
        assert_eq!(u.find_cell([2.0, 0.0, 0.0]).map(Cell::name), Some("rest"));
    }
}
