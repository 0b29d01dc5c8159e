//! Pitched rectangular lattices of universes.

use crate::error::CsgError;
use crate::universe::Universe;
use std::sync::Arc;

/// A 2-D rectangular lattice: one universe per grid position, repeated
/// at a fixed pitch from a lower-left origin.
///
/// The universe array is row-major in map reading order: `universes[0]`
/// is the top row of the core map, and `universes[r][c]` steps down and
/// to the right the way the map is written. Construction validates
/// shape, so every lattice value in existence is rectangular and
/// non-empty with positive pitch.
#[derive(Clone, Debug)]
pub struct RectLattice {
    name: String,
    lower_left: [f64; 2],
    pitch: [f64; 2],
    universes: Vec<Vec<Arc<Universe>>>,
}

impl RectLattice {
    /// Create a lattice from its placement and universe array.
    ///
    /// Fails with [`CsgError::EmptyLattice`] for an empty array,
    /// [`CsgError::RaggedLattice`] when rows differ in length, and
    /// [`CsgError::NonPositivePitch`] for a zero or negative pitch.
    pub fn new(
        name: &str,
        lower_left: [f64; 2],
        pitch: [f64; 2],
        universes: Vec<Vec<Arc<Universe>>>,
    ) -> Result<Self, CsgError> {
        if universes.is_empty() || universes[0].is_empty() {
            return Err(CsgError::EmptyLattice);
        }
        let cols = universes[0].len();
        for (row, r) in universes.iter().enumerate() {
            if r.len() != cols {
                return Err(CsgError::RaggedLattice {
                    row,
                    len: r.len(),
                    expected: cols,
                });
            }
        }
        for &p in &pitch {
            if !(p > 0.0) {
                return Err(CsgError::NonPositivePitch { pitch: p });
            }
        }
        Ok(Self {
            name: name.to_owned(),
            lower_left,
            pitch,
            universes,
        })
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-left corner of the lattice in problem coordinates.
    pub fn lower_left(&self) -> [f64; 2] {
        self.lower_left
    }

    /// Center-to-center spacing along each lattice axis.
    pub fn pitch(&self) -> [f64; 2] {
        self.pitch
    }

    /// `(rows, cols)` of the universe array.
    pub fn shape(&self) -> (usize, usize) {
        (self.universes.len(), self.universes[0].len())
    }

    /// Universe at grid position `(row, col)`, if in bounds.
    pub fn universe_at(&self, row: usize, col: usize) -> Option<&Arc<Universe>> {
        self.universes.get(row)?.get(col)
    }

    /// The full universe array, row-major.
    pub fn universes(&self) -> &[Vec<Arc<Universe>>] {
        &self.universes
    }
}
