//! The lattice compiler: raw core map in, positioned geometry out.

use crate::code::ParsedCode;
use crate::error::CompileError;
use crate::normalize::{normalize, RawLatticeSpec, GRID_SIZE};
use crate::registry::UnitRegistry;
use crate::source::{source_region, SourceRegion};
use pile_csg::{rectangular_parallelepiped, Cell, Fill, RectLattice, Universe};
use pile_materials::MaterialCatalog;
use pile_units::catalog::{
    ACTIVE_BOTTOM, ACTIVE_TOP, CHANNEL_INSERTION_BOTTOM, FUEL_ELEMENTS_TOP, LATTICE_PITCH,
};
use std::sync::Arc;

/// The compiled artifact: the positioned lattice, the bounding model
/// universe wrapping it, and the derived source region.
#[derive(Clone, Debug)]
pub struct CompiledLattice {
    /// The pitched 8×8 lattice of unit universes.
    pub lattice: Arc<RectLattice>,
    /// The outer bounding universe enclosing the lattice.
    pub model: Universe,
    /// The particle-source seeding region.
    pub source_region: SourceRegion,
}

/// Compiles raw core maps into positioned, bounded lattice geometry.
///
/// The compiler owns its [`UnitRegistry`]; reusing one compiler across
/// several compiles reuses the shared unit universes. The whole run is
/// synchronous and aborts on the first error with no partial result —
/// callers fix the map and compile again from scratch.
pub struct LatticeCompiler {
    registry: UnitRegistry,
}

impl LatticeCompiler {
    /// Create a compiler over the given material catalog.
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self {
            registry: UnitRegistry::new(catalog),
        }
    }

    /// The compiler's unit registry.
    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Compile a raw core map.
    ///
    /// Normalizes the map to the canonical 8×8 grid, resolves every
    /// cell code through the registry in row-major order, assembles the
    /// unit universes into an origin-centered pitched lattice, bounds
    /// it axially from the small-channel insertion bottom to the fuel
    /// element top, and derives the source region over the active span.
    ///
    /// Errors from normalization, parsing, and resolution propagate
    /// unchanged (see [`CompileError`]).
    pub fn compile(&mut self, raw: &RawLatticeSpec) -> Result<CompiledLattice, CompileError> {
        let grid = normalize(raw)?;
        debug_assert_eq!(grid.rows().len(), GRID_SIZE);
        debug_assert!(grid.rows().iter().all(|r| r.len() == GRID_SIZE));

        self.registry.load();

        // Origin-centered placement: the lower-left corner sits at
        // -(n · pitch / 2) on both lattice axes.
        let xy_corner = GRID_SIZE as f64 * LATTICE_PITCH / 2.0;

        // Row-major: the universe array mirrors the grid exactly.
        let mut universes = Vec::with_capacity(GRID_SIZE);
        for row in grid.rows() {
            let mut row_universes = Vec::with_capacity(GRID_SIZE);
            for code in row {
                let parsed = ParsedCode::parse(code)?;
                let handle = self.registry.resolve(&parsed)?;
                row_universes.push(handle.construct());
            }
            universes.push(row_universes);
        }

        let lattice = Arc::new(RectLattice::new(
            "core lattice",
            [-xy_corner, -xy_corner],
            [LATTICE_PITCH, LATTICE_PITCH],
            universes,
        )?);

        let bounding = rectangular_parallelepiped(
            "CORE.box",
            -xy_corner,
            xy_corner,
            -xy_corner,
            xy_corner,
            CHANNEL_INSERTION_BOTTOM,
            FUEL_ELEMENTS_TOP,
        );
        let core_cell = Cell::new("core", Fill::Lattice(lattice.clone()), bounding);
        let model = Universe::new("core", vec![core_cell]);

        let source_region = source_region(GRID_SIZE, LATTICE_PITCH, ACTIVE_BOTTOM, ACTIVE_TOP);

        Ok(CompiledLattice {
            lattice,
            model,
            source_region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice;

    #[test]
    fn lattice_is_origin_centered() {
        let mut compiler = LatticeCompiler::new(MaterialCatalog::new());
        let compiled = compiler.compile(&lattice![["w"]]).unwrap();
        assert_eq!(compiled.lattice.lower_left(), [-38.0, -38.0]);
        assert_eq!(compiled.lattice.pitch(), [9.5, 9.5]);
        assert_eq!(compiled.lattice.shape(), (GRID_SIZE, GRID_SIZE));
    }

    #[test]
    fn universe_array_mirrors_the_grid() {
        let mut compiler = LatticeCompiler::new(MaterialCatalog::new());
        let compiled = compiler.compile(&lattice![[8, 4, 8]]).unwrap();
        // The single input row lands at grid row 3, columns 2..=4.
        let names: Vec<&str> = (0..GRID_SIZE)
            .map(|c| compiled.lattice.universe_at(3, c).unwrap().name())
            .collect();
        assert_eq!(
            names,
            [
                "water cell with grid plate",
                "water cell with grid plate",
                "8-tube FA",
                "4-tube FA",
                "8-tube FA",
                "water cell with grid plate",
                "water cell with grid plate",
                "water cell with grid plate",
            ]
        );
    }

    #[test]
    fn reflector_row_holds_reflector_universes() {
        let mut compiler = LatticeCompiler::new(MaterialCatalog::new());
        let compiled = compiler.compile(&lattice![["w"]]).unwrap();
        for col in 2..=5 {
            assert_eq!(
                compiled.lattice.universe_at(7, col).unwrap().name(),
                "water reflector cell"
            );
        }
    }

    #[test]
    fn repeated_codes_share_universes_across_positions() {
        let mut compiler = LatticeCompiler::new(MaterialCatalog::new());
        let compiled = compiler.compile(&lattice![[8, 8]]).unwrap();
        let a = compiled.lattice.universe_at(3, 3).unwrap();
        let b = compiled.lattice.universe_at(3, 4).unwrap();
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn reusing_the_compiler_reuses_the_registry() {
        let mut compiler = LatticeCompiler::new(MaterialCatalog::new());
        let first = compiler.compile(&lattice![["w"]]).unwrap();
        let second = compiler.compile(&lattice![["w"]]).unwrap();
        let a = first.lattice.universe_at(0, 0).unwrap();
        let b = second.lattice.universe_at(0, 0).unwrap();
        assert!(Arc::ptr_eq(a, b));
    }
}
