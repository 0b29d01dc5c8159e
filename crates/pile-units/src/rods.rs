//! Absorber rods and rodded fuel assemblies.
//!
//! The control-rod states `O` (fully withdrawn) and `X` (fully
//! inserted) and the variable-height `AR` codes all resolve to a 6-tube
//! assembly whose central bore carries a cadmium absorber rod; only the
//! rod tip elevation differs.

use crate::assembly::{between, fuel_tube_cells, tube_surfaces, AxialSpans};
use crate::catalog::{
    FUEL_HEADER_TOP, LATTICE_PITCH, ROD_ABSORBER_OUTER_R, ROD_CENTER_R, ROD_CLAD_OUTER_R,
    ROD_FULL_IN, ROD_FULL_OUT, ROD_GUIDE_INNER_R, ROD_GUIDE_OUTER_R, ROD_TIP_LENGTH,
};
use crate::unit::LatticeUnit;
use pile_csg::{Cell, Fill, HalfSpace, MaterialHandle, Surface, Universe};
use pile_materials::MaterialCatalog;
use std::sync::Arc;

/// Material handles an absorber rod needs.
#[derive(Clone)]
struct RodMaterials {
    water: MaterialHandle,
    cladding: MaterialHandle,
    absorber: MaterialHandle,
    aluminium: MaterialHandle,
}

impl RodMaterials {
    fn from_catalog(catalog: &MaterialCatalog) -> Self {
        Self {
            water: catalog.water.handle(),
            cladding: catalog.cladding.handle(),
            absorber: catalog.absorber.handle(),
            aluminium: catalog.grid.handle(),
        }
    }
}

/// Cells of the rod stack inside a guide tube, for a rod whose tip sits
/// at elevation `height`.
///
/// From the tip upward: a conical cladding tip over [`ROD_TIP_LENGTH`],
/// then the rod body — cladding shell, cadmium annulus, aluminium
/// center — up to the header top. Water fills the guide below the tip,
/// around the tip cone, in the rod/guide gap, and above the header.
fn rod_interior_cells(height: f64, guide_inner: &Arc<Surface>, m: &RodMaterials) -> Vec<Cell> {
    let tip = Arc::new(Surface::z_plane("ROD.tip", height));
    let shoulder = Arc::new(Surface::z_plane("ROD.shoulder", height + ROD_TIP_LENGTH));
    let rod_top = Arc::new(Surface::z_plane("ROD.top", FUEL_HEADER_TOP));
    let tip_cone = Arc::new(Surface::z_cone(
        "ROD.cone",
        height,
        (ROD_CLAD_OUTER_R / ROD_TIP_LENGTH).powi(2),
        true,
    ));
    let clad_outer = Arc::new(Surface::z_cylinder("ROD.clad", ROD_CLAD_OUTER_R));
    let absorber_outer = Arc::new(Surface::z_cylinder("ROD.abs", ROD_ABSORBER_OUTER_R));
    let center = Arc::new(Surface::z_cylinder("ROD.center", ROD_CENTER_R));

    let body = between(&rod_top, &shoulder);
    vec![
        Cell::new(
            "rod_tip",
            Fill::Material(m.cladding.clone()),
            tip_cone.inside() & between(&shoulder, &tip),
        ),
        Cell::new(
            "rod_tip_w",
            Fill::Material(m.water.clone()),
            guide_inner.inside() & tip_cone.outside() & between(&shoulder, &tip),
        ),
        Cell::new(
            "rod_clad",
            Fill::Material(m.cladding.clone()),
            clad_outer.inside() & absorber_outer.outside() & body.clone(),
        ),
        Cell::new(
            "rod_abs",
            Fill::Material(m.absorber.clone()),
            absorber_outer.inside() & center.outside() & body.clone(),
        ),
        Cell::new(
            "rod_center",
            Fill::Material(m.aluminium.clone()),
            center.inside() & body.clone(),
        ),
        Cell::new(
            "rod_gap",
            Fill::Material(m.water.clone()),
            guide_inner.inside() & clad_outer.outside() & body,
        ),
        Cell::new(
            "rod_below",
            Fill::Material(m.water.clone()),
            guide_inner.inside() & tip.below(),
        ),
        Cell::new(
            "rod_above",
            Fill::Material(m.water.clone()),
            guide_inner.inside() & rod_top.above(),
        ),
    ]
}

/// A bare cadmium absorber rod in its guide tube, standing in water.
pub struct AbsorberRod {
    height: f64,
    materials: RodMaterials,
}

impl AbsorberRod {
    /// Create a rod builder with its tip at elevation `height`.
    pub fn new(catalog: &MaterialCatalog, height: f64) -> Self {
        Self {
            height,
            materials: RodMaterials::from_catalog(catalog),
        }
    }

    /// The rod tip elevation.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl LatticeUnit for AbsorberRod {
    fn identify(&self) -> String {
        "cadmium absorption rod".to_owned()
    }

    fn construct(&self) -> Universe {
        let guide_outer = Arc::new(Surface::z_cylinder("ROD.guide1", ROD_GUIDE_OUTER_R));
        let guide_inner = Arc::new(Surface::z_cylinder("ROD.guide2", ROD_GUIDE_INNER_R));
        let mut cells = vec![
            Cell::new(
                "guide",
                Fill::Material(self.materials.aluminium.clone()),
                guide_outer.inside() & guide_inner.outside(),
            ),
            Cell::new(
                "pool",
                Fill::Material(self.materials.water.clone()),
                guide_outer.outside(),
            ),
        ];
        cells.extend(rod_interior_cells(
            self.height,
            &guide_inner,
            &self.materials,
        ));
        Universe::new(&self.identify(), cells)
    }
}

/// A 6-tube fuel assembly with an absorber rod in its central bore.
pub struct RoddedAssembly {
    height: f64,
    fuel: MaterialHandle,
    materials: RodMaterials,
}

impl RoddedAssembly {
    /// Create a rodded-assembly builder with the rod tip at `height`.
    pub fn new(catalog: &MaterialCatalog, height: f64) -> Self {
        Self {
            height,
            fuel: catalog.fuel.handle(),
            materials: RodMaterials::from_catalog(catalog),
        }
    }

    /// Fully withdrawn control rod (code `O`).
    pub fn withdrawn(catalog: &MaterialCatalog) -> Self {
        Self::new(catalog, ROD_FULL_OUT)
    }

    /// Fully inserted control rod (code `X`).
    pub fn inserted(catalog: &MaterialCatalog) -> Self {
        Self::new(catalog, ROD_FULL_IN)
    }

    /// The rod tip elevation.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl LatticeUnit for RoddedAssembly {
    fn identify(&self) -> String {
        if self.height >= ROD_FULL_OUT {
            "6-tube FA with fully withdrawn control rod".to_owned()
        } else if self.height <= ROD_FULL_IN {
            "6-tube FA with fully inserted control rod".to_owned()
        } else {
            format!("6-tube FA with absorber rod at {} cm", self.height)
        }
    }

    fn construct(&self) -> Universe {
        let n = 6;
        let boundary = Arc::new(Surface::rect_prism(
            "boundary_XY",
            LATTICE_PITCH,
            LATTICE_PITCH,
        ));
        let spans = AxialSpans::new(false);
        let walls: Vec<[Arc<Surface>; 4]> = (1..=n).map(tube_surfaces).collect();

        let mut cells = fuel_tube_cells(
            &walls,
            &boundary,
            &spans,
            &self.materials.water,
            &self.fuel,
            &self.materials.cladding,
        );

        // The central bore carries the rod guide instead of plain water.
        let guide_outer = Arc::new(Surface::z_cylinder("ROD.guide1", ROD_GUIDE_OUTER_R));
        let guide_inner = Arc::new(Surface::z_cylinder("ROD.guide2", ROD_GUIDE_INNER_R));
        cells.push(Cell::new(
            "bore_w",
            Fill::Material(self.materials.water.clone()),
            walls[n - 1][3].inside() & guide_outer.outside() & between(&spans.top, &spans.bottom),
        ));
        cells.push(Cell::new(
            "guide",
            Fill::Material(self.materials.aluminium.clone()),
            guide_outer.inside() & guide_inner.outside(),
        ));
        cells.extend(rod_interior_cells(
            self.height,
            &guide_inner,
            &self.materials,
        ));
        Universe::new(&self.identify(), cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ACTIVE_BOTTOM, ACTIVE_TOP};

    #[test]
    fn rod_state_names() {
        let catalog = MaterialCatalog::new();
        assert_eq!(
            RoddedAssembly::withdrawn(&catalog).identify(),
            "6-tube FA with fully withdrawn control rod"
        );
        assert_eq!(
            RoddedAssembly::inserted(&catalog).identify(),
            "6-tube FA with fully inserted control rod"
        );
        assert_eq!(
            RoddedAssembly::new(&catalog, 25.5).identify(),
            "6-tube FA with absorber rod at 25.5 cm"
        );
    }

    #[test]
    fn absorber_sits_above_the_tip_and_water_below() {
        let catalog = MaterialCatalog::new();
        let u = RoddedAssembly::new(&catalog, 30.0).construct();
        let r = (ROD_ABSORBER_OUTER_R + ROD_CENTER_R) / 2.0;
        let above = u
            .find_cell([r, 0.0, 30.0 + ROD_TIP_LENGTH + 5.0])
            .expect("rod body uncovered");
        assert_eq!(above.name(), "rod_abs");
        let below = u.find_cell([r, 0.0, 10.0]).expect("guide bore uncovered");
        assert_eq!(below.name(), "rod_below");
    }

    #[test]
    fn fully_inserted_rod_absorbs_at_core_midplane() {
        let catalog = MaterialCatalog::new();
        let u = RoddedAssembly::inserted(&catalog).construct();
        let r = (ROD_ABSORBER_OUTER_R + ROD_CENTER_R) / 2.0;
        let mid_z = (ACTIVE_TOP + ACTIVE_BOTTOM) / 2.0;
        let cell = u.find_cell([r, 0.0, mid_z]).expect("midplane uncovered");
        assert_eq!(cell.name(), "rod_abs");
    }

    #[test]
    fn bare_rod_universe_covers_pool_guide_and_stack() {
        let catalog = MaterialCatalog::new();
        let u = AbsorberRod::new(&catalog, 15.0).construct();
        assert_eq!(u.find_cell([3.0, 0.0, 40.0]).map(Cell::name), Some("pool"));
        let guide_r = (ROD_GUIDE_OUTER_R + ROD_GUIDE_INNER_R) / 2.0;
        assert_eq!(
            u.find_cell([guide_r, 0.0, 40.0]).map(Cell::name),
            Some("guide")
        );
        assert_eq!(
            u.find_cell([0.0, 0.0, 5.0]).map(Cell::name),
            Some("rod_below")
        );
    }
}
