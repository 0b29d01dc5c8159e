//! Non-fuel lattice units: water cells, dummies, and vertical channels.

use crate::catalog::{
    CHANNEL_WALL, FUEL_ELEMENTS_BOTTOM, FUEL_ELEMENTS_TOP, GRID_PLATE_BOTTOM, GRID_PLATE_TOP,
    TUBE_PROFILES,
};
use crate::unit::LatticeUnit;
use pile_csg::{Cell, Fill, HalfSpace, MaterialHandle, Surface, Universe};
use pile_materials::MaterialCatalog;
use std::sync::Arc;

/// An empty lattice position: pool water over the grid plate (code `w`).
pub struct WaterCell {
    water: MaterialHandle,
    grid: MaterialHandle,
}

impl WaterCell {
    /// Create a water-cell builder.
    pub fn new(catalog: &MaterialCatalog) -> Self {
        Self {
            water: catalog.water.handle(),
            grid: catalog.grid.handle(),
        }
    }
}

impl LatticeUnit for WaterCell {
    fn identify(&self) -> String {
        "water cell with grid plate".to_owned()
    }

    fn construct(&self) -> Universe {
        let plate_top = Arc::new(Surface::z_plane("GRD.top", GRID_PLATE_TOP));
        let plate_bottom = Arc::new(Surface::z_plane("GRD.bottom", GRID_PLATE_BOTTOM));
        let cells = vec![
            Cell::new("above", Fill::Material(self.water.clone()), plate_top.above()),
            Cell::new(
                "plate",
                Fill::Material(self.grid.clone()),
                plate_top.below() & plate_bottom.above(),
            ),
            Cell::new(
                "below",
                Fill::Material(self.water.clone()),
                plate_bottom.below(),
            ),
        ];
        Universe::new(&self.identify(), cells)
    }
}

/// The fixed water reflector position at the bottom of the grid
/// (code `wrc`): water with nothing in it.
pub struct ReflectorCell {
    water: MaterialHandle,
}

impl ReflectorCell {
    /// Create a reflector-cell builder.
    pub fn new(catalog: &MaterialCatalog) -> Self {
        Self {
            water: catalog.water.handle(),
        }
    }
}

impl LatticeUnit for ReflectorCell {
    fn identify(&self) -> String {
        "water reflector cell".to_owned()
    }

    fn construct(&self) -> Universe {
        let cells = vec![Cell::unbounded(
            "water",
            Fill::Material(self.water.clone()),
        )];
        Universe::new(&self.identify(), cells)
    }
}

/// An aluminium fuel dummy (code `d`): the outermost tube profile with
/// no fuel in it, used to fill a position mechanically.
pub struct FuelDummy {
    water: MaterialHandle,
    dummy: MaterialHandle,
}

impl FuelDummy {
    /// Create a fuel-dummy builder.
    pub fn new(catalog: &MaterialCatalog) -> Self {
        Self {
            water: catalog.water.handle(),
            dummy: catalog.dummy.handle(),
        }
    }
}

/// Shell and pool cells shared by the dummy variants: the outermost
/// tube profile in dummy aluminium between the fuel element planes.
/// Returns the cells, the inner wall surface, and the axial slab region
/// the caller's bore cells are clipped to.
fn dummy_shell_cells(
    water: &MaterialHandle,
    dummy: &MaterialHandle,
) -> (Vec<Cell>, Arc<Surface>, pile_csg::Region) {
    let outer_wall = TUBE_PROFILES[0][0];
    let inner_wall = TUBE_PROFILES[0][3];
    let outer = Arc::new(Surface::rounded_rect_prism(
        "DMY.1",
        outer_wall.width,
        outer_wall.width,
        outer_wall.corner_radius,
    ));
    let inner = Arc::new(Surface::rounded_rect_prism(
        "DMY.2",
        inner_wall.width,
        inner_wall.width,
        inner_wall.corner_radius,
    ));
    let top = Arc::new(Surface::z_plane("DMY.top", FUEL_ELEMENTS_TOP));
    let bottom = Arc::new(Surface::z_plane("DMY.bottom", FUEL_ELEMENTS_BOTTOM));

    let slab = top.below() & bottom.above();
    let cells = vec![
        Cell::new(
            "shell",
            Fill::Material(dummy.clone()),
            outer.inside() & inner.outside() & slab.clone(),
        ),
        Cell::new(
            "pool",
            Fill::Material(water.clone()),
            outer.outside() | top.above() | bottom.below(),
        ),
    ];
    (cells, inner, slab)
}

impl LatticeUnit for FuelDummy {
    fn identify(&self) -> String {
        "fuel dummy".to_owned()
    }

    fn construct(&self) -> Universe {
        let (mut cells, inner, slab) = dummy_shell_cells(&self.water, &self.dummy);
        cells.push(Cell::new(
            "bore",
            Fill::Material(self.water.clone()),
            inner.inside() & slab,
        ));
        Universe::new(&self.identify(), cells)
    }
}

/// A fuel dummy carrying the pneumatic rabbit tube (code `rt`) used for
/// sample irradiation.
pub struct RabbitTubeDummy {
    water: MaterialHandle,
    dummy: MaterialHandle,
    tube: MaterialHandle,
}

/// Rabbit tube outer radius.
const RABBIT_TUBE_OUTER_R: f64 = 1.1;
/// Rabbit tube inner radius.
const RABBIT_TUBE_INNER_R: f64 = 0.95;

impl RabbitTubeDummy {
    /// Create a rabbit-tube builder.
    pub fn new(catalog: &MaterialCatalog) -> Self {
        Self {
            water: catalog.water.handle(),
            dummy: catalog.dummy.handle(),
            tube: catalog.grid.handle(),
        }
    }
}

impl LatticeUnit for RabbitTubeDummy {
    fn identify(&self) -> String {
        "dummy with rabbit tube".to_owned()
    }

    fn construct(&self) -> Universe {
        let (mut cells, inner, slab) = dummy_shell_cells(&self.water, &self.dummy);
        let tube_outer = Arc::new(Surface::z_cylinder("RBT.1", RABBIT_TUBE_OUTER_R));
        let tube_inner = Arc::new(Surface::z_cylinder("RBT.2", RABBIT_TUBE_INNER_R));

        cells.push(Cell::new(
            "bore_w",
            Fill::Material(self.water.clone()),
            inner.inside() & tube_outer.outside() & slab.clone(),
        ));
        cells.push(Cell::new(
            "tube",
            Fill::Material(self.tube.clone()),
            tube_outer.inside() & tube_inner.outside() & slab.clone(),
        ));
        // The transfer channel itself is dry.
        cells.push(Cell::new("channel", Fill::Void, tube_inner.inside() & slab));
        Universe::new(&self.identify(), cells)
    }
}

/// A vertical irradiation channel (codes `v90` … `v12`): a dry
/// aluminium tube of the given bore standing in water.
pub struct VerticalChannel {
    bore_mm: u32,
    water: MaterialHandle,
    wall: MaterialHandle,
}

impl VerticalChannel {
    /// Create a channel builder with the given bore diameter in mm.
    pub fn new(catalog: &MaterialCatalog, bore_mm: u32) -> Self {
        Self {
            bore_mm,
            water: catalog.water.handle(),
            wall: catalog.grid.handle(),
        }
    }

    /// Bore diameter in millimetres.
    pub fn bore_mm(&self) -> u32 {
        self.bore_mm
    }
}

impl LatticeUnit for VerticalChannel {
    fn identify(&self) -> String {
        format!("vertical channel ({} mm)", self.bore_mm)
    }

    fn construct(&self) -> Universe {
        // Bore diameter in mm → inner radius in cm.
        let inner_r = f64::from(self.bore_mm) / 20.0;
        let inner = Arc::new(Surface::z_cylinder("VCH.2", inner_r));
        let outer = Arc::new(Surface::z_cylinder("VCH.1", inner_r + CHANNEL_WALL));
        let cells = vec![
            Cell::new("pool", Fill::Material(self.water.clone()), outer.outside()),
            Cell::new(
                "wall",
                Fill::Material(self.wall.clone()),
                outer.inside() & inner.outside(),
            ),
            Cell::new("channel", Fill::Void, inner.inside()),
        ];
        Universe::new(&self.identify(), cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_cell_layers() {
        let catalog = MaterialCatalog::new();
        let u = WaterCell::new(&catalog).construct();
        assert_eq!(u.find_cell([0.0, 0.0, 10.0]).map(Cell::name), Some("above"));
        assert_eq!(u.find_cell([0.0, 0.0, -5.0]).map(Cell::name), Some("plate"));
        assert_eq!(
            u.find_cell([0.0, 0.0, -20.0]).map(Cell::name),
            Some("below")
        );
    }

    #[test]
    fn reflector_cell_is_all_water() {
        let catalog = MaterialCatalog::new();
        let u = ReflectorCell::new(&catalog).construct();
        assert_eq!(u.cells().len(), 1);
        assert!(u.find_cell([100.0, -100.0, 0.0]).is_some());
    }

    #[test]
    fn dummy_shell_surrounds_a_water_bore() {
        let catalog = MaterialCatalog::new();
        let u = FuelDummy::new(&catalog).construct();
        let mid_z = 30.0;
        // 1FT.1 half-width 3.482, 1FT.4 half-width 3.318.
        assert_eq!(
            u.find_cell([3.4, 0.0, mid_z]).map(Cell::name),
            Some("shell")
        );
        assert_eq!(u.find_cell([0.0, 0.0, mid_z]).map(Cell::name), Some("bore"));
        assert_eq!(u.find_cell([4.0, 0.0, mid_z]).map(Cell::name), Some("pool"));
    }

    #[test]
    fn rabbit_tube_channel_is_void() {
        let catalog = MaterialCatalog::new();
        let u = RabbitTubeDummy::new(&catalog).construct();
        let channel = u.find_cell([0.0, 0.0, 30.0]).expect("channel uncovered");
        assert_eq!(channel.name(), "channel");
        assert!(matches!(channel.fill(), Fill::Void));
    }

    #[test]
    fn channel_radius_follows_the_code() {
        let catalog = MaterialCatalog::new();
        let u = VerticalChannel::new(&catalog, 90).construct();
        // 90 mm bore → 4.5 cm inner radius.
        assert_eq!(
            u.find_cell([4.4, 0.0, 0.0]).map(Cell::name),
            Some("channel")
        );
        assert_eq!(u.find_cell([4.6, 0.0, 0.0]).map(Cell::name), Some("wall"));
        assert_eq!(u.find_cell([5.0, 0.0, 0.0]).map(Cell::name), Some("pool"));
    }
}
