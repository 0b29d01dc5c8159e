//! IRT-4M fuel assemblies.
//!
//! An assembly is a stack of concentric rounded-square fuel tubes
//! standing in a water-filled lattice position. Over the active span
//! each tube wall is cladding / fuel / fuel / cladding from the outside
//! in; above and below the active span the whole wall is cladding. The
//! 8-tube type closes with a cylindrical innermost tube.

use crate::catalog::{
    ACTIVE_BOTTOM, ACTIVE_TOP, FUEL_ELEMENTS_BOTTOM, FUEL_ELEMENTS_TOP, LATTICE_PITCH,
    TUBE8_RADII, TUBE_PROFILES,
};
use crate::unit::LatticeUnit;
use pile_csg::{BoundaryKind, Cell, Fill, HalfSpace, MaterialHandle, Region, Surface, Universe};
use pile_materials::MaterialCatalog;
use std::sync::Arc;

/// Number of fuel tubes in an assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TubeCount {
    /// 4-tube assembly.
    Four,
    /// 6-tube assembly.
    Six,
    /// 8-tube assembly.
    Eight,
}

impl TubeCount {
    /// The tube count as a number.
    pub fn count(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }

    /// Tube count for a fuel-assembly cell code, if it is one.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "4" => Some(Self::Four),
            "6" => Some(Self::Six),
            "8" => Some(Self::Eight),
            _ => None,
        }
    }
}

/// How the lateral and axial faces of a standalone assembly are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryTreatment {
    /// Reflective faces: an infinite array of this assembly.
    Reflective,
    /// Transmission faces: the assembly sits in surrounding water.
    Water,
}

/// The axial planes every assembly-like unit is built between.
pub(crate) struct AxialSpans {
    /// Top of the fuel elements.
    pub top: Arc<Surface>,
    /// Top of the active span.
    pub active_top: Arc<Surface>,
    /// Bottom of the active span.
    pub active_bottom: Arc<Surface>,
    /// Bottom of the fuel elements.
    pub bottom: Arc<Surface>,
}

impl AxialSpans {
    /// Build the plane set, reflective on the outer pair if requested.
    pub fn new(reflective: bool) -> Self {
        let boundary = if reflective {
            BoundaryKind::Reflective
        } else {
            BoundaryKind::Transmission
        };
        Self {
            top: Arc::new(
                Surface::z_plane("fuel_elements.top", FUEL_ELEMENTS_TOP).with_boundary(boundary),
            ),
            active_top: Arc::new(Surface::z_plane("active.top", ACTIVE_TOP)),
            active_bottom: Arc::new(Surface::z_plane("active.bottom", ACTIVE_BOTTOM)),
            bottom: Arc::new(
                Surface::z_plane("fuel_elements.bottom", FUEL_ELEMENTS_BOTTOM)
                    .with_boundary(boundary),
            ),
        }
    }
}

/// The slab between two z planes.
pub(crate) fn between(upper: &Arc<Surface>, lower: &Arc<Surface>) -> Region {
    upper.below() & lower.above()
}

/// The four wall surfaces of fuel tube `i` (1-based): outer cladding,
/// outer fuel, inner fuel, inner cladding. Tubes 1–7 are rounded
/// squares; tube 8 is cylindrical.
pub(crate) fn tube_surfaces(i: usize) -> [Arc<Surface>; 4] {
    std::array::from_fn(|j| {
        let name = format!("{i}FT.{}", j + 1);
        let surface = if i <= 7 {
            let wall = TUBE_PROFILES[i - 1][j];
            Surface::rounded_rect_prism(&name, wall.width, wall.width, wall.corner_radius)
        } else {
            Surface::z_cylinder(&name, TUBE8_RADII[j])
        };
        Arc::new(surface)
    })
}

/// Cells for concentric fuel tubes and the water around and between
/// them. The central bore (inside the innermost tube's inner wall) is
/// left to the caller: plain assemblies fill it with water, rodded
/// assemblies with the rod guide.
pub(crate) fn fuel_tube_cells(
    walls: &[[Arc<Surface>; 4]],
    boundary: &Arc<Surface>,
    spans: &AxialSpans,
    water: &MaterialHandle,
    fuel: &MaterialHandle,
    cladding: &MaterialHandle,
) -> Vec<Cell> {
    let mut cells = Vec::new();
    let spans_3 = [
        ("top", between(&spans.top, &spans.active_top)),
        ("mid", between(&spans.active_top, &spans.active_bottom)),
        ("bot", between(&spans.active_bottom, &spans.bottom)),
    ];

    // Water between the outermost tube and the lattice position wall.
    for (label, span) in &spans_3 {
        cells.push(Cell::new(
            &format!("out_{label}"),
            Fill::Material(water.clone()),
            boundary.inside() & walls[0][0].outside() & span.clone(),
        ));
    }
    // Water closing the universe above and below the fuel elements.
    cells.push(Cell::new(
        "out_above",
        Fill::Material(water.clone()),
        spans.top.above(),
    ));
    cells.push(Cell::new(
        "out_below",
        Fill::Material(water.clone()),
        spans.bottom.below(),
    ));

    for (i, w) in walls.iter().enumerate() {
        let tube = i + 1;
        // Above and below the active span the whole wall is cladding.
        cells.push(Cell::new(
            &format!("top_c_{tube}"),
            Fill::Material(cladding.clone()),
            w[0].inside() & w[3].outside() & between(&spans.top, &spans.active_top),
        ));
        cells.push(Cell::new(
            &format!("bot_c_{tube}"),
            Fill::Material(cladding.clone()),
            w[0].inside() & w[3].outside() & between(&spans.active_bottom, &spans.bottom),
        ));
        // Over the active span: cladding / fuel / cladding.
        let mid = between(&spans.active_top, &spans.active_bottom);
        cells.push(Cell::new(
            &format!("mid_c_{tube}"),
            Fill::Material(cladding.clone()),
            w[0].inside() & w[1].outside() & mid.clone(),
        ));
        cells.push(Cell::new(
            &format!("mid_f_{tube}"),
            Fill::Material(fuel.clone()),
            w[1].inside() & w[2].outside() & mid.clone(),
        ));
        cells.push(Cell::new(
            &format!("mid_i_{tube}"),
            Fill::Material(cladding.clone()),
            w[2].inside() & w[3].outside() & mid,
        ));
        // Water gap to the next tube inward.
        if i + 1 < walls.len() {
            let next_outer = &walls[i + 1][0];
            for (label, span) in &spans_3 {
                cells.push(Cell::new(
                    &format!("{label}_w_{tube}"),
                    Fill::Material(water.clone()),
                    w[3].inside() & next_outer.outside() & span.clone(),
                ));
            }
        }
    }
    cells
}

/// A plain IRT-4M fuel assembly of 4, 6, or 8 tubes.
pub struct IrtAssembly {
    tubes: TubeCount,
    boundary: BoundaryTreatment,
    water: MaterialHandle,
    fuel: MaterialHandle,
    cladding: MaterialHandle,
}

impl IrtAssembly {
    /// Create an assembly builder with the given tube count and
    /// boundary treatment, drawing materials from `catalog`.
    pub fn new(tubes: TubeCount, catalog: &MaterialCatalog, boundary: BoundaryTreatment) -> Self {
        Self {
            tubes,
            boundary,
            water: catalog.water.handle(),
            fuel: catalog.fuel.handle(),
            cladding: catalog.cladding.handle(),
        }
    }

    /// The assembly's tube count.
    pub fn tubes(&self) -> TubeCount {
        self.tubes
    }
}

impl LatticeUnit for IrtAssembly {
    fn identify(&self) -> String {
        format!("{}-tube FA", self.tubes.count())
    }

    fn construct(&self) -> Universe {
        let n = self.tubes.count();
        let reflective = self.boundary == BoundaryTreatment::Reflective;

        let boundary = Surface::rect_prism("boundary_XY", LATTICE_PITCH, LATTICE_PITCH);
        let boundary = Arc::new(if reflective {
            boundary.with_boundary(BoundaryKind::Reflective)
        } else {
            boundary
        });
        let spans = AxialSpans::new(reflective);
        let walls: Vec<[Arc<Surface>; 4]> = (1..=n).map(tube_surfaces).collect();

        let mut cells = fuel_tube_cells(
            &walls,
            &boundary,
            &spans,
            &self.water,
            &self.fuel,
            &self.cladding,
        );
        // Water core inside the innermost tube.
        cells.push(Cell::new(
            "bore",
            Fill::Material(self.water.clone()),
            walls[n - 1][3].inside() & between(&spans.top, &spans.bottom),
        ));
        Universe::new(&self.identify(), cells)
    }
}
