//! The component catalog: every fixed dimension of the core model.
//!
//! Lengths are centimetres. The tube profiles and axial elevations are
//! the as-built IRT-4M dimensions; builders read them from here rather
//! than carrying private copies.

/// Lattice pitch: center-to-center spacing of core positions, equal to
/// the width and height of one lattice unit.
pub const LATTICE_PITCH: f64 = 9.5;

/// One wall of a concentric fuel tube: a rounded square cross section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TubeWall {
    /// Full width/height of the rounded square.
    pub width: f64,
    /// Corner radius.
    pub corner_radius: f64,
}

/// Rounded-square profiles for fuel tubes 1–7, four walls per tube:
/// outer cladding, outer fuel, inner fuel, inner cladding.
pub const TUBE_PROFILES: [[TubeWall; 4]; 7] = [
    [
        TubeWall { width: 6.964, corner_radius: 0.932 },
        TubeWall { width: 6.87, corner_radius: 0.885 },
        TubeWall { width: 6.73, corner_radius: 0.815 },
        TubeWall { width: 6.636, corner_radius: 0.768 },
    ],
    [
        TubeWall { width: 6.274, corner_radius: 0.852 },
        TubeWall { width: 6.18, corner_radius: 0.805 },
        TubeWall { width: 6.04, corner_radius: 0.735 },
        TubeWall { width: 5.946, corner_radius: 0.688 },
    ],
    [
        TubeWall { width: 5.584, corner_radius: 0.772 },
        TubeWall { width: 5.49, corner_radius: 0.725 },
        TubeWall { width: 5.35, corner_radius: 0.655 },
        TubeWall { width: 5.256, corner_radius: 0.608 },
    ],
    [
        TubeWall { width: 4.894, corner_radius: 0.692 },
        TubeWall { width: 4.8, corner_radius: 0.645 },
        TubeWall { width: 4.66, corner_radius: 0.575 },
        TubeWall { width: 4.566, corner_radius: 0.528 },
    ],
    [
        TubeWall { width: 4.204, corner_radius: 0.612 },
        TubeWall { width: 4.11, corner_radius: 0.565 },
        TubeWall { width: 3.97, corner_radius: 0.495 },
        TubeWall { width: 3.876, corner_radius: 0.448 },
    ],
    [
        TubeWall { width: 3.514, corner_radius: 0.532 },
        TubeWall { width: 3.42, corner_radius: 0.485 },
        TubeWall { width: 3.28, corner_radius: 0.415 },
        TubeWall { width: 3.186, corner_radius: 0.368 },
    ],
    [
        TubeWall { width: 2.824, corner_radius: 0.452 },
        TubeWall { width: 2.73, corner_radius: 0.405 },
        TubeWall { width: 2.59, corner_radius: 0.335 },
        TubeWall { width: 2.496, corner_radius: 0.288 },
    ],
];

/// Cylinder radii for the innermost (8th) tube of the 8-tube assembly:
/// outer cladding, outer fuel, inner fuel, inner cladding.
pub const TUBE8_RADII: [f64; 4] = [1.067, 1.02, 0.95, 0.903];

// Axial elevations.

/// Top edge of the fuel assembly header.
pub const FUEL_HEADER_TOP: f64 = 84.7;
/// Top edge of the fuel elements.
pub const FUEL_ELEMENTS_TOP: f64 = 73.0;
/// Top edge of the active (fuel-bearing) span.
pub const ACTIVE_TOP: f64 = 66.4025;
/// Bottom edge of the active span.
pub const ACTIVE_BOTTOM: f64 = 7.5975;
/// Bottom edge of the fuel elements.
pub const FUEL_ELEMENTS_BOTTOM: f64 = 1.0;
/// Bottom edge of the fuel assembly header.
pub const FUEL_HEADER_BOTTOM: f64 = -3.5;
/// Top of the grid plate the assemblies stand on.
pub const GRID_PLATE_TOP: f64 = -3.5;
/// Bottom of the grid plate.
pub const GRID_PLATE_BOTTOM: f64 = -6.5;
/// Bottom of the small-channel insertion region below the core.
pub const CHANNEL_INSERTION_BOTTOM: f64 = -35.0;

// Control and absorber rods.

/// Rod tip elevation when fully withdrawn.
pub const ROD_FULL_OUT: f64 = FUEL_HEADER_TOP;
/// Rod tip elevation when fully inserted.
pub const ROD_FULL_IN: f64 = 0.0;
/// Outer radius of the rod guide tube.
pub const ROD_GUIDE_OUTER_R: f64 = 1.35;
/// Inner radius of the rod guide tube.
pub const ROD_GUIDE_INNER_R: f64 = 1.25;
/// Outer radius of the rod cladding.
pub const ROD_CLAD_OUTER_R: f64 = 1.1;
/// Outer radius of the cadmium annulus.
pub const ROD_ABSORBER_OUTER_R: f64 = 1.025;
/// Radius of the aluminium rod center.
pub const ROD_CENTER_R: f64 = 0.95;
/// Axial length of the conical rod tip.
pub const ROD_TIP_LENGTH: f64 = 1.2;

/// Wall thickness of vertical channel tubes.
pub const CHANNEL_WALL: f64 = 0.2;

/// The fixed component vocabulary: cell code → descriptive name.
pub const UNIT_NAMES: [(&str, &str); 14] = [
    ("w", "water cell with grid plate"),
    ("wrc", "water reflector cell"),
    ("8", "8-tube FA"),
    ("6", "6-tube FA"),
    ("4", "4-tube FA"),
    ("O", "6-tube FA with fully withdrawn control rod"),
    ("X", "6-tube FA with fully inserted control rod"),
    ("d", "fuel dummy"),
    ("rt", "dummy with rabbit tube"),
    ("v90", "vertical channel (90 mm)"),
    ("v56", "vertical channel (56 mm)"),
    ("v30", "vertical channel (30 mm)"),
    ("v25", "vertical channel (25 mm)"),
    ("v12", "vertical channel (12 mm)"),
];

/// Codes that denote plain fuel assemblies.
pub const FUEL_ASSEMBLY_CODES: [&str; 3] = ["8", "6", "4"];

/// Descriptive name for a component code, if the code is in the
/// vocabulary.
pub fn unit_name(code: &str) -> Option<&'static str> {
    UNIT_NAMES
        .iter()
        .find(|&&(c, _)| c == code)
        .map(|&(_, name)| name)
}

/// Whether `code` denotes a plain fuel assembly.
pub fn is_fuel_assembly(code: &str) -> bool {
    FUEL_ASSEMBLY_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_lookup() {
        assert_eq!(unit_name("8"), Some("8-tube FA"));
        assert_eq!(unit_name("wrc"), Some("water reflector cell"));
        assert_eq!(unit_name("Q"), None);
    }

    #[test]
    fn fuel_assembly_codes_are_a_subset_of_the_vocabulary() {
        for code in FUEL_ASSEMBLY_CODES {
            assert!(unit_name(code).is_some());
        }
        assert!(is_fuel_assembly("6"));
        assert!(!is_fuel_assembly("w"));
        assert!(!is_fuel_assembly("O"));
    }

    #[test]
    fn tube_profiles_nest_strictly() {
        // Each wall is narrower than the one outside it, across all
        // tubes — the concentric construction depends on it.
        let mut prev = f64::INFINITY;
        for tube in &TUBE_PROFILES {
            for wall in tube {
                assert!(wall.width < prev);
                prev = wall.width;
            }
        }
        assert!(TUBE8_RADII[0] * 2.0 < prev);
    }

    #[test]
    fn axial_elevations_are_ordered() {
        assert!(FUEL_HEADER_TOP > FUEL_ELEMENTS_TOP);
        assert!(FUEL_ELEMENTS_TOP > ACTIVE_TOP);
        assert!(ACTIVE_TOP > ACTIVE_BOTTOM);
        assert!(ACTIVE_BOTTOM > FUEL_ELEMENTS_BOTTOM);
        assert!(FUEL_ELEMENTS_BOTTOM > FUEL_HEADER_BOTTOM);
        assert!(GRID_PLATE_TOP > GRID_PLATE_BOTTOM);
        assert!(GRID_PLATE_BOTTOM > CHANNEL_INSERTION_BOTTOM);
    }
}
