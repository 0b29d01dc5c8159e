//! Source region derivation.

/// The axis-aligned box a particle source is seeded over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceRegion {
    /// Lower-left corner, `[x, y, z]`.
    pub lower_left: [f64; 3],
    /// Upper-right corner, `[x, y, z]`.
    pub upper_right: [f64; 3],
}

impl SourceRegion {
    /// Whether `point` lies inside the region.
    pub fn contains(&self, point: [f64; 3]) -> bool {
        (0..3).all(|i| self.lower_left[i] < point[i] && point[i] < self.upper_right[i])
    }

    /// Edge lengths along each axis.
    pub fn extent(&self) -> [f64; 3] {
        std::array::from_fn(|i| self.upper_right[i] - self.lower_left[i])
    }
}

/// Source region for a lattice of `grid_size` positions at the given
/// pitch: laterally `±(grid_size · pitch / 2)` on both axes, matching
/// the lattice's own origin-centered placement, with the supplied
/// active-fuel axial bounds.
///
/// # Panics
///
/// Panics if `grid_size` or `pitch` is not positive, or if the axial
/// bounds are not ordered — the inputs come from the component catalog,
/// so a violation is a defect, not a user error.
pub fn source_region(grid_size: usize, pitch: f64, z_lower: f64, z_upper: f64) -> SourceRegion {
    assert!(grid_size > 0, "source region needs a non-empty lattice");
    assert!(pitch > 0.0, "source region needs a positive pitch");
    assert!(z_lower < z_upper, "axial source bounds must be ordered");
    let half = grid_size as f64 * pitch / 2.0;
    SourceRegion {
        lower_left: [-half, -half, z_lower],
        upper_right: [half, half, z_upper],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_ordered_on_every_axis() {
        let region = source_region(8, 9.5, 7.5975, 66.4025);
        for i in 0..3 {
            assert!(region.lower_left[i] < region.upper_right[i]);
        }
    }

    #[test]
    fn lateral_extent_matches_the_lattice() {
        let region = source_region(8, 9.5, 0.0, 1.0);
        assert_eq!(region.lower_left[0], -38.0);
        assert_eq!(region.upper_right[1], 38.0);
        assert_eq!(region.extent()[0], 76.0);
    }

    #[test]
    #[should_panic(expected = "ordered")]
    fn inverted_axial_bounds_are_a_precondition_violation() {
        let _ = source_region(8, 9.5, 66.0, 7.0);
    }
}
