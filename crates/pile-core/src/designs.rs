//! Predefined core designs and the empty-lattice template.

use crate::lattice;
use crate::normalize::RawLatticeSpec;

/// The small mixed-assembly test core: alternating 8/4/6-tube
/// assemblies around a central water cell.
pub fn small_test() -> RawLatticeSpec {
    lattice![["8", "4", "8"], ["6", "w", "6"], ["4", "8", "4"]]
}

/// A predefined core design by name.
pub fn design(name: &str) -> Option<RawLatticeSpec> {
    match name {
        "small_test" => Some(small_test()),
        _ => None,
    }
}

/// The 8×8 all-water template with row/column labels in the first row
/// and column, as front ends present it for editing.
pub const EMPTY_LATTICE_TEMPLATE: [[&str; 8]; 8] = [
    ["0", "1", "2", "3", "4", "5", "6", "7"],
    ["1", "w", "w", "w", "w", "w", "w", "w"],
    ["2", "w", "w", "w", "w", "w", "w", "w"],
    ["3", "w", "w", "w", "w", "w", "w", "w"],
    ["4", "w", "w", "w", "w", "w", "w", "w"],
    ["5", "w", "w", "w", "w", "w", "w", "w"],
    ["6", "w", "w", "w", "w", "w", "w", "w"],
    ["7", "w", "w", "w", "w", "w", "w", "w"],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, GRID_SIZE};

    #[test]
    fn named_designs_resolve() {
        assert!(design("small_test").is_some());
        assert!(design("no_such_core").is_none());
    }

    #[test]
    fn small_test_normalizes_cleanly() {
        let grid = normalize(&small_test()).unwrap();
        assert_eq!(grid.rows().len(), GRID_SIZE);
        // Three rows center at rows 2..=4, three columns at 2..=4.
        assert_eq!(grid.get(2, 2), "8");
        assert_eq!(grid.get(3, 3), "w");
    }
}
