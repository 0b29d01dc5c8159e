//! Grid normalization: irregular user input to the canonical 8×8 grid.
//!
//! Users write core maps as small, possibly ragged grids of codes,
//! mixing integer shorthand (`8`) with strings (`"w"`, `"AR10.5"`).
//! [`normalize`] coerces every code to its string form, pads rows and
//! columns with water up to the fixed grid size, and stamps the water
//! reflector insert into the bottom row.

use crate::error::NormalizeError;
use smallvec::SmallVec;
use std::ops::RangeInclusive;

/// Canonical grid edge length.
pub const GRID_SIZE: usize = 8;

/// The code padding fills empty positions with.
pub const WATER_CODE: &str = "w";

/// The fixed water-reflector code stamped into the bottom row.
pub const REFLECTOR_CODE: &str = "wrc";

/// Bottom-row columns occupied by the water reflector insert.
pub const REFLECTOR_COLUMNS: RangeInclusive<usize> = 2..=5;

/// One cell code as the caller wrote it: integer shorthand for assembly
/// types, or a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawCode {
    /// Integer shorthand; normalizes to its decimal string form.
    Num(i64),
    /// A string code, passed through unchanged.
    Text(String),
}

impl RawCode {
    /// The code's canonical string form.
    pub fn coerce(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for RawCode {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for RawCode {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for RawCode {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A user-written core map: ordered rows of cell codes. Rows may be
/// ragged; each must hold at most [`GRID_SIZE`] codes.
pub type RawLatticeSpec = Vec<Vec<RawCode>>;

/// Build a [`RawLatticeSpec`] from bracketed rows of mixed integer and
/// string codes.
///
/// ```
/// use pile_core::lattice;
///
/// let spec = lattice![[8, 4, 8], [6, "w", 6], [4, 8, 4]];
/// assert_eq!(spec.len(), 3);
/// ```
#[macro_export]
macro_rules! lattice {
    ($([$($code:expr),* $(,)?]),* $(,)?) => {
        vec![$(vec![$($crate::normalize::RawCode::from($code)),*]),*]
    };
}

/// One normalized grid row: exactly [`GRID_SIZE`] string codes, stored
/// inline.
pub type Row = SmallVec<[String; GRID_SIZE]>;

/// The canonical 8×8 grid of string codes.
///
/// Every value of this type came out of [`normalize`] and therefore
/// holds exactly [`GRID_SIZE`] rows of [`GRID_SIZE`] codes, with the
/// reflector insert in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedGrid {
    rows: Vec<Row>,
}

impl NormalizedGrid {
    /// The grid rows, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The code at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of the 8×8 range.
    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.rows[row][col]
    }
}

/// Normalize a user-written core map to the canonical 8×8 grid.
///
/// 1. Integer codes coerce to their decimal string form.
/// 2. Rows shorter than [`GRID_SIZE`] pad with [`WATER_CODE`] by the
///    parity rule: while the remaining pad count is even, insert on the
///    left; while odd, on the right; the count decrements after each
///    insertion. The relative order of the original codes is preserved.
/// 3. If fewer than [`GRID_SIZE`] rows are present, whole water rows
///    pad the grid by the same rule (even → above, odd → below).
/// 4. The bottom row's [`REFLECTOR_COLUMNS`] are overwritten with
///    [`REFLECTOR_CODE`], whatever the caller put there.
///
/// The parity rule is the observed reference behavior, not symmetric
/// centering: a deficit of 3 inserts once on the left and twice on the
/// right. Downstream region placement depends on this exact layout.
///
/// Fails with [`NormalizeError::RowTooLong`] when a row has more than
/// [`GRID_SIZE`] codes, and with [`NormalizeError::ReformatInvariant`]
/// when the row count cannot be brought to exactly [`GRID_SIZE`] (more
/// than 8 rows of input).
pub fn normalize(raw: &RawLatticeSpec) -> Result<NormalizedGrid, NormalizeError> {
    let mut rows: Vec<Row> = Vec::with_capacity(GRID_SIZE);
    for (index, raw_row) in raw.iter().enumerate() {
        if raw_row.len() > GRID_SIZE {
            return Err(NormalizeError::RowTooLong {
                row: index,
                len: raw_row.len(),
            });
        }
        let mut row: Row = raw_row.iter().map(RawCode::coerce).collect();
        let mut deficit = GRID_SIZE - row.len();
        while deficit > 0 {
            if deficit % 2 == 0 {
                row.insert(0, WATER_CODE.to_owned());
            } else {
                row.push(WATER_CODE.to_owned());
            }
            deficit -= 1;
        }
        rows.push(row);
    }

    let mut deficit = GRID_SIZE.saturating_sub(rows.len());
    while deficit > 0 {
        let water_row: Row = (0..GRID_SIZE).map(|_| WATER_CODE.to_owned()).collect();
        if deficit % 2 == 0 {
            rows.insert(0, water_row);
        } else {
            rows.push(water_row);
        }
        deficit -= 1;
    }

    if rows.len() != GRID_SIZE {
        return Err(NormalizeError::ReformatInvariant { rows: rows.len() });
    }

    if let Some(bottom) = rows.last_mut() {
        for col in REFLECTOR_COLUMNS {
            bottom[col] = REFLECTOR_CODE.to_owned();
        }
    }

    Ok(NormalizedGrid { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_of(rows: &[&[&str]]) -> RawLatticeSpec {
        rows.iter()
            .map(|r| r.iter().map(|&c| RawCode::from(c)).collect())
            .collect()
    }

    #[test]
    fn full_width_row_is_preserved_verbatim() {
        let spec = grid_of(&[&["a", "b", "c", "d", "e", "f", "g", "h"]]);
        let grid = normalize(&spec).unwrap();
        assert_eq!(grid.rows().len(), 8);
        // Row padding by the parity rule puts the single input row at
        // index 3 (three water rows above, four below), untouched.
        let expected: Row = ["a", "b", "c", "d", "e", "f", "g", "h"]
            .iter()
            .map(|&s| s.to_owned())
            .collect();
        assert_eq!(grid.rows()[3], expected);
    }

    #[test]
    fn nine_codes_in_a_row_is_rejected() {
        let spec = grid_of(&[&["a", "b", "c", "d", "e", "f", "g", "h", "i"]]);
        assert_eq!(
            normalize(&spec),
            Err(NormalizeError::RowTooLong { row: 0, len: 9 })
        );
    }

    #[test]
    fn nine_rows_trip_the_reformat_invariant() {
        let row: &[&str] = &["w"];
        let spec = grid_of(&[row; 9]);
        assert_eq!(
            normalize(&spec),
            Err(NormalizeError::ReformatInvariant { rows: 9 })
        );
    }

    #[test]
    fn width_deficit_of_five_splits_two_left_three_right() {
        let spec = grid_of(&[&["8", "4", "8"]]);
        let grid = normalize(&spec).unwrap();
        let row = &grid.rows()[3];
        assert_eq!(
            row.as_slice(),
            ["w", "w", "8", "4", "8", "w", "w", "w"]
                .map(String::from)
                .as_slice()
        );
    }

    #[test]
    fn width_deficit_of_three_splits_one_left_two_right() {
        let spec = grid_of(&[&["a", "b", "c", "d", "e"]]);
        let grid = normalize(&spec).unwrap();
        let row = &grid.rows()[3];
        assert_eq!(
            row.as_slice(),
            ["w", "a", "b", "c", "d", "e", "w", "w"]
                .map(String::from)
                .as_slice()
        );
    }

    #[test]
    fn three_rows_land_at_indices_two_through_four() {
        let spec = grid_of(&[&["8"], &["6"], &["4"]]);
        let grid = normalize(&spec).unwrap();
        for (row, code) in [(2, "8"), (3, "6"), (4, "4")] {
            assert_eq!(grid.get(row, 3), code);
        }
        assert!(grid.rows()[0].iter().all(|c| c == WATER_CODE));
        assert!(grid.rows()[5].iter().all(|c| c == WATER_CODE));
    }

    #[test]
    fn reflector_insert_overrides_user_content() {
        let row: &[&str] = &["a"; 8];
        let spec = grid_of(&[row; 8]);
        let grid = normalize(&spec).unwrap();
        for col in 0..GRID_SIZE {
            let expected = if REFLECTOR_COLUMNS.contains(&col) {
                REFLECTOR_CODE
            } else {
                "a"
            };
            assert_eq!(grid.get(7, col), expected);
        }
    }

    #[test]
    fn integer_and_string_codes_normalize_identically() {
        let ints = lattice![[8, 4, 8], [6, "w", 6]];
        let strings = lattice![["8", "4", "8"], ["6", "w", "6"]];
        assert_eq!(normalize(&ints).unwrap(), normalize(&strings).unwrap());
    }

    #[test]
    fn empty_input_becomes_all_water_with_reflector() {
        let grid = normalize(&Vec::new()).unwrap();
        for (r, row) in grid.rows().iter().enumerate() {
            for (c, code) in row.iter().enumerate() {
                let expected = if r == 7 && REFLECTOR_COLUMNS.contains(&c) {
                    REFLECTOR_CODE
                } else {
                    WATER_CODE
                };
                assert_eq!(code, expected);
            }
        }
    }

    prop_compose! {
        /// A valid raw grid: 1..=8 rows of 0..=8 single-character codes.
        fn arb_valid_spec()(rows in prop::collection::vec(
            prop::collection::vec("[a-z0-9]", 0..=GRID_SIZE),
            1..=GRID_SIZE,
        )) -> RawLatticeSpec {
            rows.into_iter()
                .map(|row| row.into_iter().map(RawCode::from).collect())
                .collect()
        }
    }

    proptest! {
        #[test]
        fn result_is_always_8_by_8(spec in arb_valid_spec()) {
            let grid = normalize(&spec).unwrap();
            prop_assert_eq!(grid.rows().len(), GRID_SIZE);
            for row in grid.rows() {
                prop_assert_eq!(row.len(), GRID_SIZE);
            }
        }

        #[test]
        fn reflector_is_always_present(spec in arb_valid_spec()) {
            let grid = normalize(&spec).unwrap();
            for col in REFLECTOR_COLUMNS {
                prop_assert_eq!(grid.get(7, col), REFLECTOR_CODE);
            }
        }

        #[test]
        fn original_code_order_is_preserved(spec in arb_valid_spec()) {
            let grid = normalize(&spec).unwrap();
            // Every input row appears as a contiguous subsequence of
            // some output row, in its original order, unless it was
            // clobbered by the reflector insert.
            let coerced: Vec<Vec<String>> = spec
                .iter()
                .map(|row| row.iter().map(RawCode::coerce).collect())
                .collect();
            // The parity rule puts ⌊deficit/2⌋ water rows above the input.
            let offset = (GRID_SIZE - spec.len()) / 2;
            for (i, input_row) in coerced.iter().enumerate() {
                let out = offset + i;
                if input_row.is_empty() || out == GRID_SIZE - 1 {
                    continue;
                }
                let row = &grid.rows()[out];
                let found = (0..=GRID_SIZE - input_row.len()).any(|start| {
                    row[start..start + input_row.len()]
                        .iter()
                        .zip(input_row)
                        .all(|(a, b)| a == b)
                });
                prop_assert!(found, "input row {i} not found in output row {out}");
            }
        }
    }
}
