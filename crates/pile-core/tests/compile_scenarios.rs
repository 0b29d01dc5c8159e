//! End-to-end compilation scenarios.

use pile_core::{lattice, CompileError, LatticeCompiler, NormalizeError, RawCode};
use pile_materials::MaterialCatalog;

fn compiler() -> LatticeCompiler {
    LatticeCompiler::new(MaterialCatalog::new())
}

#[test]
fn mixed_assembly_core_compiles_with_nonzero_source_region() {
    let mut compiler = compiler();
    let compiled = compiler
        .compile(&lattice![[8, 4, 8], [6, "w", 6], [4, 8, 4]])
        .expect("mixed core must compile");

    let region = compiled.source_region;
    for i in 0..3 {
        assert_ne!(region.lower_left[i], 0.0);
        assert_ne!(region.upper_right[i], 0.0);
        assert!(region.lower_left[i] < region.upper_right[i]);
    }
    assert_eq!(compiled.lattice.shape(), (8, 8));
    assert_eq!(compiled.model.cells().len(), 1);
}

#[test]
fn full_width_row_normalizes_but_unknown_codes_fail_resolution() {
    // Eight placeholder codes survive normalization untouched; the
    // registry then rejects the first one it meets.
    let mut compiler = compiler();
    let err = compiler
        .compile(&lattice![["a", "b", "c", "d", "e", "f", "g", "h"]])
        .unwrap_err();
    assert!(matches!(err, CompileError::Resolve(_)));
}

#[test]
fn single_water_cell_becomes_a_uniform_water_core() {
    let mut compiler = compiler();
    let compiled = compiler.compile(&lattice![["w"]]).expect("water core");
    for row in 0..8 {
        for col in 0..8 {
            let name = compiled.lattice.universe_at(row, col).unwrap().name();
            if row == 7 && (2..=5).contains(&col) {
                assert_eq!(name, "water reflector cell");
            } else {
                assert_eq!(name, "water cell with grid plate");
            }
        }
    }
}

#[test]
fn oversized_row_aborts_before_any_unit_is_built() {
    let mut compiler = compiler();
    let raw = vec![(0..9).map(|_| RawCode::from("w")).collect::<Vec<_>>()];
    let err = compiler.compile(&raw).unwrap_err();
    assert_eq!(
        err,
        CompileError::Normalize(NormalizeError::RowTooLong { row: 0, len: 9 })
    );
    // No partial compilation: the registry never loaded a builder.
    assert!(!compiler.registry().is_loaded());
    assert_eq!(compiler.registry().loaded_units(), 0);
}

#[test]
fn control_rod_and_absorber_codes_compile_together() {
    let mut compiler = compiler();
    let compiled = compiler
        .compile(&lattice![["8", "O", "8"], ["X", "w", "AR10.5"]])
        .expect("rodded core must compile");

    // Two rows land at grid rows 3 and 4; three codes at columns 2..=4.
    let names: Vec<&str> = (2..=4)
        .map(|c| compiled.lattice.universe_at(3, c).unwrap().name())
        .collect();
    assert_eq!(
        names,
        [
            "8-tube FA",
            "6-tube FA with fully withdrawn control rod",
            "8-tube FA",
        ]
    );
    assert_eq!(
        compiled.lattice.universe_at(4, 4).unwrap().name(),
        "6-tube FA with absorber rod at 10.5 cm"
    );
}

#[test]
fn malformed_absorber_code_aborts_the_compile() {
    let mut compiler = compiler();
    let err = compiler.compile(&lattice![["ARnope"]]).unwrap_err();
    assert!(matches!(err, CompileError::Code(_)));
}

#[test]
fn source_region_is_identical_for_equal_extent_cores() {
    // The source region depends on lattice extent only, which the
    // normalizer fixes at 8×8 — different maps, same region.
    let mut compiler = compiler();
    let small = compiler.compile(&lattice![["w"]]).unwrap().source_region;
    let mixed = compiler
        .compile(&lattice![[8, 4, 8], [6, "w", 6], [4, 8, 4]])
        .unwrap()
        .source_region;
    assert_eq!(small, mixed);
}
