//! Direct single-assembly construction.
//!
//! Assembly-level studies model one fuel assembly on its own, usually
//! with reflective boundaries to stand in for an infinite array. This
//! path validates the code against the full vocabulary first, so a
//! recognized-but-wrong code ("w") is distinguished from an unknown
//! one.

use crate::error::AssemblyError;
use crate::source::SourceRegion;
use pile_csg::Universe;
use pile_materials::MaterialCatalog;
use pile_units::catalog::{unit_name, ACTIVE_BOTTOM, ACTIVE_TOP, LATTICE_PITCH};
use pile_units::{BoundaryTreatment, IrtAssembly, LatticeUnit, TubeCount};

/// A single fuel assembly with its model universe and source region.
#[derive(Debug)]
pub struct FuelAssembly {
    code: String,
    model: Universe,
    source_region: SourceRegion,
}

impl FuelAssembly {
    /// Build the assembly denoted by `code`.
    ///
    /// Fails with [`AssemblyError::UnknownComponentCode`] when the code
    /// is not in the vocabulary at all, and with
    /// [`AssemblyError::InvalidFuelAssemblyType`] when it is valid
    /// vocabulary but not a fuel assembly.
    pub fn new(
        code: &str,
        catalog: &MaterialCatalog,
        boundary: BoundaryTreatment,
    ) -> Result<Self, AssemblyError> {
        if unit_name(code).is_none() {
            return Err(AssemblyError::UnknownComponentCode {
                code: code.to_owned(),
            });
        }
        let Some(tubes) = TubeCount::from_code(code) else {
            return Err(AssemblyError::InvalidFuelAssemblyType {
                code: code.to_owned(),
            });
        };
        let model = IrtAssembly::new(tubes, catalog, boundary).construct();

        // The source covers the assembly's own active span.
        let half = LATTICE_PITCH / 2.0;
        let source_region = SourceRegion {
            lower_left: [-half, -half, ACTIVE_BOTTOM],
            upper_right: [half, half, ACTIVE_TOP],
        };
        Ok(Self {
            code: code.to_owned(),
            model,
            source_region,
        })
    }

    /// The assembly-type code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The assembly's geometry universe.
    pub fn model(&self) -> &Universe {
        &self.model
    }

    /// The assembly's source seeding region.
    pub fn source_region(&self) -> SourceRegion {
        self.source_region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_assembly_types_build() {
        let catalog = MaterialCatalog::new();
        for code in ["4", "6", "8"] {
            let fa = FuelAssembly::new(code, &catalog, BoundaryTreatment::Reflective).unwrap();
            assert_eq!(fa.code(), code);
            assert!(!fa.model().cells().is_empty());
            let region = fa.source_region();
            for i in 0..3 {
                assert!(region.lower_left[i] < region.upper_right[i]);
            }
        }
    }

    #[test]
    fn unknown_code_is_not_a_lattice_unit() {
        let catalog = MaterialCatalog::new();
        let err = FuelAssembly::new("invalid_type", &catalog, BoundaryTreatment::Reflective)
            .unwrap_err();
        assert_eq!(
            err,
            AssemblyError::UnknownComponentCode {
                code: "invalid_type".to_owned()
            }
        );
    }

    #[test]
    fn water_is_vocabulary_but_not_an_assembly() {
        let catalog = MaterialCatalog::new();
        let err = FuelAssembly::new("w", &catalog, BoundaryTreatment::Reflective).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::InvalidFuelAssemblyType {
                code: "w".to_owned()
            }
        );
    }
}
