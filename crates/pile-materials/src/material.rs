//! A single material definition.

use indexmap::IndexMap;
use pile_csg::{MaterialHandle, MaterialId};

/// Whether nuclide fractions are by weight or by atom count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FractionMode {
    /// Weight fractions.
    Weight,
    /// Atom fractions.
    Atom,
}

/// A homogeneous material: density, temperature, and nuclide fractions.
///
/// Nuclides keep their insertion order (the order of the source
/// composition table), so exported decks list them deterministically.
#[derive(Clone, Debug)]
pub struct Material {
    id: MaterialId,
    name: String,
    density_g_cm3: f64,
    temperature_k: f64,
    mode: FractionMode,
    nuclides: IndexMap<String, f64>,
    s_alpha_beta: Option<String>,
    depletable: bool,
}

impl Material {
    /// Create a material from a composition table.
    pub fn new(
        name: &str,
        density_g_cm3: f64,
        mode: FractionMode,
        composition: &[(&str, f64)],
    ) -> Self {
        Self {
            id: MaterialId::next(),
            name: name.to_owned(),
            density_g_cm3,
            temperature_k: 293.15,
            mode,
            nuclides: composition
                .iter()
                .map(|&(n, f)| (n.to_owned(), f))
                .collect(),
            s_alpha_beta: None,
            depletable: false,
        }
    }

    /// Attach a thermal scattering table (e.g. `c_H_in_H2O`).
    pub fn with_s_alpha_beta(mut self, table: &str) -> Self {
        self.s_alpha_beta = Some(table.to_owned());
        self
    }

    /// Mark the material as depletable (fuel).
    pub fn depletable(mut self) -> Self {
        self.depletable = true;
        self
    }

    /// Name of the material.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass density in g/cm³.
    pub fn density_g_cm3(&self) -> f64 {
        self.density_g_cm3
    }

    /// Temperature in kelvin.
    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }

    /// Fraction mode of the composition table.
    pub fn fraction_mode(&self) -> FractionMode {
        self.mode
    }

    /// Nuclide fractions in table order.
    pub fn nuclides(&self) -> &IndexMap<String, f64> {
        &self.nuclides
    }

    /// Thermal scattering table, if any.
    pub fn s_alpha_beta(&self) -> Option<&str> {
        self.s_alpha_beta.as_deref()
    }

    /// Whether the material depletes under irradiation.
    pub fn is_depletable(&self) -> bool {
        self.depletable
    }

    /// Opaque handle for cell construction.
    pub fn handle(&self) -> MaterialHandle {
        MaterialHandle::new(self.id, &self.name)
    }
}
