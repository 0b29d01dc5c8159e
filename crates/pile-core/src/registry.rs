//! The builder registry: classified codes to unit handles.
//!
//! One finite table of simple codes plus the parametrized absorber-rod
//! family, resolved through a single lookup. Simple-code units are
//! built once at [`UnitRegistry::load`] and shared across every lattice
//! position using the code; parametrized codes get a fresh builder per
//! cell, because their geometry depends on the parameter.

use crate::code::ParsedCode;
use crate::error::ResolveError;
use indexmap::IndexMap;
use pile_csg::Universe;
use pile_materials::MaterialCatalog;
use pile_units::{
    FuelDummy, IrtAssembly, LatticeUnit, RabbitTubeDummy, ReflectorCell, RoddedAssembly,
    TubeCount, VerticalChannel, WaterCell,
};
use std::sync::Arc;

/// A resolved lattice unit, ready to construct.
///
/// `construct` takes the handle by value: a handle yields its universe
/// exactly once, which is how the at-most-once construction contract of
/// the builder capability is enforced.
pub enum UnitHandle {
    /// A pre-built unit shared by every cell using its code.
    Shared {
        /// Descriptive unit name.
        name: String,
        /// The shared universe.
        universe: Arc<Universe>,
    },
    /// An owned parametrized builder, constructed per cell.
    Owned(Box<dyn LatticeUnit>),
}

impl std::fmt::Debug for UnitHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shared { name, universe } => f
                .debug_struct("Shared")
                .field("name", name)
                .field("universe", universe)
                .finish(),
            Self::Owned(builder) => f
                .debug_tuple("Owned")
                .field(&builder.identify())
                .finish(),
        }
    }
}

impl UnitHandle {
    /// Descriptive name of the resolved unit.
    pub fn identify(&self) -> String {
        match self {
            Self::Shared { name, .. } => name.clone(),
            Self::Owned(builder) => builder.identify(),
        }
    }

    /// The unit's geometry universe, consuming the handle.
    #[must_use]
    pub fn construct(self) -> Arc<Universe> {
        match self {
            Self::Shared { universe, .. } => universe,
            Self::Owned(builder) => Arc::new(builder.construct()),
        }
    }
}

struct SharedUnit {
    name: String,
    universe: Arc<Universe>,
}

/// Owns the lattice unit builders and dispatches codes to them.
pub struct UnitRegistry {
    catalog: MaterialCatalog,
    shared: IndexMap<String, SharedUnit>,
}

impl UnitRegistry {
    /// Create an empty registry over the given material catalog.
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self {
            catalog,
            shared: IndexMap::new(),
        }
    }

    /// Every fixed-vocabulary builder, in vocabulary order.
    fn builders(&self) -> Vec<(&'static str, Box<dyn LatticeUnit>)> {
        let c = &self.catalog;
        let water = pile_units::BoundaryTreatment::Water;
        vec![
            ("w", Box::new(WaterCell::new(c))),
            ("wrc", Box::new(ReflectorCell::new(c))),
            ("8", Box::new(IrtAssembly::new(TubeCount::Eight, c, water))),
            ("6", Box::new(IrtAssembly::new(TubeCount::Six, c, water))),
            ("4", Box::new(IrtAssembly::new(TubeCount::Four, c, water))),
            ("O", Box::new(RoddedAssembly::withdrawn(c))),
            ("X", Box::new(RoddedAssembly::inserted(c))),
            ("d", Box::new(FuelDummy::new(c))),
            ("rt", Box::new(RabbitTubeDummy::new(c))),
            ("v90", Box::new(VerticalChannel::new(c, 90))),
            ("v56", Box::new(VerticalChannel::new(c, 56))),
            ("v30", Box::new(VerticalChannel::new(c, 30))),
            ("v25", Box::new(VerticalChannel::new(c, 25))),
            ("v12", Box::new(VerticalChannel::new(c, 12))),
        ]
    }

    /// Build every fixed-vocabulary unit once.
    ///
    /// Idempotent: repeated calls are no-ops. Each builder's universe
    /// is constructed here, exactly once, and shared from then on.
    pub fn load(&mut self) {
        if self.is_loaded() {
            return;
        }
        for (code, builder) in self.builders() {
            let unit = SharedUnit {
                name: builder.identify(),
                universe: Arc::new(builder.construct()),
            };
            self.shared.insert(code.to_owned(), unit);
        }
    }

    /// Resolve a classified code to a unit handle.
    ///
    /// Simple codes map to their shared pre-built unit; every cell with
    /// the same code receives the same universe. Absorber-rod codes get
    /// a fresh builder bound to their height — no cross-cell sharing is
    /// attempted, even for equal heights.
    ///
    /// Call [`load`](Self::load) first; against an unloaded registry
    /// every simple code is unknown.
    pub fn resolve(&self, code: &ParsedCode) -> Result<UnitHandle, ResolveError> {
        match code {
            ParsedCode::Simple(code) => {
                let unit =
                    self.shared
                        .get(code)
                        .ok_or_else(|| ResolveError::UnknownComponentCode {
                            code: code.clone(),
                        })?;
                Ok(UnitHandle::Shared {
                    name: unit.name.clone(),
                    universe: unit.universe.clone(),
                })
            }
            ParsedCode::AbsorberRod { height } => Ok(UnitHandle::Owned(Box::new(
                RoddedAssembly::new(&self.catalog, *height),
            ))),
        }
    }

    /// Whether [`load`](Self::load) has run.
    pub fn is_loaded(&self) -> bool {
        !self.shared.is_empty()
    }

    /// Number of shared units built so far.
    pub fn loaded_units(&self) -> usize {
        self.shared.len()
    }

    /// The material catalog this registry builds with.
    pub fn materials(&self) -> &MaterialCatalog {
        &self.catalog
    }
}
