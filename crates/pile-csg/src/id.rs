//! Strongly-typed identifiers for geometry objects.
//!
//! Every surface, cell, universe, and material gets a unique ID from a
//! process-wide monotonic counter at construction time. Distinct objects
//! always carry distinct IDs, which keeps exported geometry references
//! unambiguous even when two objects are otherwise structurally equal.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

macro_rules! geometry_id {
    ($(#[$doc:meta])* $name:ident, $counter:ident) => {
        static $counter: AtomicU64 = AtomicU64::new(1);

        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            /// Allocate a fresh, unique ID.
            ///
            /// Each call returns an ID never returned before within this
            /// process. Thread-safe.
            pub fn next() -> Self {
                Self($counter.fetch_add(1, Ordering::Relaxed))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

geometry_id!(
    /// Unique identifier of a [`Surface`](crate::Surface).
    SurfaceId,
    SURFACE_COUNTER
);

geometry_id!(
    /// Unique identifier of a [`Cell`](crate::Cell).
    CellId,
    CELL_COUNTER
);

geometry_id!(
    /// Unique identifier of a [`Universe`](crate::Universe).
    UniverseId,
    UNIVERSE_COUNTER
);

geometry_id!(
    /// Unique identifier of a material definition.
    MaterialId,
    MATERIAL_COUNTER
);
