//! The [`LatticeUnit`] capability trait.

use pile_csg::Universe;

/// A builder for one kind of lattice position content.
///
/// Every unit kind — fuel assembly, water cell, dummy, channel, rodded
/// assembly — implements this one capability independently; units share
/// no behavior beyond it.
///
/// # Contract
///
/// - `identify()` returns the descriptive vocabulary name.
/// - `construct()` builds a fresh geometry universe. The compiler calls
///   it at most once per builder instance; construction need not be
///   idempotent.
///
/// # Examples
///
/// ```
/// use pile_csg::{Cell, Fill, Universe};
/// use pile_units::LatticeUnit;
///
/// struct VoidCell;
///
/// impl LatticeUnit for VoidCell {
///     fn identify(&self) -> String {
///         "void cell".to_owned()
///     }
///
///     fn construct(&self) -> Universe {
///         Universe::new("void cell", vec![Cell::unbounded("void", Fill::Void)])
///     }
/// }
///
/// let unit = VoidCell;
/// assert_eq!(unit.identify(), "void cell");
/// assert_eq!(unit.construct().cells().len(), 1);
/// ```
pub trait LatticeUnit {
    /// Descriptive name of the unit, e.g. `"6-tube FA"`.
    fn identify(&self) -> String;

    /// Build the unit's geometry universe.
    fn construct(&self) -> Universe;
}
