//! Half-space regions and boolean composition.
//!
//! A [`Region`] is a point set built from surface half-spaces with
//! intersection (`&`), union (`|`), and complement (`!`). Membership is
//! decided by [`Region::contains`], which walks the expression tree.

use crate::surface::Surface;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

/// Which side of a surface a half-space selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The negative sense: below a plane, inside a closed surface.
    Negative,
    /// The positive sense: above a plane, outside a closed surface.
    Positive,
}

/// A CSG point set.
///
/// Intersections and unions store flattened operand lists, so chained
/// `&`/`|` expressions stay shallow rather than degenerating into deep
/// binary trees.
#[derive(Clone, Debug)]
pub enum Region {
    /// One side of a single surface.
    Half {
        /// The dividing surface.
        surface: Arc<Surface>,
        /// Which side of it.
        side: Side,
    },
    /// Points contained in every operand.
    Intersection(Vec<Region>),
    /// Points contained in at least one operand.
    Union(Vec<Region>),
    /// Points not contained in the operand.
    Complement(Box<Region>),
}

impl Region {
    /// Half-space on the given side of a surface.
    pub fn half(surface: Arc<Surface>, side: Side) -> Self {
        Self::Half { surface, side }
    }

    /// Whether `point` lies inside this region.
    ///
    /// Points exactly on a surface (sense zero) are on neither side and
    /// are reported as outside both half-spaces.
    pub fn contains(&self, point: [f64; 3]) -> bool {
        match self {
            Self::Half { surface, side } => {
                let s = surface.sense(point);
                match side {
                    Side::Negative => s < 0.0,
                    Side::Positive => s > 0.0,
                }
            }
            Self::Intersection(operands) => operands.iter().all(|r| r.contains(point)),
            Self::Union(operands) => operands.iter().any(|r| r.contains(point)),
            Self::Complement(inner) => !inner.contains(point),
        }
    }

    /// Every surface referenced anywhere in this region expression, in
    /// first-appearance order.
    pub fn surfaces(&self) -> Vec<Arc<Surface>> {
        let mut out = Vec::new();
        self.collect_surfaces(&mut out);
        out
    }

    fn collect_surfaces(&self, out: &mut Vec<Arc<Surface>>) {
        match self {
            Self::Half { surface, .. } => {
                if !out.iter().any(|s| s.id() == surface.id()) {
                    out.push(surface.clone());
                }
            }
            Self::Intersection(operands) | Self::Union(operands) => {
                for r in operands {
                    r.collect_surfaces(out);
                }
            }
            Self::Complement(inner) => inner.collect_surfaces(out),
        }
    }
}

/// Half-space constructors on shared surfaces.
///
/// Implemented for `Arc<Surface>` so that region expressions read the
/// way the geometry is spoken: `shell.inside() & top.below()`.
pub trait HalfSpace {
    /// The negative half-space (below a plane).
    fn below(&self) -> Region;
    /// The positive half-space (above a plane).
    fn above(&self) -> Region;
    /// The negative half-space (inside a closed surface).
    fn inside(&self) -> Region {
        self.below()
    }
    /// The positive half-space (outside a closed surface).
    fn outside(&self) -> Region {
        self.above()
    }
}

impl HalfSpace for Arc<Surface> {
    fn below(&self) -> Region {
        Region::half(self.clone(), Side::Negative)
    }

    fn above(&self) -> Region {
        Region::half(self.clone(), Side::Positive)
    }
}

impl BitAnd for Region {
    type Output = Region;

    fn bitand(self, rhs: Region) -> Region {
        match (self, rhs) {
            (Region::Intersection(mut a), Region::Intersection(b)) => {
                a.extend(b);
                Region::Intersection(a)
            }
            (Region::Intersection(mut a), r) => {
                a.push(r);
                Region::Intersection(a)
            }
            (l, Region::Intersection(mut b)) => {
                b.insert(0, l);
                Region::Intersection(b)
            }
            (l, r) => Region::Intersection(vec![l, r]),
        }
    }
}

impl BitOr for Region {
    type Output = Region;

    fn bitor(self, rhs: Region) -> Region {
        match (self, rhs) {
            (Region::Union(mut a), Region::Union(b)) => {
                a.extend(b);
                Region::Union(a)
            }
            (Region::Union(mut a), r) => {
                a.push(r);
                Region::Union(a)
            }
            (l, Region::Union(mut b)) => {
                b.insert(0, l);
                Region::Union(b)
            }
            (l, r) => Region::Union(vec![l, r]),
        }
    }
}

impl Not for Region {
    type Output = Region;

    fn not(self) -> Region {
        match self {
            // Double complement collapses.
            Region::Complement(inner) => *inner,
            r => Region::Complement(Box::new(r)),
        }
    }
}

/// Axis-aligned box: the intersection of six plane half-spaces.
///
/// The planes are named `<name>.x0` through `<name>.z1`.
pub fn rectangular_parallelepiped(
    name: &str,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    zmin: f64,
    zmax: f64,
) -> Region {
    let x0 = Arc::new(Surface::x_plane(&format!("{name}.x0"), xmin));
    let x1 = Arc::new(Surface::x_plane(&format!("{name}.x1"), xmax));
    let y0 = Arc::new(Surface::y_plane(&format!("{name}.y0"), ymin));
    let y1 = Arc::new(Surface::y_plane(&format!("{name}.y1"), ymax));
    let z0 = Arc::new(Surface::z_plane(&format!("{name}.z0"), zmin));
    let z1 = Arc::new(Surface::z_plane(&format!("{name}.z1"), zmax));
    x0.above() & x1.below() & y0.above() & y1.below() & z0.above() & z1.below()
}
