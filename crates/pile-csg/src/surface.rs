//! Geometric surfaces and their boundary conditions.

use crate::id::SurfaceId;

/// A coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    X,
    /// The y axis.
    Y,
    /// The z axis.
    Z,
}

impl Axis {
    /// Index of this axis into an `[x, y, z]` coordinate triple.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Particle behavior at a surface that bounds the problem domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Interior surface; particles cross freely.
    #[default]
    Transmission,
    /// Specular reflection (mirror symmetry).
    Reflective,
    /// Particles leak out and are lost.
    Vacuum,
}

/// The geometric shape of a [`Surface`].
///
/// All shapes are axis-aligned; cylinders, cones, and prisms share the
/// z axis, matching the vertical construction of the reactor core.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceKind {
    /// A plane perpendicular to `axis` at the given offset.
    Plane {
        /// The normal axis.
        axis: Axis,
        /// Position along the normal axis.
        offset: f64,
    },
    /// An infinite cylinder along the z axis, centered on the origin.
    ZCylinder {
        /// Cylinder radius.
        r: f64,
    },
    /// A one-sided cone along the z axis, centered on the origin.
    ///
    /// The cone opens upward (toward +z) or downward from its apex;
    /// points on the other side of the apex are outside.
    ZCone {
        /// z coordinate of the apex.
        apex_z: f64,
        /// Squared slope: `r² = r2 · (z − apex_z)²` on the surface.
        r2: f64,
        /// `true` if the cone opens toward +z.
        upward: bool,
    },
    /// An infinite rectangular prism along the z axis, centered on the
    /// origin, with optionally rounded corners.
    RectPrism {
        /// Full extent along x.
        width: f64,
        /// Full extent along y.
        height: f64,
        /// Corner radius; `0.0` gives sharp corners.
        corner_radius: f64,
    },
}

/// A named surface dividing space into a negative and a positive side.
///
/// Sign convention follows the usual CSG reading: the negative side is
/// below a plane or inside a closed surface, the positive side above or
/// outside. Half-space regions are obtained through the
/// [`HalfSpace`](crate::HalfSpace) extension trait on `Arc<Surface>`.
///
/// Boundary conditions are set at construction via [`with_boundary`]
/// (before the surface is shared); a shared surface is immutable.
///
/// [`with_boundary`]: Surface::with_boundary
#[derive(Clone, Debug)]
pub struct Surface {
    id: SurfaceId,
    name: String,
    kind: SurfaceKind,
    boundary: BoundaryKind,
}

impl Surface {
    /// Create a surface of the given kind.
    pub fn new(name: &str, kind: SurfaceKind) -> Self {
        Self {
            id: SurfaceId::next(),
            name: name.to_owned(),
            kind,
            boundary: BoundaryKind::Transmission,
        }
    }

    /// Plane perpendicular to the x axis at `x0`.
    pub fn x_plane(name: &str, x0: f64) -> Self {
        Self::new(
            name,
            SurfaceKind::Plane {
                axis: Axis::X,
                offset: x0,
            },
        )
    }

    /// Plane perpendicular to the y axis at `y0`.
    pub fn y_plane(name: &str, y0: f64) -> Self {
        Self::new(
            name,
            SurfaceKind::Plane {
                axis: Axis::Y,
                offset: y0,
            },
        )
    }

    /// Plane perpendicular to the z axis at `z0`.
    pub fn z_plane(name: &str, z0: f64) -> Self {
        Self::new(
            name,
            SurfaceKind::Plane {
                axis: Axis::Z,
                offset: z0,
            },
        )
    }

    /// Cylinder of radius `r` along the z axis.
    pub fn z_cylinder(name: &str, r: f64) -> Self {
        Self::new(name, SurfaceKind::ZCylinder { r })
    }

    /// One-sided cone with its apex at `apex_z`, opening toward +z if
    /// `upward`.
    pub fn z_cone(name: &str, apex_z: f64, r2: f64, upward: bool) -> Self {
        Self::new(name, SurfaceKind::ZCone { apex_z, r2, upward })
    }

    /// Sharp-cornered rectangular prism of the given full width and height.
    pub fn rect_prism(name: &str, width: f64, height: f64) -> Self {
        Self::rounded_rect_prism(name, width, height, 0.0)
    }

    /// Rectangular prism with rounded corners of radius `corner_radius`.
    pub fn rounded_rect_prism(name: &str, width: f64, height: f64, corner_radius: f64) -> Self {
        Self::new(
            name,
            SurfaceKind::RectPrism {
                width,
                height,
                corner_radius,
            },
        )
    }

    /// Attach a boundary condition, consuming and returning the surface.
    pub fn with_boundary(mut self, boundary: BoundaryKind) -> Self {
        self.boundary = boundary;
        self
    }

    /// Unique ID of this surface.
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geometric shape.
    pub fn kind(&self) -> &SurfaceKind {
        &self.kind
    }

    /// Boundary condition.
    pub fn boundary(&self) -> BoundaryKind {
        self.boundary
    }

    /// Signed sense of `point` with respect to this surface.
    ///
    /// Negative inside/below, positive outside/above, zero on the
    /// surface itself.
    pub fn sense(&self, point: [f64; 3]) -> f64 {
        let [x, y, z] = point;
        match self.kind {
            SurfaceKind::Plane { axis, offset } => point[axis.index()] - offset,
            SurfaceKind::ZCylinder { r } => x * x + y * y - r * r,
            SurfaceKind::ZCone { apex_z, r2, upward } => {
                let dz = z - apex_z;
                let wrong_side = if upward { dz < 0.0 } else { dz > 0.0 };
                if wrong_side {
                    // Beyond the apex the one-sided cone has no interior.
                    x * x + y * y + dz * dz
                } else {
                    x * x + y * y - r2 * dz * dz
                }
            }
            SurfaceKind::RectPrism {
                width,
                height,
                corner_radius,
            } => rect_prism_sense(x, y, width / 2.0, height / 2.0, corner_radius),
        }
    }
}

/// Signed distance-like sense for a rounded rectangular prism cross
/// section. Exact distance outside the corner arcs; interior values are
/// merely negative, which is all region membership needs.
fn rect_prism_sense(x: f64, y: f64, half_w: f64, half_h: f64, corner_r: f64) -> f64 {
    let dx = x.abs() - (half_w - corner_r);
    let dy = y.abs() - (half_h - corner_r);
    if dx > 0.0 && dy > 0.0 {
        // Corner quadrant: distance to the corner arc.
        (dx * dx + dy * dy).sqrt() - corner_r
    } else {
        (x.abs() - half_w).max(y.abs() - half_h)
    }
}
