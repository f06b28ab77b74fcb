use crate::point::{CartPoint3D, EARTH_RADIUS_METERS};

/// A three-dimensional axis-aligned envelope or bounding box.
///
/// No `lower <= upper` relationship is enforced; a box with inverted bounds
/// simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartBox3D {
    /// The coordinate representing the minimum range of the box.
    pub lower: CartPoint3D,
    /// The coordinate representing the maximum range of the box.
    pub upper: CartPoint3D,
}

impl CartBox3D {
    /// Create a box from its two extreme corners.
    pub fn new(lower: CartPoint3D, upper: CartPoint3D) -> Self {
        Self { lower, upper }
    }

    /// Construct a box by expanding the given point on all sides by the
    /// given distance in meters.
    ///
    /// The result is a cube, not a sphere: a deliberate over-approximation
    /// of the spherical search cap, only ever used to prune candidates that
    /// are re-checked with an exact distance afterwards.
    pub fn distance_around(point: &CartPoint3D, distance_meters: f64) -> Self {
        // Normalise the distance to be that on a unit sphere
        let distance = distance_meters / EARTH_RADIUS_METERS;
        Self {
            lower: CartPoint3D::new(point.x - distance, point.y - distance, point.z - distance),
            upper: CartPoint3D::new(point.x + distance, point.y + distance, point.z + distance),
        }
    }

    /// Determine whether the range represented by this box includes the
    /// given point. Points touching the boundary are inside.
    #[inline]
    pub fn contains(&self, point: &CartPoint3D) -> bool {
        point.x >= self.lower.x
            && point.x <= self.upper.x
            && point.y >= self.lower.y
            && point.y <= self.upper.y
            && point.z >= self.lower.z
            && point.z <= self.upper.z
    }
}
