use geo_traits::CoordTrait;

use crate::error::{CoordinateKind, GeoPointIndexError, Result};

/// The number of ordinates within a point.
pub(crate) const DIMENSIONS: usize = 3;

/// The mean earth radius as used in the WGS84 coordinate system, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic coordinate in cartesian space on the unit sphere.
///
/// Points are normally created through [`CartPoint3D::from_lat_lon`], which
/// guarantees the unit-sphere invariant `x² + y² + z² ≈ 1`. The raw
/// constructor does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartPoint3D {
    /// The x-axis ordinate.
    pub x: f64,
    /// The y-axis ordinate.
    pub y: f64,
    /// The z-axis ordinate.
    pub z: f64,
}

impl CartPoint3D {
    /// Create a point directly from cartesian ordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert polar latitude and longitude coordinates to cartesian
    /// coordinates on the unit sphere.
    ///
    /// - `latitude`: degrees, `[-90, +90]`
    /// - `longitude`: degrees, `[-180, +180]`
    ///
    /// Returns [`GeoPointIndexError::InvalidCoordinate`] if either value is
    /// NaN or outside its closed range.
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Result<Self> {
        // Inverted comparisons so that NaN also fails the test
        if !(latitude <= 90.0 && latitude >= -90.0) {
            return Err(GeoPointIndexError::InvalidCoordinate {
                kind: CoordinateKind::Latitude,
                value: latitude,
            });
        }

        if !(longitude <= 180.0 && longitude >= -180.0) {
            return Err(GeoPointIndexError::InvalidCoordinate {
                kind: CoordinateKind::Longitude,
                value: longitude,
            });
        }

        let lat_radians = latitude.to_radians();
        let lon_radians = longitude.to_radians();

        let cos_lat = lat_radians.cos();
        Ok(Self {
            x: cos_lat * lon_radians.cos(),
            y: cos_lat * lon_radians.sin(),
            z: lat_radians.sin(),
        })
    }

    /// Convert a coordinate in the usual geographic x/y order (`x` is
    /// longitude, `y` is latitude) to a point on the unit sphere.
    pub fn from_coord(coord: &impl CoordTrait<T = f64>) -> Result<Self> {
        Self::from_lat_lon(coord.y(), coord.x())
    }

    /// Calculate the great-circle distance in meters to the destination
    /// point.
    ///
    /// Both points sit on the unit sphere, so the euclidean distance between
    /// them is a chord length and the great-circle arc length follows in
    /// closed form.
    pub fn distance_meters(&self, destination: &CartPoint3D) -> f64 {
        let dx = destination.x - self.x;
        let dy = destination.y - self.y;
        let dz = destination.z - self.z;
        let chord = (dx * dx + dy * dy + dz * dz).sqrt();

        2.0 * EARTH_RADIUS_METERS * (chord / 2.0).asin()
    }

    /// Get the component part of the coordinate at the specified dimension
    /// index: `0` for `x`, `1` for `y`, `2` for `z`.
    ///
    /// Returns [`GeoPointIndexError::InvalidDimension`] for any other index.
    #[inline]
    pub fn ordinate(&self, dimension: usize) -> Result<f64> {
        match dimension {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(GeoPointIndexError::InvalidDimension(dimension)),
        }
    }
}
