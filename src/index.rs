use geo_traits::CoordTrait;

use crate::bbox::CartBox3D;
use crate::error::Result;
use crate::kdtree::KDTree;
use crate::point::CartPoint3D;

/// A spatial index for data items that can each be represented as a
/// geographic WGS84 latitude/longitude point, supporting queries for all
/// items within a given great-circle distance of a search point. The index
/// is immutable once constructed.
///
/// Points are handled in a geographic rather than a planar context, so
/// queries near the 180° antimeridian or the poles work without being
/// split.
///
/// Distance calculations are based on a sphere and not a spheroid, which
/// introduces inaccuracies of up to 0.56% at extremes (near a pole, or
/// meridional near the equator). If that precision matters, widen the
/// search distance by a small percentage and re-filter the returned items
/// with a spheroid distance calculation.
///
/// The index holds no interior mutability, so any number of threads may
/// query the same instance concurrently. Starting another query on the same
/// index from inside a result callback is not supported.
#[derive(Debug)]
pub struct GeoPointIndex<T> {
    /// The underlying k-d tree that backs this index.
    tree: KDTree<T>,
}

impl<T> GeoPointIndex<T> {
    /// Build an index containing the specified items.
    ///
    /// `latitude_of` and `longitude_of` extract the coordinates in degrees
    /// from each item and are called exactly once per item. Latitudes must
    /// lie within `[-90, +90]` and longitudes within `[-180, +180]`; the
    /// first out-of-range or NaN coordinate fails the whole build with
    /// [`InvalidCoordinate`](crate::GeoPointIndexError::InvalidCoordinate)
    /// and no index is produced. An empty collection yields a valid index
    /// over zero items.
    pub fn build_from<I, LatF, LonF>(
        items: I,
        latitude_of: LatF,
        longitude_of: LonF,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        LatF: Fn(&T) -> f64,
        LonF: Fn(&T) -> f64,
    {
        let mut entries = Vec::new();
        for item in items {
            let point = CartPoint3D::from_lat_lon(latitude_of(&item), longitude_of(&item))?;
            entries.push((item, point));
        }

        log::debug!("building geo point index over {} items", entries.len());
        Ok(Self {
            tree: KDTree::from_entries(entries),
        })
    }

    /// Build an index over items that are themselves geographic coordinates
    /// in the usual x/y order (`x` longitude, `y` latitude).
    pub fn build_from_coords<I>(items: I) -> Result<Self>
    where
        T: CoordTrait<T = f64>,
        I: IntoIterator<Item = T>,
    {
        Self::build_from(items, |coord| coord.y(), |coord| coord.x())
    }

    /// Find all items contained in the index that are within the given
    /// great-circle distance of the specified point.
    ///
    /// `on_found` is invoked once per matching item, together with the
    /// exact great-circle distance in meters from the search point to that
    /// item. Returns `true` if any items were found.
    ///
    /// The search point must be a valid coordinate pair. `distance_meters`
    /// is not validated: a negative or NaN distance yields a search range
    /// that matches nothing, and the query reports `false`.
    pub fn query_within_distance<'a, F>(
        &'a self,
        latitude: f64,
        longitude: f64,
        distance_meters: f64,
        mut on_found: F,
    ) -> Result<bool>
    where
        F: FnMut(&'a T, f64),
    {
        // This approach is adapted from PostGIS, which converts the polar
        // latitude/longitude coordinates to cartesian x/y/z to form a 3D
        // bounding box, expanded by the given distance in meters. PostGIS
        // also multiplies by a 1% "fudge factor" to absorb sphere/spheroid
        // differences; distances here stay spherical, so no fudge factor.
        // See https://github.com/postgis/postgis/blob/master/postgis/geography_measurement.c#L454
        let search_point = CartPoint3D::from_lat_lon(latitude, longitude)?;
        let range = CartBox3D::distance_around(&search_point, distance_meters);

        if distance_meters.is_nan() {
            log::warn!("NaN search distance; query will match nothing");
        }

        let mut found = false;
        self.tree.range_search(&range, |item, point| {
            // The index is inexact; items returned are not guaranteed to be
            // within the originally given distance. Check before forwarding.
            let distance = point.distance_meters(&search_point);
            if distance <= distance_meters {
                on_found(item, distance);
                found = true;
            }
        })?;

        Ok(found)
    }

    /// As [`query_within_distance`](Self::query_within_distance), taking
    /// the search point as a coordinate in the usual x/y order (`x`
    /// longitude, `y` latitude).
    pub fn query_within_distance_coord<'a, F>(
        &'a self,
        coord: &impl CoordTrait<T = f64>,
        distance_meters: f64,
        on_found: F,
    ) -> Result<bool>
    where
        F: FnMut(&'a T, f64),
    {
        self.query_within_distance(coord.y(), coord.x(), distance_meters, on_found)
    }

    /// Collect all items within the given great-circle distance of the
    /// specified point, paired with their exact distances in meters.
    pub fn within_distance(
        &self,
        latitude: f64,
        longitude: f64,
        distance_meters: f64,
    ) -> Result<Vec<(&T, f64)>> {
        let mut results = Vec::new();
        self.query_within_distance(latitude, longitude, distance_meters, |item, distance| {
            results.push((item, distance));
        })?;
        Ok(results)
    }

    /// The number of items in this index.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the index contains no items.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
