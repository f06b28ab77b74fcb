#![doc = include_str!("../README.md")]

mod bbox;
mod error;
mod index;
pub mod kdtree;
mod point;

pub use bbox::CartBox3D;
pub use error::{CoordinateKind, GeoPointIndexError, Result};
pub use index::GeoPointIndex;
pub use point::{CartPoint3D, EARTH_RADIUS_METERS};

#[cfg(test)]
pub(crate) mod test;
