//! An implementation of an immutable, balanced k-d tree over points on the
//! unit sphere.

#![warn(missing_docs)]

mod build;
mod index;

pub use index::KDTree;
