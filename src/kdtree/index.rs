use crate::bbox::CartBox3D;
use crate::error::Result;
use crate::kdtree::build::build_node;
use crate::point::{CartPoint3D, DIMENSIONS};

/// An immutable k-d tree indexed by [`CartPoint3D`] with arbitrary
/// associated data.
///
/// The tree is balanced at construction time by median splits that cycle
/// through the three cartesian axes, one axis per level, and is never
/// rebalanced afterwards since it cannot be mutated.
#[derive(Debug)]
pub struct KDTree<T> {
    /// The root node of the tree, absent when the tree holds no items.
    pub(crate) root: Option<Box<KDNode<T>>>,
    pub(crate) num_items: usize,
}

/// A single node within the tree.
///
/// Each node exclusively owns its children, so the structure is a strict
/// tree with no sharing and no cycles. A leaf has both children absent.
#[derive(Debug)]
pub(crate) struct KDNode<T> {
    pub(crate) left: Option<Box<KDNode<T>>>,
    pub(crate) right: Option<Box<KDNode<T>>>,
    pub(crate) item: T,
    pub(crate) point: CartPoint3D,
}

impl<T> KDTree<T> {
    /// Build a `KDTree` containing the given items, keyed by the point the
    /// `to_point` extractor returns for each item.
    pub fn create<I, F>(items: I, to_point: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> CartPoint3D,
    {
        let entries: Vec<(T, CartPoint3D)> = items
            .into_iter()
            .map(|item| {
                let point = to_point(&item);
                (item, point)
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Build a tree from items already paired with their points.
    pub(crate) fn from_entries(entries: Vec<(T, CartPoint3D)>) -> Self {
        let num_items = entries.len();
        log::trace!("k-d sorting {num_items} points");
        Self {
            root: build_node(entries, 0),
            num_items,
        }
    }

    /// The number of items in this tree.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns `true` if the tree contains no items.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Search for all items having a point contained by the given range,
    /// invoking `visit` once per matching `(item, point)` pair.
    ///
    /// The traversal prunes subtrees that cannot intersect the range but
    /// may still visit subtrees that hold no matching point; every visited
    /// point is containment-checked before `visit` is called. No ordering
    /// is guaranteed across visits.
    pub fn range_search<'a, F>(&'a self, range: &CartBox3D, mut visit: F) -> Result<()>
    where
        F: FnMut(&'a T, &'a CartPoint3D),
    {
        if let Some(root) = &self.root {
            root.range_search(range, &mut visit, 0)?;
        }
        Ok(())
    }
}

impl<T> KDNode<T> {
    fn range_search<'a, F>(&'a self, range: &CartBox3D, visit: &mut F, depth: usize) -> Result<()>
    where
        F: FnMut(&'a T, &'a CartPoint3D),
    {
        if range.contains(&self.point) {
            visit(&self.item, &self.point);
        }

        let dimension = depth % DIMENSIONS;

        // Non-strict comparisons on both sides: ties with the node's
        // ordinate can land in either subtree, so neither descent may be
        // skipped on equality.
        if let Some(left) = &self.left {
            if range.lower.ordinate(dimension)? <= self.point.ordinate(dimension)? {
                left.range_search(range, visit, depth + 1)?;
            }
        }

        if let Some(right) = &self.right {
            if range.upper.ordinate(dimension)? >= self.point.ordinate(dimension)? {
                right.range_search(range, visit, depth + 1)?;
            }
        }

        Ok(())
    }
}
