use crate::kdtree::index::KDNode;
use crate::point::{CartPoint3D, DIMENSIONS};

/// Recursively build a subtree representing the given entries.
///
/// At depth `d` the entries are sorted by the ordinate at axis `d % 3` and
/// the upper-middle entry becomes the node payload, leaving the strict left
/// and right sublists to form subtrees one level deeper. Sorting at every
/// level keeps the tree balanced at a height of `ceil(log2 n)`.
pub(super) fn build_node<T>(
    mut entries: Vec<(T, CartPoint3D)>,
    depth: usize,
) -> Option<Box<KDNode<T>>> {
    if entries.is_empty() {
        return None;
    }

    let axis = depth % DIMENSIONS;
    // Stable sort, so items at tied ordinates keep their insertion order
    entries.sort_by(|(_, a), (_, b)| {
        let lhs = a.ordinate(axis).unwrap_or(f64::NAN);
        let rhs = b.ordinate(axis).unwrap_or(f64::NAN);
        lhs.total_cmp(&rhs)
    });

    let halfway = entries.len() / 2;
    let right = entries.split_off(halfway + 1);
    let Some((item, point)) = entries.pop() else {
        return None;
    };

    Some(Box::new(KDNode {
        left: build_node(entries, depth + 1),
        right: build_node(right, depth + 1),
        item,
        point,
    }))
}
