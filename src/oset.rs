//! Module provide self-balancing ordered-set, implemented by [OSet]
//! type.
//!
//! OSet is a [red-black tree][wiki-rbt] layered over the plain
//! ordered tree of [OTree]. Every vertex carries a color and the
//! following properties hold after each completed insert:
//!
//! - Every reachable vertex is red or black.
//! - The root is black, and so is every absent child.
//! - A red vertex has two black children.
//! - Every path from a vertex down to an absent child crosses the
//!   same number of black vertices.
//! - The in-order key sequence is strictly increasing.
//!
//! Inserting colors the fresh leaf red and repairs the properties
//! bottom-up with recolorings and at most two rotations, so the tree
//! height never exceeds 2·log2(n+1).
//!
//! Rotating a red-black tree from the outside can break the coloring
//! properties without a compensating recolor, so the rotation API on
//! this type always returns [Error::UnsupportedOp] and the raw
//! rotations of the underlying tree stay out of reach.
//!
//! Deletion is not supported on this type.
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red-black_tree

#[cfg(any(test, feature = "perf"))]
use rand::Rng;

use std::{borrow::Borrow, fmt, iter::FromIterator, mem};

use crate::{
    otree::{Iter, OTree},
    vertex::{Color, VertexId},
    Error, Result,
};

/// OSet manage a single instance of in-memory ordered-set using a
/// [red-black tree][wiki-rbt].
///
/// [wiki-rbt]: https://en.wikipedia.org/wiki/Red-black_tree
#[derive(Clone)]
pub struct OSet<K> {
    tree: OTree<K>,
}

impl<K> Default for OSet<K> {
    fn default() -> Self {
        OSet::new()
    }
}

impl<K> OSet<K> {
    /// Create an empty instance of OSet.
    pub fn new() -> OSet<K> {
        OSet {
            tree: OTree::new(),
        }
    }
}

/// Maintenance API.
impl<K> OSet<K> {
    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Return number of vertices on the longest root-to-leaf path.
    #[inline]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Return number of rotations performed since this instance was
    /// created. A single insert performs at most two.
    #[inline]
    pub fn n_rotations(&self) -> usize {
        self.tree.n_rotations()
    }
}

impl<K> OSet<K> {
    /// Insert key at its sorted position, then rebalance the tree
    /// recoloring vertices and rotating as necessary. Return whether
    /// the key was newly inserted, an already-present key is a no-op.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        match self.tree.insert(key) {
            Some(vertex) => {
                let ix = vertex.0;
                self.tree.at_mut(ix).set_red();
                self.rebalance(ix);
                true
            }
            None => false,
        }
    }

    /// Check whether key is a member of this instance.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Return an iterator over all keys in this instance, in sort
    /// order.
    pub fn iter(&self) -> Iter<K> {
        self.tree.iter()
    }

    /// Return a random key from this index.
    #[cfg(any(test, feature = "perf"))]
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&K> {
        let mut ix = self.tree.root_ix()?;

        let mut at_depth = rng.gen::<u8>() % 40;

        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => self.tree.at(ix).left,
                1 => self.tree.at(ix).right,
                _ => unreachable!(),
            };

            if at_depth == 0 || next.is_none() {
                break Some(&self.tree.at(ix).key);
            }
            at_depth -= 1;
            ix = next.unwrap();
        }
    }

    /// Validate red-black tree with following rules:
    ///
    /// * Structural rules of [OTree::validate].
    /// * Every reachable vertex is colored red or black.
    /// * The root is black.
    /// * From root to any leaf, no consecutive reds allowed in its
    ///   path.
    /// * Number of blacks should be same under left child and right
    ///   child.
    pub fn validate(&self) -> Result<()>
    where
        K: Ord + fmt::Debug,
    {
        self.tree.validate()?;

        let root = self.tree.root_ix();
        if !root.map_or(true, |ix| self.tree.at(ix).is_black()) {
            return err_at!(Fatal, msg: "root is not black");
        }
        self.validate_colors(root, false)?;
        Ok(())
    }

    // Return the number of black vertices on every path below node,
    // counting the absent-child position as one black.
    fn validate_colors(&self, node: Option<usize>, fromred: bool) -> Result<usize> {
        let ix = match node {
            Some(ix) => ix,
            None => return Ok(1),
        };
        let vx = self.tree.at(ix);

        let red = match vx.color {
            Some(Color::Red) => true,
            Some(Color::Black) => false,
            None => return err_at!(Fatal, msg: "uncolored vertex reachable from root"),
        };
        if fromred && red {
            return err_at!(Fatal, msg: "consecutive reds");
        }

        let (left, right) = (vx.left, vx.right);
        let lblacks = self.validate_colors(left, red)?;
        let rblacks = self.validate_colors(right, red)?;
        if lblacks != rblacks {
            return err_at!(Fatal, msg: "unbalanced blacks {} {}", lblacks, rblacks);
        }

        Ok(lblacks + if red { 0 } else { 1 })
    }
}

/// Structural access over [VertexId] handles.
impl<K> OSet<K> {
    /// Return a handle to the root vertex.
    #[inline]
    pub fn root(&self) -> Option<VertexId> {
        self.tree.root()
    }

    /// Return the key held by vertex.
    pub fn key(&self, vertex: VertexId) -> Result<&K> {
        self.tree.key(vertex)
    }

    /// Return a handle to the vertex's parent, `None` for the root.
    pub fn parent(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        self.tree.parent(vertex)
    }

    /// Return a handle to the vertex's left child.
    pub fn left(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        self.tree.left(vertex)
    }

    /// Return a handle to the vertex's right child.
    pub fn right(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        self.tree.right(vertex)
    }

    /// Return the color of vertex. Fail with [Error::InvalidVertex]
    /// if the handle was not issued by this tree.
    pub fn color_of(&self, vertex: VertexId) -> Result<Color> {
        let ix = self.tree.check(vertex)?;
        match self.tree.at(ix).color {
            Some(color) => Ok(color),
            None => err_at!(Fatal, msg: "uncolored vertex {:?}", vertex),
        }
    }

    /// Red-black trees cannot be rotated by the caller, they would
    /// unbalance. Always fail with [Error::UnsupportedOp], the tree
    /// is left unchanged.
    pub fn rotate_left(&mut self, _vertex: VertexId) -> Result<()> {
        err_at!(UnsupportedOp, msg: "red-black index cannot be rotated by the caller")
    }

    /// Red-black trees cannot be rotated by the caller, they would
    /// unbalance. Always fail with [Error::UnsupportedOp], the tree
    /// is left unchanged.
    pub fn rotate_right(&mut self, _vertex: VertexId) -> Result<()> {
        err_at!(UnsupportedOp, msg: "red-black index cannot be rotated by the caller")
    }
}

/// Rebalancing machinery.
impl<K> OSet<K> {
    // Walk from the freshly inserted red vertex toward the root,
    // recoloring and rotating until the coloring rules hold again.
    // The only repeating case is the red uncle, which moves the
    // violation two levels up, every other case terminates, so the
    // walk is O(log n) with at most two rotations in total.
    fn rebalance(&mut self, ix: usize) {
        let mut v = ix;
        loop {
            if !self.is_red(Some(v)) {
                return;
            }
            let mut parent = match self.parent_of(Some(v)) {
                Some(parent) => parent,
                None => {
                    // the red vertex reached the root.
                    self.tree.at_mut(v).set_black();
                    return;
                }
            };
            if !self.is_red(Some(parent)) {
                return;
            }
            let grand = match self.grandparent_of(Some(v)) {
                Some(grand) => grand,
                None => panic!("rebalance(): red parent at the root ? call the programmer"),
            };
            if self.uncle_is_red(Some(v)) {
                // parent and uncle are red, the grandparent black.
                // Flipping all three pushes the violation to the
                // grandparent.
                let uncle = self.uncle_of(Some(v)).unwrap();
                self.tree.at_mut(parent).toggle_color();
                self.tree.at_mut(uncle).toggle_color();
                self.tree.at_mut(grand).toggle_color();
                v = grand;
                continue;
            }
            if self.is_left_child(Some(v)) != self.is_left_child(Some(parent)) {
                // vertex and parent are crossed. Rotate the parent
                // away from the vertex's side, the rotation puts the
                // former parent below the former vertex, relabel the
                // pair accordingly.
                if self.is_left_child(Some(v)) {
                    self.tree.rotate_right_at(parent);
                } else {
                    self.tree.rotate_left_at(parent);
                }
                mem::swap(&mut v, &mut parent);
            }
            // vertex, parent and grandparent form a straight line.
            // Recolor the pair and rotate the grandparent away from
            // the vertex's side to even out the black count.
            self.tree.at_mut(parent).set_black();
            self.tree.at_mut(grand).set_red();
            if self.is_left_child(Some(v)) {
                self.tree.rotate_right_at(grand);
            } else {
                self.tree.rotate_left_at(grand);
            }
            return;
        }
    }

    fn parent_of(&self, v: Option<usize>) -> Option<usize> {
        self.tree.at(v?).parent
    }

    fn grandparent_of(&self, v: Option<usize>) -> Option<usize> {
        self.parent_of(self.parent_of(v))
    }

    fn sibling_of(&self, v: Option<usize>) -> Option<usize> {
        let parent = self.parent_of(v)?;
        let pv = self.tree.at(parent);
        if pv.left == v {
            pv.right
        } else {
            pv.left
        }
    }

    fn uncle_of(&self, v: Option<usize>) -> Option<usize> {
        self.sibling_of(self.parent_of(v))
    }

    // False for the root and for a none argument.
    fn is_left_child(&self, v: Option<usize>) -> bool {
        match self.parent_of(v) {
            Some(parent) => self.tree.at(parent).left == v,
            None => false,
        }
    }

    // An absent vertex counts as black.
    fn is_red(&self, v: Option<usize>) -> bool {
        v.map_or(false, |ix| self.tree.at(ix).is_red())
    }

    fn uncle_is_red(&self, v: Option<usize>) -> bool {
        self.is_red(self.uncle_of(v))
    }
}

impl<K> Extend<K> for OSet<K>
where
    K: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        iter.into_iter().for_each(|key| {
            self.insert(key);
        });
    }
}

impl<K> FromIterator<K> for OSet<K>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> OSet<K>
    where
        I: IntoIterator<Item = K>,
    {
        let mut index = OSet::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
#[path = "oset_test.rs"]
mod oset_test;
