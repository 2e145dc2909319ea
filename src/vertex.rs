/// Color tag of a vertex.
///
/// A vertex starts out uncolored when the base tree creates it, the
/// red-black layer paints it [Color::Red] before rebalancing. No
/// vertex in a valid tree stays uncolored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// Handle to a vertex held inside a tree's vertex store.
///
/// Handles are stable across rotations. A handle is only meaningful
/// for the tree instance that issued it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VertexId(pub(crate) usize);

// Vertex corresponds to a single key slot in the tree's store.
//
// `parent` is a non-owning back-reference, the store owns every
// vertex, links are plain slot indices.
#[derive(Clone)]
pub(crate) struct Vertex<K> {
    pub(crate) key: K,
    pub(crate) color: Option<Color>, // store: uncolored, red or black
    pub(crate) parent: Option<usize>, // store: parent back-reference
    pub(crate) left: Option<usize>,  // store: left child
    pub(crate) right: Option<usize>, // store: right child
}

impl<K> Vertex<K> {
    pub(crate) fn new(key: K, parent: Option<usize>) -> Vertex<K> {
        Vertex {
            key,
            color: None,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn set_red(&mut self) {
        self.color = Some(Color::Red)
    }

    #[inline]
    pub(crate) fn set_black(&mut self) {
        self.color = Some(Color::Black)
    }

    // Flip red to black and back. No-op on an uncolored vertex, no
    // reachable vertex is in that state once insertion completes.
    #[inline]
    pub(crate) fn toggle_color(&mut self) {
        self.color = match self.color {
            Some(Color::Red) => Some(Color::Black),
            Some(Color::Black) => Some(Color::Red),
            None => None,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Some(Color::Red)
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Some(Color::Black)
    }
}

#[cfg(test)]
#[path = "vertex_test.rs"]
mod vertex_test;
