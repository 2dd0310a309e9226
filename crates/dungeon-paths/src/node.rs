use std::fmt;

use dungeon_core::Point;

use crate::distance::euclidean;

/// Index of a [`Node`] inside its [`Graph`](crate::Graph).
///
/// Ids are dense and assigned in row-major order of the walkable cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the graph's node arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A walkable dungeon cell and its outgoing edges.
///
/// Neighbours are stored as [`NodeId`]s; the owning graph holds every node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pos: Point,
    near: Vec<NodeId>,
}

impl Node {
    /// Create an unconnected node at row `r`, column `c`.
    pub fn new(r: i32, c: i32) -> Self {
        Self {
            pos: Point::new(r, c),
            near: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn r(&self) -> i32 {
        self.pos.r
    }

    #[inline]
    pub fn c(&self) -> i32 {
        self.pos.c
    }

    /// Adjacent nodes, in the order the edges were added.
    #[inline]
    pub fn near(&self) -> &[NodeId] {
        &self.near
    }

    /// Euclidean distance between this node and `other`.
    #[inline]
    pub fn distance(&self, other: &Node) -> f64 {
        euclidean(self.pos, other.pos)
    }

    /// Add an edge towards `other`. Duplicate edges are kept as-is.
    pub fn connect(&mut self, other: NodeId) {
        self.near.push(other);
    }
}

/// Search-time bookkeeping for one node during one A* run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    /// Cost of the best known path from the start.
    pub g: f64,
    /// Heuristic estimate of the remaining cost to the goal.
    pub h: f64,
    /// Predecessor on the best known path; `None` for the start.
    pub prev: Option<NodeId>,
}

impl Default for Scores {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            prev: None,
        }
    }
}

impl Scores {
    /// Total estimated cost `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unconnected() {
        let n = Node::new(2, 3);
        assert_eq!(n.pos(), Point::new(2, 3));
        assert_eq!((n.r(), n.c()), (2, 3));
        assert!(n.near().is_empty());
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Node::new(0, 0);
        let b = Node::new(3, 4);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }

    #[test]
    fn connect_appends_without_dedup() {
        let mut n = Node::new(0, 0);
        n.connect(NodeId(1));
        n.connect(NodeId(2));
        n.connect(NodeId(1));
        assert_eq!(n.near(), &[NodeId(1), NodeId(2), NodeId(1)]);
    }

    #[test]
    fn f_is_sum_of_g_and_h() {
        let mut s = Scores::default();
        assert_eq!(s.f(), 0.0);
        s.g = 2.0;
        s.h = 1.5;
        assert_eq!(s.f(), 3.5);
        s.g = 0.5;
        assert_eq!(s.f(), 2.0);
    }
}
