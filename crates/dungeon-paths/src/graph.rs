//! Connectivity graph built from a dungeon map.
//!
//! A [`Graph`] turns a rectangular character map into an arena of
//! [`Node`]s, one per walkable cell, wired to their orthogonal walkable
//! neighbours. Obstacle cells get no node.

use std::str::FromStr;

use dungeon_core::{Point, Range};

use crate::error::GraphError;
use crate::markers::{Markers, Role};
use crate::node::{Node, NodeId};

/// The walkable cells of a dungeon map and the edges between them.
///
/// A graph is immutable once built; search state lives outside it, so
/// any number of searches may borrow the same graph.
#[derive(Debug, Clone)]
pub struct Graph {
    bounds: Range,
    chars: Vec<Vec<char>>,
    cells: Vec<Option<NodeId>>,
    nodes: Vec<Node>,
    markers: Markers,
    start: NodeId,
    stop: NodeId,
}

impl Graph {
    /// Build a graph from map text using the default [`Markers`].
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        Self::with_markers(text, Markers::default())
    }

    /// Build a graph from map text.
    ///
    /// Rows are separated by `'\n'` (a preceding `'\r'` is dropped).
    /// Line terminators at the very end of the text are ignored; every
    /// other character, spaces included, is a cell.
    pub fn with_markers(text: &str, markers: Markers) -> Result<Self, GraphError> {
        let text = text.trim_end_matches(['\n', '\r']);
        let chars = if text.is_empty() {
            Vec::new()
        } else {
            text.lines().map(|l| l.chars().collect()).collect()
        };
        Self::from_matrix(chars, markers)
    }

    /// Build a graph from an already split character matrix.
    pub fn from_matrix(chars: Vec<Vec<char>>, markers: Markers) -> Result<Self, GraphError> {
        markers.validate()?;

        let Some(first) = chars.first() else {
            return Err(GraphError::EmptyGrid);
        };
        let expected = first.len();
        for (row, line) in chars.iter().enumerate() {
            if line.len() != expected {
                return Err(GraphError::InconsistentSize {
                    row,
                    len: line.len(),
                    expected,
                });
            }
        }
        let bounds = Range::with_size(chars.len(), expected);
        let at = |p: Point| chars[p.r as usize][p.c as usize];

        let start = find_marker(bounds, &markers, Role::Start, at)?;
        let stop = find_marker(bounds, &markers, Role::Goal, at)?;

        let mut cells = vec![None; bounds.len()];
        let mut nodes = Vec::new();
        for p in bounds {
            let ch = at(p);
            if ch == markers.obstacle {
                continue;
            }
            if ch != markers.start && ch != markers.goal && ch != markers.empty {
                return Err(GraphError::InvalidRune { ch, pos: p });
            }
            let id = NodeId(nodes.len());
            nodes.push(Node::new(p.r, p.c));
            if let Some(i) = bounds.index(p) {
                cells[i] = Some(id);
            }
        }

        // Every walkable cell looks outward, so each edge is added once from
        // each end.
        for node in nodes.iter_mut() {
            for n in node.pos().neighbors_4() {
                if let Some(nid) = bounds.index(n).and_then(|i| cells[i]) {
                    node.connect(nid);
                }
            }
        }

        // A lower-case obstacle marker can designate the start or goal.
        let node_of = |role: Role, p: Point| {
            bounds
                .index(p)
                .and_then(|i| cells[i])
                .ok_or(GraphError::BlockedMarker { role, pos: p })
        };
        let start = node_of(Role::Start, start)?;
        let stop = node_of(Role::Goal, stop)?;

        log::debug!(
            "dungeon graph: {}x{} cells, {} walkable, start {} goal {}",
            bounds.rows(),
            bounds.cols(),
            nodes.len(),
            nodes[start.0].pos(),
            nodes[stop.0].pos(),
        );

        Ok(Self {
            bounds,
            chars,
            cells,
            nodes,
            markers,
            start,
            stop,
        })
    }

    /// The start node.
    #[inline]
    pub fn start(&self) -> &Node {
        &self.nodes[self.start.0]
    }

    /// The goal node.
    #[inline]
    pub fn stop(&self) -> &Node {
        &self.nodes[self.stop.0]
    }

    #[inline]
    pub fn start_id(&self) -> NodeId {
        self.start
    }

    #[inline]
    pub fn stop_id(&self) -> NodeId {
        self.stop
    }

    /// Look up a node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Like [`node`](Self::node), failing with
    /// [`GraphError::UnknownNode`].
    pub fn try_node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.node(id).ok_or(GraphError::UnknownNode(id))
    }

    /// The node at cell `p`, if that cell is walkable.
    #[inline]
    pub fn node_at(&self, p: Point) -> Option<NodeId> {
        self.bounds.index(p).and_then(|i| self.cells[i])
    }

    /// All nodes, indexed by [`NodeId::index`].
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of walkable cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a valid graph holds at least its start and goal.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Extent of the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows() as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols() as usize
    }

    /// The map the graph was built from.
    #[inline]
    pub fn chars(&self) -> &[Vec<char>] {
        &self.chars
    }

    #[inline]
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Render the map with the path marker drawn along `path`.
    ///
    /// See [`render_with`](Self::render_with).
    pub fn render(&self, path: &[NodeId]) -> Result<String, GraphError> {
        self.render_with(path, |ch| ch.to_string())
    }

    /// Render the map, drawing `paint(path_marker)` on every cell of
    /// `path` except its two endpoints, so the start and goal markers stay
    /// visible. Rows are joined with `'\n'`, without a trailing newline.
    pub fn render_with(
        &self,
        path: &[NodeId],
        paint: impl Fn(char) -> String,
    ) -> Result<String, GraphError> {
        let mut marked = vec![false; self.bounds.len()];
        let inner: &[NodeId] = match path {
            [_, inner @ .., _] => inner,
            _ => &[],
        };
        for &id in path {
            self.try_node(id)?;
        }
        for &id in inner {
            if let Some(i) = self.bounds.index(self.nodes[id.0].pos()) {
                marked[i] = true;
            }
        }

        let mark = paint(self.markers.path);
        let mut out = String::with_capacity(self.bounds.len() + self.rows());
        for (r, line) in self.chars.iter().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            for (c, &ch) in line.iter().enumerate() {
                if marked[r * self.cols() + c] {
                    out.push_str(&mark);
                } else {
                    out.push(ch);
                }
            }
        }
        Ok(out)
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Locate the single cell designated by `role`.
fn find_marker(
    bounds: Range,
    markers: &Markers,
    role: Role,
    at: impl Fn(Point) -> char,
) -> Result<Point, GraphError> {
    let mut found: Option<Point> = None;
    for p in bounds {
        if !markers.designates(role, at(p)) {
            continue;
        }
        if let Some(first) = found {
            return Err(GraphError::DuplicateMarker {
                role,
                first,
                second: p,
            });
        }
        found = Some(p);
    }
    found.ok_or(GraphError::MissingMarker {
        role,
        ch: markers.get(role),
    })
}
