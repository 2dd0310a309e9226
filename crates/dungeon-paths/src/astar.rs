use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::node::{NodeId, Scores};

/// Where a node stands in the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    /// Discovered; `order` counts arrivals in the open set and breaks ties.
    Open { order: u64 },
    Closed,
}

/// Open-set entry, ordered so that `BinaryHeap` pops the smallest `f` and,
/// among equal `f`, the node that was discovered first.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    id: NodeId,
    f: f64,
    g: f64,
    order: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search between two nodes of a [`Graph`].
///
/// Edge costs and the heuristic are both Euclidean distances. The engine
/// keeps `g`, `h` and `prev` for every node in its own table, so the graph
/// is only borrowed and several engines can run over one graph.
///
/// Among open nodes with equal `f`, the one discovered first is expanded
/// first. Which of several equally short paths is returned therefore
/// depends on the neighbour order fixed at graph construction.
#[derive(Debug, Clone)]
pub struct Astar<'g> {
    graph: &'g Graph,
    start: NodeId,
    goal: NodeId,
    scores: Vec<Scores>,
    visits: Vec<Visit>,
    open: BinaryHeap<OpenEntry>,
    arrivals: u64,
    expanded: usize,
    found: bool,
}

impl<'g> Astar<'g> {
    /// Prepare a search from `start` to `goal`.
    ///
    /// Fails with [`GraphError::UnknownNode`] if either id is not a node of
    /// `graph`.
    pub fn new(graph: &'g Graph, start: NodeId, goal: NodeId) -> Result<Self, GraphError> {
        graph.try_node(start)?;
        graph.try_node(goal)?;
        Ok(Self::between(graph, start, goal))
    }

    /// Prepare a search between the graph's own start and goal.
    pub fn from_graph(graph: &'g Graph) -> Self {
        Self::between(graph, graph.start_id(), graph.stop_id())
    }

    fn between(graph: &'g Graph, start: NodeId, goal: NodeId) -> Self {
        let len = graph.len();
        Self {
            graph,
            start,
            goal,
            scores: vec![Scores::default(); len],
            visits: vec![Visit::Unvisited; len],
            open: BinaryHeap::new(),
            arrivals: 0,
            expanded: 0,
            found: false,
        }
    }

    /// Run the search.
    ///
    /// Returns the nodes from start to goal, both included, or an empty
    /// vector if the goal cannot be reached. Each call starts from scratch.
    pub fn search(&mut self) -> Vec<NodeId> {
        self.reset();

        let graph = self.graph;
        let nodes = graph.nodes();
        let goal = &nodes[self.goal.0];

        let si = self.start.0;
        self.scores[si] = Scores {
            g: 0.0,
            h: nodes[si].distance(goal),
            prev: None,
        };
        self.enter_open(self.start, None);

        while let Some(entry) = self.open.pop() {
            let xi = entry.id.0;
            // Skip entries superseded by a cheaper arrival.
            if !matches!(self.visits[xi], Visit::Open { .. }) || entry.g != self.scores[xi].g {
                continue;
            }

            if entry.id == self.goal {
                self.found = true;
                let path = self.reconstruct(entry.id);
                log::debug!(
                    "astar: reached {} in {} steps, cost {:.3}, {} nodes expanded",
                    goal.pos(),
                    path.len() - 1,
                    self.scores[xi].g,
                    self.expanded
                );
                return path;
            }

            self.visits[xi] = Visit::Closed;
            self.expanded += 1;

            let x = &nodes[xi];
            let x_g = self.scores[xi].g;
            for &y in x.near() {
                let yi = y.0;
                let known = match self.visits[yi] {
                    Visit::Closed => continue,
                    Visit::Open { order } => Some(order),
                    Visit::Unvisited => None,
                };
                let yn = &nodes[yi];
                let candidate = x_g + x.distance(yn);
                if known.is_some() && candidate >= self.scores[yi].g {
                    continue;
                }
                self.scores[yi] = Scores {
                    g: candidate,
                    h: yn.distance(goal),
                    prev: Some(entry.id),
                };
                self.enter_open(y, known);
            }
        }

        log::debug!(
            "astar: no path from {} to {}, {} nodes expanded",
            nodes[si].pos(),
            goal.pos(),
            self.expanded
        );
        Vec::new()
    }

    /// Search state of `id` after the last run.
    pub fn scores(&self, id: NodeId) -> Option<&Scores> {
        self.scores.get(id.0)
    }

    /// Cost of the path found by the last run, if any.
    pub fn cost(&self) -> Option<f64> {
        self.found.then(|| self.scores[self.goal.0].g)
    }

    /// Number of nodes moved to the closed set during the last run.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> NodeId {
        self.goal
    }

    fn reset(&mut self) {
        self.scores.fill(Scores::default());
        self.visits.fill(Visit::Unvisited);
        self.open.clear();
        self.arrivals = 0;
        self.expanded = 0;
        self.found = false;
    }

    /// Put `id` in the open set with its current scores. A node that is
    /// already open keeps its first arrival order.
    fn enter_open(&mut self, id: NodeId, order: Option<u64>) {
        let order = order.unwrap_or_else(|| {
            let o = self.arrivals;
            self.arrivals += 1;
            o
        });
        let s = self.scores[id.0];
        self.visits[id.0] = Visit::Open { order };
        self.open.push(OpenEntry {
            id,
            f: s.f(),
            g: s.g,
            order,
        });
    }

    fn reconstruct(&self, last: NodeId) -> Vec<NodeId> {
        let mut path = vec![last];
        let mut cur = last;
        while let Some(prev) = self.scores[cur.0].prev {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}

impl Graph {
    /// Shortest path from the graph's start to its goal.
    ///
    /// Shorthand for [`Astar::from_graph`] followed by [`Astar::search`].
    pub fn astar_path(&self) -> Vec<NodeId> {
        Astar::from_graph(self).search()
    }
}
