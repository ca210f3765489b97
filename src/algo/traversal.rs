/*!
Generic graph traversal iterators.

The traversal order is determined by the frontier container:
- [`VecDeque`] -> queue semantics -> **BFS**
- [`Vec`] -> stack semantics -> **DFS**

Both variants mark nodes as visited when they enter the frontier, so every
node is yielded at most once even in multigraphs where a neighbor appears
once per parallel edge.
*/

use std::collections::VecDeque;

use super::*;

/// Abstraction for the traversal frontier data structure.
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a
/// set of visited nodes. Exhausting the iterator covers the connected
/// component of the starting node; [`TraversalSearch::try_restart_at_unvisited`]
/// then moves on to the next component.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Starts a new traversal at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Checks if a given node `u` has already been visited.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Seeds the exhausted frontier with the smallest unvisited node and
    /// returns *true* on success. Returns *false* if all nodes were visited.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        if let Some(u) = self.visited.iter_cleared_bits().next() {
            self.visited.set_bit(u);
            self.sequencer.push(u);
            true
        } else {
            false
        }
    }
}

impl<'a, G, S> Iterator for TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }
}

/// A high-level trait that exposes traversal algorithms directly as methods
/// on graph data structures.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a BFS iterator starting at `start`.
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns a DFS iterator starting at `start`.
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList {}
