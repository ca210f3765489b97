/*!
# Graph Representations

Adjacency-array storage backends for undirected multigraphs.

Both provided representations store, for every node, the ordered sequence of
its neighbors (insertion order = edge input order). Undirected edges are
stored symmetrically: adding `(u, v)` appends `v` to `u`'s list and `u` to
`v`'s list, so for every occurrence of `v` in `u`'s list there is a matching
occurrence of `u` in `v`'s list. Parallel edges simply appear multiple times.

- [`AdjArray`] backs each neighborhood with a `Vec<Node>`.
- [`SparseAdjArray`] uses a `SmallVec` with inline capacity and avoids heap
  allocations for low-degree nodes.

A bitset-backed neighborhood is deliberately absent: it cannot represent edge
multiplicity, which the bridge search relies on.
*/

use smallvec::{Array, SmallVec};

use crate::{edge::*, node::*, ops::*};

mod undirected;

pub use undirected::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Creates an empty Neighborhood for a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood, parallel edges counted
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in insertion order
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Appends a neighbor without checking if this neighbor exists beforehand.
    /// This is what makes the representations multigraph-capable.
    fn add_neighbor(&mut self, u: Node);

    /// Returns the neighbors as a slice in insertion order
    fn as_slice(&self) -> &[Node];
}

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}
