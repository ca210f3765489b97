/*!
# Substructure Generators

Utility methods to connect common motifs (paths, cycles, cliques) inside an
already existing graph. Useful for enriching a graph with known
sub-components when building test or benchmark instances.
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge insertion.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    /// - Two nodes yield a parallel pair of edges; a single node adds nothing
    ///   (a self-loop is not representable).
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph),
    /// one edge per unordered pair.
    fn connect_clique(&mut self, nodes: &[Node]);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            let mut closes = false;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
                closes = true;
            }

            if closes {
                self.add_edge(prev, first);
            }
        }
    }

    fn connect_clique(&mut self, nodes: &[Node]) {
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.add_edge(u, v);
        }
    }
}
