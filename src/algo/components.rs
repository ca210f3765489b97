/*!
Connected components and the per-node component size table.

Component sizing runs on the original, un-pruned graph and is independent of
the bridge search; combining the two is the job of
[`CriticalityRanker`](crate::algo::CriticalityRanker).
*/

use itertools::Itertools;

use super::*;

/// Connectivity queries for undirected graphs.
pub trait Connectivity: Traversal {
    /// Iterates over the connected components of the graph, one `Vec<Node>`
    /// at a time. Singleton components are included.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Partition the graph into its connected components
    fn partition_into_connected_components(&self) -> Partition {
        self.connected_components()
            .into_partition(self.number_of_nodes())
    }

    /// Returns for every node the number of nodes reachable from it,
    /// the node itself included. Nodes of the same component report the
    /// identical value; isolated nodes report `1`.
    fn component_sizes(&self) -> Vec<NumNodes> {
        let part = self.partition_into_connected_components();
        self.vertices()
            .map(|u| {
                // the component sweep assigned every node to a class
                part.number_in_class(part.class_of_node(u).unwrap())
            })
            .collect()
    }
}

impl<G> Connectivity for G where G: AdjacencyList {}

/// Iterator over the connected components of an undirected graph.
///
/// Emits the nodes of one component at a time (in BFS order from the
/// smallest-numbered member); the components themselves are ordered by their
/// smallest member.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<'a, G> Iterator for ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}
