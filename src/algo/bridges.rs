/*!
Bridge (cut edge) detection for undirected multigraphs.

An edge is a **bridge** iff removing it increases the number of connected
components. The search is the classic DFS low-link classification in
O(V + E): a tree edge `(u, v)` is a bridge exactly if no back-edge from the
subtree below `v` reaches `u` or above, i.e. `low(v) > discovery(u)`.
*/

use super::*;

pub trait Bridges: AdjacencyList + NeighborsSlice + Sized {
    /// Returns all bridges of the graph as `Edge(parent, child)` pairs of the
    /// DFS tree, in the order the search classifies them. No further ordering
    /// is guaranteed.
    fn compute_bridges(&self) -> Vec<Edge> {
        BridgeSearch::new(self).compute()
    }
}

impl<G> Bridges for G where G: AdjacencyList + NeighborsSlice {}

/// Depth-first bridge search.
///
/// The recursion is simulated with an explicit stack of
/// `(node, parent, neighbor-position)` frames, so arbitrarily deep DFS trees
/// (e.g. a path graph over the whole node set) cannot overflow the call
/// stack. All traversal state lives in this struct; independent runs never
/// interfere.
pub struct BridgeSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    graph: &'a G,
    visited: NodeBitSet,
    info: Vec<NodeInfo>,
    subtree: Vec<NumNodes>,
    time: Node,
    bridges: Vec<Edge>,
    call_stack: Vec<StackFrame>,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    pub fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            visited: NodeBitSet::new(n),
            info: vec![NodeInfo::default(); n as usize],
            subtree: vec![0; n as usize],
            time: 0,
            bridges: Vec::new(),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Runs the search and returns the bridges.
    pub fn compute(mut self) -> Vec<Edge> {
        self.search_all();
        self.bridges
    }

    /// Runs the search and additionally returns, for every node, the size of
    /// its DFS subtree. For a bridge `Edge(parent, child)` the subtree size
    /// of `child` is exactly the number of nodes severed from `parent`'s side
    /// when the bridge is cut.
    pub fn compute_with_subtree_sizes(mut self) -> (Vec<Edge>, Vec<NumNodes>) {
        self.search_all();
        (self.bridges, self.subtree)
    }

    fn search_all(&mut self) {
        for u in self.graph.vertices() {
            if self.visited.get_bit(u) {
                continue;
            }

            self.push_node(u, u);
            self.search();
        }
    }

    /// Put a pristine stack frame on the call stack. Roughly speaking, this
    /// is the first step to a recursive call of the classic formulation.
    fn push_node(&mut self, node: Node, parent: Node) {
        self.visited.set_bit(node);
        self.time += 1;
        self.info[node as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };
        self.subtree[node as usize] = 1;

        self.call_stack.push(StackFrame {
            node,
            parent,
            next_neighbor: 0,
            // a root has no incoming tree edge to skip
            parent_edge_skipped: node == parent,
        });
    }

    fn search(&mut self) {
        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let u = frame.node;
            let parent = frame.parent;
            let nbs = self.graph.as_neighbors_slice(u);

            while let Some(&v) = nbs.get(frame.next_neighbor as usize) {
                frame.next_neighbor += 1;

                // Skip only the specific edge instance used to descend: each
                // undirected edge contributes exactly one occurrence of
                // `parent` here, so any further occurrence is a parallel
                // edge and must count as a back-edge.
                if v == parent && !frame.parent_edge_skipped {
                    frame.parent_edge_skipped = true;
                    continue;
                }

                if self.visited.get_bit(v) {
                    let v_disc = self.info[v as usize].discovery;
                    self.info[u as usize].update_low(v_disc);
                } else {
                    self.push_node(v, u);
                    continue 'recurse;
                }
            }

            self.call_stack.pop();

            if u != parent {
                let low_u = self.info[u as usize].low;
                let sub_u = self.subtree[u as usize];

                self.info[parent as usize].update_low(low_u);
                self.subtree[parent as usize] += sub_u;

                if low_u > self.info[parent as usize].discovery {
                    self.bridges.push(Edge(parent, u));
                }
            }
        }
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    discovery: Node,
    low: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

#[derive(Clone, Copy)]
struct StackFrame {
    node: Node,
    parent: Node,
    next_neighbor: NumNodes,
    parent_edge_skipped: bool,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    /// Naive quadratic reference: an edge is a bridge iff dropping one of its
    /// instances increases the number of connected components.
    fn reference_bridges<G>(graph: &G) -> Vec<Edge>
    where
        G: AdjacencyList,
    {
        let mut edges = graph.edges(true).collect_vec();
        edges.sort_unstable();

        let components = |g: &AdjArray| g.connected_components().count();

        let original = AdjArray::from_edges(graph.number_of_nodes(), edges.iter());
        let full = components(&original);

        let mut bridges = edges
            .iter()
            .enumerate()
            .filter_map(|(i, &e)| {
                let pruned = AdjArray::from_edges(
                    graph.number_of_nodes(),
                    edges
                        .iter()
                        .enumerate()
                        .filter_map(|(j, f)| (i != j).then_some(f)),
                );
                (components(&pruned) > full).then_some(e)
            })
            .collect_vec();

        bridges.dedup();
        bridges
    }

    #[test]
    fn bridges_in_path() {
        for n in [2, 5, 10, 15] {
            let mut graph = AdjArray::new(n);
            graph.connect_path(0..n);

            let mut bridges = graph.compute_bridges();
            bridges.iter_mut().for_each(|e| *e = e.normalized());
            bridges.sort_unstable();

            assert_eq!(bridges, graph.ordered_edges(true));
            assert_eq!(bridges.len(), n as usize - 1);
        }
    }

    #[test]
    fn cycles_have_no_bridges() {
        for n in [3, 4, 7, 100] {
            let mut graph = AdjArray::new(n);
            graph.connect_cycle(0..n);

            assert!(graph.compute_bridges().is_empty());
        }
    }

    #[test]
    fn bridge_between_two_triangles() {
        let mut graph = AdjArray::new(6);
        graph.connect_cycle([0, 1, 2]);
        graph.connect_cycle([3, 4, 5]);
        graph.add_edge(2, 3);

        assert_eq!(graph.compute_bridges(), vec![Edge(2, 3)]);
    }

    #[test]
    fn bridge_in_sample_network() {
        // two cycles joined by a link, plus a pendant node
        let mut graph = AdjArray::new(7);
        graph.connect_cycle([0, 1, 2]);
        graph.connect_cycle([3, 4, 5]);
        graph.add_edge(1, 3);
        graph.add_edge(4, 6);

        let bridges = graph
            .compute_bridges()
            .iter()
            .map(|e| e.normalized())
            .sorted()
            .collect_vec();
        assert_eq!(bridges, vec![Edge(1, 3), Edge(4, 6)]);
    }

    #[test]
    fn parallel_edges_are_never_bridges() {
        // 0 = 1 - 2 (doubled left edge, single right edge)
        let graph = AdjArray::from_edges(3, [(0, 1), (0, 1), (1, 2)]);
        assert_eq!(graph.compute_bridges(), vec![Edge(1, 2)]);

        // doubling every edge kills all bridges
        let graph = AdjArray::from_edges(4, [(0, 1), (0, 1), (1, 2), (1, 2), (2, 3), (2, 3)]);
        assert!(graph.compute_bridges().is_empty());
    }

    #[test]
    fn two_cycle_is_bridgeless() {
        let graph = AdjArray::from_edges(2, [(0, 1), (0, 1)]);
        assert!(graph.compute_bridges().is_empty());
    }

    #[test]
    fn isolated_nodes_are_ignored() {
        let graph = AdjArray::from_edges(6, [(0, 1)]);
        assert_eq!(graph.compute_bridges(), vec![Edge(0, 1)]);

        let graph = AdjArray::new(4);
        assert!(graph.compute_bridges().is_empty());

        let graph = AdjArray::new(0);
        assert!(graph.compute_bridges().is_empty());
    }

    #[test]
    fn every_tree_edge_is_a_bridge() {
        let rng = &mut Pcg64::seed_from_u64(1337);

        for n in [2, 10, 100, 1000] {
            let graph = AdjArray::random_tree(rng, n);

            let bridges = graph.compute_bridges();
            assert_eq!(bridges.len(), n as usize - 1);

            let normalized = bridges.iter().map(|e| e.normalized()).sorted().collect_vec();
            assert_eq!(normalized, graph.ordered_edges(true));
        }
    }

    #[test]
    fn deep_path_does_not_overflow_the_stack() {
        let n: NumNodes = 100_000;
        let mut graph = AdjArray::new(n);
        graph.connect_path(0..n);

        assert_eq!(graph.compute_bridges().len(), n as usize - 1);
    }

    #[test]
    fn subtree_sizes_count_severed_nodes() {
        // path 0-1-2-3: cutting (1,2) severs two nodes from either side
        let mut graph = AdjArray::new(4);
        graph.connect_path(0..4);

        let (bridges, subtree) = BridgeSearch::new(&graph).compute_with_subtree_sizes();
        assert_eq!(bridges.len(), 3);
        for &Edge(_, child) in &bridges {
            assert_eq!(subtree[child as usize], 3 - child as NumNodes + 1);
        }
    }

    #[test]
    fn agrees_with_naive_reference_on_random_graphs() {
        let rng = &mut Pcg64::seed_from_u64(987);

        for n in [5, 10, 25, 50] {
            for avg_deg in [0.5, 1.0, 2.0, 4.0] {
                for _ in 0..5 {
                    let graph = AdjArray::gnp(rng, n, avg_deg / n as f64);

                    let computed = graph
                        .compute_bridges()
                        .iter()
                        .map(|e| e.normalized())
                        .sorted()
                        .collect_vec();

                    assert_eq!(computed, reference_bridges(&graph), "n={n} deg={avg_deg}");
                }
            }
        }
    }
}
