use super::*;

/// An undirected multigraph representation
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArray = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArray = UndirectedGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> NeighborsSlice for UndirectedGraph<Nbs> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[u as usize].as_slice()
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        assert_ne!(u, v, "self-loops are not supported");
        assert!((u as usize) < self.nbs.len());

        // the second index check is implicit
        self.nbs[v as usize].add_neighbor(u);
        self.nbs[u as usize].add_neighbor(v);
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        let n = self.nbs.len();
        if u == v || u as usize >= n || v as usize >= n {
            return false;
        }

        self.add_edge(u, v);
        true
    }
}
