/*!
`critlinks` finds the **critical links** (bridges) of an undirected network and
ranks them by how much connectivity is lost when they fail.

A *bridge* is an edge whose removal increases the number of connected
components. In an infrastructure network (roads, pipes, fibre) these are the
single points of failure, and not all of them are equally important: a bridge
whose failure strands half the network matters more than one that cuts off a
single dead-end node. This crate detects all bridges in linear time and
attaches a *criticality score* to each, yielding a ranked repair/monitoring
priority list.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` where `Edge(u, v)` is treated as
equivalent to `Edge(v, u)` (although we normalize edges often).

Graphs here are **multigraphs**: parallel edges are stored faithfully and a
doubled edge is correctly never a bridge. Self-loops are not representable.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`AdjArray`](crate::repr::AdjArray)
- [`SparseAdjArray`](crate::repr::SparseAdjArray)

Each representation makes different trade-offs in terms of memory usage and lookup/iteration performance.

# Design

Algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before running them on a provided graph.
Alternatively, the common entry points are implemented via traits on the graph itself,
making them usable without configuring the algorithm beforehand:

```
use critlinks::{prelude::*, algo::*, gens::*};

let mut graph = AdjArray::new(7);
graph.connect_cycle([0, 1, 2]);
graph.connect_cycle([3, 4, 5]);
graph.add_edge(1, 3);
graph.add_edge(4, 6);

// all bridges, unordered
assert_eq!(graph.compute_bridges().len(), 2);

// bridges ranked by criticality, most critical first
let ranking = graph.rank_critical_links();
assert_eq!(ranking[0].edge, Edge(1, 3));
assert_eq!(ranking[0].score, 14);
```

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`), a Connected Component Iterator, bridge detection (`graph.bridges()`), and criticality ranking (`graph.rank_critical_links()`),
- [`gens`] includes random graph generators (and deterministic substructures such as paths/cycles/cliques) to build instances at runtime,
- [`ops`] includes the operation traits all representations implement.

In most use-cases, `use critlinks::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;

#[cfg(test)]
pub(crate) mod testing;

/// `critlinks::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
