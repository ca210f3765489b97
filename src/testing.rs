/// Shared test harness for graph representations: every backend must agree
/// with a naive reference adjacency structure, parallel edges included.
macro_rules! test_graph_reprs {
    ($env:ident, $graph:ident) => {
        mod $env {
            use crate::{ops::*, prelude::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m` random loop-free edges for nodes `0..n`, duplicates allowed
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
                (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = loop {
                            let v = rng.random_range(0..n);
                            if v != u {
                                break v;
                            }
                        };
                        Edge(u, v)
                    })
                    .collect_vec()
            }

            #[test]
            fn graph_new() {
                for n in 0..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.is_singleton_graph());
                }
            }

            #[test]
            fn adjacency_matches_reference() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [2 as NumNodes, 10, 20, 50] {
                    for m in [n / 2, n * 2, n * 5] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m as NumEdges);

                            let mut reference: Vec<Vec<Node>> = vec![vec![]; n as usize];
                            for &Edge(u, v) in &edges {
                                reference[u as usize].push(v);
                                reference[v as usize].push(u);
                            }

                            let graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges(), m as NumEdges);

                            for u in graph.vertices() {
                                assert_eq!(
                                    graph.neighbors_of(u).collect_vec(),
                                    reference[u as usize],
                                    "neighborhood of {u} diverged"
                                );
                                assert_eq!(graph.degree_of(u), reference[u as usize].len() as NumNodes);
                                assert_eq!(graph.as_neighbors_slice(u), &reference[u as usize][..]);
                            }

                            let mut expected = edges.iter().map(|e| e.normalized()).collect_vec();
                            expected.sort_unstable();
                            assert_eq!(graph.ordered_edges(true), expected);
                        }
                    }
                }
            }

            #[test]
            #[should_panic]
            fn add_edge_rejects_self_loop() {
                let mut graph = <$graph>::new(2);
                graph.add_edge(1, 1);
            }

            #[test]
            #[should_panic]
            fn add_edge_rejects_out_of_range() {
                let mut graph = <$graph>::new(2);
                graph.add_edge(0, 2);
            }
        }
    };
}

pub(crate) use test_graph_reprs;
