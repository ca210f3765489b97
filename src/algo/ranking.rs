/*!
Criticality ranking of bridges.

Combines the bridge search with the component size table into a scored,
deterministically ordered priority list: the higher the score, the more of
the network depends on that single link.
*/

use std::cmp::Reverse;

use itertools::Itertools;

use super::*;

/// A bridge together with its criticality score.
///
/// The edge is normalized (`u <= v`) so that the output does not depend on
/// the orientation in which the search happened to discover the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredBridge {
    pub edge: Edge,
    pub score: NumNodes,
}

/// Selects how a bridge's criticality score is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreMode {
    /// `score = component_size(u) + component_size(v)` against the original,
    /// un-pruned graph. Both endpoints lie in the same component, so this is
    /// twice the component size: a cheap proxy for "how many nodes are
    /// topologically near this link", **not** the number of nodes that would
    /// be cut off. This intentionally approximate semantics is the default
    /// contract.
    #[default]
    EndpointComponents,

    /// `score = min(s, S - s)` where `S` is the size of the bridge's
    /// component and `s` the size of the DFS subtree hanging off the bridge:
    /// the number of nodes actually severed from the larger remainder if the
    /// link is cut.
    SeveredSubtree,
}

/// Scores and ranks the bridges of a graph.
///
/// Configure with the builder-style setters, then call
/// [`CriticalityRanker::compute`]. Output ordering is a hard contract:
/// descending by score, ties broken by ascending `(u, v)` of the normalized
/// edge — reproducible byte-for-byte regardless of edge input order.
pub struct CriticalityRanker<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    graph: &'a G,
    mode: ScoreMode,
}

impl<'a, G> CriticalityRanker<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            mode: ScoreMode::default(),
        }
    }

    /// Selects the scoring semantics (default: [`ScoreMode::EndpointComponents`])
    pub fn set_score_mode(&mut self, mode: ScoreMode) {
        self.mode = mode;
    }

    /// Selects the scoring semantics (default: [`ScoreMode::EndpointComponents`])
    pub fn score_mode(mut self, mode: ScoreMode) -> Self {
        self.set_score_mode(mode);
        self
    }

    /// Runs the full pipeline: bridge search, component sizing on the
    /// original graph, scoring, and the deterministic sort.
    pub fn compute(self) -> Vec<ScoredBridge> {
        let sizes = self.graph.component_sizes();

        let mut scored = match self.mode {
            ScoreMode::EndpointComponents => self
                .graph
                .compute_bridges()
                .into_iter()
                .map(|e| ScoredBridge {
                    edge: e.normalized(),
                    score: sizes[e.0 as usize] + sizes[e.1 as usize],
                })
                .collect_vec(),
            ScoreMode::SeveredSubtree => {
                let (bridges, subtree) = BridgeSearch::new(self.graph).compute_with_subtree_sizes();
                bridges
                    .into_iter()
                    .map(|e| {
                        let Edge(parent, child) = e;
                        let total = sizes[parent as usize];
                        let severed = subtree[child as usize];
                        ScoredBridge {
                            edge: e.normalized(),
                            score: severed.min(total - severed),
                        }
                    })
                    .collect_vec()
            }
        };

        scored.sort_unstable_by_key(|s| (Reverse(s.score), s.edge));
        scored
    }
}

/// Convenience entry point for the whole critical-link pipeline.
pub trait CriticalityRanking: AdjacencyList + NeighborsSlice + Sized {
    /// Ranks all bridges with the default [`ScoreMode::EndpointComponents`]
    /// scoring. See [`CriticalityRanker`] for the ordering contract.
    fn rank_critical_links(&self) -> Vec<ScoredBridge> {
        CriticalityRanker::new(self).compute()
    }
}

impl<G> CriticalityRanking for G where G: AdjacencyList + NeighborsSlice {}
