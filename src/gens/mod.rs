/*!
# Graph Generators

Deterministic substructure builders (paths, cycles, cliques) and random graph
models used to produce test and benchmark instances.

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

The [`RandomGraph`] trait additionally abstracts whole-graph construction for
every type implementing `GraphFromScratch`.
*/

use num::{One, Zero};
use rand::Rng;

use crate::prelude::*;

mod random;
mod substructures;

pub use random::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
///
/// Requires that the implementing type supports construction from a set of edges.
/// Provided implementations use the corresponding edge generators under the hood.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph (loop-free by model).
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a uniformly attached random tree with `n` nodes and root `0`.
    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).generate(rng))
    }

    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, RandomTree::new().nodes(n).generate(rng))
    }
}

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}
