use rand_distr::{Distribution, Uniform};

use super::*;

/// `G(n,p)` graphs contain every possible edge `(u, v)` with `u < v`
/// independently with probability `p`. Self-loops and parallel edges cannot
/// occur by construction.
///
/// The stream enumerates all `n * (n - 1) / 2` candidate pairs, which is
/// perfectly fine for the moderate test instances this crate targets.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let n = self.n;
        let p = self.p.expect("probability of Gnp was not set");

        (0..n)
            .flat_map(move |u| ((u + 1)..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}

/// Generator for a random tree over nodes `0..n`.
///
/// Every node `v > 0` attaches to a uniformly chosen earlier node, making
/// node `0` the root. The result is connected, cycle-free and has exactly
/// `n - 1` edges: every edge of the output is a cut edge.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree {
    n: NumNodes,
}

impl RandomTree {
    /// Creates a new random tree generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for RandomTree {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for RandomTree {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        (1..self.n).map(move |v| {
            // sampling from 0..v keeps the attachment acyclic
            let u = Uniform::new(0, v).unwrap().sample(rng);
            Edge(u, v)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{algo::*, ops::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn gnp_extremes() {
        let rng = &mut Pcg64::seed_from_u64(42);

        for n in [1 as NumNodes, 5, 20] {
            assert!(Gnp::new().nodes(n).prob(0.0).generate(rng).is_empty());

            let complete = Gnp::new().nodes(n).prob(1.0).generate(rng);
            assert_eq!(complete.len(), (n as usize * (n as usize - 1)) / 2);
            assert!(complete.iter().all(|e| e.is_normalized() && !e.is_loop()));
        }
    }

    #[test]
    fn gnp_respects_the_model() {
        let rng = &mut Pcg64::seed_from_u64(7);

        let edges = Gnp::new().nodes(100).prob(0.3).generate(rng);
        assert!(edges.iter().all(|&Edge(u, v)| u < v && v < 100));

        // expectation is 1485; a wild miss indicates broken sampling
        let possible = 100 * 99 / 2;
        assert!(edges.len() > possible / 5 && edges.len() < possible / 2);
    }

    #[test]
    fn random_trees_are_trees() {
        let rng = &mut Pcg64::seed_from_u64(9);

        for n in [1, 2, 10, 200] {
            let graph = AdjArray::random_tree(rng, n);

            assert_eq!(graph.number_of_edges(), n - 1);
            assert_eq!(graph.connected_components().count(), 1);
        }
    }
}
