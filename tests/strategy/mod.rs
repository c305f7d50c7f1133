use knot_diagrams::diagram::PlanarDiagram;
use knot_diagrams::moves::{randomize, SearchConfig};

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::knots;

/// A base diagram with at most `max_steps` random kinks, pokes and R3 moves applied.
pub fn arb_randomized(base: PlanarDiagram, max_steps: usize) -> BoxedStrategy<PlanarDiagram> {
    (any::<u64>(), 0..=max_steps)
        .prop_map(move |(seed, steps)| {
            let mut rng = StdRng::seed_from_u64(seed);
            randomize(&base, steps, &mut rng, &SearchConfig::default())
                .expect("randomizing a sane diagram")
        })
        .boxed()
}

/// Randomized trefoils, figure-eights and theta graphs.
pub fn arb_diagram(max_steps: usize) -> BoxedStrategy<PlanarDiagram> {
    prop_oneof![
        arb_randomized(knots::trefoil(), max_steps),
        arb_randomized(knots::figure_eight(), max_steps),
        arb_randomized(knots::theta(), max_steps),
    ]
    .boxed()
}

/// Randomized knots only, where every vertex has degree two and the bracket is defined.
pub fn arb_knot(max_steps: usize) -> BoxedStrategy<PlanarDiagram> {
    prop_oneof![
        arb_randomized(knots::trefoil(), max_steps),
        arb_randomized(knots::figure_eight(), max_steps),
    ]
    .boxed()
}
