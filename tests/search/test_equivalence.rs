use knot_diagrams::diagram::{canonical_key, Endpoint, PlanarDiagram};
use knot_diagrams::moves::*;
use knot_diagrams::invariant::fingerprint;
use knot_diagrams::search::reduce_equivalent_diagrams;

use proptest::prelude::*;
use proptest::proptest;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{knots, strategy};

/// `d`, `d` with one poke, and `d` with one kink.
fn variants(d: &PlanarDiagram) -> Vec<PlanarDiagram> {
    let config = SearchConfig::default();
    let poke = find::<Poke>(d, &config)[0];
    let poked = execute::<Poke>(d, &poke, &config).unwrap();
    let kinked = execute::<AddKink>(d, &(Endpoint::new(1, 2), Sign::Positive), &config).unwrap();
    vec![poked, d.clone(), kinked]
}

#[test]
fn test_two_knots_give_two_classes() {
    let _ = env_logger::builder().is_test(true).try_init();
    let trefoil = knots::trefoil();
    let figure_eight = knots::figure_eight();
    let mut diagrams = variants(&trefoil);
    diagrams.extend(variants(&figure_eight));

    let classes = reduce_equivalent_diagrams(&diagrams, 3, false).unwrap();
    let members: Vec<Vec<usize>> = classes.iter().map(|c| c.members.clone()).collect();
    assert_eq!(members, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    assert_eq!(canonical_key(&classes[0].representative), canonical_key(&trefoil));
    assert_eq!(canonical_key(&classes[1].representative), canonical_key(&figure_eight));
}

/// `d` followed by three seeded randomizations of it.
fn randomized_family(d: &PlanarDiagram, seeds: [u64; 3], steps: usize) -> Vec<PlanarDiagram> {
    let config = SearchConfig::default();
    let mut out = vec![d.clone()];
    for seed in seeds {
        let mut rng = StdRng::seed_from_u64(seed);
        out.push(randomize(d, steps, &mut rng, &config).unwrap());
    }
    out
}

#[test]
fn test_randomized_knots_give_two_classes() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (seeds, steps) in [([0, 1, 2], 3), ([1, 2, 3], 4)] {
        let mut diagrams = randomized_family(&knots::trefoil(), seeds, steps);
        diagrams.extend(randomized_family(&knots::figure_eight(), seeds, steps));

        let classes = reduce_equivalent_diagrams(&diagrams, 4, false).unwrap();
        let members: Vec<Vec<usize>> = classes.iter().map(|c| c.members.clone()).collect();
        assert_eq!(members, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]], "seeds {seeds:?}");
        assert_eq!(classes[0].representative.number_of_crossings(), 3);
        assert_eq!(classes[1].representative.number_of_crossings(), 4);
    }
}

#[test]
fn test_zero_depth_compares_inputs_only() {
    let trefoil = knots::trefoil();
    let relabelled = knot_diagrams::diagram::canonical(&trefoil).unwrap();
    let poked = variants(&trefoil).remove(0);
    let classes = reduce_equivalent_diagrams(&[trefoil, relabelled, poked], 0, false).unwrap();
    let members: Vec<Vec<usize>> = classes.iter().map(|c| c.members.clone()).collect();
    assert_eq!(members, vec![vec![0, 1], vec![2]]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_classes_never_mix_knots(
        trefoils in proptest::collection::vec(strategy::arb_randomized(knots::trefoil(), 2), 2),
        eights in proptest::collection::vec(strategy::arb_randomized(knots::figure_eight(), 2), 2),
    ) {
        let diagrams: Vec<PlanarDiagram> = trefoils.into_iter().chain(eights).collect();
        let classes = reduce_equivalent_diagrams(&diagrams, 2, false).unwrap();
        prop_assert!(classes.len() >= 2);
        let mut seen: Vec<usize> = classes.iter().flat_map(|c| c.members.clone()).collect();
        seen.sort();
        prop_assert_eq!(seen, (0..4).collect::<Vec<_>>());
        for class in &classes {
            let trefoil_side = class.members[0] < 2;
            prop_assert!(class.members.iter().all(|&i| (i < 2) == trefoil_side));
            prop_assert_eq!(
                fingerprint(&class.representative),
                fingerprint(&diagrams[class.members[0]])
            );
        }
    }
}
