use knot_diagrams::diagram::{canonical_key, from_pd_code, PlanarDiagram};
use knot_diagrams::invariant::fingerprint;
use knot_diagrams::moves::{MoveKind, SearchConfig};
use knot_diagrams::search::*;

use proptest::prelude::*;
use proptest::proptest;

use crate::{knots, strategy};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_reducible_unknot_simplifies_to_a_loop() {
    init_logging();
    let d = from_pd_code(&knots::REDUCIBLE_UNKNOT).unwrap();
    let decreased = crossing_decreasing_space(&d, &SearchConfig::default()).unwrap();
    assert_eq!(decreased.number_of_crossings(), 0);
    assert_eq!(simplify(&d, 2, false).unwrap(), PlanarDiagram::unknot());
    assert_eq!(simplify(&d, 2, true).unwrap(), PlanarDiagram::unknot());
}

#[test]
fn test_simplify_without_moves_only_normalizes() {
    let d = from_pd_code(&knots::REDUCIBLE_UNKNOT).unwrap();
    let s = simplify_with(&d, 3, &SearchConfig::none()).unwrap();
    assert_eq!(s.number_of_crossings(), 5);
    assert_eq!(canonical_key(&s), canonical_key(&d));
}

#[test]
fn test_minimal_diagrams_are_kept() {
    for d in [knots::trefoil(), knots::figure_eight(), knots::five_two()] {
        let s = simplify(&d, 1, false).unwrap();
        assert_eq!(s.number_of_crossings(), d.number_of_crossings());
        assert_eq!(fingerprint(&s), fingerprint(&d));
    }
}

#[test]
fn test_leveled_set_from_search() {
    let d = knots::trefoil();
    let config = SearchConfig::default().disable(MoveKind::R3);
    let set = crossing_preserving_space(&d, &config).unwrap();
    assert_eq!(set.membership(), Membership::Key);
    assert_eq!(set.len(), 1);
    assert!(set.contains(&d));

    let mut other = LeveledSet::new(Membership::Key);
    other.add(PlanarDiagram::unknot());
    assert!(!set.intersects(&other));
    other.new_level();
    other.add(d.clone());
    assert_eq!(other.levels().len(), 2);
    assert!(set.intersects(&other));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_decreasing_space_is_idempotent(d in strategy::arb_diagram(3)) {
        let config = SearchConfig::default();
        let once = crossing_decreasing_space(&d, &config).unwrap();
        let twice = crossing_decreasing_space(&once, &config).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.number_of_crossings() <= d.number_of_crossings());
        prop_assert!(once.sanity_check().is_ok());
        prop_assert_eq!(fingerprint(&once), fingerprint(&d));
    }

    #[test]
    fn test_decreasing_neighbours_have_fewer_crossings(d in strategy::arb_knot(3)) {
        let config = SearchConfig::default();
        for e in decreasing_neighbours(&d, &config).unwrap() {
            prop_assert!(e.number_of_crossings() < d.number_of_crossings());
            prop_assert_eq!(fingerprint(&e), fingerprint(&d));
        }
    }
}
