use knot_diagrams::diagram::PlanarDiagram;
use knot_diagrams::moves::*;

use proptest::prelude::*;
use proptest::proptest;

use crate::{knots, strategy};

/// Execute `R` at up to `limit` of its locations, checking every result.
fn check_family<R: ReidemeisterMove>(d: &PlanarDiagram, config: &SearchConfig, limit: usize) {
    for location in find::<R>(d, config).iter().take(limit) {
        let e = execute::<R>(d, location, config)
            .unwrap_or_else(|err| panic!("{} at {location:?}: {err}", R::NAME));
        assert!(
            e.sanity_check().is_ok(),
            "{} at {location:?}: {:?}",
            R::NAME,
            e.sanity_check()
        );
    }
}

fn check_all_families(d: &PlanarDiagram, limit: usize) {
    let config = SearchConfig::all();
    check_family::<RemoveKink>(d, &config, limit);
    check_family::<AddKink>(d, &config, limit);
    check_family::<Unpoke>(d, &config, limit);
    check_family::<Poke>(d, &config, limit);
    check_family::<Triangle>(d, &config, limit);
    check_family::<Slide>(d, &config, limit);
    check_family::<Twist>(d, &config, limit);
    check_family::<Untwist>(d, &config, limit);
    check_family::<Flype>(d, &config, limit);
    check_family::<Detour>(d, &config, limit);
}

#[test]
fn test_every_location_of_small_diagrams() {
    for d in [
        knots::trefoil(),
        knots::figure_eight(),
        knots::theta(),
        PlanarDiagram::unknot(),
    ] {
        check_all_families(&d, usize::MAX);
    }
}

#[test]
fn test_disabled_families_find_nothing() {
    let d = knots::theta();
    let config = SearchConfig::default().disable(MoveKind::R5);
    assert!(find::<Twist>(&d, &config).is_empty());
    assert!(!find::<Twist>(&d, &SearchConfig::default()).is_empty());
    assert!(find::<Flype>(&knots::five_two(), &SearchConfig::all()).is_empty());
}

#[test]
fn test_executor_rejects_foreign_location() {
    let d = knots::trefoil();
    let theta = knots::theta();
    let config = SearchConfig::default();
    let twist = find::<Twist>(&theta, &config)[0];
    assert!(execute::<Twist>(&d, &twist, &config).is_err());
    assert_eq!(d, knots::trefoil());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_moves_keep_invariants(d in strategy::arb_diagram(3)) {
        check_all_families(&d, 6);
    }

    #[test]
    fn test_vertex_moves_keep_invariants(d in strategy::arb_randomized(knots::theta(), 2)) {
        let config = SearchConfig::default();
        let twisted = apply::<Twist>(&d, &mut Choice::First, &config).unwrap().unwrap();
        check_all_families(&twisted, 6);
        prop_assert_eq!(twisted.number_of_crossings(), d.number_of_crossings() + 1);
    }
}
