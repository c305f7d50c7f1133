use knot_diagrams::diagram::{Endpoint, PlanarDiagram, Unoriented};
use knot_diagrams::invariant::fingerprint;
use knot_diagrams::moves::*;

use proptest::prelude::*;
use proptest::proptest;

use crate::{knots, strategy};

fn assert_fingerprint_kept<R: ReidemeisterMove>(d: &PlanarDiagram, config: &SearchConfig, limit: usize) {
    let expected = fingerprint(d);
    assert!(expected.is_some());
    for location in find::<R>(d, config).iter().take(limit) {
        let e = execute::<R>(d, location, config).unwrap();
        assert_eq!(fingerprint(&e), expected, "{} at {location:?}", R::NAME);
    }
}

#[test]
fn test_reducible_unknot_is_trivial() {
    let d = knot_diagrams::diagram::from_pd_code(&knots::REDUCIBLE_UNKNOT).unwrap();
    assert_eq!(fingerprint(&d), fingerprint(&PlanarDiagram::<Unoriented>::unknot()));
    assert_ne!(fingerprint(&knots::trefoil()), fingerprint(&knots::figure_eight()));
    assert_eq!(fingerprint(&knots::theta()), None);
}

#[test]
fn test_degree_two_slides_keep_fingerprint() {
    // a degree-2 vertex on one arc of the trefoil, slid through its neighbouring crossings
    let mut d = knots::trefoil();
    let a = Endpoint::new(0, 0);
    let b = d.twin(a).unwrap();
    let v = d.add_vertex(3, 2).unwrap();
    d.connect(a, Endpoint::new(v, 0)).unwrap();
    d.connect(b, Endpoint::new(v, 1)).unwrap();
    assert!(d.sanity_check().is_ok());

    let config = SearchConfig::default();
    let slides = find_slides(&d, Change::Preserve);
    assert!(!slides.is_empty());
    for location in slides {
        let e = execute::<Slide>(&d, &location, &config).unwrap();
        assert!(e.sanity_check().is_ok());
        assert_eq!(e.number_of_crossings(), 3);
        assert_eq!(fingerprint(&e), fingerprint(&d));
    }
}

#[test]
fn test_detours_keep_fingerprint() {
    let d = knots::figure_eight();
    assert_fingerprint_kept::<Detour>(&d, &SearchConfig::default(), 8);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn test_moves_keep_fingerprint(d in strategy::arb_knot(2)) {
        let config = SearchConfig::all();
        assert_fingerprint_kept::<RemoveKink>(&d, &config, 4);
        assert_fingerprint_kept::<AddKink>(&d, &config, 4);
        assert_fingerprint_kept::<Unpoke>(&d, &config, 4);
        assert_fingerprint_kept::<Poke>(&d, &config, 4);
        assert_fingerprint_kept::<Triangle>(&d, &config, 4);
        assert_fingerprint_kept::<Flype>(&d, &config, 4);
    }
}
