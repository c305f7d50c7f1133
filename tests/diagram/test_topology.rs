use knot_diagrams::diagram::*;
use knot_diagrams::topology::*;

use proptest::prelude::*;
use proptest::proptest;

use crate::{knots, strategy};

#[test]
fn test_hopf_link_has_two_components() {
    let hopf = from_pd_code(&[[0, 2, 1, 3], [2, 0, 3, 1]]).unwrap();
    assert!(hopf.sanity_check().is_ok());
    assert_eq!(number_of_link_components(&hopf), 2);
    assert!(!is_knot(&hopf));
    assert!(is_alternating(&hopf));
    assert_eq!(number_of_components(&hopf), 1);
}

#[test]
fn test_theta_strands_end_at_vertices() {
    let theta = knots::theta();
    let strands = link_components(&theta);
    assert_eq!(strands.len(), 3);
    assert!(!is_knot(&theta));
    assert!(cut_nodes(&theta).is_empty());
    assert!(bridges(&theta).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_randomized_knots_stay_knots(d in strategy::arb_knot(4)) {
        prop_assert!(is_knot(&d));
        prop_assert_eq!(number_of_link_components(&d), 1);
        prop_assert_eq!(number_of_components(&d), 1);
    }

    #[test]
    fn test_dual_graph_counts(d in strategy::arb_diagram(4)) {
        let dual = dual_graph(&d);
        prop_assert_eq!(dual.faces.len(), d.faces().len());
        prop_assert_eq!(dual.edges.len(), d.arcs().len());
        for (i, j, arc) in &dual.edges {
            prop_assert!(dual.faces[*i].contains(&arc.first()));
            prop_assert!(dual.faces[*j].contains(&arc.second()));
        }
    }

    #[test]
    fn test_kinks_have_a_sign(d in strategy::arb_knot(4)) {
        for e in kinks(&d) {
            let sign = kink_sign(&d, e).unwrap();
            prop_assert!(sign == 1 || sign == -1);
            prop_assert_eq!(d.twin(e).unwrap(), e.rotated(1, 4));
        }
    }
}
