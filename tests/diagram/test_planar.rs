use knot_diagrams::diagram::*;
use knot_diagrams::error::DiagramError;
use knot_diagrams::topology::number_of_components;

use proptest::prelude::*;
use proptest::proptest;

use crate::{knots, strategy};

fn assert_twin_involution(d: &PlanarDiagram) {
    for &e in d.endpoints() {
        let t = d.twin(e).unwrap();
        assert_ne!(t, e);
        assert_eq!(d.twin(t).unwrap(), e);
    }
}

fn euler_characteristic(d: &PlanarDiagram) -> isize {
    let isolated = d.nodes().filter(|n| n.degree() == 0).count();
    d.number_of_nodes() as isize - d.arcs().len() as isize + (d.faces().len() + isolated) as isize
}

#[test]
fn test_mutation_sequence_keeps_twins() {
    let mut d = knots::theta();
    d.add_vertex(2, 2).unwrap();
    d.connect(Endpoint::new(2, 0), Endpoint::new(2, 1)).unwrap();
    assert_twin_involution(&d);
    assert!(d.sanity_check().is_ok());

    // break one edge of the theta with a new vertex
    let a = Endpoint::new(0, 1);
    let b = d.twin(a).unwrap();
    d.add_vertex(3, 2).unwrap();
    d.connect(a, Endpoint::new(3, 0)).unwrap();
    d.connect(b, Endpoint::new(3, 1)).unwrap();
    assert_twin_involution(&d);
    assert!(d.sanity_check().is_ok());
    assert_eq!(d.number_of_nodes(), 4);
    assert_eq!(number_of_components(&d), 2);

    d.permute_node(NodeId(0), &[2, 0, 1]).unwrap();
    assert_twin_involution(&d);
    assert!(d.sanity_check().is_ok());
}

#[test]
fn test_frozen_diagram_rejects_mutation() {
    let mut d = knots::trefoil();
    d.freeze();
    assert_eq!(d.add_vertex(9, 2), Err(DiagramError::Immutable));
    d.unfreeze().unwrap();
    d.lock();
    assert!(d.unfreeze().is_err());
    assert!(d.copy().add_vertex(9, 2).is_ok());
}

#[test]
fn test_pd_code_round_trip() {
    let d = knots::figure_eight();
    let code = to_pd_code(&d).unwrap();
    assert_eq!(from_pd_code(&code).unwrap(), d);
    assert!(to_pd_code(&knots::theta()).is_err());
}

#[test]
fn test_diagrams_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PlanarDiagram>();
    assert_send_sync::<PlanarDiagram<Oriented>>();

    let d = knots::five_two();
    let faces = std::thread::spawn(move || d.faces().len()).join().unwrap();
    assert_eq!(faces, 7);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_randomized_diagrams_are_sane(d in strategy::arb_diagram(4)) {
        prop_assert!(d.sanity_check().is_ok());
        assert_twin_involution(&d);
        prop_assert_eq!(d.endpoints().len(), 2 * d.arcs().len());
        prop_assert_eq!(euler_characteristic(&d), 2 * number_of_components(&d) as isize);
    }

    #[test]
    fn test_remove_and_readd_node(d in strategy::arb_diagram(3), pick in any::<prop::sample::Index>()) {
        let ids: Vec<NodeId> = d.node_ids().collect();
        let id = ids[pick.index(ids.len())];
        let mut e = d.copy();
        let node = e.remove_node(id, false).unwrap();
        prop_assert!(e.sanity_check().is_err());

        e.add_node(id, node.kind(), Some(node.degree()), node.attrs.clone()).unwrap();
        for p in 0..node.degree() {
            let twin = node.twin(p).unwrap();
            e.set_arc(Endpoint::new(id, p), twin, Attributes::new()).unwrap();
        }
        prop_assert_eq!(&e, &d);
        prop_assert!(e.sanity_check().is_ok());
    }

    #[test]
    fn test_relabelling_keeps_canonical_key(d in strategy::arb_diagram(3), shift in 1usize..50) {
        let mapping = d.node_ids().map(|n| (n, NodeId(n.0 + shift))).collect();
        let mut e = d.copy();
        e.relabel_nodes(&mapping).unwrap();
        prop_assert!(e.sanity_check().is_ok());
        prop_assert_eq!(canonical_key(&e), canonical_key(&d));
        prop_assert_eq!(canonical(&e).unwrap(), canonical(&d).unwrap());
    }
}
