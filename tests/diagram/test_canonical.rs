use knot_diagrams::diagram::*;

use crate::knots;

#[test]
fn test_canonical_key_separates_knots() {
    let keys = [
        canonical_key(&knots::trefoil()),
        canonical_key(&knots::figure_eight()),
        canonical_key(&knots::five_two()),
        canonical_key(&knots::theta()),
        canonical_key(&PlanarDiagram::<Unoriented>::unknot()),
    ];
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            assert_ne!(keys[i], keys[j]);
        }
    }
}

#[test]
fn test_canonical_key_ignores_rotation() {
    let d = knots::trefoil();

    // rotating every crossing by two keeps over and under
    let mut rotated = d.copy();
    for id in d.crossings() {
        rotated.permute_node(id, &[2, 3, 0, 1]).unwrap();
    }
    assert_eq!(canonical_key(&rotated), canonical_key(&d));

    // any cyclic rotation is allowed at a vertex
    let theta = knots::theta();
    let mut turned = theta.copy();
    turned.permute_node(NodeId(0), &[1, 2, 0]).unwrap();
    assert_ne!(turned, theta);
    assert_eq!(canonical_key(&turned), canonical_key(&theta));

    // reversing the order at one vertex alone is not planar
    let mut swapped = theta.copy();
    swapped.permute_node(NodeId(0), &[1, 0, 2]).unwrap();
    assert!(swapped.sanity_check().is_err());
}

#[test]
fn test_framing_is_part_of_the_key() {
    let d = knots::trefoil();
    let mut framed = d.copy();
    framed.set_framing(Some(Framing::from_halves(3))).unwrap();
    assert_ne!(canonical_key(&framed), canonical_key(&d));
    assert_eq!(canonical(&framed).unwrap().framing(), Some(Framing::from_halves(3)));
}
