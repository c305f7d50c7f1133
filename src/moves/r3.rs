//! Reidemeister III: sliding a strand across a crossing.
use std::collections::BTreeMap;

use crate::diagram::{AttrValue, Endpoint, Face, PlanarDiagram};
use crate::error::{precondition, DiagramResult};
use crate::moves::{MoveKind, ReidemeisterMove, SearchConfig};

/// Node attribute marking the crossings of the triangle created by the last R3 move.
pub const R3_MARKER: &str = "r3";

/// Slide across a non-alternating triangle of three distinct crossings.
///
/// The location is the triangle face `[(c0, p0), (c1, p1), (c2, p2)]`. The move rewires twelve
/// endpoints: the three inner arcs move one step around the triangle and the six outer arcs follow
/// their crossings. The new triangle's crossings are marked with [`R3_MARKER`] and a triangle whose
/// crossings are all marked is not reported, so the finder does not offer the inverse move.
pub struct Triangle;

fn is_r3_triangle(d: &PlanarDiagram, face: &[Endpoint]) -> bool {
    let [a, b, c] = face else {
        return false;
    };
    let distinct = a.node != b.node && b.node != c.node && a.node != c.node;
    let crossings = face.iter().all(|e| d.is_crossing(e.node));
    let alternating = a.position % 2 == b.position % 2 && b.position % 2 == c.position % 2;
    distinct && crossings && !alternating
}

fn is_marked(d: &PlanarDiagram, face: &[Endpoint]) -> bool {
    face.iter().all(|e| {
        d.node(e.node)
            .is_some_and(|n| n.attrs.get(R3_MARKER) == Some(&AttrValue::Bool(true)))
    })
}

impl ReidemeisterMove for Triangle {
    type Location = [Endpoint; 3];
    const KIND: MoveKind = MoveKind::R3;
    const NAME: &'static str = "R3";

    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<[Endpoint; 3]> {
        d.faces()
            .iter()
            .map(Face::endpoints)
            .filter(|f| is_r3_triangle(d, f) && !is_marked(d, f))
            .map(|f| [f[0], f[1], f[2]])
            .collect()
    }

    fn rewrite(d: &mut PlanarDiagram, location: &[Endpoint; 3]) -> DiagramResult<()> {
        if !is_r3_triangle(d, location)
            || (0..3).any(|i| d.next_in_face(location[i]) != Some(location[(i + 1) % 3]))
        {
            return precondition(format!("{location:?} is not a non-alternating triangle"));
        }

        let mut old: BTreeMap<Endpoint, Endpoint> = BTreeMap::new();
        for corner in location {
            for p in 0..4 {
                let e = Endpoint::new(corner.node, p);
                old.insert(e, d.twin(e)?);
            }
        }

        // where each outer endpoint of the triangle moves to
        let at = |i: usize, offset: isize| location[i % 3].rotated(offset, 4);
        let mut moved: BTreeMap<Endpoint, Endpoint> = BTreeMap::new();
        for i in 0..3 {
            moved.insert(at(i, 2), at(i + 1, 1));
            moved.insert(at(i + 1, 3), at(i, 0));
        }

        let mut arcs = Vec::with_capacity(9);
        for (from, &to) in &moved {
            let twin = old[from];
            arcs.push((to, moved.get(&twin).copied().unwrap_or(twin)));
        }
        for i in 0..3 {
            arcs.push((at(i + 1, 3), at(i, 2)));
        }
        for (a, b) in arcs {
            d.connect(a, b)?;
        }

        let marked: Vec<_> = d
            .nodes()
            .filter(|n| n.attrs.contains_key(R3_MARKER))
            .map(|n| n.id())
            .collect();
        for n in marked {
            d.node_attrs_mut(n)?.remove(R3_MARKER);
        }
        for corner in location {
            d.set_node_attr(corner.node, R3_MARKER, true)?;
        }
        Ok(())
    }
}
