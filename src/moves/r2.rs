//! Reidemeister II: pulling one strand off another (unpoke) or pushing it over (poke).
use std::collections::BTreeSet;

use crate::diagram::{Endpoint, Face, NodeKind, PlanarDiagram};
use crate::error::{precondition, DiagramResult};
use crate::moves::splice::{opposite, splice};
use crate::moves::{MoveKind, ReidemeisterMove, SearchConfig};

/// Remove a bigon whose two crossings have one strand over at both and the other under at both.
///
/// The location is the bigon face `[(c1, p1), (c2, p2)]`; the corner positions have different
/// parities exactly when the same strand is over at both crossings.
pub struct Unpoke;

fn is_unpoke_bigon(d: &PlanarDiagram, face: &[Endpoint]) -> bool {
    let [a, b] = face else {
        return false;
    };
    a.node != b.node
        && d.is_crossing(a.node)
        && d.is_crossing(b.node)
        && a.position % 2 != b.position % 2
}

impl ReidemeisterMove for Unpoke {
    type Location = [Endpoint; 2];
    const KIND: MoveKind = MoveKind::R2;
    const NAME: &'static str = "R2 unpoke";

    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<[Endpoint; 2]> {
        d.faces()
            .iter()
            .map(Face::endpoints)
            .filter(|f| is_unpoke_bigon(d, f))
            .map(|f| [f[0], f[1]])
            .collect()
    }

    fn rewrite(d: &mut PlanarDiagram, location: &[Endpoint; 2]) -> DiagramResult<()> {
        let [a, b] = *location;
        if !is_unpoke_bigon(d, location) || d.next_in_face(a) != Some(b) {
            return precondition(format!("{a} and {b} do not bound an R2 bigon"));
        }
        splice(d, &BTreeSet::from([a.node, b.node]), opposite)
    }
}

/// Push the strand at `over` across the strand at `under`, creating a bigon.
///
/// Both endpoints lie on the same face and on different arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PokeLocation {
    pub under: Endpoint,
    pub over: Endpoint,
}

pub struct Poke;

impl ReidemeisterMove for Poke {
    type Location = PokeLocation;
    const KIND: MoveKind = MoveKind::R2;
    const NAME: &'static str = "R2 poke";

    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<PokeLocation> {
        let mut out = Vec::new();
        for face in d.faces() {
            for &under in face {
                for &over in face {
                    if under != over && d.twin(under).ok() != Some(over) {
                        out.push(PokeLocation { under, over });
                    }
                }
            }
        }
        out
    }

    fn rewrite(d: &mut PlanarDiagram, location: &PokeLocation) -> DiagramResult<()> {
        let PokeLocation { under, over } = *location;
        let same_face = d.face_of(under).is_some_and(|f| f.contains(&over));
        if under == over || !same_face || d.twin(under)? == over {
            return precondition(format!("cannot poke {over} over {under}"));
        }
        let under_twin = d.twin(under)?;
        let over_twin = d.twin(over)?;

        let cx = d.insert_node(NodeKind::Crossing, 4)?;
        let cy = d.insert_node(NodeKind::Crossing, 4)?;
        let x = |p: usize| Endpoint::new(cx, p);
        let y = |p: usize| Endpoint::new(cy, p);
        d.connect(x(0), y(2))?;
        d.connect(x(3), y(3))?;
        d.connect(x(2), under)?;
        d.connect(x(1), over_twin)?;
        d.connect(y(0), under_twin)?;
        d.connect(y(1), over)?;
        Ok(())
    }
}
