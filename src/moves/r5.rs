//! Reidemeister V: twisting two adjacent edges of a vertex around each other.
use crate::diagram::{Endpoint, Face, Framing, NodeId, NodeKind, PlanarDiagram};
use crate::error::{precondition, DiagramResult};
use crate::moves::{MoveKind, ReidemeisterMove, SearchConfig, Sign};

/// Insert a crossing between the edges at slots `slot` and `slot + 1` of `vertex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TwistLocation {
    pub vertex: NodeId,
    pub slot: usize,
    pub sign: Sign,
}

pub struct Twist;

/// Twins of two adjacent slots, when both leave the vertex.
fn adjacent_twins(d: &PlanarDiagram, vertex: NodeId, slot: usize) -> Option<(Endpoint, Endpoint)> {
    let node = d.node(vertex)?;
    let degree = node.degree();
    if !node.is_vertex() || degree < 3 || slot >= degree {
        return None;
    }
    let t1 = node.twin(slot)?;
    let t2 = node.twin((slot + 1) % degree)?;
    (t1.node != vertex && t2.node != vertex).then_some((t1, t2))
}

impl ReidemeisterMove for Twist {
    type Location = TwistLocation;
    const KIND: MoveKind = MoveKind::R5;
    const NAME: &'static str = "R5 twist";

    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<TwistLocation> {
        let mut out = Vec::new();
        for node in d.nodes().filter(|n| n.is_vertex()) {
            for slot in 0..node.degree() {
                if adjacent_twins(d, node.id(), slot).is_some() {
                    out.extend(Sign::BOTH.map(|sign| TwistLocation {
                        vertex: node.id(),
                        slot,
                        sign,
                    }));
                }
            }
        }
        out
    }

    fn rewrite(d: &mut PlanarDiagram, location: &TwistLocation) -> DiagramResult<()> {
        let TwistLocation { vertex, slot, sign } = *location;
        let Some((t1, t2)) = adjacent_twins(d, vertex, slot) else {
            return precondition(format!("no R5 twist at {vertex}:{slot}"));
        };
        let degree = d.degree(vertex)?;
        let c = d.insert_node(NodeKind::Crossing, 4)?;
        let r = match sign {
            Sign::Positive => 0,
            Sign::Negative => 1,
        };
        let x = |offset: usize| Endpoint::new(c, (r + offset) % 4);
        d.connect(x(0), Endpoint::new(vertex, slot))?;
        d.connect(x(1), t1)?;
        d.connect(x(2), t2)?;
        d.connect(x(3), Endpoint::new(vertex, (slot + 1) % degree))?;
        d.shift_framing(Framing::from_halves(sign.value()));
        Ok(())
    }
}

/// A bigon between `vertex` and `crossing`: slots `slot`, `slot + 1` of the vertex are joined to
/// positions `position`, `position - 1` of the crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UntwistLocation {
    pub vertex: NodeId,
    pub slot: usize,
    pub crossing: NodeId,
    pub position: usize,
}

pub struct Untwist;

/// The outer twins of the crossing, when the location is a removable twist.
fn untwist_twins(d: &PlanarDiagram, location: &UntwistLocation) -> Option<(Endpoint, Endpoint)> {
    let UntwistLocation {
        vertex,
        slot,
        crossing,
        position,
    } = *location;
    let node = d.node(vertex)?;
    let degree = node.degree();
    if !node.is_vertex() || degree < 3 || !d.is_crossing(crossing) || slot >= degree || position > 3 {
        return None;
    }
    let c = |offset: isize| Endpoint::new(crossing, position).rotated(offset, 4);
    if node.twin(slot)? != c(0) || d.twin(c(-1)).ok()? != Endpoint::new(vertex, (slot + 1) % degree) {
        return None;
    }
    let t1 = d.twin(c(1)).ok()?;
    let t2 = d.twin(c(2)).ok()?;
    (t1.node != crossing && t2.node != crossing).then_some((t1, t2))
}

impl ReidemeisterMove for Untwist {
    type Location = UntwistLocation;
    const KIND: MoveKind = MoveKind::R5;
    const NAME: &'static str = "R5 untwist";

    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<UntwistLocation> {
        let mut out = Vec::new();
        for face in d.faces().iter().map(Face::endpoints) {
            let [a, b] = face else {
                continue;
            };
            for (v, c) in [(*a, *b), (*b, *a)] {
                let location = UntwistLocation {
                    vertex: v.node,
                    slot: v.position,
                    crossing: c.node,
                    position: (c.position + 1) % 4,
                };
                if untwist_twins(d, &location).is_some() {
                    out.push(location);
                }
            }
        }
        out
    }

    fn rewrite(d: &mut PlanarDiagram, location: &UntwistLocation) -> DiagramResult<()> {
        let Some((t1, t2)) = untwist_twins(d, location) else {
            return precondition(format!("no R5 untwist at {location:?}"));
        };
        let UntwistLocation {
            vertex,
            slot,
            crossing,
            position,
        } = *location;
        let degree = d.degree(vertex)?;
        d.remove_node(crossing, false)?;
        d.connect(Endpoint::new(vertex, slot), t1)?;
        d.connect(Endpoint::new(vertex, (slot + 1) % degree), t2)?;
        let halves = if position % 2 == 0 { -1 } else { 1 };
        d.shift_framing(Framing::from_halves(halves));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::canonical_key;
    use crate::moves::execute;
    use num_traits::Zero;

    fn theta() -> PlanarDiagram {
        let mut d: PlanarDiagram = PlanarDiagram::new();
        d.add_vertex(0, 3).unwrap();
        d.add_vertex(1, 3).unwrap();
        for p in 0..3 {
            d.connect(Endpoint::new(0, p), Endpoint::new(1, 2 - p)).unwrap();
        }
        d
    }

    #[test]
    fn test_twist_then_untwist() {
        let mut d = theta();
        d.set_framing(Some(Framing::zero())).unwrap();
        let config = SearchConfig::default();
        assert!(Untwist::find(&d, &config).is_empty());

        let twists = Twist::find(&d, &config);
        assert_eq!(twists.len(), 12);
        for t in twists {
            let e = execute::<Twist>(&d, &t, &config).unwrap();
            assert!(e.sanity_check().is_ok(), "{t:?}");
            assert_eq!(e.number_of_crossings(), 1);
            assert_eq!(e.framing(), Some(Framing::from_halves(t.sign.value())));

            let untwists = Untwist::find(&e, &config);
            let restored = untwists.iter().any(|u| {
                let f = execute::<Untwist>(&e, u, &config).unwrap();
                f.framing() == Some(Framing::zero()) && canonical_key(&f) == canonical_key(&d)
            });
            assert!(restored, "{t:?}");
        }
    }

    #[test]
    fn test_no_twist_at_degree_two() {
        let d = PlanarDiagram::unknot();
        let config = SearchConfig::default();
        assert!(Twist::find(&d, &config).is_empty());
        let location = TwistLocation {
            vertex: NodeId(0),
            slot: 0,
            sign: Sign::Positive,
        };
        assert!(execute::<Twist>(&d, &location, &config).is_err());
    }
}
