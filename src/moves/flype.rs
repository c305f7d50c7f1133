//! Flypes: turning a tangle over and moving a crossing to its other side.
use std::collections::{BTreeMap, BTreeSet};

use crate::diagram::{canonical_key, Arc, Endpoint, NodeId, PlanarDiagram};
use crate::error::{precondition, DiagramError, DiagramResult};
use crate::moves::{MoveKind, ReidemeisterMove, SearchConfig};
use crate::topology::component_without_arcs;
use crate::topology::components::NodeIndex;
use crate::union_find::UnionFind;

/// A crossing whose slots `slot` and `slot + 1` enter the tangle `tangle`.
///
/// The tangle is cut from the rest of the diagram by exactly four arcs: the two from the crossing
/// and two more that leave it at `north_east` and `south_east`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlypeLocation {
    pub crossing: NodeId,
    pub slot: usize,
    pub tangle: BTreeSet<NodeId>,
    pub north_east: Endpoint,
    pub south_east: Endpoint,
}

pub struct Flype;

impl FlypeLocation {
    fn at(&self, offset: usize) -> Endpoint {
        Endpoint::new(self.crossing, (self.slot + offset) % 4)
    }
}

/// The image of a tangle endpoint under the reflection.
fn reflect(d: &PlanarDiagram, e: Endpoint) -> DiagramResult<Endpoint> {
    let degree = d.degree(e.node)? as isize;
    let position = if d.is_crossing(e.node) {
        1 - e.position as isize
    } else {
        -(e.position as isize)
    };
    Ok(Endpoint::new(e.node, position.rem_euclid(degree) as usize))
}

/// The first tangle endpoint on the face north of the crossing that leaves the tangle.
fn north_east_of(
    d: &PlanarDiagram,
    crossing: Endpoint,
    tangle: &BTreeSet<NodeId>,
    skip: [Endpoint; 2],
) -> Option<Endpoint> {
    let mut e = crossing;
    for _ in 0..d.endpoints().len() {
        e = d.next_in_face(e)?;
        if e == crossing {
            return None;
        }
        let leaves = tangle.contains(&e.node) && !tangle.contains(&d.twin(e).ok()?.node);
        if leaves && !skip.contains(&e) {
            return Some(e);
        }
    }
    None
}

/// Check the cut `{crossing arcs, first, second}` and resolve the location it defines.
fn resolve(
    d: &PlanarDiagram,
    crossing: NodeId,
    slot: usize,
    tangle: BTreeSet<NodeId>,
    cut: [&Arc; 2],
) -> Option<FlypeLocation> {
    let c = |offset: usize| Endpoint::new(crossing, (slot + offset) % 4);
    let tsw = d.twin(c(0)).ok()?;
    let tnw = d.twin(c(1)).ok()?;
    if tangle.contains(&crossing) || !tangle.contains(&tnw.node) {
        return None;
    }
    let mut ends = Vec::with_capacity(2);
    for arc in cut {
        let inside: Vec<Endpoint> = arc
            .endpoints()
            .into_iter()
            .filter(|e| tangle.contains(&e.node))
            .collect();
        let [end] = inside[..] else {
            return None;
        };
        ends.push(end);
    }
    let mut boundary = 0;
    for &n in &tangle {
        for e in d.node(n)?.endpoints() {
            if !tangle.contains(&d.twin(e).ok()?.node) {
                boundary += 1;
            }
        }
    }
    if boundary != 4 {
        return None;
    }
    let outside = [
        d.twin(c(2)).ok()?,
        d.twin(c(3)).ok()?,
        d.twin(ends[0]).ok()?,
        d.twin(ends[1]).ok()?,
    ];
    if outside
        .iter()
        .any(|e| e.node == crossing || tangle.contains(&e.node))
    {
        return None;
    }
    if !tangle.iter().any(|&n| d.is_crossing(n)) {
        return None;
    }

    let north_east = north_east_of(d, c(1), &tangle, [tsw, tnw])?;
    let south_east = match ends[..] {
        [a, b] if a == north_east => b,
        [a, b] if b == north_east => a,
        _ => return None,
    };
    Some(FlypeLocation {
        crossing,
        slot,
        tangle,
        north_east,
        south_east,
    })
}

/// Every cut of the right shape, including flypes that leave the diagram unchanged.
fn candidates(d: &PlanarDiagram) -> Vec<FlypeLocation> {
    let index = NodeIndex::new(d);
    let arcs = d.arcs();
    let mut out: Vec<FlypeLocation> = Vec::new();
    for crossing in d.crossings() {
        for slot in 0..4 {
            let a1 = Endpoint::new(crossing, slot);
            let a2 = Endpoint::new(crossing, (slot + 1) % 4);
            let (Ok(tsw), Ok(tnw)) = (d.twin(a1), d.twin(a2)) else {
                continue;
            };
            if tsw.node == crossing || tnw.node == crossing {
                continue;
            }
            let Some(&root) = index.index.get(&tsw.node) else {
                continue;
            };
            let fixed = [Arc::new(a1, tsw), Arc::new(a2, tnw)];
            let cuttable: Vec<&Arc> = arcs.iter().filter(|a| !fixed.contains(a)).collect();

            // arcs before `i` are merged once and shared by every pair starting at `i`
            let mut prefix = UnionFind::new(index.ids.len());
            for i in 0..cuttable.len() {
                let before_i = prefix.snapshot();
                for j in (i + 1)..cuttable.len() {
                    let before_j = prefix.snapshot();
                    let rest = cuttable[j + 1..].iter().copied();
                    index.merge(&mut prefix, rest, &BTreeSet::new());
                    let tangle: BTreeSet<NodeId> = index
                        .ids
                        .iter()
                        .enumerate()
                        .filter(|&(x, _)| prefix.same(x, root))
                        .map(|(_, &n)| n)
                        .collect();
                    prefix.rollback(before_j);
                    if let Some(location) =
                        resolve(d, crossing, slot, tangle, [cuttable[i], cuttable[j]])
                    {
                        if !out.contains(&location) {
                            out.push(location);
                        }
                    }
                    index.merge(&mut prefix, [cuttable[j]], &BTreeSet::new());
                }
                prefix.rollback(before_i);
                index.merge(&mut prefix, [cuttable[i]], &BTreeSet::new());
            }
        }
    }
    out
}

fn is_valid(d: &PlanarDiagram, location: &FlypeLocation) -> bool {
    let ends = [
        location.at(0),
        location.at(1),
        location.north_east,
        location.south_east,
    ];
    let Ok(cut) = ends
        .iter()
        .map(|&e| d.twin(e).map(|t| Arc::new(e, t)))
        .collect::<DiagramResult<Vec<Arc>>>()
    else {
        return false;
    };
    let Some(start) = cut[0].other(location.at(0)) else {
        return false;
    };
    let tangle = component_without_arcs(d, start.node, &cut);
    let resolved = resolve(d, location.crossing, location.slot, tangle, [&cut[2], &cut[3]]);
    resolved.as_ref() == Some(location)
}

impl ReidemeisterMove for Flype {
    type Location = FlypeLocation;
    const KIND: MoveKind = MoveKind::Flype;
    const NAME: &'static str = "flype";

    /// Flypes whose result differs from `d` up to relabelling.
    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<FlypeLocation> {
        let key = canonical_key(d);
        candidates(d)
            .into_iter()
            .filter(|location| {
                let mut e = d.copy();
                Flype::rewrite(&mut e, location).is_ok() && canonical_key(&e) != key
            })
            .collect()
    }

    fn rewrite(d: &mut PlanarDiagram, location: &FlypeLocation) -> DiagramResult<()> {
        let FlypeLocation {
            crossing,
            slot,
            tangle,
            north_east,
            south_east,
        } = location;
        if !is_valid(d, location) {
            return precondition(format!(
                "no flype of {crossing}:{slot} across {} nodes",
                tangle.len()
            ));
        }

        let tsw = d.twin(location.at(0))?;
        let tnw = d.twin(location.at(1))?;
        let west_north = d.twin(location.at(2))?;
        let west_south = d.twin(location.at(3))?;
        let east_north = d.twin(*north_east)?;
        let east_south = d.twin(*south_east)?;

        let mut sigma: BTreeMap<Endpoint, Endpoint> = BTreeMap::new();
        let mut internal = Vec::new();
        for &n in tangle {
            let node = d.node(n).ok_or(DiagramError::NodeNotFound(n))?;
            for e in node.endpoints() {
                sigma.insert(e, reflect(d, e)?);
                let t = d.twin(e)?;
                if tangle.contains(&t.node) && e < t {
                    internal.push((e, t));
                }
            }
        }
        let m = |e: Endpoint| sigma.get(&e).copied().unwrap_or(e);

        for (a, b) in internal {
            d.connect(m(a), m(b))?;
        }
        d.connect(west_north, m(tsw))?;
        d.connect(west_south, m(tnw))?;
        d.connect(location.at(0), east_south)?;
        d.connect(location.at(1), east_north)?;
        d.connect(location.at(2), m(*south_east))?;
        d.connect(location.at(3), m(*north_east))?;
        Ok(())
    }
}
