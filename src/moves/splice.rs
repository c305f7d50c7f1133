use std::collections::{BTreeMap, BTreeSet};

use crate::diagram::{Endpoint, NodeId, NodeKind, PlanarDiagram};
use crate::error::{DiagramError, DiagramResult};

/// Add a disjoint unknot: a degree-2 vertex joined to itself.
pub(crate) fn add_unknot(d: &mut PlanarDiagram) -> DiagramResult<NodeId> {
    let v = d.insert_node(NodeKind::Vertex, 2)?;
    d.connect(Endpoint::new(v, 0), Endpoint::new(v, 1))?;
    Ok(v)
}

/// Delete `removed` and reconnect the strands that ran through them.
///
/// A strand enters a removed node at slot `q` and leaves it at `through(q)`. Each strand with
/// both ends outside is replaced by one arc; each closed strand inside becomes an unknot.
pub(crate) fn splice(
    d: &mut PlanarDiagram,
    removed: &BTreeSet<NodeId>,
    through: impl Fn(Endpoint) -> Endpoint,
) -> DiagramResult<()> {
    let mut old: BTreeMap<Endpoint, Endpoint> = BTreeMap::new();
    for &n in removed {
        let node = d.node(n).ok_or(DiagramError::NodeNotFound(n))?;
        for e in node.endpoints() {
            old.insert(e, d.twin(e)?);
        }
    }
    let twin_of = |e: Endpoint| old.get(&e).copied().ok_or(DiagramError::EndpointNotFound(e));

    let mut visited: BTreeSet<Endpoint> = BTreeSet::new();
    let mut arcs = Vec::new();
    for (&start, &outside) in &old {
        if removed.contains(&outside.node) || !visited.insert(start) {
            continue;
        }
        let mut current = through(start);
        loop {
            visited.insert(current);
            let next = twin_of(current)?;
            if !removed.contains(&next.node) {
                arcs.push((outside, next));
                break;
            }
            visited.insert(next);
            current = through(next);
        }
    }

    let mut closed = 0;
    for &start in old.keys() {
        if visited.contains(&start) {
            continue;
        }
        closed += 1;
        let mut current = start;
        while visited.insert(current) {
            let next = twin_of(current)?;
            visited.insert(next);
            current = through(next);
        }
    }

    for &n in removed {
        d.remove_node(n, false)?;
    }
    for (a, b) in arcs {
        d.connect(a, b)?;
    }
    for _ in 0..closed {
        add_unknot(d)?;
    }
    Ok(())
}

/// Straight through a crossing.
pub(crate) fn opposite(e: Endpoint) -> Endpoint {
    e.rotated(2, 4)
}
