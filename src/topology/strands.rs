use std::collections::BTreeSet;

use crate::diagram::{Endpoint, NodeKind, Orientation, PlanarDiagram};
use crate::error::DiagramResult;

/// Where a strand entering at `e` leaves the node, if it passes through.
///
/// Strands go straight across crossings and virtual crossings, and through degree-2 vertices.
fn pass_through<M: Orientation>(d: &PlanarDiagram<M>, e: Endpoint) -> Option<Endpoint> {
    let node = d.node(e.node)?;
    match (node.kind(), node.degree()) {
        (NodeKind::Crossing | NodeKind::VirtualCrossing, _) => Some(e.rotated(2, 4)),
        (NodeKind::Vertex, 2) => Some(e.rotated(1, 2)),
        _ => None,
    }
}

/// Trace the strand leaving `e`: twin, then straight across each crossing (virtual ones
/// included), until a vertex.
///
/// The result alternates between an endpoint and its twin and starts with `e`. A closed strand
/// stops before repeating `e`.
pub fn path_from_endpoint<M: Orientation>(
    d: &PlanarDiagram<M>,
    e: Endpoint,
) -> DiagramResult<Vec<Endpoint>> {
    let mut path = Vec::new();
    let mut current = e;
    loop {
        let twin = d.twin(current)?;
        path.push(current);
        path.push(twin);
        if !matches!(
            d.kind(twin.node)?,
            NodeKind::Crossing | NodeKind::VirtualCrossing
        ) {
            break;
        }
        current = twin.rotated(2, 4);
        if current == e {
            break;
        }
    }
    Ok(path)
}

/// Strands of the diagram as endpoint sequences, degree-2 vertices passed through.
///
/// Open strands (ending at vertices of other degrees) come first, then closed ones.
pub fn link_components<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<Vec<Endpoint>> {
    let mut visited: BTreeSet<Endpoint> = BTreeSet::new();
    let mut strands = Vec::new();

    let walk = |start: Endpoint, visited: &mut BTreeSet<Endpoint>| {
        let mut strand = Vec::new();
        let mut current = start;
        while visited.insert(current) {
            let Ok(twin) = d.twin(current) else { break };
            strand.push(current);
            strand.push(twin);
            visited.insert(twin);
            match pass_through(d, twin) {
                Some(next) => current = next,
                None => break,
            }
        }
        strand
    };

    let endpoints = d.endpoints();
    for &e in endpoints {
        if !visited.contains(&e) && pass_through(d, e).is_none() {
            strands.push(walk(e, &mut visited));
        }
    }
    for &e in endpoints {
        if !visited.contains(&e) {
            strands.push(walk(e, &mut visited));
        }
    }
    strands
}

pub fn number_of_link_components<M: Orientation>(d: &PlanarDiagram<M>) -> usize {
    link_components(d).len()
}

/// A single closed strand with no branching vertices.
pub fn is_knot<M: Orientation>(d: &PlanarDiagram<M>) -> bool {
    d.nodes().all(|n| !n.is_vertex() || n.degree() == 2) && number_of_link_components(d) == 1
}
