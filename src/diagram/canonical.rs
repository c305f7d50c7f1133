//! Canonical relabelling of diagrams.
//!
//! Two diagrams are structurally identical up to renaming nodes and rotating slot arrays iff
//! their canonical forms are equal. Vertices and virtual crossings may be rotated freely,
//! crossings only by an even amount so that over and under are preserved.
use core::fmt;
use std::collections::BTreeMap;

use super::node::{Direction, Endpoint, Link, NodeId};
use super::orientation::Orientation;
use super::planar::PlanarDiagram;
use super::sanity::SanityError;
use crate::error::{DiagramError, DiagramResult};
use crate::topology::connected_components;

/// Compact string encoding of a canonical form, framing included.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Breadth-first traversal of one component from a starting endpoint.
struct Traversal {
    code: Vec<usize>,
    order: Vec<NodeId>,
    offsets: BTreeMap<NodeId, usize>,
}

fn direction_code(direction: Option<Direction>) -> usize {
    match direction {
        None => 0,
        Some(Direction::Outgoing) => 1,
        Some(Direction::Ingoing) => 2,
    }
}

/// Stands for a vacant slot, or a twin on a missing node, in traversal codes.
const ABSENT: usize = usize::MAX;

/// Offset that makes slot `position` of `node` the first one read.
fn entry_offset<M: Orientation>(d: &PlanarDiagram<M>, node: NodeId, position: usize) -> usize {
    if d.is_crossing(node) {
        position - position % 2
    } else {
        position
    }
}

/// Degree of the node `twin` lands on, if that slot exists.
fn landing_degree<M: Orientation>(d: &PlanarDiagram<M>, twin: Endpoint) -> Option<usize> {
    d.node(twin.node)
        .map(|n| n.degree())
        .filter(|&degree| twin.position < degree)
}

fn traverse<M: Orientation>(d: &PlanarDiagram<M>, start: Endpoint) -> Traversal {
    let mut labels: BTreeMap<NodeId, usize> = BTreeMap::new();
    let mut offsets: BTreeMap<NodeId, usize> = BTreeMap::new();
    let mut order = vec![start.node];
    labels.insert(start.node, 0);
    offsets.insert(start.node, entry_offset(d, start.node, start.position));

    let mut code = Vec::new();
    let mut i = 0;
    while i < order.len() {
        let id = order[i];
        let Some(node) = d.node(id) else {
            i += 1;
            continue;
        };
        let degree = node.degree();
        let offset = offsets[&id];
        code.push(node.kind().code());
        code.push(degree);
        for k in 0..degree {
            let Some(link) = node.link((offset + k) % degree) else {
                code.extend([ABSENT, ABSENT, ABSENT]);
                continue;
            };
            let twin = link.twin;
            let Some(twin_degree) = landing_degree(d, twin) else {
                code.extend([ABSENT, twin.position, direction_code(link.direction)]);
                continue;
            };
            if !labels.contains_key(&twin.node) {
                labels.insert(twin.node, order.len());
                offsets.insert(twin.node, entry_offset(d, twin.node, twin.position));
                order.push(twin.node);
            }
            code.push(labels[&twin.node]);
            code.push((twin.position + twin_degree - offsets[&twin.node]) % twin_degree);
            code.push(direction_code(link.direction));
        }
        i += 1;
    }
    Traversal {
        code,
        order,
        offsets,
    }
}

/// Minimal traversal of each component, components sorted by code.
///
/// Vacant slots and twins on missing nodes are encoded, so broken diagrams still get distinct
/// codes and every node lands in some traversal.
fn minimal_traversals<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<Traversal> {
    let mut traversals: Vec<Traversal> = connected_components(d)
        .into_iter()
        .filter_map(|component| {
            let mut best: Option<Traversal> = None;
            for &id in &component {
                let node = d.node(id)?;
                if node.degree() == 0 {
                    return Some(Traversal {
                        code: vec![node.kind().code(), 0],
                        order: vec![id],
                        offsets: BTreeMap::from([(id, 0)]),
                    });
                }
                for e in node.endpoints() {
                    let t = traverse(d, e);
                    match &best {
                        Some(b) if b.code <= t.code => {}
                        _ => best = Some(t),
                    }
                }
            }
            best
        })
        .collect();
    traversals.sort_by(|a, b| a.code.cmp(&b.code));
    traversals
}

fn framing_suffix<M: Orientation>(d: &PlanarDiagram<M>) -> String {
    match d.framing() {
        Some(f) => format!("f{}", f.halves()),
        None => "u".to_string(),
    }
}

/// Key identifying a diagram up to relabelling and admissible rotations.
///
/// Defined on partial diagrams too: vacant slots and missing twins are written as `-`.
pub fn canonical_key<M: Orientation>(d: &PlanarDiagram<M>) -> CanonicalKey {
    let mut key = String::new();
    for t in minimal_traversals(d) {
        for (i, &c) in t.code.iter().enumerate() {
            if i > 0 {
                key.push('.');
            }
            if c == ABSENT {
                key.push('-');
            } else {
                key.push_str(&c.to_string());
            }
        }
        key.push('|');
    }
    key.push_str(&framing_suffix(d));
    CanonicalKey(key)
}

/// Relabel nodes to `0..n` and rotate slot arrays into canonical position.
///
/// Names, framing and attributes are carried over; the result is mutable. Vacant slots stay
/// vacant. A slot whose twin lies on a missing node fails with
/// [`SanityError::MissingTwin`].
pub fn canonical<M: Orientation>(d: &PlanarDiagram<M>) -> DiagramResult<PlanarDiagram<M>> {
    let mut relabel: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut offsets: BTreeMap<NodeId, usize> = BTreeMap::new();
    for t in minimal_traversals(d) {
        for id in t.order {
            relabel.insert(id, NodeId(relabel.len()));
        }
        offsets.extend(t.offsets);
    }

    let mut out = PlanarDiagram::with_name(d.name.clone());
    out.attrs = d.attrs.clone();
    out.set_framing(d.framing())?;
    for node in d.nodes() {
        let id = *relabel
            .get(&node.id())
            .ok_or(DiagramError::NodeNotFound(node.id()))?;
        out.add_node(id, node.kind(), Some(node.degree()), node.attrs.clone())?;
    }
    for node in d.nodes() {
        let degree = node.degree();
        let (Some(&id), Some(&offset)) = (relabel.get(&node.id()), offsets.get(&node.id())) else {
            return Err(DiagramError::NodeNotFound(node.id()));
        };
        for p in 0..degree {
            let Some(Link {
                twin,
                direction,
                attrs,
            }) = node.link(p).cloned()
            else {
                continue;
            };
            let endpoint = Endpoint::new(node.id(), p);
            let missing = SanityError::MissingTwin { endpoint, twin };
            let twin_degree = landing_degree(d, twin).ok_or(missing.clone())?;
            let (Some(&twin_id), Some(&twin_offset)) =
                (relabel.get(&twin.node), offsets.get(&twin.node))
            else {
                return Err(missing.into());
            };
            let slot = Endpoint::new(id, (p + degree - offset) % degree);
            let target = Endpoint::new(
                twin_id,
                (twin.position + twin_degree - twin_offset) % twin_degree,
            );
            out.set_endpoint(slot, target, direction, attrs)?;
        }
    }
    Ok(out)
}

impl<M: Orientation> PlanarDiagram<M> {
    pub fn canonical_key(&self) -> CanonicalKey {
        canonical_key(self)
    }
}
