//! Planar-diagram (PD) codes for crossing-only diagrams.
//!
//! A crossing `X[a, b, c, d]` lists the labels of its four arcs counter-clockwise starting at
//! position 0, the incoming under-strand. Every label occurs exactly twice.
use std::collections::BTreeMap;

use super::node::{Endpoint, NodeId};
use super::orientation::Orientation;
use super::planar::PlanarDiagram;
use crate::error::{DiagramError, DiagramResult};

/// Build an unoriented diagram from a PD code. The empty code is the unknot.
pub fn from_pd_code(code: &[[usize; 4]]) -> DiagramResult<PlanarDiagram> {
    if code.is_empty() {
        return Ok(PlanarDiagram::unknot());
    }

    let mut d = PlanarDiagram::new();
    let mut occurrences: BTreeMap<usize, Vec<Endpoint>> = BTreeMap::new();
    for (i, crossing) in code.iter().enumerate() {
        d.add_crossing(i)?;
        for (p, &label) in crossing.iter().enumerate() {
            occurrences
                .entry(label)
                .or_default()
                .push(Endpoint::new(i, p));
        }
    }

    for (label, ends) in occurrences {
        match ends.as_slice() {
            [a, b] => d.connect(*a, *b)?,
            _ => {
                return Err(DiagramError::Structural(format!(
                    "PD label {label} occurs {} times",
                    ends.len()
                )))
            }
        }
    }
    Ok(d)
}

/// Arc labels (starting at 1) per crossing, crossings in id order.
///
/// Fails with [`DiagramError::UnsupportedOperation`] on diagrams with vertices or virtual
/// crossings.
pub fn to_pd_code<M: Orientation>(d: &PlanarDiagram<M>) -> DiagramResult<Vec<[usize; 4]>> {
    if let Some(node) = d.nodes().find(|n| !n.is_crossing()) {
        return Err(DiagramError::UnsupportedOperation(format!(
            "PD codes describe crossings only, found {:?} {}",
            node.kind(),
            node.id()
        )));
    }

    let labels: BTreeMap<Endpoint, usize> = d
        .arcs()
        .iter()
        .enumerate()
        .flat_map(|(i, arc)| arc.endpoints().map(|e| (e, i + 1)))
        .collect();

    d.crossings()
        .into_iter()
        .map(|c: NodeId| {
            let mut x = [0; 4];
            for (p, label) in x.iter_mut().enumerate() {
                let e = Endpoint::new(c, p);
                *label = *labels.get(&e).ok_or(DiagramError::EndpointNotFound(e))?;
            }
            Ok(x)
        })
        .collect()
}
