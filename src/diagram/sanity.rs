//! Structural invariants of a [`PlanarDiagram`].
use thiserror::Error;

use super::node::{Endpoint, NodeId, NodeKind};
use super::orientation::Orientation;
use super::planar::PlanarDiagram;
use crate::topology::number_of_components;

/// The first invariant a diagram breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanityError {
    #[error("dangling-endpoint: slot {0} is vacant")]
    DanglingEndpoint(Endpoint),

    #[error("missing-twin: {endpoint} points at missing {twin}")]
    MissingTwin { endpoint: Endpoint, twin: Endpoint },

    #[error("twin-involution: {endpoint} points at {twin} which points elsewhere")]
    TwinInvolution { endpoint: Endpoint, twin: Endpoint },

    #[error("self-twin: {0} is its own twin")]
    SelfTwin(Endpoint),

    #[error("crossing-degree: {node} has degree {degree}")]
    CrossingDegree { node: NodeId, degree: usize },

    #[error("orientation: {0} has a bad direction tag")]
    Orientation(Endpoint),

    #[error("arc-count: {endpoints} endpoints but {arcs} arcs")]
    ArcCount { endpoints: usize, arcs: usize },

    #[error("euler-characteristic: {nodes} - {arcs} + {faces} != 2 * {components}")]
    EulerCharacteristic {
        nodes: usize,
        arcs: usize,
        faces: usize,
        components: usize,
    },
}

impl SanityError {
    /// Name of the violated invariant.
    pub fn invariant(&self) -> &'static str {
        match self {
            SanityError::DanglingEndpoint(_) => "dangling-endpoint",
            SanityError::MissingTwin { .. } => "missing-twin",
            SanityError::TwinInvolution { .. } => "twin-involution",
            SanityError::SelfTwin(_) => "self-twin",
            SanityError::CrossingDegree { .. } => "crossing-degree",
            SanityError::Orientation(_) => "orientation",
            SanityError::ArcCount { .. } => "arc-count",
            SanityError::EulerCharacteristic { .. } => "euler-characteristic",
        }
    }
}

/// Check every structural invariant, reporting the first violation.
pub fn sanity_check<M: Orientation>(d: &PlanarDiagram<M>) -> Result<(), SanityError> {
    let mut endpoints = 0;
    for node in d.nodes() {
        if node.kind() != NodeKind::Vertex && node.degree() != 4 {
            return Err(SanityError::CrossingDegree {
                node: node.id(),
                degree: node.degree(),
            });
        }
        for endpoint in node.endpoints() {
            endpoints += 1;
            let link = node
                .link(endpoint.position)
                .ok_or(SanityError::DanglingEndpoint(endpoint))?;
            let twin = link.twin;
            if twin == endpoint {
                return Err(SanityError::SelfTwin(endpoint));
            }
            let back = d.link(twin).map_err(|_| SanityError::MissingTwin { endpoint, twin })?;
            if back.twin != endpoint {
                return Err(SanityError::TwinInvolution { endpoint, twin });
            }
            let tagged = match (link.direction, back.direction) {
                (Some(a), Some(b)) => M::ORIENTED && a == b.reversed(),
                (None, None) => !M::ORIENTED,
                _ => false,
            };
            if !tagged {
                return Err(SanityError::Orientation(endpoint));
            }
        }
    }

    let arcs = d.arcs().len();
    if endpoints != 2 * arcs {
        return Err(SanityError::ArcCount { endpoints, arcs });
    }

    // an isolated vertex has no endpoints but still bounds one face
    let isolated = d.nodes().filter(|n| n.degree() == 0).count();
    let nodes = d.number_of_nodes();
    let faces = d.faces().len() + isolated;
    let components = number_of_components(d);
    if nodes + faces != arcs + 2 * components {
        return Err(SanityError::EulerCharacteristic {
            nodes,
            arcs,
            faces,
            components,
        });
    }
    Ok(())
}

pub fn is_sane<M: Orientation>(d: &PlanarDiagram<M>) -> bool {
    sanity_check(d).is_ok()
}

impl<M: Orientation> PlanarDiagram<M> {
    pub fn sanity_check(&self) -> Result<(), SanityError> {
        sanity_check(self)
    }
}
