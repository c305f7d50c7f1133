use core::fmt;
use core::hash::{Hash, Hasher};

use super::attributes::Attributes;

/// Identifier of a node in a [`crate::diagram::PlanarDiagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    /// A graph vertex of arbitrary degree.
    Vertex,
    /// A classical crossing: positions 0 and 2 are the under-strand, 1 and 3 the over-strand.
    Crossing,
    /// A virtual crossing: degree 4, strands pass straight through, no over/under information.
    VirtualCrossing,
}

impl NodeKind {
    /// Degree forced by the kind, if any.
    pub fn fixed_degree(&self) -> Option<usize> {
        match self {
            NodeKind::Vertex => None,
            NodeKind::Crossing | NodeKind::VirtualCrossing => Some(4),
        }
    }

    pub(crate) fn code(&self) -> usize {
        match self {
            NodeKind::Crossing => 0,
            NodeKind::VirtualCrossing => 1,
            NodeKind::Vertex => 2,
        }
    }
}

/// A slot handle: the `position`-th endpoint (counter-clockwise) of `node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Endpoint {
    pub node: NodeId,
    pub position: usize,
}

impl Endpoint {
    pub fn new(node: impl Into<NodeId>, position: usize) -> Self {
        Endpoint {
            node: node.into(),
            position,
        }
    }

    /// The endpoint `offset` steps counter-clockwise around the same node of degree `degree`.
    pub fn rotated(&self, offset: isize, degree: usize) -> Self {
        let degree = degree as isize;
        let position = (self.position as isize + offset).rem_euclid(degree) as usize;
        Endpoint {
            node: self.node,
            position,
        }
    }

    /// Endpoints at even positions of a crossing belong to its under-strand.
    pub fn is_under(&self) -> bool {
        self.position % 2 == 0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Outgoing,
    Ingoing,
}

impl Direction {
    pub fn reversed(&self) -> Self {
        match self {
            Direction::Outgoing => Direction::Ingoing,
            Direction::Ingoing => Direction::Outgoing,
        }
    }
}

/// Content of one slot: the endpoint at the far end of the arc, as seen from this slot.
///
/// `direction` and `attrs` describe that far endpoint. In an oriented diagram the link stored at
/// `a` pointing to `b` carries `b`'s direction, so twins always carry opposite tags.
#[derive(Debug, Clone)]
pub struct Link {
    pub twin: Endpoint,
    pub direction: Option<Direction>,
    pub attrs: Attributes,
}

impl Link {
    pub fn new(twin: Endpoint) -> Self {
        Link {
            twin,
            direction: None,
            attrs: Attributes::new(),
        }
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.twin == other.twin && self.direction == other.direction
    }
}

impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.twin.hash(state);
        self.direction.hash(state);
    }
}

/// A node record: its kind and counter-clockwise array of slots.
///
/// A `None` slot is vacant; a well-formed diagram has none.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) kind: NodeKind,
    pub(crate) slots: Vec<Option<Link>>,
    pub attrs: Attributes,
}

impl Node {
    pub(crate) fn new(id: NodeId, kind: NodeKind, degree: usize) -> Self {
        Node {
            id,
            kind,
            slots: vec![None; degree],
            attrs: Attributes::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_crossing(&self) -> bool {
        self.kind == NodeKind::Crossing
    }

    pub fn is_vertex(&self) -> bool {
        self.kind == NodeKind::Vertex
    }

    pub fn degree(&self) -> usize {
        self.slots.len()
    }

    pub fn link(&self, position: usize) -> Option<&Link> {
        self.slots.get(position).and_then(|s| s.as_ref())
    }

    pub fn twin(&self, position: usize) -> Option<Endpoint> {
        self.link(position).map(|l| l.twin)
    }

    /// Twins in slot order; vacant slots are `None`.
    pub fn twins(&self) -> impl Iterator<Item = Option<Endpoint>> + '_ {
        self.slots.iter().map(|s| s.as_ref().map(|l| l.twin))
    }

    pub fn endpoints(&self) -> impl Iterator<Item = Endpoint> + '_ {
        (0..self.degree()).map(move |p| Endpoint::new(self.id, p))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.kind == other.kind && self.slots == other.slots
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.kind.hash(state);
        self.slots.hash(state);
    }
}
