use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use super::attributes::{AttrValue, Attributes};
use super::framing::Framing;
use super::node::{Direction, Endpoint, Link, Node, NodeId, NodeKind};
use super::orientation::{Orientation, Unoriented};
use super::views::{Arc, Face};
use crate::error::{DiagramError, DiagramResult};

/// Whether a diagram accepts mutations.
///
/// A frozen diagram can be unfrozen; a locked diagram stays immutable for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mutability {
    #[default]
    Mutable,
    Frozen,
    Locked,
}

#[derive(Debug, Clone, Default)]
struct Cache {
    endpoints: OnceLock<Vec<Endpoint>>,
    arcs: OnceLock<Vec<Arc>>,
    faces: OnceLock<Vec<Face>>,
}

/// A planar diagram of a knot, link or spatial graph, stored as a rotation system.
///
/// Each node holds a counter-clockwise array of slots, and each slot names its twin endpoint.
/// Endpoint, arc and face views are derived on demand and cached until the next mutation.
///
/// Equality and hashing are structural: node ids, kinds, twins, directions and framing.
#[derive(Debug, Clone)]
pub struct PlanarDiagram<M: Orientation = Unoriented> {
    nodes: BTreeMap<NodeId, Node>,
    pub name: String,
    framing: Option<Framing>,
    pub attrs: Attributes,
    history: Vec<String>,
    tracing: bool,
    mode: Mutability,
    cache: Cache,
    _orientation: PhantomData<M>,
}

impl<M: Orientation> Default for PlanarDiagram<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Orientation> PlanarDiagram<M> {
    /// The empty diagram.
    pub fn new() -> Self {
        PlanarDiagram {
            nodes: BTreeMap::new(),
            name: String::new(),
            framing: None,
            attrs: Attributes::new(),
            history: Vec::new(),
            tracing: false,
            mode: Mutability::Mutable,
            cache: Cache::default(),
            _orientation: PhantomData,
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let mut d = Self::new();
        d.name = name.into();
        d
    }

    /// The unknot as a single degree-2 vertex joined to itself.
    pub fn unknot() -> Self {
        let mut d = Self::with_name("0_1");
        d.nodes
            .insert(NodeId(0), Node::new(NodeId(0), NodeKind::Vertex, 2));
        let (forward, backward) = Self::arc_directions();
        let a = Endpoint::new(0, 0);
        let b = Endpoint::new(0, 1);
        d.put(a, Link::with_direction(b, forward));
        d.put(b, Link::with_direction(a, backward));
        d
    }

    pub fn is_oriented(&self) -> bool {
        M::ORIENTED
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Mutability

    pub fn mode(&self) -> Mutability {
        self.mode
    }

    pub fn is_frozen(&self) -> bool {
        self.mode == Mutability::Frozen
    }

    pub fn is_locked(&self) -> bool {
        self.mode == Mutability::Locked
    }

    pub fn freeze(&mut self) {
        if self.mode == Mutability::Mutable {
            self.mode = Mutability::Frozen;
        }
    }

    pub fn unfreeze(&mut self) -> DiagramResult<()> {
        match self.mode {
            Mutability::Locked => Err(DiagramError::Immutable),
            _ => {
                self.mode = Mutability::Mutable;
                Ok(())
            }
        }
    }

    pub fn lock(&mut self) {
        self.mode = Mutability::Locked;
    }

    fn check_mutable(&self) -> DiagramResult<()> {
        match self.mode {
            Mutability::Mutable => Ok(()),
            Mutability::Frozen | Mutability::Locked => Err(DiagramError::Immutable),
        }
    }

    fn invalidate(&mut self) {
        self.cache = Cache::default();
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Nodes

    /// Add a node, or merge into an existing node of the same kind.
    ///
    /// Crossings default to degree 4 and reject any other degree. Re-adding a vertex with a larger
    /// degree extends its slot array with vacant slots.
    pub fn add_node(
        &mut self,
        id: NodeId,
        kind: NodeKind,
        degree: Option<usize>,
        attrs: Attributes,
    ) -> DiagramResult<()> {
        self.check_mutable()?;
        if let (Some(fixed), Some(d)) = (kind.fixed_degree(), degree) {
            if fixed != d {
                return Err(DiagramError::Structural(format!(
                    "{kind:?} {id} must have degree {fixed}, got {d}"
                )));
            }
        }

        if let Some(node) = self.nodes.get_mut(&id) {
            if node.kind != kind {
                return Err(DiagramError::UnsupportedOperation(format!(
                    "cannot re-add {id} as {kind:?}, it is a {:?}",
                    node.kind
                )));
            }
            node.attrs.extend(attrs);
            if let Some(d) = degree {
                if d > node.slots.len() {
                    node.slots.resize(d, None);
                }
            }
        } else {
            let degree = degree.or(kind.fixed_degree()).unwrap_or(0);
            let mut node = Node::new(id, kind, degree);
            node.attrs = attrs;
            self.nodes.insert(id, node);
        }
        self.invalidate();
        Ok(())
    }

    pub fn add_nodes_from(
        &mut self,
        nodes: impl IntoIterator<Item = (NodeId, NodeKind, Option<usize>)>,
    ) -> DiagramResult<()> {
        for (id, kind, degree) in nodes {
            self.add_node(id, kind, degree, Attributes::new())?;
        }
        Ok(())
    }

    pub fn add_crossing(&mut self, id: impl Into<NodeId>) -> DiagramResult<NodeId> {
        let id = id.into();
        self.add_node(id, NodeKind::Crossing, None, Attributes::new())?;
        Ok(id)
    }

    pub fn add_virtual_crossing(&mut self, id: impl Into<NodeId>) -> DiagramResult<NodeId> {
        let id = id.into();
        self.add_node(id, NodeKind::VirtualCrossing, None, Attributes::new())?;
        Ok(id)
    }

    pub fn add_vertex(&mut self, id: impl Into<NodeId>, degree: usize) -> DiagramResult<NodeId> {
        let id = id.into();
        self.add_node(id, NodeKind::Vertex, Some(degree), Attributes::new())?;
        Ok(id)
    }

    /// A fresh id: one more than the largest id in use.
    pub fn new_node_id(&self) -> NodeId {
        self.nodes
            .keys()
            .next_back()
            .map(|n| NodeId(n.0 + 1))
            .unwrap_or(NodeId(0))
    }

    /// Remove a node and return its record.
    ///
    /// With `remove_incident`, vertex slots that pointed at the node are removed and crossing
    /// slots that pointed at it are vacated. Otherwise neighbours keep dangling twins.
    pub fn remove_node(&mut self, id: NodeId, remove_incident: bool) -> DiagramResult<Node> {
        self.check_mutable()?;
        let node = self
            .nodes
            .remove(&id)
            .ok_or(DiagramError::NodeNotFound(id))?;
        self.invalidate();

        if remove_incident {
            let mut vertex_slots = Vec::new();
            for twin in node.twins().flatten() {
                if twin.node == id {
                    continue;
                }
                let Some(neighbour) = self.nodes.get_mut(&twin.node) else {
                    continue;
                };
                if neighbour.kind == NodeKind::Vertex {
                    vertex_slots.push(twin);
                } else if let Some(slot) = neighbour.slots.get_mut(twin.position) {
                    *slot = None;
                }
            }
            self.remove_endpoints_from(vertex_slots)?;
        }
        Ok(node)
    }

    /// Mutable access to a node's attributes. Attributes take no part in equality.
    pub fn node_attrs_mut(&mut self, id: NodeId) -> DiagramResult<&mut Attributes> {
        self.check_mutable()?;
        self.nodes
            .get_mut(&id)
            .map(|n| &mut n.attrs)
            .ok_or(DiagramError::NodeNotFound(id))
    }

    pub fn set_node_attr(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> DiagramResult<()> {
        self.node_attrs_mut(id)?.insert(key.into(), value.into());
        Ok(())
    }

    /// Reorder a node's slots: `permutation[old] = new`. All twins pointing at the node follow.
    pub fn permute_node(&mut self, id: NodeId, permutation: &[usize]) -> DiagramResult<()> {
        self.check_mutable()?;
        let node = self.nodes.get_mut(&id).ok_or(DiagramError::NodeNotFound(id))?;
        let degree = node.degree();
        let targets: BTreeSet<usize> = permutation.iter().copied().collect();
        if permutation.len() != degree || targets.len() != degree || targets.iter().any(|&p| p >= degree) {
            return Err(DiagramError::Structural(format!(
                "{permutation:?} is not a permutation of the {degree} slots of {id}"
            )));
        }

        let mut slots = vec![None; degree];
        for (old, slot) in node.slots.drain(..).enumerate() {
            slots[permutation[old]] = slot;
        }
        node.slots = slots;

        for link in self
            .nodes
            .values_mut()
            .flat_map(|n| n.slots.iter_mut().flatten())
        {
            if link.twin.node == id {
                link.twin.position = permutation[link.twin.position];
            }
        }
        self.invalidate();
        Ok(())
    }

    /// Rename nodes. Ids missing from `mapping` are kept; the result must stay injective.
    pub fn relabel_nodes(&mut self, mapping: &BTreeMap<NodeId, NodeId>) -> DiagramResult<()> {
        self.check_mutable()?;
        let rename = |n: NodeId| mapping.get(&n).copied().unwrap_or(n);
        let renamed: BTreeSet<NodeId> = self.nodes.keys().map(|&n| rename(n)).collect();
        if renamed.len() != self.nodes.len() {
            return Err(DiagramError::Structural(
                "node relabelling is not injective".to_string(),
            ));
        }

        let nodes = core::mem::take(&mut self.nodes);
        for (id, mut node) in nodes {
            node.id = rename(id);
            for link in node.slots.iter_mut().flatten() {
                link.twin.node = rename(link.twin.node);
            }
            self.nodes.insert(node.id, node);
        }
        self.invalidate();
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Endpoints and arcs

    /// Set one direction of an arc: the slot `slot` now points at `twin`.
    ///
    /// `direction` is the direction of `twin` and must be present exactly when the diagram is
    /// oriented. Vertices grow to fit `slot`; crossings have four slots only.
    pub fn set_endpoint(
        &mut self,
        slot: Endpoint,
        twin: Endpoint,
        direction: Option<Direction>,
        attrs: Attributes,
    ) -> DiagramResult<()> {
        self.check_mutable()?;
        if direction.is_some() != M::ORIENTED {
            return Err(DiagramError::OrientationMismatch {
                oriented: M::ORIENTED,
            });
        }
        let node = self
            .nodes
            .get_mut(&slot.node)
            .ok_or(DiagramError::NodeNotFound(slot.node))?;
        if slot.position >= node.degree() {
            if node.kind != NodeKind::Vertex {
                return Err(DiagramError::Structural(format!(
                    "{:?} {} has no position {}",
                    node.kind, slot.node, slot.position
                )));
            }
            node.slots.resize(slot.position + 1, None);
        }
        node.slots[slot.position] = Some(Link {
            twin,
            direction,
            attrs,
        });
        self.invalidate();
        Ok(())
    }

    /// Join `a` and `b` by an arc. In oriented diagrams the arc runs from `a` to `b`.
    pub fn set_arc(&mut self, a: Endpoint, b: Endpoint, attrs: Attributes) -> DiagramResult<()> {
        let (forward, backward) = Self::arc_directions();
        self.set_endpoint(a, b, forward, attrs.clone())?;
        self.set_endpoint(b, a, backward, attrs)
    }

    /// Join `a` and `b` by an attribute-free arc.
    pub fn connect(&mut self, a: Endpoint, b: Endpoint) -> DiagramResult<()> {
        self.set_arc(a, b, Attributes::new())
    }

    /// Remove a vertex slot, vacating the twin that pointed at it.
    ///
    /// Every reference to a higher position of the same node is shifted down by one.
    pub fn remove_endpoint(&mut self, slot: Endpoint) -> DiagramResult<()> {
        self.check_mutable()?;
        let node = self
            .nodes
            .get(&slot.node)
            .ok_or(DiagramError::NodeNotFound(slot.node))?;
        if node.kind != NodeKind::Vertex {
            return Err(DiagramError::Structural(format!(
                "cannot remove a slot of {:?} {}",
                node.kind, slot.node
            )));
        }
        if slot.position >= node.degree() {
            return Err(DiagramError::EndpointNotFound(slot));
        }

        if let Some(twin) = node.twin(slot.position) {
            if let Some(twin_slot) = self
                .nodes
                .get_mut(&twin.node)
                .and_then(|n| n.slots.get_mut(twin.position))
            {
                if twin_slot.as_ref().map(|l| l.twin) == Some(slot) {
                    *twin_slot = None;
                }
            }
        }

        if let Some(node) = self.nodes.get_mut(&slot.node) {
            node.slots.remove(slot.position);
        }
        for link in self
            .nodes
            .values_mut()
            .flat_map(|n| n.slots.iter_mut().flatten())
        {
            if link.twin.node == slot.node && link.twin.position > slot.position {
                link.twin.position -= 1;
            }
        }
        self.invalidate();
        Ok(())
    }

    /// Remove several vertex slots. Positions refer to the diagram before any removal.
    pub fn remove_endpoints_from(
        &mut self,
        slots: impl IntoIterator<Item = Endpoint>,
    ) -> DiagramResult<()> {
        let mut slots: Vec<Endpoint> = slots.into_iter().collect();
        slots.sort_by(|a, b| b.cmp(a));
        slots.dedup();
        for slot in slots {
            self.remove_endpoint(slot)?;
        }
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Queries

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in increasing id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    fn get(&self, id: NodeId) -> DiagramResult<&Node> {
        self.nodes.get(&id).ok_or(DiagramError::NodeNotFound(id))
    }

    pub fn kind(&self, id: NodeId) -> DiagramResult<NodeKind> {
        Ok(self.get(id)?.kind)
    }

    pub fn degree(&self, id: NodeId) -> DiagramResult<usize> {
        Ok(self.get(id)?.degree())
    }

    pub fn is_crossing(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.is_crossing())
    }

    pub fn is_vertex(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.is_vertex())
    }

    pub fn link(&self, e: Endpoint) -> DiagramResult<&Link> {
        self.get(e.node)?
            .link(e.position)
            .ok_or(DiagramError::EndpointNotFound(e))
    }

    pub fn twin(&self, e: Endpoint) -> DiagramResult<Endpoint> {
        Ok(self.link(e)?.twin)
    }

    /// Direction of the endpoint `e` itself, read from its twin's slot.
    pub fn direction(&self, e: Endpoint) -> DiagramResult<Option<Direction>> {
        let twin = self.twin(e)?;
        Ok(self.link(twin)?.direction)
    }

    /// The endpoint `offset` slots counter-clockwise from `e` around its node.
    pub fn rotate(&self, e: Endpoint, offset: isize) -> DiagramResult<Endpoint> {
        let degree = self.degree(e.node)?;
        if degree == 0 {
            return Err(DiagramError::EndpointNotFound(e));
        }
        Ok(e.rotated(offset, degree))
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_crossings(&self) -> usize {
        self.nodes.values().filter(|n| n.is_crossing()).count()
    }

    pub fn number_of_vertices(&self) -> usize {
        self.nodes.values().filter(|n| n.is_vertex()).count()
    }

    pub fn crossings(&self) -> Vec<NodeId> {
        self.ids_of(NodeKind::Crossing)
    }

    pub fn virtual_crossings(&self) -> Vec<NodeId> {
        self.ids_of(NodeKind::VirtualCrossing)
    }

    pub fn vertices(&self) -> Vec<NodeId> {
        self.ids_of(NodeKind::Vertex)
    }

    fn ids_of(&self, kind: NodeKind) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.kind == kind)
            .map(|n| n.id)
            .collect()
    }

    pub fn framing(&self) -> Option<Framing> {
        self.framing
    }

    pub fn set_framing(&mut self, framing: Option<Framing>) -> DiagramResult<()> {
        self.check_mutable()?;
        self.framing = framing;
        Ok(())
    }

    /// Shift the framing of a framed diagram. Unframed diagrams are left alone.
    pub(crate) fn shift_framing(&mut self, by: Framing) {
        if let Some(f) = self.framing.as_mut() {
            *f += by;
        }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // History

    /// Record applied moves in [`Self::history`] from now on.
    pub fn set_tracing(&mut self, tracing: bool) {
        self.tracing = tracing;
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub(crate) fn record(&mut self, entry: impl FnOnce() -> String) {
        if self.tracing {
            self.history.push(entry());
        }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Derived views

    /// All occupied endpoints in (node, position) order.
    pub fn endpoints(&self) -> &[Endpoint] {
        self.cache.endpoints.get_or_init(|| {
            self.nodes
                .values()
                .flat_map(|n| {
                    n.slots
                        .iter()
                        .enumerate()
                        .filter(|(_, s)| s.is_some())
                        .map(move |(p, _)| Endpoint::new(n.id, p))
                })
                .collect()
        })
    }

    pub fn arcs(&self) -> &[Arc] {
        self.cache.arcs.get_or_init(|| {
            let mut arcs: Vec<Arc> = self
                .nodes
                .values()
                .flat_map(|n| {
                    n.slots.iter().enumerate().filter_map(move |(p, s)| {
                        s.as_ref().map(|l| Arc::new(Endpoint::new(n.id, p), l.twin))
                    })
                })
                .collect();
            arcs.sort();
            arcs.dedup();
            arcs
        })
    }

    /// Faces, each starting at its smallest endpoint in (node, position) order.
    ///
    /// A walk stops early at a vacant slot, so faces of a broken diagram may be partial.
    pub fn faces(&self) -> &[Face] {
        self.cache.faces.get_or_init(|| {
            let mut used: BTreeSet<Endpoint> = BTreeSet::new();
            let mut faces = Vec::new();
            for &start in self.endpoints() {
                if used.contains(&start) {
                    continue;
                }
                let mut face = Vec::new();
                let mut e = start;
                while used.insert(e) {
                    face.push(e);
                    match self.next_in_face(e) {
                        Some(next) => e = next,
                        None => break,
                    }
                }
                faces.push(Face(face));
            }
            faces
        })
    }

    /// The endpoint following `e` along the boundary of its face.
    pub fn next_in_face(&self, e: Endpoint) -> Option<Endpoint> {
        let twin = self.twin(e).ok()?;
        let next = self.rotate(twin, -1).ok()?;
        self.link(next).ok().map(|_| next)
    }

    /// The face containing endpoint `e`.
    pub fn face_of(&self, e: Endpoint) -> Option<&Face> {
        self.faces().iter().find(|f| f.contains(&e))
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Copies

    /// A mutable deep copy.
    pub fn copy(&self) -> Self {
        let mut d = self.clone();
        d.mode = Mutability::Mutable;
        d
    }

    /// A mutable deep copy with a different orientation mode.
    ///
    /// Dropping orientation discards directions; an unoriented diagram cannot gain orientation.
    pub fn copy_as<N: Orientation>(&self) -> DiagramResult<PlanarDiagram<N>> {
        if N::ORIENTED && !M::ORIENTED {
            return Err(DiagramError::Structural(
                "cannot orient an unoriented diagram by copying".to_string(),
            ));
        }
        let mut nodes = self.nodes.clone();
        if !N::ORIENTED {
            for link in nodes.values_mut().flat_map(|n| n.slots.iter_mut().flatten()) {
                link.direction = None;
            }
        }
        Ok(PlanarDiagram {
            nodes,
            name: self.name.clone(),
            framing: self.framing,
            attrs: self.attrs.clone(),
            history: self.history.clone(),
            tracing: self.tracing,
            mode: Mutability::Mutable,
            cache: Cache::default(),
            _orientation: PhantomData,
        })
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Crate internals

    /// Directions stored at the tail and the head of a new arc.
    pub(crate) fn arc_directions() -> (Option<Direction>, Option<Direction>) {
        if M::ORIENTED {
            (Some(Direction::Ingoing), Some(Direction::Outgoing))
        } else {
            (None, None)
        }
    }

    fn put(&mut self, e: Endpoint, link: Link) {
        if let Some(slot) = self
            .nodes
            .get_mut(&e.node)
            .and_then(|n| n.slots.get_mut(e.position))
        {
            *slot = Some(link);
        }
        self.invalidate();
    }

    /// Insert a fresh node with all slots vacant; used by move executors on private copies.
    pub(crate) fn insert_node(&mut self, kind: NodeKind, degree: usize) -> DiagramResult<NodeId> {
        let id = self.new_node_id();
        self.add_node(id, kind, Some(degree), Attributes::new())?;
        Ok(id)
    }
}

impl Link {
    pub(crate) fn with_direction(twin: Endpoint, direction: Option<Direction>) -> Self {
        Link {
            twin,
            direction,
            attrs: Attributes::new(),
        }
    }
}

impl<M: Orientation> PartialEq for PlanarDiagram<M> {
    fn eq(&self, other: &Self) -> bool {
        self.framing == other.framing && self.nodes == other.nodes
    }
}

impl<M: Orientation> Eq for PlanarDiagram<M> {}

impl<M: Orientation> Hash for PlanarDiagram<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.framing.hash(state);
        self.nodes.len().hash(state);
        for node in self.nodes.values() {
            node.hash(state);
        }
    }
}

impl<M: Orientation> fmt::Display for PlanarDiagram<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            write!(f, "{} ", self.name)?;
        }
        write!(f, "PlanarDiagram")?;
        if let Some(framing) = self.framing {
            write!(f, " (framing {framing})")?;
        }
        write!(f, " [")?;
        for (i, node) in self.nodes.values().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let tag = match node.kind {
                NodeKind::Vertex => "V",
                NodeKind::Crossing => "X",
                NodeKind::VirtualCrossing => "VX",
            };
            write!(f, "{tag}{}(", node.id.0)?;
            for (p, link) in node.slots.iter().enumerate() {
                if p > 0 {
                    write!(f, ",")?;
                }
                match link {
                    Some(l) => {
                        write!(f, "{}:{}", l.twin.node.0, l.twin.position)?;
                        match l.direction {
                            Some(Direction::Outgoing) => write!(f, "o")?,
                            Some(Direction::Ingoing) => write!(f, "i")?,
                            None => {}
                        }
                    }
                    None => write!(f, "_")?,
                }
            }
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::Oriented;

    fn theta() -> PlanarDiagram {
        let mut d = PlanarDiagram::new();
        d.add_vertex(0, 3).unwrap();
        d.add_vertex(1, 3).unwrap();
        for p in 0..3 {
            d.connect(Endpoint::new(0, p), Endpoint::new(1, 2 - p)).unwrap();
        }
        d
    }

    #[test]
    fn test_unknot_views() {
        let d: PlanarDiagram = PlanarDiagram::unknot();
        assert_eq!(d.number_of_nodes(), 1);
        assert_eq!(d.endpoints().len(), 2);
        assert_eq!(d.arcs().len(), 1);
        assert_eq!(d.faces().len(), 2);
        assert_eq!(d.twin(Endpoint::new(0, 0)), Ok(Endpoint::new(0, 1)));
    }

    #[test]
    fn test_theta_faces() {
        let d = theta();
        assert_eq!(d.arcs().len(), 3);
        let faces = d.faces();
        assert_eq!(faces.len(), 3);
        assert!(faces.iter().all(|f| f.len() == 2));
    }

    #[test]
    fn test_readding_node() {
        let mut d: PlanarDiagram = PlanarDiagram::new();
        d.add_vertex(0, 1).unwrap();
        d.add_vertex(0, 3).unwrap();
        assert_eq!(d.degree(NodeId(0)), Ok(3));
        assert!(matches!(
            d.add_crossing(0),
            Err(DiagramError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            d.add_node(NodeId(1), NodeKind::Crossing, Some(3), Attributes::new()),
            Err(DiagramError::Structural(_))
        ));
    }

    #[test]
    fn test_set_endpoint_errors() {
        let mut d: PlanarDiagram = PlanarDiagram::new();
        d.add_crossing(0).unwrap();
        assert_eq!(
            d.set_endpoint(Endpoint::new(1, 0), Endpoint::new(0, 0), None, Attributes::new()),
            Err(DiagramError::NodeNotFound(NodeId(1)))
        );
        assert!(matches!(
            d.set_endpoint(Endpoint::new(0, 4), Endpoint::new(0, 0), None, Attributes::new()),
            Err(DiagramError::Structural(_))
        ));
        assert_eq!(
            d.set_endpoint(
                Endpoint::new(0, 0),
                Endpoint::new(0, 1),
                Some(Direction::Ingoing),
                Attributes::new()
            ),
            Err(DiagramError::OrientationMismatch { oriented: false })
        );

        d.add_vertex(1, 0).unwrap();
        d.set_endpoint(Endpoint::new(1, 2), Endpoint::new(0, 0), None, Attributes::new())
            .unwrap();
        assert_eq!(d.degree(NodeId(1)), Ok(3));
    }

    #[test]
    fn test_frozen_rejects_mutation() {
        let mut d: PlanarDiagram = PlanarDiagram::unknot();
        d.freeze();
        assert_eq!(d.add_vertex(1, 2), Err(DiagramError::Immutable));
        d.unfreeze().unwrap();
        d.add_vertex(1, 2).unwrap();
        d.lock();
        assert_eq!(d.unfreeze(), Err(DiagramError::Immutable));
        assert!(!d.copy().is_locked());
    }

    #[test]
    fn test_remove_endpoint_reindexes() {
        let mut d = theta();
        d.remove_endpoint(Endpoint::new(0, 0)).unwrap();
        assert_eq!(d.degree(NodeId(0)), Ok(2));
        // (0,1)-(1,1) became (0,0)-(1,1) and (1,2) was vacated
        assert_eq!(d.twin(Endpoint::new(0, 0)), Ok(Endpoint::new(1, 1)));
        assert_eq!(d.twin(Endpoint::new(1, 1)), Ok(Endpoint::new(0, 0)));
        assert_eq!(
            d.twin(Endpoint::new(1, 2)),
            Err(DiagramError::EndpointNotFound(Endpoint::new(1, 2)))
        );
        d.remove_endpoint(Endpoint::new(1, 2)).unwrap();
        assert_eq!(d.endpoints().len(), 4);
    }

    #[test]
    fn test_remove_node_with_incident() {
        let mut d = theta();
        let removed = d.remove_node(NodeId(1), true).unwrap();
        assert_eq!(removed.degree(), 3);
        assert_eq!(d.degree(NodeId(0)), Ok(0));
        assert!(d.arcs().is_empty());
    }

    #[test]
    fn test_permute_node_rewires_twins() {
        let mut d = theta();
        let before = d.clone();
        d.permute_node(NodeId(0), &[1, 2, 0]).unwrap();
        assert_eq!(d.twin(Endpoint::new(0, 1)), Ok(Endpoint::new(1, 2)));
        assert_eq!(d.twin(Endpoint::new(1, 2)), Ok(Endpoint::new(0, 1)));
        d.permute_node(NodeId(0), &[2, 0, 1]).unwrap();
        assert_eq!(d, before);
        assert!(d.permute_node(NodeId(0), &[0, 0, 1]).is_err());
    }

    #[test]
    fn test_relabel_nodes() {
        let mut d = theta();
        let mapping = BTreeMap::from([(NodeId(0), NodeId(5))]);
        d.relabel_nodes(&mapping).unwrap();
        assert_eq!(d.node_ids().collect::<Vec<_>>(), vec![NodeId(1), NodeId(5)]);
        assert_eq!(d.twin(Endpoint::new(1, 0)), Ok(Endpoint::new(5, 2)));
        let clash = BTreeMap::from([(NodeId(1), NodeId(5))]);
        assert!(d.relabel_nodes(&clash).is_err());
    }

    #[test]
    fn test_oriented_copy() {
        let d: PlanarDiagram<Oriented> = PlanarDiagram::unknot();
        assert_eq!(
            d.direction(Endpoint::new(0, 0)),
            Ok(Some(Direction::Outgoing))
        );
        assert_eq!(d.direction(Endpoint::new(0, 1)), Ok(Some(Direction::Ingoing)));
        let u: PlanarDiagram = d.copy_as().unwrap();
        assert_eq!(u.direction(Endpoint::new(0, 0)), Ok(None));
        assert!(u.copy_as::<Oriented>().is_err());
    }

    #[test]
    fn test_equality_ignores_attributes() {
        let mut a = theta();
        let b = theta();
        a.name = "theta".into();
        a.set_node_attr(NodeId(0), "color", "red").unwrap();
        assert_eq!(a, b);
        a.set_framing(Some(Framing::ONE)).unwrap();
        assert_ne!(a, b);
    }
}
