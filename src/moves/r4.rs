//! Reidemeister IV: sliding a vertex across a strand.
use crate::diagram::{Endpoint, NodeId, NodeKind, PlanarDiagram};
use crate::error::{precondition, DiagramResult, DiagramError};
use crate::moves::{MoveKind, ReidemeisterMove, SearchConfig};

/// Filter on the crossing change of an R4 slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    Increase,
    Decrease,
    Preserve,
    Any,
}

impl Change {
    fn admits(&self, delta: isize) -> bool {
        match self {
            Change::Increase => delta > 0,
            Change::Decrease => delta < 0,
            Change::Preserve => delta == 0,
            Change::Any => true,
        }
    }
}

/// A vertex and a block of `block` consecutive slots starting at `start`.
///
/// Every edge of the block runs to a crossing with one strand, consecutive along that strand.
/// Sliding the vertex across the strand removes those crossings and creates one on each of the
/// remaining `degree - block` edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideLocation {
    pub vertex: NodeId,
    pub start: usize,
    pub block: usize,
}

impl SlideLocation {
    /// Crossings gained by the slide; negative when crossings are lost.
    pub fn crossing_change(&self, degree: usize) -> isize {
        (degree - self.block) as isize - self.block as isize
    }
}

pub struct Slide;

/// The resolved neighbourhood of a slide.
struct Neighbourhood {
    degree: usize,
    block: Vec<usize>,
    rest: Vec<usize>,
    /// twins of the block slots, one per crossed crossing
    crossed: Vec<Endpoint>,
    /// outer ends of the strand before and after the block
    strand_in: Endpoint,
    strand_out: Endpoint,
    /// far ends of the block edges, beyond their crossings
    far: Vec<Endpoint>,
    /// twins of the remaining vertex slots
    rest_twins: Vec<Endpoint>,
}

fn neighbourhood(d: &PlanarDiagram, location: &SlideLocation) -> Option<Neighbourhood> {
    let SlideLocation {
        vertex,
        start,
        block,
    } = *location;
    let node = d.node(vertex)?;
    let degree = node.degree();
    if !node.is_vertex() || block == 0 || block >= degree || start >= degree {
        return None;
    }
    let block_slots: Vec<usize> = (0..block).map(|i| (start + i) % degree).collect();
    let rest: Vec<usize> = (block..degree).map(|i| (start + i) % degree).collect();

    let mut crossed = Vec::with_capacity(block);
    for &s in &block_slots {
        let t = node.twin(s)?;
        if t.node == vertex || !d.is_crossing(t.node) || crossed.iter().any(|c: &Endpoint| c.node == t.node) {
            return None;
        }
        crossed.push(t);
    }
    if crossed.iter().any(|c| c.position % 2 != crossed[0].position % 2) {
        return None;
    }
    for pair in crossed.windows(2) {
        if d.twin(pair[0].rotated(-1, 4)).ok()? != pair[1].rotated(1, 4) {
            return None;
        }
    }

    let first = crossed[0];
    let last = crossed[block - 1];
    let strand_in = d.twin(first.rotated(1, 4)).ok()?;
    let strand_out = d.twin(last.rotated(-1, 4)).ok()?;
    let far = crossed
        .iter()
        .map(|c| d.twin(c.rotated(2, 4)).ok())
        .collect::<Option<Vec<_>>>()?;
    let rest_twins = rest
        .iter()
        .map(|&t| node.twin(t))
        .collect::<Option<Vec<_>>>()?;

    let local = |e: &Endpoint| e.node == vertex || crossed.iter().any(|c| c.node == e.node);
    let ends = [strand_in, strand_out];
    let outer = ends
        .iter()
        .chain(far.iter())
        .chain(rest_twins.iter());
    if outer.clone().any(local) {
        return None;
    }

    Some(Neighbourhood {
        degree,
        block: block_slots,
        rest,
        crossed,
        strand_in,
        strand_out,
        far,
        rest_twins,
    })
}

/// All slide locations whose crossing change passes `change`.
pub fn find_slides(d: &PlanarDiagram, change: Change) -> Vec<SlideLocation> {
    let mut out = Vec::new();
    for node in d.nodes().filter(|n| n.is_vertex() && n.degree() >= 2) {
        let degree = node.degree();
        for start in 0..degree {
            for block in 1..degree {
                let location = SlideLocation {
                    vertex: node.id(),
                    start,
                    block,
                };
                if change.admits(location.crossing_change(degree))
                    && neighbourhood(d, &location).is_some()
                {
                    out.push(location);
                }
            }
        }
    }
    out
}

impl ReidemeisterMove for Slide {
    type Location = SlideLocation;
    const KIND: MoveKind = MoveKind::R4;
    const NAME: &'static str = "R4";

    fn find(d: &PlanarDiagram, _config: &SearchConfig) -> Vec<SlideLocation> {
        find_slides(d, Change::Any)
    }

    fn rewrite(d: &mut PlanarDiagram, location: &SlideLocation) -> DiagramResult<()> {
        let Some(n) = neighbourhood(d, location) else {
            return precondition(format!("no R4 slide at {location:?}"));
        };
        let vertex = location.vertex;
        let v = |p: usize| Endpoint::new(vertex, p);
        // the strand passes over the vertex's edges when it uses the odd positions
        let over = n.crossed[0].position % 2 == 0;

        for c in &n.crossed {
            d.remove_node(c.node, false)?;
        }
        for (&s, &f) in n.block.iter().zip(&n.far) {
            d.connect(v(s), f)?;
        }

        let r = if over { 0 } else { 3 };
        let mut previous = n.strand_in;
        for (&t, &g) in n.rest.iter().zip(&n.rest_twins).rev() {
            let y = d.insert_node(NodeKind::Crossing, 4)?;
            let at = |offset: usize| Endpoint::new(y, (r + offset) % 4);
            d.connect(at(0), v(t))?;
            d.connect(at(2), g)?;
            d.connect(at(3), previous)?;
            previous = at(1);
        }
        d.connect(previous, n.strand_out)?;
        if d.degree(vertex)? != n.degree {
            return Err(DiagramError::Structural(format!(
                "R4 slide changed the degree of {vertex}"
            )));
        }
        Ok(())
    }
}
