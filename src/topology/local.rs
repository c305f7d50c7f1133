use crate::diagram::{Arc, Endpoint, Face, NodeId, Orientation, PlanarDiagram};
use crate::error::{precondition, DiagramResult};

/// Vertices of degree 1.
pub fn leaves<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<NodeId> {
    d.nodes()
        .filter(|n| n.is_vertex() && n.degree() == 1)
        .map(|n| n.id())
        .collect()
}

/// Arcs with both ends at the same node.
pub fn loops<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<Arc> {
    d.arcs().iter().copied().filter(Arc::is_loop).collect()
}

/// Crossing endpoints `(c, p)` joined to `(c, p + 1)`: the face of `(c, p)` is a monogon.
pub fn kinks<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<Endpoint> {
    d.crossings()
        .into_iter()
        .flat_map(|c| (0..4).map(move |p| Endpoint::new(c, p)))
        .filter(|&e| d.twin(e).ok() == Some(e.rotated(1, 4)))
        .collect()
}

/// Sign of the kink at `e`: positive when the kink sits on an even position.
pub fn kink_sign<M: Orientation>(d: &PlanarDiagram<M>, e: Endpoint) -> DiagramResult<i64> {
    if !d.is_crossing(e.node) || d.twin(e)? != e.rotated(1, 4) {
        return precondition(format!("{e} is not a kink"));
    }
    Ok(if e.position % 2 == 0 { 1 } else { -1 })
}

/// Whether the crossings around `face` alternate over and under.
///
/// Walking a face of an alternating diagram, every crossing corner turns the same way, so all
/// crossing endpoints of the face share the same position parity. Vertices are ignored.
pub fn is_face_alternating<M: Orientation>(d: &PlanarDiagram<M>, face: &Face) -> bool {
    let mut parities = face
        .iter()
        .filter(|e| d.is_crossing(e.node))
        .map(|e| e.position % 2);
    match parities.next() {
        Some(first) => parities.all(|p| p == first),
        None => true,
    }
}

pub fn is_alternating<M: Orientation>(d: &PlanarDiagram<M>) -> bool {
    d.faces().iter().all(|f| is_face_alternating(d, f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::from_pd_code;

    #[test]
    fn test_kinks() {
        // a single positive kink closed into a loop
        let mut d: PlanarDiagram = PlanarDiagram::new();
        d.add_crossing(0).unwrap();
        d.connect(Endpoint::new(0, 0), Endpoint::new(0, 1)).unwrap();
        d.connect(Endpoint::new(0, 2), Endpoint::new(0, 3)).unwrap();
        assert!(d.sanity_check().is_ok());
        assert_eq!(kinks(&d), vec![Endpoint::new(0, 0), Endpoint::new(0, 2)]);
        assert_eq!(kink_sign(&d, Endpoint::new(0, 2)), Ok(1));
        assert!(kink_sign(&d, Endpoint::new(0, 1)).is_err());
        assert_eq!(loops(&d).len(), 2);
    }

    #[test]
    fn test_trefoil_is_alternating() {
        let d = from_pd_code(&[[0, 1, 2, 3], [4, 5, 3, 2], [5, 4, 1, 0]]).unwrap();
        assert!(is_alternating(&d));
        assert!(kinks(&d).is_empty());
    }
}
