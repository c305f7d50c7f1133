use std::collections::BTreeMap;

use crate::diagram::{Arc, Endpoint, Face, Orientation, PlanarDiagram};

/// The dual graph: one node per face, one edge per arc joining the two faces it separates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualGraph {
    pub faces: Vec<Face>,
    /// `(i, j, arc)`: faces `i` and `j` meet along `arc`. A loop when `i == j`.
    pub edges: Vec<(usize, usize, Arc)>,
}

impl DualGraph {
    /// Faces sharing an arc with face `face`, without repetition.
    pub fn neighbours(&self, face: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .edges
            .iter()
            .filter_map(|&(i, j, _)| {
                if i == face {
                    Some(j)
                } else if j == face {
                    Some(i)
                } else {
                    None
                }
            })
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

/// The arc at `a` borders the face of `a` and the face of its twin.
pub fn dual_graph<M: Orientation>(d: &PlanarDiagram<M>) -> DualGraph {
    let faces = d.faces().to_vec();
    let face_of: BTreeMap<Endpoint, usize> = faces
        .iter()
        .enumerate()
        .flat_map(|(i, f)| f.iter().map(move |&e| (e, i)))
        .collect();
    let edges = d
        .arcs()
        .iter()
        .filter_map(|&arc| {
            let [a, b] = arc.endpoints();
            Some((*face_of.get(&a)?, *face_of.get(&b)?, arc))
        })
        .collect();
    DualGraph { faces, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::from_pd_code;

    #[test]
    fn test_trefoil_dual() {
        let d = from_pd_code(&[[0, 1, 2, 3], [4, 5, 3, 2], [5, 4, 1, 0]]).unwrap();
        let dual = dual_graph(&d);
        assert_eq!(dual.faces.len(), 5);
        assert_eq!(dual.edges.len(), 6);
        // the two triangles each touch the three bigons and nothing else
        let triangles: Vec<usize> = (0..5).filter(|&i| dual.faces[i].len() == 3).collect();
        assert_eq!(triangles.len(), 2);
        for t in triangles {
            let n = dual.neighbours(t);
            assert_eq!(n.len(), 3);
            assert!(n.iter().all(|&i| dual.faces[i].len() == 2));
        }
    }
}
