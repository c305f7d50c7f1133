//! Cut sets: arcs and nodes whose removal disconnects a diagram.
use std::collections::BTreeSet;

use crate::diagram::{Arc, NodeId, Orientation, PlanarDiagram};
use crate::topology::components::NodeIndex;
use crate::topology::local::leaves;

fn components_without<M: Orientation>(
    d: &PlanarDiagram<M>,
    index: &NodeIndex,
    arcs: &BTreeSet<Arc>,
) -> usize {
    index.union_arcs(d.arcs(), arcs).components()
}

/// Whether removing `arcs` increases the number of connected components.
pub fn is_arc_cut_set<M: Orientation>(d: &PlanarDiagram<M>, arcs: &[Arc]) -> bool {
    let index = NodeIndex::new(d);
    let base = components_without(d, &index, &BTreeSet::new());
    let skip: BTreeSet<Arc> = arcs.iter().copied().collect();
    components_without(d, &index, &skip) > base
}

/// Arcs whose removal alone disconnects the diagram.
pub fn cut_arcs<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<Arc> {
    d.arcs()
        .iter()
        .copied()
        .filter(|arc| is_arc_cut_set(d, &[*arc]))
        .collect()
}

/// Cut arcs that do not end at a leaf: removing one leaves two non-trivial pieces.
pub fn bridges<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<Arc> {
    let leaves: BTreeSet<NodeId> = leaves(d).into_iter().collect();
    cut_arcs(d)
        .into_iter()
        .filter(|arc| arc.endpoints().iter().all(|e| !leaves.contains(&e.node)))
        .collect()
}

/// Nodes whose removal, with their incident arcs, disconnects the rest of their component.
pub fn cut_nodes<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<NodeId> {
    let index = NodeIndex::new(d);
    let base = components_without(d, &index, &BTreeSet::new());
    d.node_ids()
        .filter(|&n| {
            let incident: BTreeSet<Arc> = d
                .arcs()
                .iter()
                .copied()
                .filter(|a| a.endpoints().iter().any(|e| e.node == n))
                .collect();
            // the removed node still counts as a singleton class
            components_without(d, &index, &incident) - 1 > base
        })
        .collect()
}

/// Minimal sets of exactly `k` arcs that disconnect the diagram.
///
/// A set is minimal when none of its proper subsets is a cut set. Loops never take part.
pub fn arc_cut_sets<M: Orientation>(d: &PlanarDiagram<M>, k: usize) -> Vec<Vec<Arc>> {
    let candidates: Vec<Arc> = d.arcs().iter().copied().filter(|a| !a.is_loop()).collect();
    let index = NodeIndex::new(d);
    let base = components_without(d, &index, &BTreeSet::new());
    let cuts = |set: &BTreeSet<Arc>| components_without(d, &index, set) > base;

    let mut result = Vec::new();
    let mut chosen: Vec<usize> = Vec::with_capacity(k);
    fn combinations(
        n: usize,
        k: usize,
        from: usize,
        chosen: &mut Vec<usize>,
        visit: &mut dyn FnMut(&[usize]),
    ) {
        if chosen.len() == k {
            visit(chosen);
            return;
        }
        for i in from..n {
            chosen.push(i);
            combinations(n, k, i + 1, chosen, visit);
            chosen.pop();
        }
    }

    if k == 0 || k > candidates.len() {
        return result;
    }
    combinations(candidates.len(), k, 0, &mut chosen, &mut |indices: &[usize]| {
        let set: BTreeSet<Arc> = indices.iter().map(|&i| candidates[i]).collect();
        if !cuts(&set) {
            return;
        }
        // dropping any one arc must reconnect the diagram
        let minimal = set.iter().all(|arc| {
            let mut smaller = set.clone();
            smaller.remove(arc);
            !cuts(&smaller)
        });
        if minimal {
            result.push(set.into_iter().collect());
        }
    });
    result
}
