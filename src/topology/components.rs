use std::collections::{BTreeMap, BTreeSet};

use crate::diagram::{Arc, NodeId, Orientation, PlanarDiagram};
use crate::union_find::UnionFind;

/// Dense indexing of a diagram's nodes, for union-find over node ids.
pub(crate) struct NodeIndex {
    pub(crate) ids: Vec<NodeId>,
    pub(crate) index: BTreeMap<NodeId, usize>,
}

impl NodeIndex {
    pub(crate) fn new<M: Orientation>(d: &PlanarDiagram<M>) -> Self {
        let ids: Vec<NodeId> = d.node_ids().collect();
        let index = ids.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        NodeIndex { ids, index }
    }

    /// Union-find over the nodes, merged along every arc not in `skip`.
    pub(crate) fn union_arcs<'a>(
        &self,
        arcs: impl IntoIterator<Item = &'a Arc>,
        skip: &BTreeSet<Arc>,
    ) -> UnionFind {
        let mut uf = UnionFind::new(self.ids.len());
        self.merge(&mut uf, arcs, skip);
        uf
    }

    pub(crate) fn merge<'a>(
        &self,
        uf: &mut UnionFind,
        arcs: impl IntoIterator<Item = &'a Arc>,
        skip: &BTreeSet<Arc>,
    ) {
        for arc in arcs {
            if skip.contains(arc) {
                continue;
            }
            let [a, b] = arc.endpoints();
            if let (Some(&i), Some(&j)) = (self.index.get(&a.node), self.index.get(&b.node)) {
                uf.union(i, j);
            }
        }
    }
}

pub fn number_of_components<M: Orientation>(d: &PlanarDiagram<M>) -> usize {
    let index = NodeIndex::new(d);
    index.union_arcs(d.arcs(), &BTreeSet::new()).components()
}

/// Node sets of the connected components, each sorted, ordered by smallest node.
pub fn connected_components<M: Orientation>(d: &PlanarDiagram<M>) -> Vec<Vec<NodeId>> {
    let index = NodeIndex::new(d);
    index
        .union_arcs(d.arcs(), &BTreeSet::new())
        .classes()
        .into_iter()
        .map(|class| class.into_iter().map(|i| index.ids[i]).collect())
        .collect()
}

/// Nodes reachable from `start` without crossing any arc in `removed`.
pub fn component_without_arcs<M: Orientation>(
    d: &PlanarDiagram<M>,
    start: NodeId,
    removed: &[Arc],
) -> BTreeSet<NodeId> {
    let index = NodeIndex::new(d);
    let Some(&root) = index.index.get(&start) else {
        return BTreeSet::new();
    };
    let skip: BTreeSet<Arc> = removed.iter().copied().collect();
    let uf = index.union_arcs(d.arcs(), &skip);
    index
        .ids
        .iter()
        .enumerate()
        .filter(|&(i, _)| uf.same(i, root))
        .map(|(_, &n)| n)
        .collect()
}
