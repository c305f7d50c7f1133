use log::{debug, info};

use crate::diagram::PlanarDiagram;
use crate::error::DiagramResult;
use crate::moves::SearchConfig;
use crate::search::space::{NonIncreasingSpace, Strategy};
use crate::union_find::UnionFind;

/// Input diagrams shown to be equivalent, with the simplest diagram found for them.
#[derive(Debug, Clone, PartialEq)]
pub struct EquivalenceClass {
    pub representative: PlanarDiagram,
    /// Indices into the input, ascending.
    pub members: Vec<usize>,
}

/// Partition `diagrams` into classes proved equivalent by moves, adding flypes when `flype` is set.
///
/// See [`reduce_equivalent_diagrams_with`].
pub fn reduce_equivalent_diagrams(
    diagrams: &[PlanarDiagram],
    depth: usize,
    flype: bool,
) -> DiagramResult<Vec<EquivalenceClass>> {
    let config = SearchConfig::default().with_flype(flype);
    reduce_equivalent_diagrams_with(diagrams, depth, &config)
}

/// Grow a greedy non-increasing space around every input and merge inputs whose spaces meet.
///
/// Spaces grow one level per round for at most `depth` rounds. A space that stops finding new
/// diagrams is not grown again, and the search ends early once every input is in one class or
/// every space is exhausted. Diagrams left in different classes may still be equivalent.
pub fn reduce_equivalent_diagrams_with(
    diagrams: &[PlanarDiagram],
    depth: usize,
    config: &SearchConfig,
) -> DiagramResult<Vec<EquivalenceClass>> {
    let mut spaces = diagrams
        .iter()
        .map(|d| NonIncreasingSpace::new(d, *config, Strategy::Greedy))
        .collect::<DiagramResult<Vec<_>>>()?;
    let mut classes = UnionFind::new(diagrams.len());

    let merge = |spaces: &[NonIncreasingSpace], classes: &mut UnionFind| {
        for i in 0..spaces.len() {
            for j in (i + 1)..spaces.len() {
                if !classes.same(i, j) && spaces[i].set().intersects(spaces[j].set()) {
                    classes.union(i, j);
                }
            }
        }
    };

    merge(&spaces, &mut classes);
    for round in 0..depth {
        if classes.components() <= 1 {
            break;
        }
        let mut grown = 0;
        for space in spaces.iter_mut() {
            if space.grow()? {
                grown += 1;
            }
        }
        merge(&spaces, &mut classes);
        debug!(round = round, grown = grown, classes = classes.components(); "Compared spaces");
        if grown == 0 {
            break;
        }
    }

    let mut out = Vec::new();
    for members in classes.classes() {
        let representative = members
            .iter()
            .filter_map(|&i| spaces[i].best())
            .min_by_key(|x| (x.number_of_nodes(), x.number_of_crossings(), x.canonical_key()))
            .cloned()
            .unwrap_or_default();
        out.push(EquivalenceClass {
            representative,
            members,
        });
    }
    info!(inputs = diagrams.len(), classes = out.len(); "Reduced equivalent diagrams");
    Ok(out)
}
