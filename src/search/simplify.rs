use std::collections::BTreeMap;

use log::debug;

use crate::diagram::{CanonicalKey, PlanarDiagram};
use crate::error::DiagramResult;
use crate::moves::{execute, find, Detour, SearchConfig};
use crate::search::space::{crossing_decreasing_space, crossing_preserving_space, normalized};

/// Total order used to pick the simplest diagram: node count, then crossings, then structure.
fn rank(d: &PlanarDiagram) -> (usize, usize, CanonicalKey) {
    (d.number_of_nodes(), d.number_of_crossings(), d.canonical_key())
}

/// Simplify `d` with the default move families, adding flypes when `flype` is set.
///
/// See [`simplify_with`].
pub fn simplify(d: &PlanarDiagram, depth: usize, flype: bool) -> DiagramResult<PlanarDiagram> {
    simplify_with(d, depth, &SearchConfig::default().with_flype(flype))
}

/// Reduce the number of crossings of `d` as far as `depth` rounds of search allow.
///
/// The diagram is first decreased greedily. Each round then decreases every diagram in the
/// crossing-preserving closure of the current frontier. A round that finds a simpler diagram
/// restarts from it; a round that does not takes every detour from the closure instead, so the
/// frontier can grow quickly with `depth`.
///
/// Returns the simplest diagram seen, in canonical form.
pub fn simplify_with(
    d: &PlanarDiagram,
    depth: usize,
    config: &SearchConfig,
) -> DiagramResult<PlanarDiagram> {
    let mut best = normalized(&crossing_decreasing_space(d, config)?)?;
    if best.number_of_crossings() == 0 {
        return Ok(best);
    }

    let mut frontier = vec![best.clone()];
    for round in 0..depth {
        let mut pool: BTreeMap<CanonicalKey, PlanarDiagram> = BTreeMap::new();
        for f in &frontier {
            for x in crossing_preserving_space(f, config)?.iter() {
                pool.entry(x.canonical_key()).or_insert_with(|| x.clone());
            }
        }

        let mut candidate: Option<(_, PlanarDiagram)> = None;
        for x in pool.values() {
            let reduced = normalized(&crossing_decreasing_space(x, config)?)?;
            let r = rank(&reduced);
            match &candidate {
                Some((best_rank, _)) if *best_rank <= r => {}
                _ => candidate = Some((r, reduced)),
            }
        }

        if let Some((r, reduced)) = candidate {
            if r < rank(&best) {
                best = reduced;
                debug!(
                    round = round,
                    crossings = best.number_of_crossings();
                    "Simplified diagram"
                );
                if best.number_of_crossings() == 0 {
                    return Ok(best);
                }
                frontier = vec![best.clone()];
                continue;
            }
        }

        let mut detours: BTreeMap<CanonicalKey, PlanarDiagram> = BTreeMap::new();
        for x in pool.values() {
            for location in find::<Detour>(x, config) {
                let y = normalized(&execute::<Detour>(x, &location, config)?)?;
                detours.entry(y.canonical_key()).or_insert(y);
            }
        }
        debug!(round = round, pool = pool.len(), detours = detours.len(); "Taking detours");
        frontier = detours.into_values().collect();
    }
    Ok(best)
}
