//! Closures of a diagram under families of moves, by their effect on the crossing count.
use log::{debug, trace};

use crate::diagram::{canonical, NodeId, PlanarDiagram};
use crate::error::DiagramResult;
use crate::moves::{
    execute, find, find_slides, Change, Flype, MoveKind, ReidemeisterMove, RemoveKink,
    SearchConfig, Slide, SlideLocation, Triangle, Unpoke, Untwist, R3_MARKER,
};
use crate::search::{LeveledSet, Membership};

/// Canonical form without R3 markers, so that a search may undo any R3 move.
pub(crate) fn normalized(d: &PlanarDiagram) -> DiagramResult<PlanarDiagram> {
    let mut c = canonical(d)?;
    let marked: Vec<NodeId> = c
        .nodes()
        .filter(|n| n.attrs.contains_key(R3_MARKER))
        .map(|n| n.id())
        .collect();
    for n in marked {
        c.node_attrs_mut(n)?.remove(R3_MARKER);
    }
    Ok(c)
}

/// Apply the first location of `R`, if any.
fn first_of<R: ReidemeisterMove>(
    d: &PlanarDiagram,
    config: &SearchConfig,
) -> DiagramResult<Option<PlanarDiagram>> {
    match find::<R>(d, config).first() {
        Some(location) => execute::<R>(d, location, config).map(Some),
        None => Ok(None),
    }
}

/// Crossing-decreasing slides, when R4 is enabled.
fn decreasing_slides(d: &PlanarDiagram, config: &SearchConfig) -> Vec<SlideLocation> {
    if config.is_enabled(MoveKind::R4) {
        find_slides(d, Change::Decrease)
    } else {
        Vec::new()
    }
}

/// One greedy decreasing step, in priority order R2 unpoke, R1 removal, R5 untwist, R4 slide.
fn decreasing_step(
    d: &PlanarDiagram,
    config: &SearchConfig,
) -> DiagramResult<Option<PlanarDiagram>> {
    if let Some(e) = first_of::<Unpoke>(d, config)? {
        return Ok(Some(e));
    }
    if let Some(e) = first_of::<RemoveKink>(d, config)? {
        return Ok(Some(e));
    }
    if let Some(e) = first_of::<Untwist>(d, config)? {
        return Ok(Some(e));
    }
    match decreasing_slides(d, config).first() {
        Some(location) => execute::<Slide>(d, location, config).map(Some),
        None => Ok(None),
    }
}

/// Apply crossing-decreasing moves greedily until none applies.
///
/// Deterministic: every step takes the first location of the highest-priority move that has one.
/// Applying it to its own result changes nothing.
pub fn crossing_decreasing_space(
    d: &PlanarDiagram,
    config: &SearchConfig,
) -> DiagramResult<PlanarDiagram> {
    let mut current = d.copy();
    let mut steps = 0usize;
    while let Some(next) = decreasing_step(&current, config)? {
        current = next;
        steps += 1;
    }
    trace!(steps = steps, crossings = current.number_of_crossings(); "Decreased diagram");
    Ok(current)
}

/// Every diagram one crossing-decreasing move away from `d`.
pub fn decreasing_neighbours(
    d: &PlanarDiagram,
    config: &SearchConfig,
) -> DiagramResult<Vec<PlanarDiagram>> {
    let mut out = Vec::new();
    for location in find::<Unpoke>(d, config) {
        out.push(execute::<Unpoke>(d, &location, config)?);
    }
    for location in find::<RemoveKink>(d, config) {
        out.push(execute::<RemoveKink>(d, &location, config)?);
    }
    for location in find::<Untwist>(d, config) {
        out.push(execute::<Untwist>(d, &location, config)?);
    }
    for location in decreasing_slides(d, config) {
        out.push(execute::<Slide>(d, &location, config)?);
    }
    Ok(out)
}

/// Every diagram one crossing-preserving move away from `d`: R3, preserving R4 slides and flypes.
fn preserving_neighbours(
    d: &PlanarDiagram,
    config: &SearchConfig,
) -> DiagramResult<Vec<PlanarDiagram>> {
    let mut out = Vec::new();
    for location in find::<Triangle>(d, config) {
        out.push(execute::<Triangle>(d, &location, config)?);
    }
    if config.is_enabled(MoveKind::R4) {
        for location in find_slides(d, Change::Preserve) {
            out.push(execute::<Slide>(d, &location, config)?);
        }
    }
    for location in find::<Flype>(d, config) {
        out.push(execute::<Flype>(d, &location, config)?);
    }
    Ok(out)
}

/// Closure of `d` under crossing-preserving moves, in canonical form.
///
/// Level `i` holds the diagrams first reached after `i` moves.
pub fn crossing_preserving_space(
    d: &PlanarDiagram,
    config: &SearchConfig,
) -> DiagramResult<LeveledSet> {
    let mut set = LeveledSet::new(Membership::Key);
    set.add(normalized(d)?);
    loop {
        let frontier: Vec<PlanarDiagram> = set.last_level().unwrap_or_default().to_vec();
        set.new_level();
        for x in &frontier {
            for y in preserving_neighbours(x, config)? {
                set.add(normalized(&y)?);
            }
        }
        if set.last_level().map_or(true, <[_]>::is_empty) {
            break;
        }
    }
    trace!(size = set.len(), levels = set.levels().len(); "Closed crossing-preserving space");
    Ok(set)
}

/// How a non-increasing space chooses which diagrams to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Expand every diagram of the last level.
    Broad,
    /// Expand only the diagrams of the last level with the fewest crossings.
    Greedy,
}

/// A space of diagrams reachable without increasing the crossing count, grown one level at a time.
///
/// Each call to [`NonIncreasingSpace::grow`] takes the preserving closure and the decreasing
/// neighbours of the last level.
#[derive(Debug, Clone)]
pub struct NonIncreasingSpace {
    set: LeveledSet,
    config: SearchConfig,
    strategy: Strategy,
    exhausted: bool,
}

impl NonIncreasingSpace {
    pub fn new(d: &PlanarDiagram, config: SearchConfig, strategy: Strategy) -> DiagramResult<Self> {
        let mut set = LeveledSet::new(Membership::Key);
        set.add(normalized(d)?);
        Ok(NonIncreasingSpace {
            set,
            config,
            strategy,
            exhausted: false,
        })
    }

    /// Add one level. Returns `false`, and marks the space exhausted, when nothing new was found.
    pub fn grow(&mut self) -> DiagramResult<bool> {
        if self.exhausted {
            return Ok(false);
        }
        let mut frontier: Vec<PlanarDiagram> = self.set.last_level().unwrap_or_default().to_vec();
        if self.strategy == Strategy::Greedy {
            if let Some(fewest) = frontier.iter().map(PlanarDiagram::number_of_crossings).min() {
                frontier.retain(|x| x.number_of_crossings() == fewest);
            }
        }

        self.set.new_level();
        for x in &frontier {
            let closure = crossing_preserving_space(x, &self.config)?;
            for y in closure.iter() {
                self.set.add(y.clone());
            }
            for y in decreasing_neighbours(x, &self.config)? {
                self.set.add(normalized(&y)?);
            }
        }

        let added = self.set.last_level().map_or(0, <[_]>::len);
        debug!(
            expanded = frontier.len(),
            added = added,
            size = self.set.len();
            "Grew non-increasing space"
        );
        self.exhausted = added == 0;
        Ok(!self.exhausted)
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn set(&self) -> &LeveledSet {
        &self.set
    }

    pub fn into_set(self) -> LeveledSet {
        self.set
    }

    /// The diagram with the fewest crossings, ties broken by canonical key.
    pub fn best(&self) -> Option<&PlanarDiagram> {
        self.set
            .iter()
            .min_by_key(|x| (x.number_of_nodes(), x.number_of_crossings(), x.canonical_key()))
    }
}

/// Grow a non-increasing space from `d` for at most `depth` levels.
pub fn crossing_non_increasing_space(
    d: &PlanarDiagram,
    config: &SearchConfig,
    strategy: Strategy,
    depth: usize,
) -> DiagramResult<LeveledSet> {
    let mut space = NonIncreasingSpace::new(d, *config, strategy)?;
    for _ in 0..depth {
        if !space.grow()? {
            break;
        }
    }
    Ok(space.into_set())
}
