//! Searching the space of diagrams reachable by moves.
//!
//! Searches deduplicate diagrams by canonical form and never increase the crossing count except
//! through the detours taken by [`simplify`].
mod equivalence;
mod leveled_set;
mod simplify;
mod space;

pub use equivalence::{reduce_equivalent_diagrams, reduce_equivalent_diagrams_with, EquivalenceClass};
pub use leveled_set::{LeveledSet, Membership};
pub use simplify::{simplify, simplify_with};
pub use space::{
    crossing_decreasing_space, crossing_non_increasing_space, crossing_preserving_space,
    decreasing_neighbours, NonIncreasingSpace, Strategy,
};
