//! Local moves on diagrams: Reidemeister moves R1 to R5, flypes and detours.
//!
//! Every move family is a finder, a chooser and an executor. Finders list candidate locations
//! and never fail. [`choose`] picks one candidate. [`execute`] applies a move to a copy of the
//! diagram and fails with [`crate::error::DiagramError::Precondition`] when the location does not
//! match the move's local pattern.
//!
//! Moves act on unoriented diagrams; use [`PlanarDiagram::copy_as`] to drop orientation first.
use core::fmt::Debug;

use log::{debug, trace, warn};
use rand::seq::IndexedRandom;
use rand::RngCore;

use crate::diagram::PlanarDiagram;
use crate::error::DiagramResult;

pub mod config;
pub mod detour;
pub mod flype;
pub mod r1;
pub mod r2;
pub mod r3;
pub mod r4;
pub mod r5;
mod splice;

pub use config::{MoveKind, SearchConfig};
pub use detour::{Detour, DetourLocation};
pub use flype::{Flype, FlypeLocation};
pub use r1::{AddKink, RemoveKink};
pub use r2::{Poke, PokeLocation, Unpoke};
pub use r3::{Triangle, R3_MARKER};
pub use r4::{find_slides, Change, Slide, SlideLocation};
pub use r5::{Twist, TwistLocation, Untwist, UntwistLocation};

/// Orientation of a kink or twist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub const BOTH: [Sign; 2] = [Sign::Positive, Sign::Negative];

    pub fn value(&self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

/// A move family: where it applies, and how it rewrites a diagram there.
pub trait ReidemeisterMove {
    type Location: Clone + Debug + PartialEq;

    /// The family that switches this move on or off.
    const KIND: MoveKind;
    const NAME: &'static str;

    /// Fails with [`crate::error::DiagramError::Configuration`] when `config` switches this move
    /// off.
    fn require(config: &SearchConfig) -> DiagramResult<()> {
        config.require(Self::KIND)
    }

    /// All locations where the move applies.
    fn find(d: &PlanarDiagram, config: &SearchConfig) -> Vec<Self::Location>;

    /// Rewrite `d` in place at `location`.
    fn rewrite(d: &mut PlanarDiagram, location: &Self::Location) -> DiagramResult<()>;
}

/// How to pick among candidate locations.
pub enum Choice<'a> {
    First,
    Random(&'a mut dyn RngCore),
}

/// Candidate locations of move `R`, or none when its family is disabled.
pub fn find<R: ReidemeisterMove>(d: &PlanarDiagram, config: &SearchConfig) -> Vec<R::Location> {
    if R::require(config).is_err() {
        return Vec::new();
    }
    let found = R::find(d, config);
    trace!(kind = R::NAME, candidates = found.len(); "Found move locations");
    found
}

pub fn choose<T: Clone>(candidates: &[T], choice: &mut Choice<'_>) -> Option<T> {
    match choice {
        Choice::First => candidates.first().cloned(),
        Choice::Random(rng) => candidates.choose(&mut **rng).cloned(),
    }
}

/// Apply move `R` at `location` to a copy of `d`.
///
/// Executing a disabled family is allowed but logged as a warning.
pub fn execute<R: ReidemeisterMove>(
    d: &PlanarDiagram,
    location: &R::Location,
    config: &SearchConfig,
) -> DiagramResult<PlanarDiagram> {
    if let Err(e) = R::require(config) {
        warn!(kind = R::NAME; "{e}");
    }
    let mut result = d.copy();
    if config.trace {
        result.set_tracing(true);
    }
    R::rewrite(&mut result, location)?;
    result.record(|| format!("{} {:?}", R::NAME, location));
    trace!(
        kind = R::NAME,
        crossings = result.number_of_crossings();
        "Executed move at {location:?}"
    );
    Ok(result)
}

/// Find, choose and execute in one go; `None` when the move applies nowhere.
pub fn apply<R: ReidemeisterMove>(
    d: &PlanarDiagram,
    choice: &mut Choice<'_>,
    config: &SearchConfig,
) -> DiagramResult<Option<PlanarDiagram>> {
    match choose(&find::<R>(d, config), choice) {
        Some(location) => execute::<R>(d, &location, config).map(Some),
        None => Ok(None),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum RandomStep {
    Kink(<AddKink as ReidemeisterMove>::Location),
    Poke(<Poke as ReidemeisterMove>::Location),
    Triangle(<Triangle as ReidemeisterMove>::Location),
}

/// Apply `steps` uniformly random kink additions, pokes and R3 moves.
///
/// The knot type is unchanged and the crossing count never decreases. Stops early if no move
/// applies.
pub fn randomize(
    d: &PlanarDiagram,
    steps: usize,
    rng: &mut dyn RngCore,
    config: &SearchConfig,
) -> DiagramResult<PlanarDiagram> {
    let mut current = d.copy();
    for step in 0..steps {
        let candidates: Vec<RandomStep> = find::<AddKink>(&current, config)
            .into_iter()
            .map(RandomStep::Kink)
            .chain(find::<Poke>(&current, config).into_iter().map(RandomStep::Poke))
            .chain(
                find::<Triangle>(&current, config)
                    .into_iter()
                    .map(RandomStep::Triangle),
            )
            .collect();
        let Some(chosen) = choose(&candidates, &mut Choice::Random(&mut *rng)) else {
            debug!(step = step; "No move left to randomize with");
            break;
        };
        current = match chosen {
            RandomStep::Kink(l) => execute::<AddKink>(&current, &l, config)?,
            RandomStep::Poke(l) => execute::<Poke>(&current, &l, config)?,
            RandomStep::Triangle(l) => execute::<Triangle>(&current, &l, config)?,
        };
    }
    debug!(steps = steps, crossings = current.number_of_crossings(); "Randomized diagram");
    Ok(current)
}
