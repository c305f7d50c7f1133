//! Detours: crossing-increasing moves that open up new R3 moves.
//!
//! A search stuck at a local minimum of the crossing count takes a detour and retries.
use crate::diagram::PlanarDiagram;
use crate::error::DiagramResult;
use crate::moves::{
    find_slides, Change, MoveKind, Poke, PokeLocation, ReidemeisterMove, SearchConfig, Slide,
    SlideLocation, Triangle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DetourLocation {
    /// A poke that creates a non-alternating triangle using one of its new crossings.
    Poke(PokeLocation),
    /// A crossing-increasing R4 slide.
    Slide(SlideLocation),
}

pub struct Detour;

fn opens_triangle(d: &PlanarDiagram, location: &PokeLocation, config: &SearchConfig) -> bool {
    let mut e = d.copy();
    if Poke::rewrite(&mut e, location).is_err() {
        return false;
    }
    Triangle::find(&e, config)
        .iter()
        .any(|t| t.iter().any(|c| !d.contains_node(c.node)))
}

impl ReidemeisterMove for Detour {
    type Location = DetourLocation;
    const KIND: MoveKind = MoveKind::R2;
    const NAME: &'static str = "detour";

    /// Pokes follow R2 and slides follow R4; either one keeps detours on.
    fn require(config: &SearchConfig) -> DiagramResult<()> {
        config
            .require(MoveKind::R2)
            .or_else(|_| config.require(MoveKind::R4))
    }

    fn find(d: &PlanarDiagram, config: &SearchConfig) -> Vec<DetourLocation> {
        let mut out: Vec<DetourLocation> = Vec::new();
        if config.is_enabled(MoveKind::R2) {
            out.extend(
                Poke::find(d, config)
                    .into_iter()
                    .filter(|l| opens_triangle(d, l, config))
                    .map(DetourLocation::Poke),
            );
        }
        if config.is_enabled(MoveKind::R4) {
            out.extend(
                find_slides(d, Change::Increase)
                    .into_iter()
                    .map(DetourLocation::Slide),
            );
        }
        out
    }

    fn rewrite(d: &mut PlanarDiagram, location: &DetourLocation) -> DiagramResult<()> {
        match location {
            DetourLocation::Poke(l) => Poke::rewrite(d, l),
            DetourLocation::Slide(l) => Slide::rewrite(d, l),
        }
    }
}
