use core::fmt;

use crate::error::{DiagramError, DiagramResult};

/// A family of local moves, as switched on or off by a [`SearchConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveKind {
    R1,
    R2,
    R3,
    R4,
    R5,
    Flype,
}

impl MoveKind {
    pub const ALL: [MoveKind; 6] = [
        MoveKind::R1,
        MoveKind::R2,
        MoveKind::R3,
        MoveKind::R4,
        MoveKind::R5,
        MoveKind::Flype,
    ];

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveKind::R1 => "R1",
            MoveKind::R2 => "R2",
            MoveKind::R3 => "R3",
            MoveKind::R4 => "R4",
            MoveKind::R5 => "R5",
            MoveKind::Flype => "flype",
        };
        f.write_str(name)
    }
}

/// Which move families finders may report, and whether executed moves are recorded.
///
/// An immutable value passed to every finder, executor and search call. The default enables
/// R1 to R5 and leaves flypes off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    enabled: u8,
    pub trace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::none()
            .enable(MoveKind::R1)
            .enable(MoveKind::R2)
            .enable(MoveKind::R3)
            .enable(MoveKind::R4)
            .enable(MoveKind::R5)
    }
}

impl SearchConfig {
    /// No move family enabled.
    pub fn none() -> Self {
        SearchConfig {
            enabled: 0,
            trace: false,
        }
    }

    pub fn all() -> Self {
        MoveKind::ALL
            .iter()
            .fold(SearchConfig::none(), |c, &k| c.enable(k))
    }

    pub fn enable(mut self, kind: MoveKind) -> Self {
        self.enabled |= kind.bit();
        self
    }

    pub fn disable(mut self, kind: MoveKind) -> Self {
        self.enabled &= !kind.bit();
        self
    }

    pub fn with_flype(self, flype: bool) -> Self {
        if flype {
            self.enable(MoveKind::Flype)
        } else {
            self.disable(MoveKind::Flype)
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn is_enabled(&self, kind: MoveKind) -> bool {
        self.enabled & kind.bit() != 0
    }

    pub fn enabled(&self) -> impl Iterator<Item = MoveKind> + '_ {
        MoveKind::ALL.into_iter().filter(|k| self.is_enabled(*k))
    }

    /// Fails with [`DiagramError::Configuration`] when `kind` is disabled.
    pub fn require(&self, kind: MoveKind) -> DiagramResult<()> {
        if self.is_enabled(kind) {
            Ok(())
        } else {
            Err(DiagramError::Configuration(kind.to_string()))
        }
    }
}
