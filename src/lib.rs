//! # Knot diagrams
//!
//! A [PlanarDiagram](crate::diagram::PlanarDiagram) is a rotation system: every node keeps the
//! counter-clockwise order of the arcs around it, and that order, not mere adjacency, fixes the
//! embedding in the plane. Nodes are vertices of any degree, classical crossings or virtual
//! crossings, so the same structure holds knots, links and spatial graphs.
//!
//! Crossings have four slots. Positions 0 and 2 belong to the strand passing under, 1 and 3 to the
//! strand passing over:
//!
//! ```text
//!             1
//!             │
//!       2 ────│──── 0
//!             │
//!             3
//! ```
//!
//! # Example
//!
//! Build a trefoil from its PD code, tangle it up with a few random moves and simplify it again:
//!
//! ```rust
//! use knot_diagrams::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let trefoil = from_pd_code(&[[0, 1, 2, 3], [4, 5, 3, 2], [5, 4, 1, 0]]).unwrap();
//! let mut rng = StdRng::seed_from_u64(1);
//! let tangled = randomize(&trefoil, 3, &mut rng, &SearchConfig::default()).unwrap();
//! assert!(tangled.sanity_check().is_ok());
//!
//! let simple = simplify(&tangled, 2, false).unwrap();
//! assert!(simple.number_of_crossings() <= tangled.number_of_crossings());
//! assert_eq!(fingerprint(&simple), fingerprint(&trefoil));
//! ```
//!
//! # Moves
//!
//! Every move family in [`moves`] comes as a finder listing the locations where it applies and an
//! executor that rewrites a copy of the diagram at one of them. Which families are active is set
//! by a [`SearchConfig`](crate::moves::SearchConfig) passed to every call. The [`search`] module
//! combines moves to simplify diagrams and to sort diagrams into equivalence classes.
pub mod error;
pub mod union_find;

pub mod diagram;
pub mod topology;

pub mod invariant;
pub mod moves;
pub mod search;

pub mod prelude {
    //! The diagram type, PD codes and the move and search entry points.
    pub use crate::diagram::{
        canonical, canonical_key, from_pd_code, to_pd_code, Endpoint, Framing, NodeId, NodeKind,
        PlanarDiagram,
    };
    pub use crate::error::{DiagramError, DiagramResult};
    pub use crate::invariant::fingerprint;
    pub use crate::moves::{execute, find, randomize, MoveKind, ReidemeisterMove, SearchConfig};
    pub use crate::search::{reduce_equivalent_diagrams, simplify};
}
