//! The planar-diagram model: nodes, endpoints, arcs and faces of a rotation system.
pub mod attributes;
pub mod canonical;
pub mod framing;
pub mod node;
pub mod orientation;
pub mod pd;
pub mod planar;
pub mod sanity;
pub mod views;

pub use attributes::*;
pub use canonical::*;
pub use framing::*;
pub use node::*;
pub use orientation::*;
pub use pd::*;
pub use planar::*;
pub use sanity::*;
pub use views::*;
