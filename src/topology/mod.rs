//! Read-only queries over a [`crate::diagram::PlanarDiagram`], used by the move finders.
pub mod components;
pub mod cut;
pub mod dual;
pub mod local;
pub mod strands;

pub use components::{component_without_arcs, connected_components, number_of_components};
pub use cut::{arc_cut_sets, bridges, cut_arcs, cut_nodes, is_arc_cut_set};
pub use dual::{dual_graph, DualGraph};
pub use local::{is_alternating, is_face_alternating, kink_sign, kinks, leaves, loops};
pub use strands::{is_knot, link_components, number_of_link_components, path_from_endpoint};
