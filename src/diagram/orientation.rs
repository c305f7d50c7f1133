use core::fmt::Debug;

/// Type-level orientation mode of a [`crate::diagram::PlanarDiagram`].
pub trait Orientation: Debug + Clone + Copy + Default + PartialEq + Eq + Send + Sync + 'static {
    const ORIENTED: bool;
}

/// Marker for diagrams whose endpoints carry no direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unoriented;

/// Marker for diagrams whose endpoints are tagged [`crate::diagram::Direction`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Oriented;

impl Orientation for Unoriented {
    const ORIENTED: bool = false;
}

impl Orientation for Oriented {
    const ORIENTED: bool = true;
}
