pub mod test_canonical;
pub mod test_planar;
pub mod test_topology;
