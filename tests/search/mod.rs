pub mod test_equivalence;
pub mod test_simplify;
