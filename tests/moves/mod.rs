pub mod test_closure;
pub mod test_fingerprint;
