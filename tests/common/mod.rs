// tests/common/mod.rs
//! Shared helpers for the binary tests.

pub mod fixture;

#[allow(unused_imports)]
pub use fixture::InputFile;

pub const USAGE: &str = "Please, add input file path as parameter\n";
