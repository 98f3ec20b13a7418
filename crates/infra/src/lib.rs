// crates/infra/src/lib.rs
pub mod input;

pub use input::load_input;
