// crates/shared-kernel/src/value_objects/mod.rs
mod answers;

pub use answers::Answers;
