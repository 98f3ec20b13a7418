// src/lib.rs
pub mod args;
pub mod config;
pub mod driver;
pub mod logging;
pub mod presentation;
pub mod puzzles;
