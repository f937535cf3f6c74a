//! Block material crate.
#![forbid(unsafe_code)]

pub mod types;

pub use types::Block;
