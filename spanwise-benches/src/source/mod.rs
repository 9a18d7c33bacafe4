//! Synthetic benchmark graph sources.

mod errors;
mod random;

pub use errors::SyntheticError;
pub use random::{SyntheticGraph, SyntheticGraphConfig};
