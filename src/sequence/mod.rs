//! Seeded value sequences used to build trees of a known shape or content
mod random;
mod skewed;

pub use random::*;
pub use skewed::*;
