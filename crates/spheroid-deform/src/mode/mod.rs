//! Deformation modes: named displacement fields with a mutable amplitude.

mod evaluate;
mod types;

pub use evaluate::noise3d;
pub use types::*;
