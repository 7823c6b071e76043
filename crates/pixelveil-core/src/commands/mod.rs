mod hide;
mod unveil;

pub use hide::*;
pub use unveil::*;
