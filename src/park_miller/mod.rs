mod rng;
mod word;

pub use rng::*;
pub use word::*;
