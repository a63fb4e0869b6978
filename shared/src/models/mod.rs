//! Domain models for the fertilizer advisor

mod observation;
mod plan;
mod prediction;
mod reference;
mod soil;

pub use observation::*;
pub use plan::*;
pub use prediction::*;
pub use reference::*;
pub use soil::*;
