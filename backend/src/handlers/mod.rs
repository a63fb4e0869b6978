//! HTTP request handlers

mod health;
mod predict;
mod recommendation;
mod reference;
mod sensor;

pub use health::*;
pub use predict::*;
pub use recommendation::*;
pub use reference::*;
pub use sensor::*;
