//! Shared types and models for the fertilizer advisor
//!
//! Holds the recommendation engine itself: crop and soil reference data, the
//! fertilizer classifier, the plan builder and soil diagnostics. The backend
//! and the WASM bindings both depend on it so results match everywhere.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
