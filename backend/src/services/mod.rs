//! Business logic services for the fertilizer advisor

pub mod recommendation;

pub use recommendation::RecommendationService;
