// Local SEO dashboard: fixed business data, derived score and recommendations.
// Scoring and recommendations are pure functions over the store's slices.

pub mod handlers;
pub mod models;
pub mod recommendations;
pub mod scoring;
pub mod store;
