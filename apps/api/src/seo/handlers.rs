use axum::{extract::State, response::Html, Json};

use crate::seo::models::{Citation, DashboardSummary, Keyword, Recommendation};
use crate::seo::recommendations::generate_recommendations;
use crate::seo::scoring::{active_citation_count, average_rank, compute_seo_score};
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let store = &state.store;
    Json(DashboardSummary {
        seo_score: compute_seo_score(store.citations(), store.keywords()),
        citation_count: active_citation_count(store.citations()),
        keyword_count: store.keywords().len(),
        avg_rank: average_rank(store.keywords()),
        business: store.business().clone(),
    })
}

/// GET /api/citations
pub async fn handle_citations(State(state): State<AppState>) -> Json<Vec<Citation>> {
    Json(state.store.citations().to_vec())
}

/// GET /api/keywords
pub async fn handle_keywords(State(state): State<AppState>) -> Json<Vec<Keyword>> {
    Json(state.store.keywords().to_vec())
}

/// GET /api/recommendations
pub async fn handle_recommendations(State(state): State<AppState>) -> Json<Vec<Recommendation>> {
    let store = &state.store;
    Json(generate_recommendations(store.citations(), store.keywords()))
}
