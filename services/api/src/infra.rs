use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use credit_scoring::assessment::{CreditScoringEngine, HashedTokenEmbedder, ScoringPolicy};
use credit_scoring::config::EmbeddingConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn default_scoring_policy() -> ScoringPolicy {
    ScoringPolicy::default()
}

/// One engine per process, shared read-only by every request handler.
pub(crate) fn build_engine(
    embedding: &EmbeddingConfig,
) -> Arc<CreditScoringEngine<HashedTokenEmbedder>> {
    Arc::new(CreditScoringEngine::new(
        HashedTokenEmbedder::new(embedding),
        default_scoring_policy(),
    ))
}

pub(crate) fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
