use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::highscore::{HighScoreService, SubmitOutcome};

use crate::errors::ApiError;

/// Candidate score submitted by a client. Deserializing into `u64` is the
/// validation: a missing, non-integer, fractional, or negative `score` is
/// rejected by the `Json` extractor with 422 before any state is touched.
#[derive(Deserialize, Debug)]
pub struct ScoreSubmission {
    pub score: u64,
}

#[derive(Serialize, Debug)]
pub struct HighScoreBody {
    pub high_score: u64,
}

#[derive(Serialize, Debug)]
pub struct SubmitReply {
    pub message: &'static str,
    pub high_score: u64,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn get_highscore(State(svc): State<Arc<HighScoreService>>) -> Json<HighScoreBody> {
    Json(HighScoreBody { high_score: svc.current().await })
}

async fn submit_highscore(
    State(svc): State<Arc<HighScoreService>>,
    Json(payload): Json<ScoreSubmission>,
) -> Result<Json<SubmitReply>, ApiError> {
    let reply = match svc.submit(payload.score).await? {
        SubmitOutcome::NewHighScore(score) => SubmitReply {
            message: "New high score!",
            high_score: score,
        },
        SubmitOutcome::NotHigher(current) => SubmitReply {
            message: "Score not higher than current high score",
            high_score: current,
        },
    };
    Ok(Json(reply))
}

/// Build the application router: score routes plus health, behind CORS and
/// request tracing
pub fn build_router(svc: Arc<HighScoreService>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/highscore", get(get_highscore).post(submit_highscore))
        .route("/health", get(health))
        .with_state(svc)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
