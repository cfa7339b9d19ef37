use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

use crate::api::ApiMatchRequest;
use game_match::{MatchEngine, MatchReport};

#[derive(Clone)]
struct AppState {
    engine: Arc<MatchEngine>,
}

pub async fn serve(args: crate::ServeArgs, engine: MatchEngine) -> Result<(), String> {
    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/match", post(match_handler))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    info!(%addr, "match API listening");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn match_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiMatchRequest>,
) -> Json<MatchReport> {
    let (user, game) = request.parts();
    Json(state.engine.report(user, game).await)
}
