use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/tasbih", get(handlers::get_tasbih))
        .route("/api/tasbih/increment", post(handlers::tasbih_increment))
        .route("/api/tasbih/reset", post(handlers::tasbih_reset))
        .route("/api/tasbih/set", post(handlers::tasbih_set))
        .route("/api/tasbih/formula", post(handlers::tasbih_formula))
        .route("/api/verse", get(handlers::get_verse))
        .route("/api/verse/random", post(handlers::verse_random))
        .route("/api/verse/share", post(handlers::verse_share))
        .route("/api/names", get(handlers::get_names))
        .route("/api/names/select", post(handlers::select_names_category))
        .with_state(state)
}
