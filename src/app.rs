use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/sw.js", get(handlers::service_worker))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/profile/avatar", post(handlers::set_avatar))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/day", get(handlers::get_day).post(handlers::switch_day))
        .route("/api/tasks", post(handlers::add_task))
        .route("/api/tasks/:id/complete", post(handlers::complete_task))
        .route("/api/timer", get(handlers::get_timer))
        .route("/api/timer/start", post(handlers::timer_start))
        .route("/api/timer/pause", post(handlers::timer_pause))
        .route("/api/timer/reset", post(handlers::timer_reset))
        .route("/api/timer/durations", post(handlers::set_durations))
        .route("/api/history", get(handlers::get_history))
        .route("/api/history/best", get(handlers::get_best_day))
        .with_state(state)
}
