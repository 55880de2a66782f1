use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/entries", get(handlers::get_entries))
        .route("/api/entries/:date", get(handlers::get_day).put(handlers::put_entry))
        .route("/api/calendar/week", get(handlers::calendar_week))
        .route("/api/calendar/month", get(handlers::calendar_month))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/weather", get(handlers::get_weather))
        .route(
            "/api/work/items",
            get(handlers::list_work_items).post(handlers::create_work_item),
        )
        .route(
            "/api/work/items/:id",
            put(handlers::update_work_item).delete(handlers::delete_work_item),
        )
        .with_state(state)
}
