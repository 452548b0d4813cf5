use axum::{
    routing::{get, post},
    Router,
};

use crate::app::AppState;
use crate::handler::price_compare::{filter_options, query_price_compare};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(query_price_compare))
        .route("/options", get(filter_options))
}
