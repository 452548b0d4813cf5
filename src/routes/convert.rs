use axum::{routing::post, Router};

use crate::app::AppState;
use crate::handler::convert::{csv_to_parquet, parquet_preview};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parquet", post(csv_to_parquet))
        .route("/preview", post(parquet_preview))
}
