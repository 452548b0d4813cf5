use axum::{
    routing::{get, post},
    Router,
};

use crate::app::AppState;
use crate::handler::prediction::{create_prediction, delete_prediction, get_prediction};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_prediction))
        .route(
            "/:metal/:model/:prediction_date",
            get(get_prediction).delete(delete_prediction),
        )
}
