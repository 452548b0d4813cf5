use axum::{
    routing::{get, post},
    Router,
};

use crate::app::AppState;
use crate::handler::material_price::{
    create_material_price, delete_material_price, get_material_price,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_material_price))
        .route(
            "/:material/:record_date",
            get(get_material_price).delete(delete_material_price),
        )
}
