use axum::Router;

use crate::app::AppState;

mod convert;
mod material_price;
mod prediction;
mod price_compare;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // 根路径与健康检查
        .merge(root::router())
        // 业务 API 统一挂在 /api 前缀下
        .nest(
            "/api",
            Router::new()
                .nest("/price-compare", price_compare::router())
                .nest("/material-prices", material_price::router())
                .nest("/predictions", prediction::router())
                .nest("/convert", convert::router()),
        )
}
