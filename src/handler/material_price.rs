use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use diesel::result::Error as DieselError;

use crate::api_models::material_price::{CreateMaterialPrice, MaterialPriceResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::models::NewMaterialPrice;
use crate::repositories::material_price;

impl From<crate::models::MaterialPrice> for MaterialPriceResponse {
    fn from(m: crate::models::MaterialPrice) -> Self {
        Self {
            material: m.material,
            record_date: m.record_date,
            price: m.price,
        }
    }
}

/// 创建单条实际价格记录
pub async fn create_material_price(
    State(state): State<AppState>,
    Json(payload): Json<CreateMaterialPrice>,
) -> Result<(StatusCode, Json<MaterialPriceResponse>), AppError> {
    let mut conn = state
        .db_pool
        .get()
        .map_err(|_| AppError::InternalServerError)?;
    let new_rec = NewMaterialPrice {
        material: payload.material,
        record_date: payload.record_date,
        price: payload.price,
    };
    let created = material_price::create(&mut conn, &new_rec).map_err(map_err)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// 查询单条实际价格记录
pub async fn get_material_price(
    State(state): State<AppState>,
    Path((name, date)): Path<(String, NaiveDate)>,
) -> Result<Json<MaterialPriceResponse>, AppError> {
    let mut conn = state
        .db_pool
        .get()
        .map_err(|_| AppError::InternalServerError)?;
    let found = material_price::find_by_pk(&mut conn, &name, date).map_err(map_err)?;
    Ok(Json(found.into()))
}

/// 删除单条实际价格记录
pub async fn delete_material_price(
    State(state): State<AppState>,
    Path((name, date)): Path<(String, NaiveDate)>,
) -> Result<StatusCode, AppError> {
    let mut conn = state
        .db_pool
        .get()
        .map_err(|_| AppError::InternalServerError)?;
    let affected = material_price::delete_by_pk(&mut conn, &name, date).map_err(map_err)?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

fn map_err(err: DieselError) -> AppError {
    match err {
        DieselError::NotFound => AppError::NotFound,
        DieselError::DatabaseError(_, info) => AppError::BadRequest(info.message().to_string()),
        _ => AppError::InternalServerError,
    }
}
