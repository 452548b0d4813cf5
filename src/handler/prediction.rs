use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use diesel::result::Error as DieselError;

use crate::api_models::prediction::{CreatePrediction, PredictionResponse};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::models::NewPrediction;
use crate::repositories::prediction;

impl From<crate::models::Prediction> for PredictionResponse {
    fn from(p: crate::models::Prediction) -> Self {
        Self {
            metal: p.metal,
            model: p.model,
            prediction_date: p.prediction_date,
            prediction_value: p.prediction_value,
        }
    }
}

/// 创建单条预测记录
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(payload): Json<CreatePrediction>,
) -> Result<(StatusCode, Json<PredictionResponse>), AppError> {
    let mut conn = state
        .db_pool
        .get()
        .map_err(|_| AppError::InternalServerError)?;
    let new_rec = NewPrediction {
        metal: payload.metal,
        model: payload.model,
        prediction_date: payload.prediction_date,
        prediction_value: payload.prediction_value,
    };
    let created = prediction::create(&mut conn, &new_rec).map_err(map_err)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// 查询单条预测记录
pub async fn get_prediction(
    State(state): State<AppState>,
    Path((name, model, date)): Path<(String, String, NaiveDate)>,
) -> Result<Json<PredictionResponse>, AppError> {
    let mut conn = state
        .db_pool
        .get()
        .map_err(|_| AppError::InternalServerError)?;
    let found = prediction::find_by_pk(&mut conn, &name, &model, date).map_err(map_err)?;
    Ok(Json(found.into()))
}

/// 删除单条预测记录
pub async fn delete_prediction(
    State(state): State<AppState>,
    Path((name, model, date)): Path<(String, String, NaiveDate)>,
) -> Result<StatusCode, AppError> {
    let mut conn = state
        .db_pool
        .get()
        .map_err(|_| AppError::InternalServerError)?;
    let affected = prediction::delete_by_pk(&mut conn, &name, &model, date).map_err(map_err)?;
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
