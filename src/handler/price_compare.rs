use axum::{extract::State, Json};
use chrono::NaiveDate;

use crate::api_models::price_compare::{
    FilterOptionsResponse, PriceCompareRequest, PriceCompareResponse, PriceDifferenceItem,
    PricePoint,
};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::repositories::price_compare;
use crate::services::price_compare::{
    compare_prices, ActualPrice, FilterCriteria, PredictedPrice,
};

/// 图例标签，前端按 type 字段分组
const ACTUAL_PRICE_LABEL: &str = "Actual Price";
const PREDICTED_PRICE_LABEL: &str = "Predicted Price";

/// 查询价格对比数据（过滤 + 内连接 + 差异计算）
pub async fn query_price_compare(
    State(state): State<AppState>,
    Json(payload): Json<PriceCompareRequest>,
) -> Result<Json<PriceCompareResponse>, AppError> {
    // 解析日期
    let start_date = NaiveDate::parse_from_str(&payload.start_date, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest("Invalid start_date format, expected YYYY-MM-DD".to_string())
    })?;
    let end_date = NaiveDate::parse_from_str(&payload.end_date, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest("Invalid end_date format, expected YYYY-MM-DD".to_string())
    })?;

    let criteria = FilterCriteria {
        start_date,
        end_date,
        material: payload.material,
        models: payload.models,
    };

    // 获取数据库连接
    let mut conn = state
        .db_pool
        .get()
        .map_err(|_| AppError::InternalServerError)?;

    // 查询实际价与预测价
    let actual_rows = price_compare::fetch_actual_prices(&mut conn).map_err(|e| {
        tracing::error!("Failed to fetch actual prices: {}", e);
        AppError::InternalServerError
    })?;
    let predicted_rows = price_compare::fetch_predicted_prices(&mut conn).map_err(|e| {
        tracing::error!("Failed to fetch predicted prices: {}", e);
        AppError::InternalServerError
    })?;

    let actuals: Vec<ActualPrice> = actual_rows
        .into_iter()
        .map(|r| ActualPrice {
            material: r.material,
            date: r.date,
            price_actual: r.price_actual,
        })
        .collect();
    let predictions: Vec<PredictedPrice> = predicted_rows
        .into_iter()
        .map(|r| PredictedPrice {
            material: r.material,
            model: r.model,
            date: r.date,
            price_predicted: r.price_predicted,
        })
        .collect();

    // 运行纯计算管道；日期范围/模型选择非法时返回 400
    let result = compare_prices(actuals, predictions, &criteria)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    // 组装合并时间序列（折线图）
    let mut series: Vec<PricePoint> =
        Vec::with_capacity(result.actual.len() + result.predicted.len());
    series.extend(result.actual.into_iter().map(|r| PricePoint {
        date: r.date,
        material: r.material,
        model: None,
        price: r.price_actual,
        price_type: ACTUAL_PRICE_LABEL,
    }));
    series.extend(result.predicted.into_iter().map(|r| PricePoint {
        date: r.date,
        material: r.material,
        model: Some(r.model),
        price: r.price_predicted,
        price_type: PREDICTED_PRICE_LABEL,
    }));

    // 组装价格差异列表（柱状图）
    let differences: Vec<PriceDifferenceItem> = result
        .differences
        .into_iter()
        .map(|r| PriceDifferenceItem {
            date: r.date,
            material: r.material,
            model: r.model,
            price_actual: r.price_actual,
            price_predicted: r.price_predicted,
            price_difference: r.price_difference,
            price_difference_percentage: r.price_difference_percentage,
        })
        .collect();

    Ok(Json(PriceCompareResponse {
        material: criteria.material,
        start_date,
        end_date,
        series,
        differences,
    }))
}

/// 查询筛选器可选项（材料、模型、日期范围），用于前端控件默认值
pub async fn filter_options(
    State(state): State<AppState>,
) -> Result<Json<FilterOptionsResponse>, AppError> {
    let mut conn = state
        .db_pool
        .get()
        .map_err(|_| AppError::InternalServerError)?;

    let materials = price_compare::list_materials(&mut conn).map_err(|e| {
        tracing::error!("Failed to list materials: {}", e);
        AppError::InternalServerError
    })?;
    let models = price_compare::list_models(&mut conn).map_err(|e| {
        tracing::error!("Failed to list models: {}", e);
        AppError::InternalServerError
    })?;
    let (min_date, max_date) = price_compare::actual_date_bounds(&mut conn).map_err(|e| {
        tracing::error!("Failed to query date bounds: {}", e);
        AppError::InternalServerError
    })?;

    Ok(Json(FilterOptionsResponse {
        materials,
        models,
        min_date,
        max_date,
    }))
}
