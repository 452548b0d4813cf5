use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePrediction {
    pub metal: String,
    pub model: String,
    pub prediction_date: NaiveDate,
    pub prediction_value: BigDecimal,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub metal: String,
    pub model: String,
    pub prediction_date: NaiveDate,
    pub prediction_value: BigDecimal,
}
