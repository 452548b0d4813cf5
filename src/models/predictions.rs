use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::schema::predictions;

#[derive(Queryable, Debug, Clone)]
pub struct Prediction {
    pub metal: String,
    pub model: String,
    pub prediction_date: NaiveDate,
    pub prediction_value: BigDecimal,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = predictions)]
pub struct NewPrediction {
    pub metal: String,
    pub model: String,
    pub prediction_date: NaiveDate,
    pub prediction_value: BigDecimal,
}
