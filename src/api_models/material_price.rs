use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateMaterialPrice {
    pub material: String,
    pub record_date: NaiveDate,
    pub price: BigDecimal,
}

#[derive(Debug, Serialize)]
pub struct MaterialPriceResponse {
    pub material: String,
    pub record_date: NaiveDate,
    pub price: BigDecimal,
}
