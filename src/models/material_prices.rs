use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::schema::material_prices;

#[derive(Queryable, Debug, Clone)]
pub struct MaterialPrice {
    pub material: String,
    pub record_date: NaiveDate,
    pub price: BigDecimal,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = material_prices)]
pub struct NewMaterialPrice {
    pub material: String,
    pub record_date: NaiveDate,
    pub price: BigDecimal,
}
