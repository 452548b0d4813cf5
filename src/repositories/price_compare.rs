use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sql_types::{Date, Nullable, Numeric, Text};

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;

/// 实际价格查询结果结构体（material 统一转为小写）
#[derive(Debug, QueryableByName)]
pub struct ActualPriceRow {
    #[diesel(sql_type = Text)]
    pub material: String,
    #[diesel(sql_type = Date)]
    pub date: NaiveDate,
    #[diesel(sql_type = Numeric)]
    pub price_actual: BigDecimal,
}

/// 预测价格查询结果结构体（metal 列对齐为 material）
#[derive(Debug, QueryableByName)]
pub struct PredictedPriceRow {
    #[diesel(sql_type = Text)]
    pub material: String,
    #[diesel(sql_type = Text)]
    pub model: String,
    #[diesel(sql_type = Date)]
    pub date: NaiveDate,
    #[diesel(sql_type = Numeric)]
    pub price_predicted: BigDecimal,
}

/// 查询全部实际价格
pub fn fetch_actual_prices(
    conn: &mut PgPoolConn,
) -> Result<Vec<ActualPriceRow>, diesel::result::Error> {
    let query = r#"
        SELECT LOWER(material) AS material,
               record_date AS date,
               price AS price_actual
        FROM material_prices
        ORDER BY record_date, material
    "#;

    diesel::sql_query(query).load::<ActualPriceRow>(conn)
}

/// 查询全部预测价格
pub fn fetch_predicted_prices(
    conn: &mut PgPoolConn,
) -> Result<Vec<PredictedPriceRow>, diesel::result::Error> {
    let query = r#"
        SELECT LOWER(metal) AS material,
               model,
               prediction_date AS date,
               prediction_value AS price_predicted
        FROM predictions
        ORDER BY prediction_date, model
    "#;

    diesel::sql_query(query).load::<PredictedPriceRow>(conn)
}

#[derive(QueryableByName)]
struct MaterialRow {
    #[diesel(sql_type = Text)]
    material: String,
}

/// 查询全部可选材料（去重、小写、按名称排序）
pub fn list_materials(conn: &mut PgPoolConn) -> Result<Vec<String>, diesel::result::Error> {
    let query = r#"
        SELECT DISTINCT LOWER(material) AS material
        FROM material_prices
        ORDER BY material
    "#;

    let rows = diesel::sql_query(query).load::<MaterialRow>(conn)?;
    Ok(rows.into_iter().map(|r| r.material).collect())
}

#[derive(QueryableByName)]
struct ModelRow {
    #[diesel(sql_type = Text)]
    model: String,
}

/// 查询全部可选预测模型（去重、按名称排序）
pub fn list_models(conn: &mut PgPoolConn) -> Result<Vec<String>, diesel::result::Error> {
    let query = r#"
        SELECT DISTINCT model
        FROM predictions
        ORDER BY model
    "#;

    let rows = diesel::sql_query(query).load::<ModelRow>(conn)?;
    Ok(rows.into_iter().map(|r| r.model).collect())
}

#[derive(QueryableByName)]
struct DateBoundsRow {
    #[diesel(sql_type = Nullable<Date>)]
    min_date: Option<NaiveDate>,
    #[diesel(sql_type = Nullable<Date>)]
    max_date: Option<NaiveDate>,
}

/// 查询实际价格的日期范围（用于前端日期选择器默认值）
pub fn actual_date_bounds(
    conn: &mut PgPoolConn,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), diesel::result::Error> {
    let query = r#"
        SELECT MIN(record_date) AS min_date,
               MAX(record_date) AS max_date
        FROM material_prices
    "#;

    let row = diesel::sql_query(query).get_result::<DateBoundsRow>(conn)?;
    Ok((row.min_date, row.max_date))
}
