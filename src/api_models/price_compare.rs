use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 价格对比查询请求
#[derive(Debug, Deserialize)]
pub struct PriceCompareRequest {
    /// 开始日期，格式：YYYY-MM-DD
    pub start_date: String,
    /// 结束日期，格式：YYYY-MM-DD
    pub end_date: String,
    /// 材料名称（小写）
    pub material: String,
    /// 选中的预测模型列表
    #[serde(default)]
    pub models: Vec<String>,
}

/// 合并时间序列中的一个点，type 字段区分实际价/预测价
#[derive(Debug, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub material: String,
    /// 预测点携带模型名，实际点为空
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub price: BigDecimal,
    #[serde(rename = "type")]
    pub price_type: &'static str,
}

/// 价格差异结果项（一条实际价 × 一条模型预测）
#[derive(Debug, Serialize)]
pub struct PriceDifferenceItem {
    pub date: NaiveDate,
    pub material: String,
    pub model: String,
    pub price_actual: BigDecimal,
    pub price_predicted: BigDecimal,
    pub price_difference: BigDecimal,
    /// 百分比差异（四舍五入取整）；实际价为 0 时为 null
    pub price_difference_percentage: Option<i64>,
}

/// 价格对比查询响应
#[derive(Debug, Serialize)]
pub struct PriceCompareResponse {
    pub material: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 合并后的实际/预测时间序列（折线图数据）
    pub series: Vec<PricePoint>,
    /// 内连接后的价格差异列表（柱状图数据）
    pub differences: Vec<PriceDifferenceItem>,
}

/// 筛选器可选项响应（前端控件默认值）
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub materials: Vec<String>,
    pub models: Vec<String>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}
