use serde::{Deserialize, Serialize};
use serde_json::Value;

/// CSV 转 Parquet 查询参数
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// 下载文件名（不含扩展名）；为空时使用 converted.parquet
    pub file_name: Option<String>,
}

/// Parquet 预览查询参数
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// 预览行数，默认 5
    pub rows: Option<usize>,
}

/// Parquet 预览响应
#[derive(Debug, Serialize)]
pub struct ParquetPreviewResponse {
    pub columns: Vec<String>,
    pub total_rows: i64,
    pub rows: Vec<Value>,
}
