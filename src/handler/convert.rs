use axum::{
    body::Bytes,
    extract::Query,
    http::{header, HeaderMap, HeaderValue},
    Json,
};

use crate::api_models::convert::{ConvertQuery, ParquetPreviewResponse, PreviewQuery};
use crate::handler::error::AppError;
use crate::services::convert;

/// 下载文件名：用户提供则追加 .parquet 扩展名，空白则用默认名
fn parquet_file_name(file_name: Option<&str>) -> String {
    match file_name.map(str::trim) {
        Some(name) if !name.is_empty() => format!("{}.parquet", name),
        _ => "converted.parquet".to_string(),
    }
}

/// CSV 转 Parquet，结果作为附件返回
pub async fn csv_to_parquet(
    Query(params): Query<ConvertQuery>,
    body: Bytes,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let parquet = convert::csv_to_parquet(&body)
        .map_err(|e| AppError::BadRequest(format!("Error reading the CSV file: {}", e)))?;

    let file_name = parquet_file_name(params.file_name.as_deref());
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file_name))
        .map_err(|_| AppError::BadRequest("Invalid file name".to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((headers, parquet))
}

/// Parquet 文件预览：返回前 N 行
pub async fn parquet_preview(
    Query(params): Query<PreviewQuery>,
    body: Bytes,
) -> Result<Json<ParquetPreviewResponse>, AppError> {
    let limit = params.rows.unwrap_or(convert::DEFAULT_PREVIEW_ROWS);
    let preview = convert::parquet_preview(&body, limit)
        .map_err(|e| AppError::BadRequest(format!("Error reading the Parquet file: {}", e)))?;

    Ok(Json(ParquetPreviewResponse {
        columns: preview.columns,
        total_rows: preview.total_rows as i64,
        rows: preview.rows,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_gets_parquet_extension() {
        assert_eq!(parquet_file_name(Some("prices")), "prices.parquet");
    }

    #[test]
    fn missing_or_blank_file_name_falls_back_to_default() {
        assert_eq!(parquet_file_name(None), "converted.parquet");
        assert_eq!(parquet_file_name(Some("")), "converted.parquet");
        assert_eq!(parquet_file_name(Some("   ")), "converted.parquet");
    }
}
