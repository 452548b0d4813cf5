use std::io::Cursor;

use polars::prelude::*;
use serde_json::{Map, Value};
use thiserror::Error;

/// Matches the original viewer, which shows `df.head()`.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("uploaded file is empty")]
    EmptyInput,
    #[error("{0}")]
    Polars(#[from] PolarsError),
}

#[derive(Debug)]
pub struct ParquetPreview {
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub rows: Vec<Value>,
}

/// Parse CSV bytes (header row, inferred schema, dates parsed) and
/// re-serialize the frame as Parquet.
pub fn csv_to_parquet(data: &[u8]) -> Result<Vec<u8>, ConvertError> {
    if data.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
        .into_reader_with_file_handle(Cursor::new(data))
        .finish()?;

    let mut buf = Vec::new();
    ParquetWriter::new(&mut buf).finish(&mut df)?;
    Ok(buf)
}

/// Read Parquet bytes and return the first `limit` rows as JSON objects,
/// plus column names and the full row count.
pub fn parquet_preview(data: &[u8], limit: usize) -> Result<ParquetPreview, ConvertError> {
    if data.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let df = ParquetReader::new(Cursor::new(data)).finish()?;
    let total_rows = df.height();
    let head = df.head(Some(limit));

    let columns: Vec<String> = head
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::with_capacity(head.height());
    for i in 0..head.height() {
        let mut obj = Map::new();
        for series in head.get_columns() {
            let value = series
                .get(i)
                .map(any_value_to_json)
                .unwrap_or(Value::Null);
            obj.insert(series.name().to_string(), value);
        }
        rows.push(Value::Object(obj));
    }

    Ok(ParquetPreview {
        columns,
        total_rows,
        rows,
    })
}

fn any_value_to_json(value: AnyValue) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int8(v) => Value::from(v),
        AnyValue::Int16(v) => Value::from(v),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt8(v) => Value::from(v),
        AnyValue::UInt16(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(v) => Value::from(v as f64),
        AnyValue::Float64(v) => Value::from(v),
        // dates, datetimes and anything exotic fall back to their display form
        other => Value::String(other.to_string()),
    }
}
