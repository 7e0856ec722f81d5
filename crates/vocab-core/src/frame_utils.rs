//! Small helpers for reading and extending string tables.

use polars::prelude::{
    BooleanChunked, Column, DataFrame, DataType, IntoColumn, NamedFrom, NewChunkedArray, Series,
};

use vocab_model::FormatError;

use crate::error::Result;

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Checks that every field is present and the table has at least one row.
pub fn require_fields(df: &DataFrame, fields: &[&str]) -> std::result::Result<(), FormatError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|name| !has_column(df, name))
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(FormatError::MissingFields { missing });
    }
    if df.height() == 0 {
        return Err(FormatError::Empty);
    }
    Ok(())
}

/// Reads a column as optional strings, casting non-string columns.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column.str()?;
    Ok(values.into_iter().map(|v| v.map(str::to_string)).collect())
}

/// Like [`string_values`], but a missing column reads as all nulls.
pub fn optional_string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    if has_column(df, name) {
        string_values(df, name)
    } else {
        Ok(vec![None; df.height()])
    }
}

/// `None` for absent and empty values.
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

pub fn keep_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}

pub fn string_column<S: AsRef<str>>(name: &str, values: &[S]) -> Column {
    let values: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
    Series::new(name.into(), values).into_column()
}

pub fn optional_string_column(name: &str, values: &[Option<&str>]) -> Column {
    Series::new(name.into(), values).into_column()
}

pub fn integer_column(name: &str, values: &[u32]) -> Column {
    Series::new(name.into(), values).into_column()
}
