// bloomshop/src/services/upload_service.rs

//! Parsing and validation of uploaded catalog exports.
//!
//! Only CSV is accepted. The canonical shape is a header row of
//! `url_keyword,name,price,content` with an optional `image_url` column;
//! extra columns are ignored. Rows are validated one by one so a bad cell
//! is reported with its row number and column name.

use crate::errors::{AppError, Result};
use crate::models::market::NewMarket;
use std::collections::HashMap;
use tracing::{debug, instrument};

const REQUIRED_COLUMNS: [&str; 4] = ["url_keyword", "name", "price", "content"];
const IMAGE_COLUMN: &str = "image_url";

/// Checks the uploaded filename's extension, rejecting anything but `.csv`
/// (matched case-insensitively) as unsupported media.
pub fn ensure_supported_upload(filename: &str) -> Result<()> {
  if filename.to_ascii_lowercase().ends_with(".csv") {
    Ok(())
  } else {
    Err(AppError::UnsupportedMedia(format!(
      "'{}' is not a supported upload; export the catalog as .csv",
      filename
    )))
  }
}

/// Parses CSV bytes into catalog rows, preserving file order.
///
/// Fails on the first problem found: a missing required column, a
/// malformed row, a blank keyword or name, an unparsable price, or a
/// keyword duplicated within the file. Row numbers in errors count data
/// rows from 1, excluding the header.
#[instrument(name = "upload_service::parse_catalog_csv", skip(data), fields(bytes = data.len()), err(Display))]
pub fn parse_catalog_csv(data: &[u8]) -> Result<Vec<NewMarket>> {
  let mut reader = csv::ReaderBuilder::new()
    .has_headers(true)
    .trim(csv::Trim::All)
    .from_reader(data);

  let headers = reader
    .headers()
    .map_err(|e| AppError::Validation(format!("CSV header row could not be read: {}", e)))?
    .clone();

  let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
  let found = REQUIRED_COLUMNS.map(column);
  let missing: Vec<&str> = REQUIRED_COLUMNS
    .iter()
    .zip(&found)
    .filter(|(_, at)| at.is_none())
    .map(|(name, _)| *name)
    .collect();
  if !missing.is_empty() {
    return Err(AppError::Validation(format!(
      "missing required column(s): {}",
      missing.join(", ")
    )));
  }
  let [Some(keyword_at), Some(name_at), Some(price_at), Some(content_at)] = found else {
    return Err(AppError::Internal("CSV column presence check failed".to_string()));
  };
  let image_at = column(IMAGE_COLUMN);

  let mut rows = Vec::new();
  let mut seen_keywords: HashMap<String, usize> = HashMap::new();

  for (i, record) in reader.records().enumerate() {
    let row_number = i + 1;
    let record = record.map_err(|e| AppError::Validation(format!("row {}: {}", row_number, e)))?;
    let cell = |at: usize| record.get(at).unwrap_or("").to_string();

    let url_keyword = cell(keyword_at);
    if url_keyword.is_empty() {
      return Err(AppError::Validation(format!(
        "row {}: url_keyword must not be empty",
        row_number
      )));
    }
    if let Some(first_row) = seen_keywords.insert(url_keyword.clone(), row_number) {
      return Err(AppError::Validation(format!(
        "row {}: url_keyword '{}' duplicates row {}",
        row_number, url_keyword, first_row
      )));
    }

    let name = cell(name_at);
    if name.is_empty() {
      return Err(AppError::Validation(format!("row {}: name must not be empty", row_number)));
    }

    let price_text = cell(price_at);
    let price = price_text.parse::<i32>().map_err(|_| {
      AppError::Validation(format!(
        "row {}: price '{}' is not a whole number",
        row_number, price_text
      ))
    })?;
    if price < 0 {
      return Err(AppError::Validation(format!(
        "row {}: price must not be negative, got {}",
        row_number, price
      )));
    }

    // content may be empty; image_url is optional and blank means none.
    let content = cell(content_at);
    let image_url = image_at.map(cell).filter(|v| !v.is_empty());

    rows.push(NewMarket {
      url_keyword,
      name,
      content,
      price,
      image_url,
    });
  }

  if rows.is_empty() {
    return Err(AppError::Validation("CSV contains no data rows".to_string()));
  }

  debug!("Parsed {} catalog rows from upload.", rows.len());
  Ok(rows)
}
