// bloomshop/src/web/handlers/upload_handlers.rs

use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::{catalog_service, upload_service};
use crate::state::AppState;

/// Accepts a multipart form with a CSV file part and registers its rows as
/// catalog items. The insert is transactional: any rejected row (or a
/// keyword already in the catalog) leaves the catalog untouched.
#[instrument(name = "handler::upload_data", skip(app_state, payload))]
pub async fn upload_data_handler(
  app_state: web::Data<AppState>,
  mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
  let mut upload: Option<(String, web::BytesMut)> = None;

  while let Some(mut field) = payload.try_next().await.map_err(bad_multipart)? {
    let filename = field.content_disposition().get_filename().map(str::to_owned);
    let Some(filename) = filename else {
      // Plain form fields are drained and skipped; only a file part counts.
      while field.try_next().await.map_err(bad_multipart)?.is_some() {}
      continue;
    };

    let mut buf = web::BytesMut::new();
    while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
      buf.extend_from_slice(&chunk);
    }
    upload = Some((filename, buf));
    break; // First file part wins; anything after it is ignored.
  }

  let Some((filename, data)) = upload else {
    return Err(AppError::Validation("multipart payload contains no file".to_string()));
  };

  upload_service::ensure_supported_upload(&filename)?;
  let rows = upload_service::parse_catalog_csv(&data)?;
  let inserted = catalog_service::insert_batch(&app_state.db_pool, &rows).await?;

  info!(inserted, file = %filename, "Catalog upload committed.");
  Ok(HttpResponse::Ok().json(json!({
    "message": format!("Registered {} catalog item(s).", inserted),
    "inserted": inserted
  })))
}

fn bad_multipart(err: MultipartError) -> AppError {
  AppError::Validation(format!("malformed multipart payload: {}", err))
}
