// bloomshop/src/web/handlers/seo_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::{catalog_service, sitemap_service};
use crate::state::AppState;

/// Builds the sitemap from the full catalog on every request. The catalog
/// is small enough that caching would only add staleness to reason about.
#[instrument(name = "handler::sitemap", skip(app_state))]
pub async fn sitemap_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = catalog_service::list_all(&app_state.db_pool).await?;
  info!("Generating sitemap for {} catalog items.", items.len());
  let body = sitemap_service::build_sitemap(&app_state.config.app_base_url, Utc::now().date_naive(), &items);
  Ok(HttpResponse::Ok().content_type("application/xml").body(body))
}

#[instrument(name = "handler::robots", skip(app_state))]
pub async fn robots_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let body = sitemap_service::robots_txt(&app_state.config.app_base_url);
  Ok(
    HttpResponse::Ok()
      .content_type("text/plain; charset=utf-8")
      .body(body),
  )
}
