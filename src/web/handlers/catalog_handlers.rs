// bloomshop/src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::services::catalog_service;
use crate::state::AppState;
use crate::web::pages;

/// Number of items listed on the home page.
pub const HOME_PAGE_LIMIT: i64 = 50;

/// Body of every keyword miss. Fixed for all keywords so the response never
/// echoes request input back.
pub const MARKET_NOT_FOUND: &str = "Market item not found.";

#[instrument(name = "handler::home", skip(app_state))]
pub async fn home_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = catalog_service::list_page(&app_state.db_pool, HOME_PAGE_LIMIT).await?;
  info!("Rendering home page with {} items.", items.len());
  Ok(
    HttpResponse::Ok()
      .content_type("text/html; charset=utf-8")
      .body(pages::render_home(&app_state.config.shop_name, &items)),
  )
}

#[instrument(name = "handler::market_detail", skip(app_state, path), fields(url_keyword = %path.as_ref()))]
pub async fn market_detail_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let keyword = path.into_inner();
  match catalog_service::find_by_keyword(&app_state.db_pool, &keyword).await? {
    Some(item) => Ok(
      HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::render_market_detail(&app_state.config.shop_name, &item)),
    ),
    None => {
      warn!("No market item for requested keyword.");
      Err(AppError::NotFound(MARKET_NOT_FOUND.to_string()))
    }
  }
}

/// Serves the calculator page. The `category` query parameter is passed
/// through untouched and interpreted by the page's own script.
#[instrument(name = "handler::calculator", skip(app_state))]
pub async fn calculator_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(
    HttpResponse::Ok()
      .content_type("text/html; charset=utf-8")
      .body(pages::render_calculator(&app_state.config.shop_name)),
  )
}
