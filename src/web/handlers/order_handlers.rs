// bloomshop/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{instrument, warn};

use crate::errors::AppError;
use crate::models::order::OrderDraft;
use crate::services::order_service;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct PayOrderPayload {
  pub payment_key: String,
}

#[instrument(name = "handler::create_order", skip(app_state, draft))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  draft: web::Json<OrderDraft>,
) -> Result<HttpResponse, AppError> {
  let order = order_service::create_order(&app_state.db_pool, &draft).await?;
  Ok(HttpResponse::Created().json(json!({
    "message": "Order received.",
    "order": order
  })))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_uid = %path.as_ref()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let order_uid = path.into_inner();
  match order_service::find_by_uid(&app_state.db_pool, &order_uid).await? {
    Some(order) => Ok(HttpResponse::Ok().json(json!({ "order": order }))),
    None => {
      warn!("Requested order does not exist.");
      Err(AppError::NotFound(format!("Order '{}' not found.", order_uid)))
    }
  }
}

#[instrument(name = "handler::pay_order", skip(app_state, path, payload), fields(order_uid = %path.as_ref()))]
pub async fn pay_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<PayOrderPayload>,
) -> Result<HttpResponse, AppError> {
  let order_uid = path.into_inner();
  let order = order_service::mark_paid(&app_state.db_pool, &order_uid, &payload.payment_key).await?;
  Ok(HttpResponse::Ok().json(json!({
    "message": "Payment recorded.",
    "order": order
  })))
}

#[instrument(name = "handler::cancel_order", skip(app_state, path), fields(order_uid = %path.as_ref()))]
pub async fn cancel_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let order_uid = path.into_inner();
  let order = order_service::cancel(&app_state.db_pool, &order_uid).await?;
  Ok(HttpResponse::Ok().json(json!({
    "message": "Order canceled.",
    "order": order
  })))
}
