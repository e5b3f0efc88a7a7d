// bloomshop/src/services/order_service.rs

//! Order intake and lifecycle transitions.
//!
//! Status moves in one direction only: READY -> PAID -> CANCELED, with
//! CANCELED also reachable straight from READY. Transitions are applied as
//! conditional UPDATEs so concurrent requests cannot double-apply one; the
//! database row, not the process, is the authority on current status.

use crate::errors::{classify_unique_violation, AppError, Result};
use crate::models::order::{Order, OrderDraft, OrderStatus};
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

const ORDER_COLUMNS: &str = "id, order_uid, item_name, payment_key, amount, status, \
   buyer_name, buyer_phone, receiver_name, receiver_phone, receiver_address, message, create_date";

/// Validates and stores a new order in `READY` status.
///
/// When the draft carries no `order_uid`, a fresh UUID is assigned. A
/// duplicate uid (e.g. a retried submission) surfaces as a conflict instead
/// of a second order.
#[instrument(name = "order_service::create_order", skip(pool, draft), err(Display))]
pub async fn create_order(pool: &PgPool, draft: &OrderDraft) -> Result<Order> {
  validate_draft(draft)?;

  let order_uid = match &draft.order_uid {
    Some(uid) => uid.trim().to_string(),
    None => Uuid::new_v4().to_string(),
  };
  debug!(%order_uid, "Storing new order.");

  let order = sqlx::query_as::<_, Order>(&format!(
    "INSERT INTO orders (order_uid, item_name, amount, buyer_name, buyer_phone, \
       receiver_name, receiver_phone, receiver_address, message) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
     RETURNING {ORDER_COLUMNS}"
  ))
  .bind(&order_uid)
  .bind(&draft.item_name)
  .bind(draft.amount)
  .bind(&draft.buyer_name)
  .bind(&draft.buyer_phone)
  .bind(&draft.receiver_name)
  .bind(&draft.receiver_phone)
  .bind(&draft.receiver_address)
  .bind(&draft.message)
  .fetch_one(pool)
  .await
  .map_err(|e| classify_unique_violation(e, &format!("order_uid '{}' already exists", order_uid)))?;

  info!(order_uid = %order.order_uid, "Order created in READY status.");
  Ok(order)
}

/// Fetches an order by its public uid.
#[instrument(name = "order_service::find_by_uid", skip(pool), err(Display))]
pub async fn find_by_uid(pool: &PgPool, order_uid: &str) -> Result<Option<Order>> {
  let order = sqlx::query_as::<_, Order>(&format!(
    "SELECT {ORDER_COLUMNS} FROM orders WHERE order_uid = $1"
  ))
  .bind(order_uid)
  .fetch_optional(pool)
  .await?;
  Ok(order)
}

/// Marks a READY order as PAID and records the payment provider's key.
///
/// The UPDATE only touches rows still in READY status; when no row is
/// updated, a follow-up read distinguishes "no such order" from "order in
/// the wrong status".
#[instrument(name = "order_service::mark_paid", skip(pool, payment_key), err(Display))]
pub async fn mark_paid(pool: &PgPool, order_uid: &str, payment_key: &str) -> Result<Order> {
  if payment_key.trim().is_empty() {
    return Err(AppError::Validation("payment_key must not be empty".to_string()));
  }

  let updated = sqlx::query_as::<_, Order>(&format!(
    "UPDATE orders SET status = 'PAID', payment_key = $2 \
     WHERE order_uid = $1 AND status = 'READY' \
     RETURNING {ORDER_COLUMNS}"
  ))
  .bind(order_uid)
  .bind(payment_key)
  .fetch_optional(pool)
  .await?;

  match updated {
    Some(order) => {
      info!(order_uid = %order.order_uid, "Order marked as PAID.");
      Ok(order)
    }
    None => match find_by_uid(pool, order_uid).await? {
      Some(existing) => {
        warn!(order_uid, status = %existing.status, "Refusing payment on non-READY order.");
        Err(invalid_transition(order_uid, existing.status, OrderStatus::Paid))
      }
      None => Err(AppError::NotFound(format!("Order '{}' not found.", order_uid))),
    },
  }
}

/// Cancels an order. Allowed from both READY and PAID; canceling an already
/// CANCELED order is rejected rather than treated as a no-op.
#[instrument(name = "order_service::cancel", skip(pool), err(Display))]
pub async fn cancel(pool: &PgPool, order_uid: &str) -> Result<Order> {
  let updated = sqlx::query_as::<_, Order>(&format!(
    "UPDATE orders SET status = 'CANCELED' \
     WHERE order_uid = $1 AND status <> 'CANCELED' \
     RETURNING {ORDER_COLUMNS}"
  ))
  .bind(order_uid)
  .fetch_optional(pool)
  .await?;

  match updated {
    Some(order) => {
      info!(order_uid = %order.order_uid, "Order canceled.");
      Ok(order)
    }
    None => match find_by_uid(pool, order_uid).await? {
      Some(existing) => {
        warn!(order_uid, "Refusing to cancel an already CANCELED order.");
        Err(invalid_transition(order_uid, existing.status, OrderStatus::Canceled))
      }
      None => Err(AppError::NotFound(format!("Order '{}' not found.", order_uid))),
    },
  }
}

fn invalid_transition(order_uid: &str, current: OrderStatus, requested: OrderStatus) -> AppError {
  // The conditional UPDATEs only let legal transitions through, so by the
  // time we are here the transition matrix must agree.
  debug_assert!(!current.can_become(requested));
  AppError::InvalidState(format!(
    "Order '{}' is {} and cannot become {}.",
    order_uid, current, requested
  ))
}

fn validate_draft(draft: &OrderDraft) -> Result<()> {
  let required = [
    ("item_name", &draft.item_name),
    ("buyer_name", &draft.buyer_name),
    ("buyer_phone", &draft.buyer_phone),
    ("receiver_name", &draft.receiver_name),
    ("receiver_phone", &draft.receiver_phone),
    ("receiver_address", &draft.receiver_address),
  ];
  for (field, value) in required {
    if value.trim().is_empty() {
      return Err(AppError::Validation(format!("'{}' must not be empty", field)));
    }
  }
  if draft.amount <= 0 {
    return Err(AppError::Validation(format!(
      "amount must be a positive number of currency units, got {}",
      draft.amount
    )));
  }
  if let Some(uid) = &draft.order_uid {
    if uid.trim().is_empty() {
      return Err(AppError::Validation(
        "order_uid, when provided, must not be empty".to_string(),
      ));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn draft() -> OrderDraft {
    OrderDraft {
      order_uid: None,
      item_name: "Rose Basket".to_string(),
      amount: 45000,
      buyer_name: "Kim Minji".to_string(),
      buyer_phone: "010-1234-5678".to_string(),
      receiver_name: "Lee Jiho".to_string(),
      receiver_phone: "010-8765-4321".to_string(),
      receiver_address: "12 Flower St, Seoul".to_string(),
      message: Some("Congratulations on the opening!".to_string()),
    }
  }

  #[test]
  fn complete_draft_passes_validation() {
    assert!(validate_draft(&draft()).is_ok());
  }

  #[test]
  fn blank_required_field_is_rejected_with_field_name() {
    let mut d = draft();
    d.receiver_address = "   ".to_string();
    let err = validate_draft(&d).unwrap_err();
    assert!(matches!(err, AppError::Validation(ref m) if m.contains("receiver_address")));
  }

  #[test]
  fn zero_and_negative_amounts_are_rejected() {
    for amount in [0, -1, -45000] {
      let mut d = draft();
      d.amount = amount;
      let err = validate_draft(&d).unwrap_err();
      assert!(matches!(err, AppError::Validation(ref m) if m.contains("amount")));
    }
  }

  #[test]
  fn provided_uid_may_not_be_blank() {
    let mut d = draft();
    d.order_uid = Some("".to_string());
    assert!(validate_draft(&d).is_err());

    d.order_uid = Some("widget-7f3a".to_string());
    assert!(validate_draft(&d).is_ok());
  }

  #[test]
  fn missing_message_is_fine() {
    let mut d = draft();
    d.message = None;
    assert!(validate_draft(&d).is_ok());
  }

  #[test]
  fn invalid_transition_error_names_both_statuses() {
    let err = invalid_transition("abc-123", OrderStatus::Canceled, OrderStatus::Paid);
    match err {
      AppError::InvalidState(m) => {
        assert!(m.contains("abc-123"));
        assert!(m.contains("CANCELED"));
        assert!(m.contains("PAID"));
      }
      other => panic!("expected InvalidState, got {:?}", other),
    }
  }
}
