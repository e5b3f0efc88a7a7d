// bloomshop/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type as SqlxType}; // Renamed Type to SqlxType to avoid conflict
use std::fmt;

/// Lifecycle of an order. Matches the `order_status` enum type in Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, SqlxType)]
#[sqlx(type_name = "order_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
  Ready,
  Paid,
  Canceled,
}

impl OrderStatus {
  /// Legal transitions: READY -> PAID, READY -> CANCELED, PAID -> CANCELED.
  /// Everything else (including re-entering the current status) is rejected.
  pub fn can_become(self, next: OrderStatus) -> bool {
    matches!(
      (self, next),
      (OrderStatus::Ready, OrderStatus::Paid)
        | (OrderStatus::Ready, OrderStatus::Canceled)
        | (OrderStatus::Paid, OrderStatus::Canceled)
    )
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Database labels double as the display form, e.g. in error messages.
    let label = match self {
      OrderStatus::Ready => "READY",
      OrderStatus::Paid => "PAID",
      OrderStatus::Canceled => "CANCELED",
    };
    write!(f, "{}", label)
  }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  /// Public identifier used in order URLs; unique, immutable once assigned.
  pub order_uid: String,
  /// Denormalized snapshot of the purchased item's name at order time.
  pub item_name: String,
  /// Reference handed back by the payment provider; set when the order is paid.
  pub payment_key: Option<String>,
  /// Amount in whole currency units.
  pub amount: i32,
  pub status: OrderStatus,
  pub buyer_name: String,
  pub buyer_phone: String,
  pub receiver_name: String,
  pub receiver_phone: String,
  pub receiver_address: String,
  pub message: Option<String>,
  pub create_date: DateTime<Utc>,
}

/// Incoming order payload. `order_uid` may be supplied by the storefront
/// widget; when absent the intake service generates one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
  pub order_uid: Option<String>,
  pub item_name: String,
  pub amount: i32,
  pub buyer_name: String,
  pub buyer_phone: String,
  pub receiver_name: String,
  pub receiver_phone: String,
  pub receiver_address: String,
  pub message: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ready_can_be_paid_or_canceled() {
    assert!(OrderStatus::Ready.can_become(OrderStatus::Paid));
    assert!(OrderStatus::Ready.can_become(OrderStatus::Canceled));
  }

  #[test]
  fn paid_can_only_be_canceled() {
    assert!(OrderStatus::Paid.can_become(OrderStatus::Canceled));
    assert!(!OrderStatus::Paid.can_become(OrderStatus::Ready));
    assert!(!OrderStatus::Paid.can_become(OrderStatus::Paid));
  }

  #[test]
  fn canceled_is_terminal() {
    assert!(!OrderStatus::Canceled.can_become(OrderStatus::Ready));
    assert!(!OrderStatus::Canceled.can_become(OrderStatus::Paid));
    assert!(!OrderStatus::Canceled.can_become(OrderStatus::Canceled));
  }

  #[test]
  fn no_status_can_reenter_itself() {
    for status in [OrderStatus::Ready, OrderStatus::Paid, OrderStatus::Canceled] {
      assert!(!status.can_become(status));
    }
  }

  #[test]
  fn display_matches_database_labels() {
    assert_eq!(OrderStatus::Ready.to_string(), "READY");
    assert_eq!(OrderStatus::Paid.to_string(), "PAID");
    assert_eq!(OrderStatus::Canceled.to_string(), "CANCELED");
  }

  #[test]
  fn status_serializes_to_uppercase_json() {
    assert_eq!(serde_json::to_string(&OrderStatus::Ready).unwrap(), "\"READY\"");
    assert_eq!(serde_json::to_string(&OrderStatus::Canceled).unwrap(), "\"CANCELED\"");
  }
}
