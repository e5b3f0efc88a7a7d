// bloomshop/src/db.rs

//! Schema bootstrap. All statements are idempotent so the server can be
//! restarted against an already-initialized database.

use crate::errors::Result;
use sqlx::PgPool;

// CREATE TYPE has no IF NOT EXISTS form; the DO block swallows the
// duplicate_object error raised on re-runs.
const CREATE_ORDER_STATUS_TYPE: &str = r#"
DO $$ BEGIN
  CREATE TYPE order_status AS ENUM ('READY', 'PAID', 'CANCELED');
EXCEPTION
  WHEN duplicate_object THEN NULL;
END $$;
"#;

const CREATE_MARKET_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS market (
  id BIGSERIAL PRIMARY KEY,
  url_keyword TEXT NOT NULL UNIQUE,
  name TEXT NOT NULL,
  content TEXT NOT NULL,
  price INTEGER NOT NULL,
  image_url TEXT,
  create_date TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
  id BIGSERIAL PRIMARY KEY,
  order_uid TEXT NOT NULL UNIQUE,
  item_name TEXT NOT NULL,
  payment_key TEXT,
  amount INTEGER NOT NULL,
  status order_status NOT NULL DEFAULT 'READY',
  buyer_name TEXT NOT NULL,
  buyer_phone TEXT NOT NULL,
  receiver_name TEXT NOT NULL,
  receiver_phone TEXT NOT NULL,
  receiver_address TEXT NOT NULL,
  message TEXT,
  create_date TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Creates the `order_status` enum and both tables if they do not exist yet.
/// Called once at startup, before the HTTP server starts accepting traffic.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
  // Postgres rejects multi-statement strings over the extended protocol,
  // so each statement runs on its own.
  sqlx::query(CREATE_ORDER_STATUS_TYPE).execute(pool).await?;
  sqlx::query(CREATE_MARKET_TABLE).execute(pool).await?;
  sqlx::query(CREATE_ORDERS_TABLE).execute(pool).await?;
  tracing::info!("Database schema is in place.");
  Ok(())
}
