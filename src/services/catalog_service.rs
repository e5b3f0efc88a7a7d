// bloomshop/src/services/catalog_service.rs

//! Read and write access to the `market` catalog table.

use crate::errors::{classify_unique_violation, Result};
use crate::models::market::{Market, NewMarket};
use sqlx::PgPool;
use tracing::{debug, info, instrument};

/// Looks up a single catalog item by its URL keyword.
///
/// The match is exact and case-sensitive: keywords are stored verbatim and
/// `Rose-Basket` is a different page than `rose-basket`.
#[instrument(name = "catalog_service::find_by_keyword", skip(pool), err(Display))]
pub async fn find_by_keyword(pool: &PgPool, keyword: &str) -> Result<Option<Market>> {
  debug!("Looking up market item by url_keyword.");
  let market = sqlx::query_as::<_, Market>(
    "SELECT id, url_keyword, name, content, price, image_url, create_date FROM market WHERE url_keyword = $1",
  )
  .bind(keyword)
  .fetch_optional(pool)
  .await?;
  Ok(market)
}

/// Returns the newest catalog items for the home page, capped at `limit`.
#[instrument(name = "catalog_service::list_page", skip(pool), err(Display))]
pub async fn list_page(pool: &PgPool, limit: i64) -> Result<Vec<Market>> {
  let items = sqlx::query_as::<_, Market>(
    "SELECT id, url_keyword, name, content, price, image_url, create_date FROM market \
     ORDER BY create_date DESC, id DESC LIMIT $1",
  )
  .bind(limit)
  .fetch_all(pool)
  .await?;
  debug!("Fetched {} market items for listing.", items.len());
  Ok(items)
}

/// Returns the whole catalog in insertion order.
///
/// The sitemap is built from this list, so the ordering must be stable
/// across calls; `id` is monotonic and never reused.
#[instrument(name = "catalog_service::list_all", skip(pool), err(Display))]
pub async fn list_all(pool: &PgPool) -> Result<Vec<Market>> {
  let items = sqlx::query_as::<_, Market>(
    "SELECT id, url_keyword, name, content, price, image_url, create_date FROM market ORDER BY id ASC",
  )
  .fetch_all(pool)
  .await?;
  Ok(items)
}

/// Inserts a batch of catalog rows inside a single transaction.
///
/// All rows land or none do: a duplicate `url_keyword` anywhere in the batch
/// rolls the whole upload back and surfaces as a conflict naming the keyword.
#[instrument(name = "catalog_service::insert_batch", skip(pool, rows), fields(row_count = rows.len()), err(Display))]
pub async fn insert_batch(pool: &PgPool, rows: &[NewMarket]) -> Result<u64> {
  let mut tx = pool.begin().await?;
  for row in rows {
    sqlx::query(
      "INSERT INTO market (url_keyword, name, content, price, image_url) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&row.url_keyword)
    .bind(&row.name)
    .bind(&row.content)
    .bind(row.price)
    .bind(&row.image_url)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
      classify_unique_violation(e, &format!("url_keyword '{}' already exists", row.url_keyword))
    })?;
  }
  tx.commit().await?;
  info!("Inserted {} catalog rows.", rows.len());
  Ok(rows.len() as u64)
}
