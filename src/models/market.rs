// bloomshop/src/models/market.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog item, addressable on the site as `/market/{url_keyword}`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Market {
  pub id: i64,
  /// Unique slug driving both page routing and sitemap entries.
  pub url_keyword: String,
  pub name: String,
  /// Item description; rendered on the detail page and summarized into
  /// its meta description.
  pub content: String,
  /// Price in whole currency units.
  pub price: i32,
  pub image_url: Option<String>,
  pub create_date: DateTime<Utc>,
}

/// A catalog row pending insertion, as parsed from an uploaded CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewMarket {
  pub url_keyword: String,
  pub name: String,
  pub content: String,
  pub price: i32,
  pub image_url: Option<String>,
}
