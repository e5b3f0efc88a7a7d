// bloomshop/src/web/pages.rs

//! Server-rendered HTML for the public pages.
//!
//! The pages are deliberately small: each item page exists to give crawlers
//! a stable URL with a unique title and meta description, not to be a rich
//! storefront. Rendering is plain string assembly; all user-controlled text
//! goes through [`html_escape`] on the way out.

use crate::models::market::Market;

/// Longest meta description emitted, in characters.
const META_DESCRIPTION_LIMIT: usize = 160;

/// Renders the home page: shop header plus a link list of the given items.
pub fn render_home(shop_name: &str, items: &[Market]) -> String {
  let shop = html_escape(shop_name);
  let mut out = String::new();
  out.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
  out.push_str("  <meta charset=\"utf-8\">\n");
  out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
  out.push_str(&format!("  <title>{}</title>\n", shop));
  out.push_str(&format!(
    "  <meta name=\"description\" content=\"{} - fresh flowers and plants, delivered.\">\n",
    shop
  ));
  out.push_str("</head>\n<body>\n");
  out.push_str(&format!("  <h1>{}</h1>\n", shop));
  out.push_str("  <ul class=\"market-list\">\n");
  for item in items {
    out.push_str(&format!(
      "    <li><a href=\"/market/{}\">{}</a> <span class=\"price\">₩{}</span></li>\n",
      html_escape(&item.url_keyword),
      html_escape(&item.name),
      format_price(item.price)
    ));
  }
  out.push_str("  </ul>\n</body>\n</html>\n");
  out
}

/// Renders an item's detail page with its own title and meta description.
pub fn render_market_detail(shop_name: &str, item: &Market) -> String {
  let shop = html_escape(shop_name);
  let name = html_escape(&item.name);
  let mut out = String::new();
  out.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
  out.push_str("  <meta charset=\"utf-8\">\n");
  out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
  out.push_str(&format!("  <title>{} | {}</title>\n", name, shop));
  out.push_str(&format!(
    "  <meta name=\"description\" content=\"{}\">\n",
    html_escape(&meta_summary(&item.content))
  ));
  out.push_str("</head>\n<body>\n");
  out.push_str(&format!("  <h1>{}</h1>\n", name));
  out.push_str(&format!(
    "  <p class=\"price\">₩{}</p>\n",
    format_price(item.price)
  ));
  if let Some(image_url) = &item.image_url {
    out.push_str(&format!(
      "  <img src=\"{}\" alt=\"{}\">\n",
      html_escape(image_url),
      name
    ));
  }
  out.push_str(&format!("  <p class=\"content\">{}</p>\n", html_escape(&item.content)));
  out.push_str(&format!("  <p><a href=\"/\">{}</a></p>\n", shop));
  out.push_str("</body>\n</html>\n");
  out
}

/// Renders the static price-calculator page. The `category` query parameter
/// is read client-side; the server sends the same page for every category.
pub fn render_calculator(shop_name: &str) -> String {
  let shop = html_escape(shop_name);
  let mut out = String::new();
  out.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
  out.push_str("  <meta charset=\"utf-8\">\n");
  out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
  out.push_str(&format!("  <title>Arrangement Price Calculator | {}</title>\n", shop));
  out.push_str(&format!(
    "  <meta name=\"description\" content=\"Estimate arrangement prices at {}.\">\n",
    shop
  ));
  out.push_str("</head>\n<body>\n");
  out.push_str("  <h1>Arrangement Price Calculator</h1>\n");
  out.push_str("  <p>Category: <span id=\"category-label\">all</span></p>\n");
  out.push_str("  <script>\n");
  out.push_str("    const category = new URLSearchParams(window.location.search).get(\"category\");\n");
  out.push_str("    if (category) {\n");
  out.push_str("      document.getElementById(\"category-label\").textContent = category;\n");
  out.push_str("    }\n");
  out.push_str("  </script>\n");
  out.push_str("</body>\n</html>\n");
  out
}

/// Collapses whitespace and truncates the item description to meta length.
/// Truncation counts characters, not bytes, so multibyte text never splits.
fn meta_summary(content: &str) -> String {
  let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
  if collapsed.chars().count() <= META_DESCRIPTION_LIMIT {
    return collapsed;
  }
  let cut: String = collapsed.chars().take(META_DESCRIPTION_LIMIT - 3).collect();
  format!("{}...", cut)
}

/// Formats a whole-unit price with thousands separators, e.g. `45000` to
/// `45,000`.
fn format_price(price: i32) -> String {
  let digits = price.unsigned_abs().to_string();
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }
  if price < 0 {
    format!("-{}", grouped)
  } else {
    grouped
  }
}

fn html_escape(input: &str) -> String {
  input
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
    .replace('\'', "&#39;")
}
