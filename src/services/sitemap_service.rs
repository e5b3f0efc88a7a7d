// bloomshop/src/services/sitemap_service.rs

//! Sitemap and robots.txt generation.
//!
//! Both documents are assembled as plain strings; the output is small and
//! fixed-shape, so a template or XML library would be more machinery than
//! the job needs. Given the same base URL, date and catalog, the output is
//! byte-for-byte identical.

use crate::models::market::Market;
use chrono::NaiveDate;

/// Path segment under which item detail pages live.
pub const SITE_SECTION: &str = "market";

/// Category landing pages advertised to crawlers. Each resolves to the
/// calculator page with the category passed through as a query parameter.
pub const CATEGORY_PAGES: [&str; 5] = ["wreath", "orchid", "bouquet", "desk", "office"];

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Absolute URL of an item's detail page.
pub fn market_page_url(base_url: &str, url_keyword: &str) -> String {
  format!("{}/{}/{}", base_url.trim_end_matches('/'), SITE_SECTION, url_keyword)
}

/// Builds the full sitemap document.
///
/// Entry order is fixed: the site root first, then the category pages in
/// declaration order, then one entry per catalog item in the order given.
/// Static pages carry `generated_on` as their lastmod; item pages carry
/// their own creation date.
pub fn build_sitemap(base_url: &str, generated_on: NaiveDate, items: &[Market]) -> String {
  let base = base_url.trim_end_matches('/');
  let generated_on = generated_on.format("%Y-%m-%d").to_string();

  let mut out = String::new();
  out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
  out.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));

  push_url_entry(&mut out, &format!("{}/", base), &generated_on, "daily", "1.0");
  for category in CATEGORY_PAGES {
    let loc = format!("{}/item?category={}", base, category);
    push_url_entry(&mut out, &loc, &generated_on, "weekly", "0.6");
  }
  for item in items {
    let loc = market_page_url(base, &item.url_keyword);
    let lastmod = item.create_date.format("%Y-%m-%d").to_string();
    push_url_entry(&mut out, &loc, &lastmod, "weekly", "0.8");
  }

  out.push_str("</urlset>\n");
  out
}

fn push_url_entry(out: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
  out.push_str("  <url>\n");
  out.push_str(&format!("    <loc>{}</loc>\n", xml_escape(loc)));
  out.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
  out.push_str(&format!("    <changefreq>{}</changefreq>\n", changefreq));
  out.push_str(&format!("    <priority>{}</priority>\n", priority));
  out.push_str("  </url>\n");
}

/// Builds the robots.txt body: everything is crawlable and the sitemap is
/// advertised at the site root.
pub fn robots_txt(base_url: &str) -> String {
  format!(
    "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
    base_url.trim_end_matches('/')
  )
}

/// Escapes the five XML-reserved characters. Keywords are stored verbatim,
/// so a `loc` value may contain `&` and friends.
pub fn xml_escape(input: &str) -> String {
  input
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
    .replace('\'', "&apos;")
}
