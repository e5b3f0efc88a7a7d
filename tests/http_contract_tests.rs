// tests/http_contract_tests.rs
mod common;

use actix_web::{test, web as actix_data, App};
use bloomshop::state::AppState;
use bloomshop::web::configure_app_routes;
use common::*;
use sqlx::PgPool;

/// State whose pool never connects. Endpoints under test here must answer
/// without touching the database; a test that accidentally queries will
/// surface as a 500 instead of a hang.
fn detached_state() -> AppState {
  let config = test_config();
  let db_pool = PgPool::connect_lazy(&config.database_url).expect("lazy pool construction");
  AppState { db_pool, config }
}

#[actix_web::test]
async fn test_health_endpoint_reports_ok() {
  setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(actix_data::Data::new(detached_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/health").to_request();
  let resp = test::call_service(&app, req).await;
  assert!(resp.status().is_success());

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_robots_txt_is_plain_text_with_sitemap_line() {
  setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(actix_data::Data::new(detached_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/robots.txt").to_request();
  let resp = test::call_service(&app, req).await;
  assert!(resp.status().is_success());
  let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
  assert!(content_type.starts_with("text/plain"));

  let body = test::read_body(resp).await;
  assert_eq!(
    std::str::from_utf8(&body).unwrap(),
    "User-agent: *\nAllow: /\nSitemap: http://shop.test/sitemap.xml\n"
  );
}

#[actix_web::test]
async fn test_calculator_page_renders_without_database() {
  setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(actix_data::Data::new(detached_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/item?category=wreath").to_request();
  let resp = test::call_service(&app, req).await;
  assert!(resp.status().is_success());
  let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
  assert!(content_type.starts_with("text/html"));

  let body = test::read_body(resp).await;
  let html = std::str::from_utf8(&body).unwrap();
  assert!(html.contains("Arrangement Price Calculator"));
  assert!(html.contains("BNT Flower &amp; Plant"));
}

#[actix_web::test]
async fn test_create_order_with_incomplete_json_is_bad_request() {
  setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(actix_data::Data::new(detached_state()))
      .configure(configure_app_routes),
  )
  .await;

  // amount missing entirely; rejected during extraction, before any query.
  let req = test::TestRequest::post()
    .uri("/orders")
    .set_json(serde_json::json!({
      "item_name": "Rose Basket",
      "buyer_name": "Kim Minji"
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_upload_with_non_csv_extension_is_unsupported_media() {
  setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(actix_data::Data::new(detached_state()))
      .configure(configure_app_routes),
  )
  .await;

  let boundary = "test-boundary-7f3a";
  let payload = format!(
    "--{b}\r\n\
     Content-Disposition: form-data; name=\"file\"; filename=\"catalog.xlsx\"\r\n\
     Content-Type: application/octet-stream\r\n\r\n\
     not,a,csv\r\n\
     --{b}--\r\n",
    b = boundary
  );
  let req = test::TestRequest::post()
    .uri("/upload-data")
    .insert_header(("content-type", format!("multipart/form-data; boundary={}", boundary)))
    .set_payload(payload)
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status().as_u16(), 415);

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert!(body["error"].as_str().unwrap().contains("catalog.xlsx"));
}

#[actix_web::test]
async fn test_upload_with_broken_csv_reports_missing_columns() {
  setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(actix_data::Data::new(detached_state()))
      .configure(configure_app_routes),
  )
  .await;

  let boundary = "test-boundary-7f3a";
  let payload = format!(
    "--{b}\r\n\
     Content-Disposition: form-data; name=\"file\"; filename=\"catalog.csv\"\r\n\
     Content-Type: text/csv\r\n\r\n\
     url_keyword,name\r\nrose-basket,Rose Basket\r\n\
     --{b}--\r\n",
    b = boundary
  );
  let req = test::TestRequest::post()
    .uri("/upload-data")
    .insert_header(("content-type", format!("multipart/form-data; boundary={}", boundary)))
    .set_payload(payload)
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status().as_u16(), 400);

  let body: serde_json::Value = test::read_body_json(resp).await;
  let message = body["error"].as_str().unwrap();
  assert!(message.contains("price"));
  assert!(message.contains("content"));
}

#[actix_web::test]
async fn test_upload_without_file_part_is_rejected() {
  setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(actix_data::Data::new(detached_state()))
      .configure(configure_app_routes),
  )
  .await;

  let boundary = "test-boundary-7f3a";
  // One plain form field, no file part at all.
  let payload = format!(
    "--{b}\r\n\
     Content-Disposition: form-data; name=\"note\"\r\n\r\n\
     hello\r\n\
     --{b}--\r\n",
    b = boundary
  );
  let req = test::TestRequest::post()
    .uri("/upload-data")
    .insert_header(("content-type", format!("multipart/form-data; boundary={}", boundary)))
    .set_payload(payload)
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status().as_u16(), 400);

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert!(body["error"].as_str().unwrap().contains("no file"));
}

#[actix_web::test]
async fn test_unknown_route_is_plain_404() {
  setup_tracing();
  let app = test::init_service(
    App::new()
      .app_data(actix_data::Data::new(detached_state()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/no-such-page").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status().as_u16(), 404);
}
