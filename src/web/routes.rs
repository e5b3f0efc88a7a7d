// bloomshop/src/web/routes.rs

use actix_web::web;

// Simple liveness probe. Database connectivity is checked at startup, not here.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` to configure services for the Actix App.
// Every route sits at the site root: crawlers expect /sitemap.xml and
// /robots.txt there, and the landing pages are public URLs, so there is no
// /api prefix to hide behind.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    // Public Pages
    .route("/", web::get().to(crate::web::handlers::catalog_handlers::home_handler))
    .route(
      "/market/{url_keyword}",
      web::get().to(crate::web::handlers::catalog_handlers::market_detail_handler),
    )
    .route(
      "/item",
      web::get().to(crate::web::handlers::catalog_handlers::calculator_handler),
    )
    // Search-Engine Endpoints
    .route(
      "/sitemap.xml",
      web::get().to(crate::web::handlers::seo_handlers::sitemap_handler),
    )
    .route(
      "/robots.txt",
      web::get().to(crate::web::handlers::seo_handlers::robots_handler),
    )
    // Catalog Ingest Route
    .route(
      "/upload-data",
      web::post().to(crate::web::handlers::upload_handlers::upload_data_handler),
    )
    // Order Routes
    .service(
      web::scope("/orders")
        .route("", web::post().to(crate::web::handlers::order_handlers::create_order_handler))
        .route(
          "/{order_uid}",
          web::get().to(crate::web::handlers::order_handlers::get_order_handler),
        )
        .route(
          "/{order_uid}/pay",
          web::post().to(crate::web::handlers::order_handlers::pay_order_handler),
        )
        .route(
          "/{order_uid}/cancel",
          web::post().to(crate::web::handlers::order_handlers::cancel_order_handler),
        ),
    );
}
