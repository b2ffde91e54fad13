pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod models;
pub mod repo;
pub mod routes;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, Error, web};
use config::Config;
use docs::ApiDoc;
use sqlx::SqlitePool;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

/// Registers the pool and every route.
pub fn configure_app(pool: SqlitePool, config: Config) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(pool));
        routes::configure(cfg, &config);
    }
}

/// The full application: middleware, Swagger UI and routes. The server and
/// the tests build it the same way.
pub fn build_app(
    pool: SqlitePool,
    config: Config,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(NormalizePath::trim())
        .wrap(Cors::permissive())
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so JS/CSS assets resolve
                .url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .configure(configure_app(pool, config))
}
