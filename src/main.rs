use actix_web::HttpServer;
use anyhow::Context;
use hrms_lite::build_app;
use hrms_lite::config::Config;
use hrms_lite::db::init_db;
use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(addr = %config.server_addr, db_path = %config.db_path, "Server starting...");

    let pool = init_db(&config.db_path, config.db_max_connections)
        .await
        .with_context(|| format!("failed to open database at {}", config.db_path))?;

    let server_addr = config.server_addr.clone();

    HttpServer::new(move || build_app(pool.clone(), config.clone()))
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {server_addr}"))?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
