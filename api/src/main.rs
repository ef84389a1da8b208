use api::auth::middleware::log_request;
use api::routes::routes;
use axum::{Router, middleware::from_fn};
use common::{config::Config, state::AppState};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;

#[tokio::main]
async fn main() {
    let config = Config::init(".env");
    let _log_guard = init_logging(&config.log_file);

    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let app_state = AppState::new(db);

    let app = Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!(
        "Starting {} on http://{}:{}",
        config.project_name,
        config.host,
        config.port
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

fn init_logging(log_file: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::path::Path;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let (dir, file_name) = match (Path::new(log_file).parent(), Path::new(log_file).file_name()) {
        (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => (dir.to_owned(), name.to_owned()),
        _ => ("logs".into(), log_file.into()),
    };
    std::fs::create_dir_all(&dir).ok();

    let file_appender = rolling::daily(dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("api=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
