use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::{env, fs};

/// Process configuration, loaded once at startup and read-only afterwards.
///
/// The signing secret and database path are required; their absence is a
/// fatal startup condition rather than a per-request error.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub project_name: String,
    pub env: String,
    pub log_level: String,
    pub log_file: String,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_days: i64,
    pub user_storage_root: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(|| {
            let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "studyhub-api".into());
            let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/api.log".into());
            let database_path = env::var("DATABASE_PATH").expect("DATABASE_PATH must be set");
            let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000);

            if let Some(parent) = std::path::Path::new(&log_file).parent() {
                fs::create_dir_all(parent).expect("Failed to create log directory");
            }

            let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
            let jwt_duration_days = env::var("JWT_DURATION_DAYS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(30);
            let user_storage_root =
                env::var("USER_STORAGE_ROOT").unwrap_or_else(|_| "data/users".into());

            Config {
                project_name,
                env: app_env,
                log_level,
                log_file,
                database_path,
                host,
                port,
                jwt_secret,
                jwt_duration_days,
                user_storage_root,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }

    /// Same as [`Config::get`] but initializes from the default `.env`
    /// location first. Used by tests that never go through `main`.
    pub fn get_or_load() -> &'static Self {
        if CONFIG.get().is_none() {
            Self::init(".env");
        }
        Config::get()
    }
}
