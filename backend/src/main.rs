//! Backend entry-point: loads configuration, migrates the database, and
//! serves the REST API with its OpenAPI docs.

use std::process::ExitCode;
use std::sync::Arc;

use mockable::DefaultClock;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookshelf::inbound::http::validation::RequestValidator;
use bookshelf::outbound::persistence::{DbPool, run_pending_migrations};
use bookshelf::outbound::security::{BcryptPasswordHasher, JwtTokenService};
use bookshelf::server::config::{ENV, PRODUCTION};
use bookshelf::server::{
    AppConfig, ConfigEnv, ProcessEnv, SecurityAdapters, build_diesel_http_state, create_server,
};

/// Load `.env` unless the process already declares a production deployment.
fn load_dotenv() {
    if ProcessEnv.string(ENV).as_deref() == Some(PRODUCTION) {
        return;
    }
    if let Err(err) = dotenv::dotenv() {
        warn!(error = %err, ".env file not loaded");
    }
}

async fn run() -> Result<(), String> {
    let config = AppConfig::from_env(&ProcessEnv).map_err(|err| err.to_string())?;
    let database_url = config
        .database
        .database_url()
        .map_err(|err| err.to_string())?;

    run_pending_migrations(&database_url)
        .await
        .map_err(|err| err.to_string())?;

    let pool_config = config
        .database
        .pool_config()
        .map_err(|err| err.to_string())?;
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| err.to_string())?;

    let clock = Arc::new(DefaultClock);
    let security = SecurityAdapters {
        hasher: Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost)),
        tokens: Arc::new(JwtTokenService::new(
            config.jwt_secret.as_bytes(),
            clock.clone(),
        )),
        clock,
    };
    let validator = RequestValidator::new().map_err(|err| err.to_string())?;
    let http_state = build_diesel_http_state(&pool, &security, Arc::new(validator));

    let bind_addr = config.bind_addr();
    let server = create_server(http_state, Arc::clone(&security.tokens), bind_addr)
        .map_err(|err| format!("failed to bind {bind_addr}: {err}"))?;
    info!(%bind_addr, environment = %config.environment, "server listening");
    server.await.map_err(|err| err.to_string())
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    load_dotenv();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!(error = %message, "server terminated");
            ExitCode::FAILURE
        }
    }
}
