mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod services;
mod telemetry;

use config::AppConfig;
use container::Container;
use infrastructure::databases::surrealdb;
use services::jsonwebtoken::KeyPair;

use actix_web::HttpServer;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    JsonWebToken(#[from] jsonwebtoken::errors::Error),
    #[error("cannot read key {1}: {0}")]
    ReadKey(String, String),
}

async fn serve(config: &AppConfig) -> Result<(), AppError> {
    let conn = surrealdb::connect(&config.surrealdb).await?;

    if config.surrealdb.migration {
        surrealdb::migrate(&conn).await.map_err(AppError::Migration)?;
    }

    let private_key = read_key(&config.jsonwebtoken.private_keyfile)?;
    let public_key = read_key(&config.jsonwebtoken.public_keyfile)?;

    let keys = KeyPair::from_rsa_pem(&private_key, &public_key)?;

    let container = Arc::new(Container::new(conn, keys, config));

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting {}",
        config.service.name
    );

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    Ok(())
}

/// Flushes telemetry whatever the server outcome was, then maps the outcome
/// to the process exit code.
fn finish(served: Result<(), AppError>, provider: Option<SdkTracerProvider>) -> ExitCode {
    if let Err(err) = &served {
        tracing::error!(error = %err, "server stopped");
    }

    if let Err(err) = telemetry::shutdown(provider) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[actix_web::main]
async fn main() -> ExitCode {
    // Nothing is logged through tracing until telemetry is configured.
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let provider = match telemetry::configure(&config.service, &config.logging) {
        Ok(provider) => provider,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let served = serve(&config).await;

    finish(served, provider)
}

fn read_key(keyfile: &str) -> Result<Vec<u8>, AppError> {
    fs::read(keyfile).map_err(|err| AppError::ReadKey(err.to_string(), keyfile.to_string()))
}

#[cfg(test)]
mod exit {
    use super::*;

    #[test]
    fn test_success_exits_cleanly() {
        assert_eq!(finish(Ok(()), None), ExitCode::SUCCESS);
    }

    #[test]
    fn test_server_error_still_fails_after_shutdown() {
        let served = Err(AppError::Migration("schema rejected".to_string()));

        assert_eq!(finish(served, None), ExitCode::FAILURE);
    }
}
