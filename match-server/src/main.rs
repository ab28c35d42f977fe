use std::sync::Arc;
use tokio::signal;
use tracing::info;

use match_core::WordSource;
use match_persistence::{connection::connect_and_migrate, repositories::MatchRepository};
use match_server::{auth::AuthService, config::Config, create_routes, evaluator::GuessEvaluator};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Word Rush server...");

    let config = Config::new();

    // Pick the word source: a word list file when configured, the fixed
    // placeholder word otherwise
    let word_source = match &config.word_list_path {
        Some(path) => match WordSource::from_file(path) {
            Ok(source) => {
                info!("Loaded {} words from '{}'", source.word_count(), path);
                Arc::new(source)
            }
            Err(e) => {
                tracing::error!("Failed to load word list from '{}': {}", path, e);
                tracing::error!(
                    "Unset WORD_LIST_PATH to fall back to the fixed placeholder word."
                );
                std::process::exit(1);
            }
        },
        None => {
            info!(
                "Using fixed word '{}' for new matches",
                config.placeholder_word
            );
            Arc::new(WordSource::fixed(&config.placeholder_word))
        }
    };

    // Initialize database connection and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };
    let repository = Arc::new(MatchRepository::new(db));

    match repository.count_matches().await {
        Ok(count) => info!("Database ready, {} matches on record", count),
        Err(e) => tracing::warn!("Failed to count existing matches: {}", e),
    }

    // Check for dev mode
    let auth_service =
        if std::env::var("AUTH_DEV_MODE").unwrap_or_else(|_| "false".to_string()) == "true" {
            info!("Starting in development authentication mode - token signatures are not verified");
            Arc::new(AuthService::new_dev_mode())
        } else {
            let secret = match std::env::var("AUTH_SECRET") {
                Ok(secret) => secret,
                Err(_) => {
                    tracing::error!("AUTH_SECRET must be set unless AUTH_DEV_MODE=true");
                    std::process::exit(1);
                }
            };
            Arc::new(AuthService::new(&secret))
        };

    // Start the guess evaluator before the server accepts requests
    let guess_events = repository.subscribe_guesses();
    tokio::spawn(GuessEvaluator::new(repository.clone()).run(guess_events));

    let routes = create_routes(
        repository.clone(),
        auth_service,
        word_source,
        config.clone(),
    );

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().unwrap(),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
