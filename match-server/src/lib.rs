use std::sync::Arc;
use uuid::Uuid;
use warp::Filter;

use crate::auth::AuthService;
use crate::config::Config;
use match_core::WordSource;
use match_persistence::repositories::MatchRepository;
use match_types::{CreateMatchResponse, SafeMatch, SubmitGuessRequest, SubmitGuessResponse};

pub mod auth;
pub mod config;
pub mod evaluator;

pub fn create_routes(
    repository: Arc<MatchRepository>,
    auth_service: Arc<AuthService>,
    word_source: Arc<WordSource>,
    config: Config,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let repository_filter = warp::any().map({
        let repository = repository.clone();
        move || repository.clone()
    });

    let auth_filter = warp::any().map({
        let auth_service = auth_service.clone();
        move || auth_service.clone()
    });

    let word_source_filter = warp::any().map({
        let word_source = word_source.clone();
        move || word_source.clone()
    });

    let config_filter = warp::any().map({
        let config = config.clone();
        move || config.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    // Match creation endpoint
    let create_match = warp::path!("matches")
        .and(warp::post())
        .and(warp::header::optional::<String>("authorization"))
        .and(repository_filter.clone())
        .and(auth_filter.clone())
        .and(word_source_filter.clone())
        .and(config_filter.clone())
        .and_then(handle_create_match);

    // Guess submission endpoint
    let submit_guess = warp::path!("matches" / String / "guesses")
        .and(warp::post())
        .and(warp::header::optional::<String>("authorization"))
        .and(warp::body::json())
        .and(repository_filter.clone())
        .and(auth_filter.clone())
        .and_then(handle_submit_guess);

    // Match state endpoint - exposes the word length, never the word
    let get_match = warp::path!("matches" / String)
        .and(warp::get())
        .and(repository_filter.clone())
        .and_then(handle_get_match);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type", "authorization"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(create_match)
        .or(submit_guess)
        .or(get_match)
        .with(cors)
        .with(warp::log("word_rush"))
}

async fn handle_create_match(
    auth_header: Option<String>,
    repository: Arc<MatchRepository>,
    auth_service: Arc<AuthService>,
    word_source: Arc<WordSource>,
    config: Config,
) -> Result<impl warp::Reply, warp::Rejection> {
    // Match creation requires a logged-in player
    let auth_header = match auth_header {
        Some(auth_header) => auth_header,
        None => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "User must be logged in"
                })),
                warp::http::StatusCode::UNAUTHORIZED,
            ));
        }
    };

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(&auth_header);
    let host_id = match auth_service.validate_token(token).await {
        Ok(player_id) => player_id,
        Err(_) => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Invalid authentication token"
                })),
                warp::http::StatusCode::UNAUTHORIZED,
            ));
        }
    };

    let current_word = match word_source.pick() {
        Ok(word) => word,
        Err(err) => {
            tracing::error!("Failed to pick a word for new match: {}", err);
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Failed to create match"
                })),
                warp::http::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
    };

    match repository
        .create_match(host_id, current_word, config.match_time_limit_seconds)
        .await
    {
        Ok(created) => Ok(warp::reply::with_status(
            warp::reply::json(&CreateMatchResponse {
                match_id: created.id,
            }),
            warp::http::StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to create match: {}", err);
            Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Failed to create match"
                })),
                warp::http::StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn handle_submit_guess(
    match_id: String,
    auth_header: Option<String>,
    request: SubmitGuessRequest,
    repository: Arc<MatchRepository>,
    auth_service: Arc<AuthService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // Parse match ID as UUID
    let match_uuid = match Uuid::parse_str(&match_id) {
        Ok(uuid) => uuid,
        Err(_) => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Invalid match ID format"
                })),
                warp::http::StatusCode::BAD_REQUEST,
            ));
        }
    };

    let auth_header = match auth_header {
        Some(auth_header) => auth_header,
        None => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "User must be logged in"
                })),
                warp::http::StatusCode::UNAUTHORIZED,
            ));
        }
    };

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(&auth_header);
    let player_id = match auth_service.validate_token(token).await {
        Ok(player_id) => player_id,
        Err(_) => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Invalid authentication token"
                })),
                warp::http::StatusCode::UNAUTHORIZED,
            ));
        }
    };

    // The guess is stored exactly as submitted; normalization happens
    // when the evaluator picks up the append event
    match repository
        .append_guess(match_uuid, player_id, request.guess)
        .await
    {
        Ok(guess) => Ok(warp::reply::with_status(
            warp::reply::json(&SubmitGuessResponse { guess_id: guess.id }),
            warp::http::StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to submit guess: {}", err);
            Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Failed to submit guess"
                })),
                warp::http::StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn handle_get_match(
    match_id: String,
    repository: Arc<MatchRepository>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // Parse match ID as UUID
    let match_uuid = match Uuid::parse_str(&match_id) {
        Ok(uuid) => uuid,
        Err(_) => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Invalid match ID format"
                })),
                warp::http::StatusCode::BAD_REQUEST,
            ));
        }
    };

    match repository.find_match(match_uuid).await {
        Ok(Some(game_match)) => Ok(warp::reply::with_status(
            warp::reply::json(&SafeMatch::from(&game_match)),
            warp::http::StatusCode::OK,
        )),
        Ok(None) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": "Match not found"
            })),
            warp::http::StatusCode::NOT_FOUND,
        )),
        Err(err) => {
            tracing::error!("Failed to fetch match {}: {}", match_uuid, err);
            Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Failed to fetch match"
                })),
                warp::http::StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
