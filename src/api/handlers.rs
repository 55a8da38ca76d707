use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::bot::{self, Command};
use crate::error::{AppError, AppResult};
use crate::models::MovieRecord;
use crate::services;
use crate::services::recommend::{DEFAULT_GENRE_LIMIT, DEFAULT_POPULAR_LIMIT};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub title: String,
    pub year: String,
    pub rating: Option<f64>,
    pub genres: Vec<String>,
    pub media_type: String,
    pub plot: Option<String>,
}

impl From<&MovieRecord> for MovieResponse {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year.clone(),
            rating: movie.rating,
            genres: movie.genres.clone(),
            media_type: movie.media_type.clone(),
            plot: movie.plot.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub genre: Option<String>,
    pub rated_limit: Option<usize>,
    pub unrated_limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub rated: Vec<MovieResponse>,
    pub unrated: Vec<MovieResponse>,
}

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub limit: Option<usize>,
}

// Handlers

/// Keep-alive endpoint for uptime pingers
pub async fn keep_alive() -> &'static str {
    "I'm alive"
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Chat transport: one command string in, one rendered reply out.
///
/// Always 200: the bot layer absorbs every recoverable condition and the
/// unavailable state into reply text.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let command = Command::parse(&request.message);
    let reply = bot::respond(state.table(), command);
    Json(ChatResponse { reply })
}

/// Returns the genre vocabulary
pub async fn get_genres(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let table = state.table().ok_or(AppError::DatasetUnavailable)?;
    Ok(Json(table.genres().to_vec()))
}

/// Returns rated and unrated recommendations for a genre
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    let table = state.table().ok_or(AppError::DatasetUnavailable)?;
    let genre = query
        .genre
        .ok_or_else(|| AppError::InvalidInput("missing genre parameter".to_string()))?;

    let shelf = services::by_genre(
        table,
        &genre,
        query.rated_limit.unwrap_or(DEFAULT_GENRE_LIMIT),
        query.unrated_limit.unwrap_or(DEFAULT_GENRE_LIMIT),
    );
    Ok(Json(RecommendationsResponse {
        rated: shelf.rated.into_iter().map(MovieResponse::from).collect(),
        unrated: shelf.unrated.into_iter().map(MovieResponse::from).collect(),
    }))
}

/// Returns the highest-rated movies across the dataset
pub async fn get_popular(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    let table = state.table().ok_or(AppError::DatasetUnavailable)?;
    let movies = services::popular(table, query.limit.unwrap_or(DEFAULT_POPULAR_LIMIT))?;
    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Returns one uniformly random movie
pub async fn get_random(State(state): State<AppState>) -> AppResult<Json<MovieResponse>> {
    let table = state.table().ok_or(AppError::DatasetUnavailable)?;
    let mut rng = rand::thread_rng();
    let movie = services::random_pick(table, &mut rng)?;
    Ok(Json(MovieResponse::from(movie)))
}
