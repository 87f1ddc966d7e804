use axum::body::Body;
use axum::extract::{Path, RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use marquee_core::{Filters, Movie, Runtime, Validator, validate_filters, validate_movie};

use crate::errors::{AppError, AppResult};
use crate::params::{parse_query, read_csv, read_int, read_string};
use crate::request::read_json;
use crate::state::AppState;

/// Raw sort values this endpoint accepts, bound to the movies schema.
const SORT_SAFELIST: &[&str] = &[
    "id", "title", "year", "runtime", "-id", "-title", "-year", "-runtime",
];

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CreateMovieInput {
    title: String,
    year: i32,
    runtime: Runtime,
    genres: Vec<String>,
}

/// Partial-update payload: absent fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct UpdateMovieInput {
    title: Option<String>,
    year: Option<i32>,
    runtime: Option<Runtime>,
    genres: Option<Vec<String>>,
}

/// Parse the `{id}` path segment; anything but a positive integer is
/// indistinguishable from a missing resource.
fn parse_id_param(raw: &str) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::NotFound),
    }
}

pub async fn create_movie_handler(
    State(state): State<AppState>,
    body: Body,
) -> AppResult<Response> {
    let input: CreateMovieInput = read_json(body).await?;

    let mut movie = Movie {
        id: 0,
        title: input.title,
        year: input.year,
        runtime: input.runtime,
        genres: input.genres,
        version: 0,
    };

    let mut v = Validator::new();
    validate_movie(&mut v, &movie);
    if !v.is_valid() {
        return Err(AppError::FailedValidation(v.into_errors()));
    }

    state.store.insert(&mut movie).await?;

    let location = format!("/v1/movies/{}", movie.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(json!({ "movie": movie })),
    )
        .into_response())
}

pub async fn show_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id_param(&id)?;
    let movie = state.store.get(id).await?;

    Ok(Json(json!({ "movie": movie })))
}

pub async fn update_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Body,
) -> AppResult<Json<Value>> {
    let id = parse_id_param(&id)?;
    let mut movie = state.store.get(id).await?;

    let input: UpdateMovieInput = read_json(body).await?;

    if let Some(title) = input.title {
        movie.title = title;
    }
    if let Some(year) = input.year {
        movie.year = year;
    }
    if let Some(runtime) = input.runtime {
        movie.runtime = runtime;
    }
    if let Some(genres) = input.genres {
        movie.genres = genres;
    }

    let mut v = Validator::new();
    validate_movie(&mut v, &movie);
    if !v.is_valid() {
        return Err(AppError::FailedValidation(v.into_errors()));
    }

    state.store.update(&mut movie).await?;

    Ok(Json(json!({ "movie": movie })))
}

pub async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id_param(&id)?;
    state.store.delete(id).await?;

    Ok(Json(json!({ "message": "item deleted successfully" })))
}

pub async fn list_movies_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Json<Value>> {
    let params = parse_query(query.as_deref());
    let mut v = Validator::new();

    let title = read_string(&params, "title", "");
    let genres = read_csv(&params, "genres", Vec::new());

    let filters = Filters {
        page: read_int(&params, "page", 1, &mut v),
        page_size: read_int(&params, "page_size", 20, &mut v),
        sort: read_string(&params, "sort", "id"),
        sort_safelist: SORT_SAFELIST,
    };

    validate_filters(&mut v, &filters);
    if !v.is_valid() {
        return Err(AppError::FailedValidation(v.into_errors()));
    }

    let movies = state.store.get_all(&title, &genres, &filters).await?;

    Ok(Json(json!({ "movies": movies })))
}
