//! Catalog API routes: movie search, the two-phase movie workflows and actor
//! management.

use crate::catalog::{CatalogError, PendingMovie, SearchRequest};
use crate::catalog_store::{Actor, ActorId, ActorWithFilmography, Movie, MovieFields, MovieId, ResolvedMovie};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::state::{GuardedCatalogService, ServerState};

#[derive(Deserialize, Debug)]
struct CastRefBody {
    pub cast_ref: String,
}

#[derive(Deserialize, Debug)]
struct ActorBody {
    pub name: String,
}

type CatalogResponse<T> = Result<Json<T>, CatalogError>;

async fn search_movies(
    State(catalog): State<GuardedCatalogService>,
    Query(request): Query<SearchRequest>,
) -> CatalogResponse<Vec<Movie>> {
    Ok(Json(catalog.search(&request)?))
}

async fn get_movie(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<MovieId>,
) -> CatalogResponse<ResolvedMovie> {
    Ok(Json(catalog.find_resolved_movie(id)?))
}

async fn begin_create_movie(
    State(catalog): State<GuardedCatalogService>,
    Json(body): Json<CastRefBody>,
) -> Json<PendingMovie> {
    Json(catalog.begin_create(body.cast_ref))
}

async fn confirm_create_movie(
    State(catalog): State<GuardedCatalogService>,
    Json(draft): Json<PendingMovie>,
) -> Result<(StatusCode, Json<Movie>), CatalogError> {
    let movie = catalog.confirm_create(draft)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<MovieId>,
    Json(fields): Json<MovieFields>,
) -> CatalogResponse<Movie> {
    Ok(Json(catalog.update_core(id, fields)?))
}

async fn attach_movie_cast(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<MovieId>,
    Json(body): Json<CastRefBody>,
) -> CatalogResponse<Movie> {
    Ok(Json(catalog.attach_cast_then_confirm(id, &body.cast_ref)?))
}

async fn delete_movie(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<MovieId>,
) -> Result<StatusCode, CatalogError> {
    catalog.delete_movie(id)?;
    Ok(StatusCode::OK)
}

async fn list_actors(State(catalog): State<GuardedCatalogService>) -> CatalogResponse<Vec<Actor>> {
    Ok(Json(catalog.list_actors()?))
}

async fn create_actor(
    State(catalog): State<GuardedCatalogService>,
    Json(body): Json<ActorBody>,
) -> Result<(StatusCode, Json<Actor>), CatalogError> {
    let actor = catalog.create_actor(&body.name)?;
    Ok((StatusCode::CREATED, Json(actor)))
}

async fn get_actor(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<ActorId>,
) -> CatalogResponse<ActorWithFilmography> {
    Ok(Json(catalog.find_actor_with_filmography(id)?))
}

async fn update_actor(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<ActorId>,
    Json(body): Json<ActorBody>,
) -> CatalogResponse<Actor> {
    Ok(Json(catalog.update_actor(Actor {
        id,
        name: body.name,
    })?))
}

async fn delete_actor(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<ActorId>,
) -> Result<StatusCode, CatalogError> {
    catalog.delete_actor(id)?;
    Ok(StatusCode::OK)
}

pub fn make_catalog_routes(state: ServerState) -> Router {
    Router::new()
        .route("/movies", get(search_movies))
        .route("/movies/new", post(begin_create_movie))
        .route("/movies/confirm", post(confirm_create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route("/movies/{id}/cast", post(attach_movie_cast))
        .route("/actors", get(list_actors).post(create_actor))
        .route(
            "/actors/{id}",
            get(get_actor).put(update_actor).delete(delete_actor),
        )
        .with_state(state)
}

// =============================================================================
// Read-only JSON surface
// =============================================================================

async fn rest_list_movies(
    State(catalog): State<GuardedCatalogService>,
) -> CatalogResponse<Vec<Movie>> {
    Ok(Json(catalog.list_movies()?))
}

async fn rest_get_movie(
    State(catalog): State<GuardedCatalogService>,
    Path(id): Path<MovieId>,
) -> CatalogResponse<Movie> {
    Ok(Json(catalog.find_movie(id)?))
}

pub fn make_rest_routes(state: ServerState) -> Router {
    Router::new()
        .route("/movies", get(rest_list_movies))
        .route("/movie/{id}", get(rest_get_movie))
        .with_state(state)
}
