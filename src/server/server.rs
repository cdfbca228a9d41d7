use anyhow::{Context, Result};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crate::catalog::{CatalogError, CatalogService};
use crate::catalog_store::CatalogStore;
use crate::user::{RegistrationError, UserManager, UserStore};
use tower_http::services::ServeDir;
use tracing::info;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::catalog_routes::{make_catalog_routes, make_rest_routes};
use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub movies: usize,
    pub actors: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct RegisterBody {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
struct RegisterSuccessResponse {
    user_id: usize,
}

async fn home(State(state): State<ServerState>) -> Result<Json<ServerStats>, CatalogError> {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        movies: state.catalog.movies_count()?,
        actors: state.catalog.actors_count()?,
    };
    Ok(Json(stats))
}

async fn register(
    State(user_manager): State<GuardedUserManager>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<RegisterSuccessResponse>), RegistrationError> {
    let user_id = user_manager.register(&body.username, &body.password)?;
    Ok((StatusCode::CREATED, Json(RegisterSuccessResponse { user_id })))
}

impl ServerState {
    fn new(
        config: ServerConfig,
        catalog_store: Arc<dyn CatalogStore>,
        user_store: Arc<dyn UserStore>,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog: Arc::new(CatalogService::new(catalog_store)),
            user_manager: Arc::new(UserManager::new(user_store)),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

pub fn make_app(
    config: ServerConfig,
    catalog_store: Arc<dyn CatalogStore>,
    user_store: Arc<dyn UserStore>,
) -> Result<Router> {
    let state = ServerState::new(config.clone(), catalog_store, user_store);

    let auth_routes: Router = Router::new()
        .route("/auth/register", post(register))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app: Router = home_router
        .nest("/rest", make_rest_routes(state.clone()))
        .nest("/v1", make_catalog_routes(state.clone()).merge(auth_routes))
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(
    catalog_store: Arc<dyn CatalogStore>,
    user_store: Arc<dyn UserStore>,
    config: ServerConfig,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog_store, user_store)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
