//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all catalog-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    async fn send_json(&self, method: reqwest::Method, path: &str, body: Value) -> Response {
        self.client
            .request(method, self.url(path))
            .json(&body)
            .send()
            .await
            .expect("JSON request failed")
    }

    async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE request failed")
    }

    // ========================================================================
    // Server
    // ========================================================================

    /// GET /
    pub async fn get_stats(&self) -> Response {
        self.get("/").await
    }

    // ========================================================================
    // Authentication Endpoints
    // ========================================================================

    /// POST /v1/auth/register
    pub async fn register(&self, username: &str, password: &str) -> Response {
        self.send_json(
            reqwest::Method::POST,
            "/v1/auth/register",
            json!({ "username": username, "password": password }),
        )
        .await
    }

    // ========================================================================
    // Read-only JSON surface
    // ========================================================================

    /// GET /rest/movies
    pub async fn rest_list_movies(&self) -> Response {
        self.get("/rest/movies").await
    }

    /// GET /rest/movie/{id}
    pub async fn rest_get_movie(&self, id: impl std::fmt::Display) -> Response {
        self.get(&format!("/rest/movie/{}", id)).await
    }

    // ========================================================================
    // Movie Endpoints
    // ========================================================================

    /// GET /v1/movies with the given query string (without the leading '?')
    pub async fn search_movies(&self, query: &str) -> Response {
        if query.is_empty() {
            self.get("/v1/movies").await
        } else {
            self.get(&format!("/v1/movies?{}", query)).await
        }
    }

    /// GET /v1/movies/{id}
    pub async fn get_movie(&self, id: i64) -> Response {
        self.get(&format!("/v1/movies/{}", id)).await
    }

    /// PUT /v1/movies/{id}
    pub async fn update_movie(&self, id: i64, fields: Value) -> Response {
        self.send_json(reqwest::Method::PUT, &format!("/v1/movies/{}", id), fields)
            .await
    }

    /// DELETE /v1/movies/{id}
    pub async fn delete_movie(&self, id: i64) -> Response {
        self.delete(&format!("/v1/movies/{}", id)).await
    }

    /// POST /v1/movies/new
    pub async fn begin_create_movie(&self, cast_ref: &str) -> Response {
        self.send_json(
            reqwest::Method::POST,
            "/v1/movies/new",
            json!({ "cast_ref": cast_ref }),
        )
        .await
    }

    /// POST /v1/movies/confirm
    pub async fn confirm_create_movie(&self, draft: Value) -> Response {
        self.send_json(reqwest::Method::POST, "/v1/movies/confirm", draft)
            .await
    }

    /// POST /v1/movies/{id}/cast
    pub async fn attach_cast(&self, id: i64, cast_ref: &str) -> Response {
        self.send_json(
            reqwest::Method::POST,
            &format!("/v1/movies/{}/cast", id),
            json!({ "cast_ref": cast_ref }),
        )
        .await
    }

    // ========================================================================
    // Actor Endpoints
    // ========================================================================

    /// GET /v1/actors
    pub async fn list_actors(&self) -> Response {
        self.get("/v1/actors").await
    }

    /// POST /v1/actors
    pub async fn create_actor(&self, name: &str) -> Response {
        self.send_json(reqwest::Method::POST, "/v1/actors", json!({ "name": name }))
            .await
    }

    /// GET /v1/actors/{id}
    pub async fn get_actor(&self, id: i64) -> Response {
        self.get(&format!("/v1/actors/{}", id)).await
    }

    /// PUT /v1/actors/{id}
    pub async fn update_actor(&self, id: i64, name: &str) -> Response {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/v1/actors/{}", id),
            json!({ "name": name }),
        )
        .await
    }

    /// DELETE /v1/actors/{id}
    pub async fn delete_actor(&self, id: i64) -> Response {
        self.delete(&format!("/v1/actors/{}", id)).await
    }
}

/// Extracts the `name` field of every movie in a JSON array.
pub fn movie_names(movies: &Value) -> Vec<String> {
    movies
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}
