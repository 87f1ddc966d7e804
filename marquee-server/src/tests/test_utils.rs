use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use mockall::mock;
use serde_json::Value;
use tower::ServiceExt;

use marquee_core::{Filters, Movie, MovieStore, Result, Runtime};

use crate::config::Config;
use crate::routes::create_router;
use crate::state::AppState;

mock! {
    pub Store {}

    #[async_trait]
    impl MovieStore for Store {
        async fn insert(&self, movie: &mut Movie) -> Result<()>;
        async fn get(&self, id: i64) -> Result<Movie>;
        async fn update(&self, movie: &mut Movie) -> Result<()>;
        async fn delete(&self, id: i64) -> Result<()>;
        async fn get_all(
            &self,
            title: &str,
            genres: &[String],
            filters: &Filters,
        ) -> Result<Vec<Movie>>;
    }
}

pub fn test_config() -> Config {
    Config {
        port: 8000,
        env: "test".to_string(),
        db_dsn: "postgres://localhost/marquee_test".to_string(),
        db_max_conns: 5,
        db_max_idle_time: Duration::from_secs(60),
    }
}

/// Build the real router over a mocked store.
pub fn test_app(store: MockStore) -> Router {
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(test_config()),
    };
    create_router(state)
}

pub fn sample_movie() -> Movie {
    Movie {
        id: 1,
        title: "Casablanca".to_string(),
        year: 1942,
        runtime: Runtime::new(102),
        genres: vec!["drama".to_string(), "romance".to_string()],
        version: 1,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Drive a single request through the router and decode the JSON body.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
