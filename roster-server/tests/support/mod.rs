use std::sync::Arc;

use anyhow::Result;
use axum_test::TestServer;

use roster_server::{AppState, infra::config::Config, routes::create_router};

/// Build a test server around a fresh, empty registry.
pub fn build_test_server() -> Result<TestServer> {
    let config = Arc::new(Config::default());
    let state = AppState::new(config);
    let router = create_router(state);

    TestServer::new(router).map_err(|err| anyhow::anyhow!(err.to_string()))
}
