use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::users;
use crate::config::Config;
use crate::error::{Error, Result};

pub fn router() -> Router {
    Router::new().route("/users", get(users::list_users)).layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(CatchPanicLayer::new()),
    )
}

pub async fn start_server(config: Config) -> Result<()> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| Error::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(addr = %config.addr, "server listening");

    axum::serve(listener, router()).await.map_err(Error::Serve)
}
