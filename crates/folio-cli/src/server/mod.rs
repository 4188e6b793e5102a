//! HTTP surface: the JSON endpoints under `/folio/v1` and the rendered
//! documentation pages.
//!
//! `tiny_http` is blocking, so each `recv_timeout` runs on the blocking
//! pool while requests themselves are routed on the async side, one at a
//! time.

mod pages;
mod router;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::context::AppContext;

use router::route;

/// How long one blocking receive may wait before the shutdown signal is
/// checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Serve on `bind` until Ctrl-C.
pub async fn serve(ctx: &AppContext, bind: &str) -> anyhow::Result<()> {
    let server = tiny_http::Server::http(bind)
        .map_err(|error| anyhow::anyhow!("failed to bind {bind}: {error}"))?;
    let server = Arc::new(server);
    tracing::info!(%bind, "folio server listening");
    eprintln!("Serving documentation on http://{bind}/docs");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let listener = Arc::clone(&server);
        let next = tokio::task::spawn_blocking(move || listener.recv_timeout(POLL_INTERVAL));
        let received = tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("folio server shutting down");
                return Ok(());
            }
            joined = next => joined.context("listener task failed")?,
        };

        match received {
            Ok(Some(request)) => respond(request, ctx).await,
            Ok(None) => {}
            Err(error) => tracing::warn!(%error, "failed to receive request"),
        }
    }
}

async fn respond(request: tiny_http::Request, ctx: &AppContext) {
    let method = request.method().clone();
    let url = request.url().to_string();
    let reply = route(&method, &url, ctx).await;
    tracing::debug!(%method, %url, status = reply.status, "request handled");

    let mut response = tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(header) = tiny_http::Header::from_bytes("Content-Type", reply.content_type) {
        response = response.with_header(header);
    }
    if let Err(error) = request.respond(response) {
        tracing::warn!(%error, %url, "failed to send response");
    }
}
