//! HTTP adapter: every method on every path goes through the same handler.

use std::io::Cursor;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use areacheck::envelope::Envelope;
use areacheck::handler::{handle, RequestContext};
use axum::body::Bytes;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::signal;
use tracing::info;

pub fn router() -> Router {
    Router::new().fallback(gateway)
}

pub fn run(host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        info!(%addr, "listening");
        axum::serve(listener, router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("serving")
    })
}

async fn gateway(method: Method, headers: HeaderMap, body: Bytes) -> Response {
    let ctx = context_from_headers(&method, &headers, body.len());
    into_response(handle(&ctx, Cursor::new(body)))
}

/// Header values that are not visible ASCII are treated as absent. A missing
/// Content-Length falls back to the received body size.
fn context_from_headers(method: &Method, headers: &HeaderMap, received: usize) -> RequestContext {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    RequestContext::new(
        Some(method.as_str().to_owned()),
        header_str(header::CONTENT_TYPE),
        header_str(header::CONTENT_LENGTH).or_else(|| Some(received.to_string())),
    )
}

fn into_response(envelope: Envelope) -> Response {
    let status = StatusCode::from_u16(envelope.status.code()).unwrap_or(StatusCode::BAD_REQUEST);
    (
        status,
        [(header::CONTENT_TYPE, envelope.content_type.as_str())],
        envelope.body,
    )
        .into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn send(req: Request<Body>) -> (StatusCode, HeaderMap, String) {
        let resp = router().oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn post_hit() {
        let req = Request::post("/fcgi-bin/check")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"x":-1,"y":1,"r":2}"#))
            .unwrap();
        let (status, headers, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json; charset=UTF-8");
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["hit"], true);
    }

    #[tokio::test]
    async fn get_serves_page() {
        let req = Request::get("/").body(Body::empty()).unwrap();
        let (status, headers, body) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=UTF-8");
        assert_eq!(body, areacheck::handler::INFO_PAGE);
    }

    #[tokio::test]
    async fn wrong_content_type_is_bad_request() {
        let req = Request::post("/")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("{}"))
            .unwrap();
        let (status, _, body) = send(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Content-Type is not supported"));
    }

    #[tokio::test]
    async fn put_is_rejected() {
        let req = Request::put("/").body(Body::empty()).unwrap();
        let (status, _, body) = send(req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Unsupported HTTP method: PUT"));
    }

    #[test]
    fn missing_content_length_uses_received_size() {
        let ctx = context_from_headers(&Method::POST, &HeaderMap::new(), 12);
        assert_eq!(ctx.declared_length(), 12);
        assert_eq!(ctx.content_type, None);
    }
}
