//! Per-request state machine: method → content type → body → parse/validate
//! → evaluate → envelope. Every branch ends in exactly one `Envelope`.
//!
//! The handler is a free function over an explicit `RequestContext`; it keeps
//! no state and can be called from any number of transport workers at once.

use std::io::{self, Read};
use std::time::{Duration, Instant};

use chrono::Local;
use nalgebra::Vector2;
use tracing::{debug, warn};

use crate::envelope::{Envelope, Status};
use crate::region::{is_hit, Region};
use crate::request::{parse_request, RequestError, RequestInput};
use crate::response::{ErrorResponse, HitResponse};

/// Media types accepted on POST, compared exactly.
pub const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["application/json", "application/json; charset=UTF-8"];

/// Static page served for GET.
pub const INFO_PAGE: &str = r#"<!doctype html>
<html lang="en"><head>
  <meta charset="utf-8"><title>areacheck</title>
</head><body>
  <h1>areacheck is running</h1>
  <p>Send a POST with <code>Content-Type: application/json</code> and a body like
  <code>{"x": -1, "y": 1, "r": 2}</code>.</p>
  <p>Accepted values: x in [-5, 3], y in [-3, 5], r in {1, 2, 3, 4, 5}.</p>
</body></html>
"#;

/// What the transport knows about one request, before the body is read.
/// Values are passed through as the gateway reported them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub method: Option<String>,
    pub content_type: Option<String>,
    pub content_length: Option<String>,
}

impl RequestContext {
    pub fn new(
        method: Option<String>,
        content_type: Option<String>,
        content_length: Option<String>,
    ) -> Self {
        Self {
            method,
            content_type,
            content_length,
        }
    }

    /// Declared body size; missing, unparseable or non-positive means zero.
    pub fn declared_length(&self) -> usize {
        self.content_length
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Unsupported HTTP method: {}", .0.as_deref().unwrap_or("null"))]
    UnsupportedMethod(Option<String>),
    #[error("Content-Type is null")]
    ContentTypeMissing,
    #[error("Content-Type is not supported")]
    ContentTypeUnsupported(String),
    #[error("Failed to read request body: {0}")]
    BodyRead(#[from] io::Error),
    #[error(transparent)]
    Request(#[from] RequestError),
}

enum Outcome {
    Page,
    Hit(HitResponse),
}

/// Handle one request. `body` is the transport's input stream; at most
/// `ctx.declared_length()` bytes are read from it.
pub fn handle<R: Read>(ctx: &RequestContext, body: R) -> Envelope {
    match dispatch(ctx, body) {
        Ok(Outcome::Page) => Envelope::html(INFO_PAGE.to_string()),
        Ok(Outcome::Hit(resp)) => match resp.to_json() {
            Ok(json) => Envelope::json(Status::Ok, json),
            Err(e) => error_envelope(&e.to_string()),
        },
        Err(e) => {
            warn!(method = ?ctx.method, error = %e, "request rejected");
            error_envelope(&e.to_string())
        }
    }
}

/// 400 envelope carrying `{"status":"error","message":...}`.
pub fn error_envelope(message: &str) -> Envelope {
    Envelope::json(Status::BadRequest, ErrorResponse::new(message).to_json())
}

fn dispatch<R: Read>(ctx: &RequestContext, body: R) -> Result<Outcome, HandlerError> {
    match ctx.method.as_deref() {
        Some("GET") => return Ok(Outcome::Page),
        Some("POST") => {}
        other => return Err(HandlerError::UnsupportedMethod(other.map(str::to_owned))),
    }
    check_content_type(ctx.content_type.as_deref())?;
    let text = read_body(body, ctx.declared_length())?;
    let input = parse_request(&text)?;
    Ok(Outcome::Hit(evaluate(input)))
}

fn check_content_type(content_type: Option<&str>) -> Result<(), HandlerError> {
    match content_type {
        None => Err(HandlerError::ContentTypeMissing),
        Some(ct) if ACCEPTED_CONTENT_TYPES.contains(&ct) => Ok(()),
        Some(ct) => Err(HandlerError::ContentTypeUnsupported(ct.to_string())),
    }
}

/// Read up to `len` bytes and decode them as UTF-8. A stream that ends early
/// yields what was read so far.
pub fn read_body<R: Read>(body: R, len: usize) -> io::Result<String> {
    if len == 0 {
        return Ok(String::new());
    }
    let mut buf = Vec::with_capacity(len.min(64 * 1024));
    body.take(len as u64).read_to_end(&mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Run the predicate on a validated input and build the success body.
///
/// Two separate clocks: the monotonic `Instant` brackets only the predicate;
/// the wall-clock timestamp is taken afterwards when the body is built.
pub fn evaluate(input: RequestInput) -> HitResponse {
    let (hit, elapsed) = timed_hit(input);
    if tracing::enabled!(tracing::Level::DEBUG) {
        let parts = Region::with_radius(input.r).classify(Vector2::new(input.x, input.y));
        debug!(
            x = input.x,
            y = input.y,
            r = input.r,
            hit,
            sector = parts.sector,
            rectangle = parts.rectangle,
            triangle = parts.triangle,
            elapsed_ns = elapsed.as_nanos() as u64,
            "evaluated"
        );
    }
    HitResponse::new(input, hit, Local::now().naive_local(), elapsed)
}

fn timed_hit(input: RequestInput) -> (bool, Duration) {
    let start = Instant::now();
    let hit = is_hit(input.x, input.y, input.r);
    (hit, start.elapsed())
}
