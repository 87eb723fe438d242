//! JSON bodies: `HitResponse` on success, `ErrorResponse` on any failure.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::request::RequestInput;

/// Success body. `time` is local civil time without offset; `timing` is the
/// predicate's elapsed time in nanoseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitResponse {
    pub x: f64,
    pub y: f64,
    pub r: i32,
    pub hit: bool,
    pub time: NaiveDateTime,
    pub timing: u64,
}

impl HitResponse {
    pub fn new(input: RequestInput, hit: bool, time: NaiveDateTime, elapsed: Duration) -> Self {
        Self {
            x: input.x,
            y: input.y,
            r: input.r,
            hit,
            time,
            // u64 nanoseconds cover ~584 years.
            timing: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    pub fn input(&self) -> RequestInput {
        RequestInput {
            x: self.x,
            y: self.y,
            r: self.r,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Error body: `{"status":"error","message":...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }

    /// Compact JSON. Falls back to a hand-built body only if serialization of
    /// two plain strings somehow fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"status":"error","message":"Unknown error"}"#.to_string()
        })
    }
}
