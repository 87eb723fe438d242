//! Point-in-area checks behind a JSON request/response contract.
//!
//! Layout
//! - `region`: the composite planar area (sector, rectangle, triangle) and the
//!   `is_hit` predicate.
//! - `request`: strict JSON parse and domain validation of `{x, y, r}`.
//! - `response`: success and error bodies.
//! - `envelope`: status line, headers and body as one text blob.
//! - `handler`: the per-request state machine tying the above together.
//!
//! Nothing here reads process state or keeps state between requests; the
//! transport hands every input over explicitly in a `RequestContext`.

pub mod envelope;
pub mod handler;
pub mod region;
pub mod request;
pub mod response;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for transports and tests.
pub mod prelude {
    pub use crate::envelope::{ContentType, Envelope, Status};
    pub use crate::handler::{handle, HandlerError, RequestContext};
    pub use crate::region::{is_hit, Region, Regions};
    pub use crate::request::{parse_request, RequestError, RequestInput};
    pub use crate::response::{ErrorResponse, HitResponse};
    pub use nalgebra::Vector2 as Vec2;
}
