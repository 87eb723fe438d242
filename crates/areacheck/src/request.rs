//! Strict parse and validation of `{"x": number, "y": number, "r": integer}`.
//!
//! Checks run in a fixed order and the first failure wins: blank body, JSON
//! syntax (including field types), field presence, x range, y range, r
//! domain. The result is a `RequestInput` whose invariants hold, or a
//! `RequestError` whose `Display` text is part of the wire contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed range accepted for `x`.
pub const X_RANGE: (f64, f64) = (-5.0, 3.0);
/// Closed range accepted for `y`.
pub const Y_RANGE: (f64, f64) = (-3.0, 5.0);
/// Accepted radii.
pub const R_VALUES: [i32; 5] = [1, 2, 3, 4, 5];

/// Validated request: x ∈ [-5, 3], y ∈ [-3, 5], r ∈ {1..5}.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestInput {
    pub x: f64,
    pub y: f64,
    pub r: i32,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Blank string")]
    Blank,
    #[error("{0}")]
    Syntax(String),
    #[error("Not all required fields found: x, y, r")]
    MissingFields,
    #[error("X is out of range [-5;3]")]
    XOutOfRange(f64),
    #[error("Y is out of range [-3;5]")]
    YOutOfRange(f64),
    #[error("R must be one of {{1,2,3,4,5}}")]
    ROutOfDomain(i64),
}

impl RequestInput {
    /// Range-check already typed values (x, y, then r).
    pub fn new(x: f64, y: f64, r: i64) -> Result<Self, RequestError> {
        if !(X_RANGE.0..=X_RANGE.1).contains(&x) {
            return Err(RequestError::XOutOfRange(x));
        }
        if !(Y_RANGE.0..=Y_RANGE.1).contains(&y) {
            return Err(RequestError::YOutOfRange(y));
        }
        let r = i32::try_from(r)
            .ok()
            .filter(|r| R_VALUES.contains(r))
            .ok_or(RequestError::ROutOfDomain(r))?;
        Ok(Self { x, y, r })
    }
}

/// Parse a request body into a validated `RequestInput`.
pub fn parse_request(body: &str) -> Result<RequestInput, RequestError> {
    if body.trim().is_empty() {
        return Err(RequestError::Blank);
    }
    let doc: Value =
        serde_json::from_str(body).map_err(|e| RequestError::Syntax(e.to_string()))?;
    let fields = match doc {
        Value::Object(map) => map,
        // A literal `null` document carries no fields at all.
        Value::Null => return Err(RequestError::MissingFields),
        other => {
            return Err(RequestError::Syntax(format!(
                "expected a JSON object, found {}",
                kind(&other)
            )))
        }
    };

    let x = real_field(&fields, "x")?;
    let y = real_field(&fields, "y")?;
    let r = integer_field(&fields, "r")?;
    match (x, y, r) {
        (Some(x), Some(y), Some(r)) => RequestInput::new(x, y, r),
        _ => Err(RequestError::MissingFields),
    }
}

/// `Ok(None)` for absent or `null`, an error for any non-number.
fn number_field<'a>(
    fields: &'a Map<String, Value>,
    name: &str,
) -> Result<Option<&'a serde_json::Number>, RequestError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n)),
        Some(other) => Err(RequestError::Syntax(format!(
            "field `{name}`: expected a number, found {}",
            kind(other)
        ))),
    }
}

fn real_field(fields: &Map<String, Value>, name: &str) -> Result<Option<f64>, RequestError> {
    Ok(number_field(fields, name)?.and_then(|n| n.as_f64()))
}

/// Integral JSON numbers only; `2` and `2.0` are both accepted, `2.5` is not.
fn integer_field(fields: &Map<String, Value>, name: &str) -> Result<Option<i64>, RequestError> {
    let Some(n) = number_field(fields, name)? else {
        return Ok(None);
    };
    if let Some(i) = n.as_i64() {
        return Ok(Some(i));
    }
    match n.as_f64() {
        // Saturating cast; anything this large fails the domain check anyway.
        Some(f) if f.fract() == 0.0 => Ok(Some(f as i64)),
        _ => Err(RequestError::Syntax(format!(
            "field `{name}`: expected an integer, found {n}"
        ))),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
