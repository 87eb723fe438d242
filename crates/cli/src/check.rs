//! Local one-shot evaluation without a transport.

use anyhow::{bail, Result};
use areacheck::handler::evaluate;
use areacheck::request::RequestInput;
use areacheck::response::ErrorResponse;

pub fn run(x: f64, y: f64, r: i64) -> Result<()> {
    match RequestInput::new(x, y, r) {
        Ok(input) => {
            let resp = evaluate(input);
            tracing::info!(x, y, r, hit = resp.hit, timing_ns = resp.timing, "check");
            println!("{}", resp.to_json()?);
            Ok(())
        }
        Err(e) => {
            println!("{}", ErrorResponse::new(e.to_string()).to_json());
            bail!(e)
        }
    }
}
