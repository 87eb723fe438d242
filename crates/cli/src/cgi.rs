//! One request per process, gateway style.

use anyhow::{Context, Result};
use areacheck::handler::{handle, RequestContext};
use std::io::Write;

/// Build the request context from gateway variables via `lookup`.
pub fn context_from<F>(lookup: F) -> RequestContext
where
    F: Fn(&str) -> Option<String>,
{
    RequestContext::new(
        lookup("REQUEST_METHOD"),
        lookup("CONTENT_TYPE"),
        lookup("CONTENT_LENGTH"),
    )
}

pub fn run() -> Result<()> {
    let ctx = context_from(|name| std::env::var(name).ok());
    tracing::debug!(method = ?ctx.method, content_type = ?ctx.content_type, "cgi request");
    let envelope = handle(&ctx, std::io::stdin().lock());
    let mut out = std::io::stdout().lock();
    out.write_all(envelope.render().as_bytes())
        .context("writing response to stdout")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}
