//! Leveled logging sink used by the host
//!
//! The VM does not own a logging backend. Hosts hand in a [`Logger`] and
//! errors are reported through it. Context is an ordered list of key/value
//! pairs.

use std::fmt;

use crate::errors::Error;

/// Ordered key/value context attached to a log message
pub type Context<'a> = [(&'a str, &'a dyn fmt::Display)];

/// Host-supplied leveled log sink
pub trait Logger: Send + Sync {
    fn trace(&self, msg: &str, ctx: &Context<'_>);
    fn debug(&self, msg: &str, ctx: &Context<'_>);
    fn info(&self, msg: &str, ctx: &Context<'_>);
    fn warn(&self, msg: &str, ctx: &Context<'_>);
    fn error(&self, msg: &str, ctx: &Context<'_>);
}

/// Logger that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn trace(&self, _msg: &str, _ctx: &Context<'_>) {}
    fn debug(&self, _msg: &str, _ctx: &Context<'_>) {}
    fn info(&self, _msg: &str, _ctx: &Context<'_>) {}
    fn warn(&self, _msg: &str, _ctx: &Context<'_>) {}
    fn error(&self, _msg: &str, _ctx: &Context<'_>) {}
}

/// Logger that forwards to `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn trace(&self, msg: &str, ctx: &Context<'_>) {
        tracing::trace!(context = %DisplayContext(ctx), "{}", msg);
    }

    fn debug(&self, msg: &str, ctx: &Context<'_>) {
        tracing::debug!(context = %DisplayContext(ctx), "{}", msg);
    }

    fn info(&self, msg: &str, ctx: &Context<'_>) {
        tracing::info!(context = %DisplayContext(ctx), "{}", msg);
    }

    fn warn(&self, msg: &str, ctx: &Context<'_>) {
        tracing::warn!(context = %DisplayContext(ctx), "{}", msg);
    }

    fn error(&self, msg: &str, ctx: &Context<'_>) {
        tracing::error!(context = %DisplayContext(ctx), "{}", msg);
    }
}

/// Formats context as space-separated `key=value` pairs, in order
pub struct DisplayContext<'a, 'b>(pub &'b Context<'a>);

impl fmt::Display for DisplayContext<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

/// Report a detected error at error level.
///
/// Only the ABI fields go into the context; the rendered message carries
/// the debug fields.
pub fn log_error(logger: &dyn Logger, error: &Error) {
    let position = error.position();
    let length = error.length();
    let category = error.category();
    let code = error.code();
    logger.error(
        &error.render(),
        &[
            ("position", &position),
            ("length", &length),
            ("category", &category.value()),
            ("code", &code.value()),
        ],
    );
}
