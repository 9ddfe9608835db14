//! Domain value types
//!
//! - [`LogLevel`] / [`Severity`] — level enumeration and its persisted class
//! - [`LogEvent`] — the immutable value rendered to sinks
//! - [`Context`] — insertion-ordered structured fields

mod context;
mod event;

pub use context::Context;
pub use event::{LogEvent, LogLevel, Severity};
