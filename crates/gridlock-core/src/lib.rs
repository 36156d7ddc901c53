//! Core systems for Gridlock.
//!
//! This crate provides the foundation the `gridlock` widget crate builds on:
//!
//! - Geometry and color value types ([`Point`], [`Size`], [`Color`])
//! - A synchronous signal/slot mechanism ([`Signal`])
//! - A cancellable one-shot deferred task ([`Deferred`])
//! - The error taxonomy ([`Error`])
//!
//! Everything here is framework-agnostic: no windowing, no rendering, no
//! event loop. Hosts drive the widget crate from whatever event source they
//! own and poll deferred work with explicit timestamps.

pub mod deferred;
pub mod error;
pub mod logging;
pub mod signal;
pub mod types;

pub use deferred::Deferred;
pub use error::{Error, Result};
pub use signal::{ConnectionId, Signal};
pub use types::{Color, Point, Size};
