//! Logging facilities for Gridlock.
//!
//! Gridlock uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=gridlock::input=trace`.
pub mod targets {
    /// Gesture input handling.
    pub const INPUT: &str = "gridlock::input";
    /// Grid layout computation.
    pub const LAYOUT: &str = "gridlock::layout";
    /// Pattern lock surface (completion, matching, clearing).
    pub const SURFACE: &str = "gridlock::surface";
    /// Deferred task scheduling.
    pub const TIMER: &str = "gridlock::timer";
}
