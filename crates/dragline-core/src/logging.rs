//! Logging facilities for Dragline.
//!
//! Dragline instruments its drag lifecycle with the `tracing` crate. To see
//! logs, install a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! All events use the targets in [`targets`], so a host can filter the
//! library's output without touching its own (for example with the
//! directive `dragline=trace`).

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Drag session lifecycle (begin, end, cancel).
    pub const SESSION: &str = "dragline::session";
    /// Flat list drop evaluation.
    pub const LIST: &str = "dragline::reorder::list";
    /// Sectioned drop evaluation and validation.
    pub const SECTION: &str = "dragline::reorder::section";
}
