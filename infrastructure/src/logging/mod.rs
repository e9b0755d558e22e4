//! Logging adapters.
//!
//! - [`TracingObserver`]: records each appended message through `tracing`

mod tracing_observer;

pub use tracing_observer::TracingObserver;
