//! Console output for session events.

mod reporter;

pub use reporter::TracingReporter;
