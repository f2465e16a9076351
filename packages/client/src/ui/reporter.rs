use crate::usecase::{ClientEvent, EventReporter};

/// Writes each event as one log line through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl EventReporter for TracingReporter {
    fn report(&self, event: &ClientEvent) {
        match event {
            ClientEvent::Error(_) => tracing::error!("{}", event),
            _ => tracing::info!("{}", event),
        }
    }
}
