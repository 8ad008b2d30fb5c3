//! Output port for merged league tables.

use crate::domain::Event;
use crate::error::Result;

/// Receives each league's merged event once all its sites have reported.
pub trait Report: Send {
    /// Emit one league's merged matches.
    fn emit(&mut self, event: &Event) -> Result<()>;
}

/// Collects events in memory. Useful for callers that post-process a pass.
#[derive(Debug, Default)]
pub struct CollectingReport {
    events: Vec<Event>,
}

impl CollectingReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted so far, in emission order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Report for CollectingReport {
    fn emit(&mut self, event: &Event) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
