//! Per-request context passed explicitly into every domain operation.

use uuid::Uuid;

/// Identifies one inbound request in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: Uuid,
}

impl RequestContext {
    /// Creates a context with a fresh correlation ID.
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
        }
    }

    /// Returns the correlation ID for log fields.
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
