//! Delivery queue configuration.

use serde::Deserialize;

/// Per-connection delivery queue settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    /// Replies buffered per connection before producers wait (default: 32).
    /// Bounds memory held for slow readers.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_queue_capacity() -> usize {
    32
}
