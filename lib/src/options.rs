//! Shared option types that replace boolean flag parameters in the Rust API.

use serde::{Deserialize, Serialize};

/// Controls what happens to an ontology element that yields no usable
/// identifier (the root sentinel, or an anonymous term).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Default)]
pub enum DroppedTermPolicy {
    /// Log each dropped element through `log::warn!`.
    #[default]
    Warn,
    /// Drop the element without a trace.
    Silent,
}

impl DroppedTermPolicy {
    pub fn is_warn(self) -> bool {
        matches!(self, DroppedTermPolicy::Warn)
    }
}

/// `true` means the caller asked for silent drops.
impl From<bool> for DroppedTermPolicy {
    fn from(value: bool) -> Self {
        if value {
            DroppedTermPolicy::Silent
        } else {
            DroppedTermPolicy::Warn
        }
    }
}

impl From<DroppedTermPolicy> for bool {
    fn from(value: DroppedTermPolicy) -> Self {
        !value.is_warn()
    }
}
