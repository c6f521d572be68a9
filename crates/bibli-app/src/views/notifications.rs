//! Toast notification queue
//!
//! UI shells drain this queue each frame/render and show the entries as
//! transient toasts. The queue is bounded; when full, the oldest toast is
//! dropped first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of undelivered toasts retained.
const MAX_PENDING_TOASTS: usize = 8;

/// Severity of a toast, in escalating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    /// Informational; auto-dismiss quickly.
    Info,
    /// Something went wrong but the flow can continue.
    Warning,
    /// The action failed; user attention required.
    Error,
}

/// One transient notification for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Display severity.
    pub level: ToastLevel,
    /// Message shown to the user.
    pub message: String,
}

impl Toast {
    /// Build a toast.
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Bounded FIFO queue of pending toasts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a toast, evicting the oldest entry when full.
    pub fn push(&mut self, toast: Toast) {
        if self.pending.len() == MAX_PENDING_TOASTS {
            self.pending.pop_front();
        }
        self.pending.push_back(toast);
    }

    /// Take the oldest pending toast, if any.
    pub fn pop(&mut self) -> Option<Toast> {
        self.pending.pop_front()
    }

    /// Number of pending toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate pending toasts oldest-first without draining.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.pending.iter()
    }
}
