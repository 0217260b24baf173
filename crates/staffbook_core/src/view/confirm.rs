//! Yes/no gate for destructive and overwrite commits.
//!
//! # Responsibility
//! - Hold at most one pending payload between request and proceed/cancel.
//! - Run the commit action only on an explicit proceed.
//!
//! # Invariants
//! - A second request while pending replaces the payload; nothing queues.
//! - Cancel never invokes the commit action.

/// Gate phase observable by the dialog collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    PendingConfirmation,
}

/// Proceed/cancel state machine carrying a description payload.
///
/// The payload is whatever the dialog needs to render: the record about to
/// be overwritten or deleted, or the id batch of a bulk delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationGate<P> {
    pending: Option<P>,
}

impl<P> Default for ConfirmationGate<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ConfirmationGate<P> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn state(&self) -> GateState {
        if self.pending.is_some() {
            GateState::PendingConfirmation
        } else {
            GateState::Idle
        }
    }

    /// Captures a payload and moves to `PendingConfirmation`. A request made
    /// while already pending replaces the previous payload; last one wins.
    pub fn request(&mut self, payload: P) {
        self.pending = Some(payload);
    }

    /// Pending payload for dialog display.
    pub fn payload(&self) -> Option<&P> {
        self.pending.as_ref()
    }

    /// Invokes `commit` with the pending payload and returns to `Idle`.
    /// Returns `None` (and does nothing) when no confirmation is pending.
    pub fn proceed<T>(&mut self, commit: impl FnOnce(P) -> T) -> Option<T> {
        self.pending.take().map(commit)
    }

    /// Discards the pending payload without invoking any action.
    pub fn cancel(&mut self) -> Option<P> {
        self.pending.take()
    }
}
