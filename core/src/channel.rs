//! Per-channel settle-state machine.
//!
//! # Design
//! One `FetchChannel` per independently loading piece of a view. The phase
//! and the committed data live in one record so the loading flag and the
//! error slot cannot disagree:
//!
//! ```text
//! Idle ──begin──→ Loading ──succeed──→ Ready
//!   ↑                │
//!   │                └──fail──→ Failed(message)
//!   └──clear── (any)            (data kept)
//! ```
//!
//! `begin` is legal from every phase; a settled channel is re-armed by the
//! next triggering event.

/// Where a channel is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Committed data plus the phase of the fetch that produced (or failed to
/// replace) it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchChannel<T> {
    data: T,
    phase: Phase,
}

impl<T: Default> FetchChannel<T> {
    pub fn new() -> Self {
        Self {
            data: T::default(),
            phase: Phase::Idle,
        }
    }

    /// Enter `Loading`. Clears any previous error; keeps the data.
    pub fn begin(&mut self) {
        self.phase = Phase::Loading;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = data;
        self.phase = Phase::Ready;
    }

    /// Record a failure. The previously committed data stays visible to
    /// callers that want it.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Failed(message.into());
    }

    /// Drop the data and return to `Idle`.
    pub fn clear(&mut self) {
        self.data = T::default();
        self.phase = Phase::Idle;
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Ready | Phase::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
