//! Orientation state machine: which face is up and whether a flip is in
//! flight.
//!
//! Flip policy: activations are debounced to the most recent one. Every
//! activation toggles the target face and replaces the pending lock-clear
//! timer, so at most one timer is ever outstanding and the lock clears
//! exactly one flip duration after the last activation. The settled face
//! therefore always matches the parity of the activation count.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::host::TimerToken;

/// Which face of the card is logically up.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// Profile face: flat, with a hover-only highlight.
    Front,
    /// Picture face: continuously tilting.
    #[default]
    Back,
}

impl Face {
    /// The opposite face.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Observable phase of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipPhase {
    /// Front face settled.
    Front,
    /// Transition lock held, heading to the back face.
    FlippingToBack,
    /// Back face settled.
    Back,
    /// Transition lock held, heading to the front face.
    FlippingToFront,
}

impl FlipPhase {
    /// Whether the transition lock is held in this phase.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::FlippingToBack | Self::FlippingToFront)
    }
}

/// Face plus transition lock, keyed by the pending lock-clear timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipState {
    face: Face,
    lock_timer: Option<TimerToken>,
    activations: u64,
}

impl FlipState {
    /// Settled state showing `face`.
    #[must_use]
    pub fn new(face: Face) -> Self {
        Self {
            face,
            lock_timer: None,
            activations: 0,
        }
    }

    /// Target face (the face that is, or will be after the lock, up).
    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Whether the transition lock is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock_timer.is_some()
    }

    /// Total activations since construction.
    #[must_use]
    pub fn activations(&self) -> u64 {
        self.activations
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FlipPhase {
        match (self.face, self.is_locked()) {
            (Face::Front, false) => FlipPhase::Front,
            (Face::Back, false) => FlipPhase::Back,
            (Face::Back, true) => FlipPhase::FlippingToBack,
            (Face::Front, true) => FlipPhase::FlippingToFront,
        }
    }

    /// Toggle the target face and take the lock under `timer`.
    ///
    /// Returns the superseded lock timer, which the caller must cancel.
    pub fn activate(&mut self, timer: TimerToken) -> Option<TimerToken> {
        self.face = self.face.flipped();
        self.activations += 1;
        self.lock_timer.replace(timer)
    }

    /// Release the lock if `timer` is the pending lock-clear timer.
    ///
    /// Returns `false` for stale or unknown timers, which leave the state
    /// untouched.
    pub fn complete(&mut self, timer: TimerToken) -> bool {
        if self.lock_timer == Some(timer) {
            self.lock_timer = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending lock timer (on unmount), returning it for
    /// cancellation. The face keeps its target value.
    pub fn take_lock_timer(&mut self) -> Option<TimerToken> {
        self.lock_timer.take()
    }
}

impl Default for FlipState {
    fn default() -> Self {
        Self::new(Face::default())
    }
}
