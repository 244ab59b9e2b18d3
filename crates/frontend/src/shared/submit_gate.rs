//! Guarded submission state shared by both panels.
//!
//! A panel moves `Idle -> Submitting -> Settled -> Submitting -> ...`.
//! Entering `Submitting` hands out the only [`InFlight`] token, and leaving it
//! consumes that token, so two overlapping submissions cannot be expressed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Settled(Settlement),
}

/// Proof that a submission is running. Not `Clone`.
#[derive(Debug)]
#[must_use = "an in-flight submission has to be settled"]
pub struct InFlight {
    _private: (),
}

#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    phase: SubmitPhase,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// `None` while another submission is still running
    pub fn try_begin(&mut self) -> Option<InFlight> {
        if self.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(InFlight { _private: () })
    }

    pub fn settle(&mut self, _token: InFlight, settlement: Settlement) {
        self.phase = SubmitPhase::Settled(settlement);
    }
}
