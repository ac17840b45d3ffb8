//! Pure state machine for one search attempt
//!
//! No I/O, no async: transition(state, event) -> state, fully
//! deterministic. Invalid transitions land in Failed (never panic).
//! The orchestrator drives this machine; terminal states are Parsed,
//! ChallengeRequired, and Failed. ChallengeRequired is reachable only
//! from FormFilled, and no state retries automatically.

/// Attempt state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptState {
    /// Initial state, nothing attempted yet
    Idle,
    /// Search page loaded
    Navigated,
    /// The three search fields are populated
    FormFilled,
    /// Form submitted, awaiting classification
    Submitted,
    /// Terminal: record extracted
    Parsed,
    /// Terminal: visible challenge with no code, caller must re-prompt
    ChallengeRequired,
    /// Terminal: negative result page or infrastructure fault
    Failed { reason: String },
}

impl AttemptState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AttemptState::Parsed | AttemptState::ChallengeRequired | AttemptState::Failed { .. }
        )
    }
}

/// Events produced by the orchestrator's steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptEvent {
    /// Search page finished loading
    PageLoaded,
    /// Required fields populated
    FieldsFilled,
    /// Visible challenge control found with no code supplied
    ChallengeDetected,
    /// Form submitted and result page loading
    FormSubmitted,
    /// Classifier matched a negative-outcome phrase
    NegativeResult { phrase: String },
    /// Case record assembled from the result page
    RecordExtracted,
    /// Infrastructure fault at any step
    Error { message: String },
}

/// Pure state transition function; invalid transitions fail the attempt
pub fn transition(state: AttemptState, event: AttemptEvent) -> AttemptState {
    match (state, event) {
        (AttemptState::Idle, AttemptEvent::PageLoaded) => AttemptState::Navigated,

        (AttemptState::Navigated, AttemptEvent::FieldsFilled) => AttemptState::FormFilled,

        (AttemptState::FormFilled, AttemptEvent::ChallengeDetected) => AttemptState::ChallengeRequired,

        (AttemptState::FormFilled, AttemptEvent::FormSubmitted) => AttemptState::Submitted,

        (AttemptState::Submitted, AttemptEvent::NegativeResult { phrase }) => AttemptState::Failed {
            reason: format!("Negative result page: {}", phrase),
        },

        (AttemptState::Submitted, AttemptEvent::RecordExtracted) => AttemptState::Parsed,

        // Faults from any non-terminal state fail the attempt
        (state, AttemptEvent::Error { message }) if !state.is_terminal() => {
            AttemptState::Failed { reason: message }
        }

        // Everything else, including any event in a terminal state
        (state, event) => AttemptState::Failed {
            reason: format!("Invalid transition: {:?} cannot handle event {:?}", state, event),
        },
    }
}
