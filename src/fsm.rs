//! Match state machine
//!
//! Two states, one transition: a match that has finished never resumes.

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    #[default]
    Playing,
    Finished,
}

impl MatchPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, MatchPhase::Playing)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, MatchPhase::Finished)
    }

    /// End the match; no transition leads back to `Playing`
    pub fn finish(&mut self) {
        *self = MatchPhase::Finished;
    }
}
