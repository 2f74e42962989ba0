//! The one-way "best answer" flag.

/// Whether an answer has been promoted to best.
///
/// The only transition is [`BestState::promote`]; there is deliberately no
/// way back to [`BestState::Standard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BestState {
    #[default]
    Standard,
    Best,
}

impl BestState {
    /// Promote to best. Promoting an answer that is already best is a no-op.
    #[must_use]
    pub fn promote(self) -> Self {
        Self::Best
    }

    pub fn is_best(self) -> bool {
        self == Self::Best
    }
}

impl From<bool> for BestState {
    fn from(is_best: bool) -> Self {
        if is_best {
            Self::Best
        } else {
            Self::Standard
        }
    }
}
