//! Per-pair interaction state and the reaction transition table

use crate::value_objects::ReactionKind;

use super::InteractionRecord;

/// What a (subject, user) pair currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    NoRecord,
    HasLike,
    HasDislike,
}

/// Store action required to move a pair to the desired reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No record yet; insert one
    Create(ReactionKind),
    /// Existing record holds the opposite reaction; switch it
    Change { from: ReactionKind, to: ReactionKind },
    /// Existing record already holds this reaction
    Reject(ReactionKind),
}

impl InteractionState {
    /// State for the given existing reaction, if any
    pub fn from_kind(kind: Option<ReactionKind>) -> Self {
        match kind {
            None => Self::NoRecord,
            Some(ReactionKind::Like) => Self::HasLike,
            Some(ReactionKind::Dislike) => Self::HasDislike,
        }
    }

    /// State for the given existing record, if any
    pub fn of(record: Option<&InteractionRecord>) -> Self {
        Self::from_kind(record.map(|r| r.kind))
    }

    /// Reaction currently held
    pub fn kind(self) -> Option<ReactionKind> {
        match self {
            Self::NoRecord => None,
            Self::HasLike => Some(ReactionKind::Like),
            Self::HasDislike => Some(ReactionKind::Dislike),
        }
    }

    /// Decide what to do when the user asks for `desired`
    ///
    /// There is no transition back to `NoRecord`: a reaction can be switched
    /// but not withdrawn.
    pub fn transition(self, desired: ReactionKind) -> Transition {
        match self.kind() {
            None => Transition::Create(desired),
            Some(current) if current == desired => Transition::Reject(desired),
            Some(current) => Transition::Change {
                from: current,
                to: desired,
            },
        }
    }
}

impl Transition {
    /// State the pair ends up in if the transition is applied
    pub fn resulting_state(self) -> InteractionState {
        match self {
            Self::Create(kind) | Self::Reject(kind) | Self::Change { to: kind, .. } => {
                InteractionState::from_kind(Some(kind))
            }
        }
    }
}
