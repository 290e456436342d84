use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ReactionKind {
    ThumbsUp   = 1,
    ThumbsDown = 2,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TargetType {
    Comment = 1,
    Post    = 2,
}

/// The entity a reaction is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReactionTarget {
    pub target_type: TargetType,
    pub id: Id,
}

impl ReactionTarget {
    pub fn comment(id: impl Into<Id>) -> Self {
        Self {
            target_type: TargetType::Comment,
            id: id.into(),
        }
    }

    pub fn post(id: impl Into<Id>) -> Self {
        Self {
            target_type: TargetType::Post,
            id: id.into(),
        }
    }
}

/// At most one reaction exists per actor and target.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub actor_id   : Id,
    pub target     : ReactionTarget,
    pub value      : ReactionKind,
    pub created_at : Timestamp,
    pub updated_at : Timestamp,
}

/// Denormalized number of live reactions per kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReactionCounts {
    pub thumbs_up: u64,
    pub thumbs_down: u64,
}

impl ReactionCounts {
    pub const fn get(self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::ThumbsUp => self.thumbs_up,
            ReactionKind::ThumbsDown => self.thumbs_down,
        }
    }

    fn get_mut(&mut self, kind: ReactionKind) -> &mut u64 {
        match kind {
            ReactionKind::ThumbsUp => &mut self.thumbs_up,
            ReactionKind::ThumbsDown => &mut self.thumbs_down,
        }
    }

    /// Net approval, used for sorting by popularity.
    pub fn score(self) -> i64 {
        self.thumbs_up as i64 - self.thumbs_down as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ToggleAction {
    Added,
    Removed,
    Changed,
}

/// The result of applying a toggle to the reaction of a single actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    pub previous: Option<ReactionKind>,
    pub current: Option<ReactionKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("The {0} counter would become negative")]
pub struct CounterUnderflow(pub ReactionKind);

impl ToggleOutcome {
    /// Applies the counter deltas of this outcome.
    pub fn apply_to(&self, counts: ReactionCounts) -> Result<ReactionCounts, CounterUnderflow> {
        let mut counts = counts;
        if let Some(previous) = self.previous {
            let count = counts.get_mut(previous);
            *count = count.checked_sub(1).ok_or(CounterUnderflow(previous))?;
        }
        if let Some(current) = self.current {
            *counts.get_mut(current) += 1;
        }
        Ok(counts)
    }
}

/// The reaction state machine.
///
/// | current     | requested | action    | new value  |
/// |-------------|-----------|-----------|------------|
/// | none        | `v`       | `Added`   | `v`        |
/// | `v`         | `v`       | `Removed` | none       |
/// | `w` (≠ `v`) | `v`       | `Changed` | `v`        |
pub fn toggle(current: Option<ReactionKind>, requested: ReactionKind) -> ToggleOutcome {
    let (action, next) = match current {
        None => (ToggleAction::Added, Some(requested)),
        Some(value) if value == requested => (ToggleAction::Removed, None),
        Some(_) => (ToggleAction::Changed, Some(requested)),
    };
    ToggleOutcome {
        action,
        previous: current,
        current: next,
    }
}
