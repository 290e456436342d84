use super::prelude::*;

#[derive(Debug, Clone)]
pub struct ToggleReaction {
    pub actor_id: String,
    pub target: ReactionTarget,
    pub reaction_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggledReaction {
    pub action: ToggleAction,
    pub reaction: Option<ReactionKind>,
    pub counts: ReactionCounts,
}

pub fn parse_reaction_kind(s: &str) -> Result<ReactionKind> {
    s.trim()
        .parse()
        .map_err(|_| Error::ReactionType(s.to_owned()))
}

pub fn parse_target_type(s: &str) -> Result<TargetType> {
    let s = s.trim();
    // Accept the plural path segments of the API as well
    s.strip_suffix('s')
        .unwrap_or(s)
        .parse()
        .map_err(|_| Error::TargetType(s.to_owned()))
}

/// Adds, removes or changes the reaction of an actor.
///
/// The reaction row and the denormalized counters of the target
/// are modified together. The counters are only written if they
/// have not been modified since they were read, otherwise
/// `Conflict` is returned and the whole operation must be retried
/// within a new transaction.
pub fn toggle_reaction<R>(repo: &R, toggle: ToggleReaction) -> Result<ToggledReaction>
where
    R: ReactionRepo + ReactionCounterRepo,
{
    let ToggleReaction {
        actor_id,
        target,
        reaction_type,
    } = toggle;
    let actor_id = super::actor_id(&actor_id)?;
    let requested = parse_reaction_kind(&reaction_type)?;
    let counts = repo.load_reaction_counts(&target)?;
    let existing = repo.load_reaction(actor_id.as_str(), &target)?;
    let outcome = agora_entities::reaction::toggle(existing.as_ref().map(|r| r.value), requested);
    let now = Timestamp::now();
    match (existing.is_some(), outcome.current) {
        (false, Some(value)) => {
            repo.create_reaction(&Reaction {
                actor_id: actor_id.clone(),
                target: target.clone(),
                value,
                created_at: now,
                updated_at: now,
            })?;
        }
        (true, Some(value)) => {
            repo.update_reaction_value(actor_id.as_str(), &target, value, now)?;
        }
        (true, None) => {
            repo.delete_reaction(actor_id.as_str(), &target)?;
        }
        // Nothing stored and nothing to store
        (false, None) => {}
    }
    let new_counts = outcome.apply_to(counts)?;
    repo.compare_and_swap_reaction_counts(&target, counts, new_counts)?;
    log::debug!(
        "Reaction of {actor_id} on {} {}: {}",
        target.target_type,
        target.id,
        outcome.action
    );
    Ok(ToggledReaction {
        action: outcome.action,
        reaction: outcome.current,
        counts: new_counts,
    })
}

pub fn get_reaction_counts<R>(repo: &R, target: &ReactionTarget) -> Result<ReactionCounts>
where
    R: ReactionCounterRepo,
{
    Ok(repo.load_reaction_counts(target)?)
}
