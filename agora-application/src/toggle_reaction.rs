use super::*;

pub fn toggle_reaction(
    connections: &sqlite::Connections,
    toggle: usecases::ToggleReaction,
) -> Result<usecases::ToggledReaction> {
    retry_on_conflict("reaction toggle", || {
        Ok(connections
            .exclusive()?
            .transaction(|conn| usecases::toggle_reaction(conn, toggle.clone()))?)
    })
}

pub fn get_reaction_counts(
    connections: &sqlite::Connections,
    target: &ReactionTarget,
) -> Result<ReactionCounts> {
    let mut db = connections.shared()?;
    Ok(usecases::get_reaction_counts(&db.connection(), target)?)
}
