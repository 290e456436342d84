use super::*;

impl ReactionRepo for DbConnection<'_> {
    fn load_reaction(&self, actor_id: &str, target: &ReactionTarget) -> Result<Option<Reaction>> {
        load_reaction(&mut self.conn.borrow_mut(), actor_id, target)
    }
    fn create_reaction(&self, reaction: &Reaction) -> Result<()> {
        create_reaction(&mut self.conn.borrow_mut(), reaction)
    }
    fn update_reaction_value(
        &self,
        actor_id: &str,
        target: &ReactionTarget,
        value: ReactionKind,
        updated_at: Timestamp,
    ) -> Result<()> {
        update_reaction_value(&mut self.conn.borrow_mut(), actor_id, target, value, updated_at)
    }
    fn delete_reaction(&self, actor_id: &str, target: &ReactionTarget) -> Result<()> {
        delete_reaction(&mut self.conn.borrow_mut(), actor_id, target)
    }
    fn load_reactions_of_actor(
        &self,
        actor_id: &str,
        target_type: TargetType,
        target_ids: &[&str],
    ) -> Result<Vec<Reaction>> {
        load_reactions_of_actor(&mut self.conn.borrow_mut(), actor_id, target_type, target_ids)
    }
    fn count_reactions(&self, target: &ReactionTarget) -> Result<ReactionCounts> {
        count_reactions(&mut self.conn.borrow_mut(), target)
    }
}

impl ReactionCounterRepo for DbConnection<'_> {
    fn load_reaction_counts(&self, target: &ReactionTarget) -> Result<ReactionCounts> {
        let conn = &mut self.conn.borrow_mut();
        match target.target_type {
            TargetType::Comment => comment::load_comment_reaction_counts(conn, target.id.as_str()),
            TargetType::Post => post::load_post_reaction_counts(conn, target.id.as_str()),
        }
    }
    fn compare_and_swap_reaction_counts(
        &self,
        target: &ReactionTarget,
        expected: ReactionCounts,
        new: ReactionCounts,
    ) -> Result<()> {
        let conn = &mut self.conn.borrow_mut();
        let id = target.id.as_str();
        match target.target_type {
            TargetType::Comment => {
                comment::compare_and_swap_comment_reaction_counts(conn, id, expected, new)
            }
            TargetType::Post => post::compare_and_swap_post_reaction_counts(conn, id, expected, new),
        }
    }
}

fn load_reaction_row(row: models::Reaction) -> Result<Reaction> {
    let models::Reaction {
        rowid: _,
        actor_id,
        target_type,
        target_id,
        value,
        created_at,
        updated_at,
    } = row;
    Ok(Reaction {
        actor_id: actor_id.into(),
        target: ReactionTarget {
            target_type: load_target_type(target_type)?,
            id: target_id.into(),
        },
        value: load_reaction_kind(value)?,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}

fn load_reaction(
    conn: &mut SqliteConnection,
    actor_id: &str,
    target: &ReactionTarget,
) -> Result<Option<Reaction>> {
    use schema::reaction::dsl;
    schema::reaction::table
        .filter(dsl::actor_id.eq(actor_id))
        .filter(dsl::target_type.eq(target_type_primitive(target.target_type)?))
        .filter(dsl::target_id.eq(target.id.as_str()))
        .first::<models::Reaction>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_reaction_row)
        .transpose()
}

fn create_reaction(conn: &mut SqliteConnection, reaction: &Reaction) -> Result<()> {
    let new_reaction = models::NewReaction {
        actor_id: reaction.actor_id.as_str(),
        target_type: target_type_primitive(reaction.target.target_type)?,
        target_id: reaction.target.id.as_str(),
        value: reaction_kind_primitive(reaction.value)?,
        created_at: reaction.created_at.as_millis(),
        updated_at: reaction.updated_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::reaction::table)
        .values(&new_reaction)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_reaction_value(
    conn: &mut SqliteConnection,
    actor_id: &str,
    target: &ReactionTarget,
    value: ReactionKind,
    updated_at: Timestamp,
) -> Result<()> {
    use schema::reaction::dsl;
    let count = diesel::update(
        schema::reaction::table
            .filter(dsl::actor_id.eq(actor_id))
            .filter(dsl::target_type.eq(target_type_primitive(target.target_type)?))
            .filter(dsl::target_id.eq(target.id.as_str())),
    )
    .set((
        dsl::value.eq(reaction_kind_primitive(value)?),
        dsl::updated_at.eq(updated_at.as_millis()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_reaction(conn: &mut SqliteConnection, actor_id: &str, target: &ReactionTarget) -> Result<()> {
    use schema::reaction::dsl;
    let count = diesel::delete(
        schema::reaction::table
            .filter(dsl::actor_id.eq(actor_id))
            .filter(dsl::target_type.eq(target_type_primitive(target.target_type)?))
            .filter(dsl::target_id.eq(target.id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn load_reactions_of_actor(
    conn: &mut SqliteConnection,
    actor_id: &str,
    target_type: TargetType,
    target_ids: &[&str],
) -> Result<Vec<Reaction>> {
    use schema::reaction::dsl;
    if target_ids.is_empty() {
        return Ok(vec![]);
    }
    schema::reaction::table
        .filter(dsl::actor_id.eq(actor_id))
        .filter(dsl::target_type.eq(target_type_primitive(target_type)?))
        .filter(dsl::target_id.eq_any(target_ids))
        .load::<models::Reaction>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_reaction_row)
        .collect()
}

fn count_reactions(conn: &mut SqliteConnection, target: &ReactionTarget) -> Result<ReactionCounts> {
    use schema::reaction::dsl;
    let values = schema::reaction::table
        .select(dsl::value)
        .filter(dsl::target_type.eq(target_type_primitive(target.target_type)?))
        .filter(dsl::target_id.eq(target.id.as_str()))
        .load::<i16>(conn)
        .map_err(from_diesel_err)?;
    let mut counts = ReactionCounts::default();
    for value in values {
        match load_reaction_kind(value)? {
            ReactionKind::ThumbsUp => counts.thumbs_up += 1,
            ReactionKind::ThumbsDown => counts.thumbs_down += 1,
        }
    }
    Ok(counts)
}
