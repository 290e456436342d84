use super::*;

impl CommentRepo for DbConnection<'_> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn update_comment_text(&self, id: &str, text: &str, edited_at: Timestamp) -> Result<()> {
        update_comment_text(&mut self.conn.borrow_mut(), id, text, edited_at)
    }
    fn mark_comment_deleted(&self, id: &str, deleted_at: Timestamp) -> Result<()> {
        mark_comment_deleted(&mut self.conn.borrow_mut(), id, deleted_at)
    }
    fn increment_reply_count(&self, id: &str) -> Result<()> {
        increment_reply_count(&mut self.conn.borrow_mut(), id)
    }
    fn decrement_reply_count(&self, id: &str) -> Result<()> {
        decrement_reply_count(&mut self.conn.borrow_mut(), id)
    }
    fn load_top_level_comments(
        &self,
        post_id: &str,
        sort: CommentSort,
        pagination: &Pagination,
    ) -> Result<Vec<Comment>> {
        load_top_level_comments(&mut self.conn.borrow_mut(), post_id, sort, pagination)
    }
    fn load_replies(&self, parent_id: &str, pagination: &Pagination) -> Result<Vec<Comment>> {
        load_replies(&mut self.conn.borrow_mut(), parent_id, pagination)
    }
}

fn load_comment_row(row: models::Comment) -> Result<Comment> {
    let models::Comment {
        rowid: _,
        id,
        post_id,
        parent_id,
        depth,
        author_id,
        text,
        thumbs_up_count,
        thumbs_down_count,
        reply_count,
        created_at,
        updated_at,
        edited_at,
        deleted_at,
    } = row;
    let depth = u8::try_from(depth)
        .ok()
        .filter(|depth| *depth <= MAX_COMMENT_DEPTH)
        .ok_or_else(|| anyhow!("Invalid depth of comment {id}: {depth}"))?;
    Ok(Comment {
        id: id.into(),
        post_id: post_id.into(),
        parent_id: parent_id.map(Into::into),
        depth,
        author_id: author_id.into(),
        text,
        reactions: load_reaction_counts(thumbs_up_count, thumbs_down_count),
        reply_count: reply_count as u64,
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
        edited_at: edited_at.map(Timestamp::from_millis),
        deleted_at: deleted_at.map(Timestamp::from_millis),
    })
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    let Comment {
        id,
        post_id,
        parent_id,
        depth,
        author_id,
        text,
        reactions,
        reply_count,
        created_at,
        updated_at,
        edited_at,
        deleted_at,
    } = comment;
    let new_comment = models::NewComment {
        id: id.as_str(),
        post_id: post_id.as_str(),
        parent_id: parent_id.as_ref().map(Id::as_str),
        depth: i16::from(*depth),
        author_id: author_id.as_str(),
        text,
        thumbs_up_count: reactions.thumbs_up as i64,
        thumbs_down_count: reactions.thumbs_down as i64,
        reply_count: *reply_count as i64,
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
        edited_at: edited_at.map(Timestamp::as_millis),
        deleted_at: deleted_at.map(Timestamp::as_millis),
    };
    let _count = diesel::insert_into(schema::comment::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::comment::dsl;
    let row = schema::comment::table
        .filter(dsl::id.eq(id))
        .filter(dsl::deleted_at.is_null())
        .first::<models::Comment>(conn)
        .map_err(from_diesel_err)?;
    load_comment_row(row)
}

fn comment_exists(conn: &mut SqliteConnection, id: &str) -> Result<bool> {
    use schema::comment::dsl;
    Ok(schema::comment::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .is_some())
}

fn update_comment_text(
    conn: &mut SqliteConnection,
    id: &str,
    text: &str,
    edited_at: Timestamp,
) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::update(
        schema::comment::table
            .filter(dsl::id.eq(id))
            .filter(dsl::deleted_at.is_null()),
    )
    .set((
        dsl::text.eq(text),
        dsl::edited_at.eq(Some(edited_at.as_millis())),
        dsl::updated_at.eq(edited_at.as_millis()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn mark_comment_deleted(conn: &mut SqliteConnection, id: &str, deleted_at: Timestamp) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::update(
        schema::comment::table
            .filter(dsl::id.eq(id))
            .filter(dsl::deleted_at.is_null()),
    )
    .set((
        dsl::deleted_at.eq(Some(deleted_at.as_millis())),
        dsl::updated_at.eq(deleted_at.as_millis()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn increment_reply_count(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::update(schema::comment::table.filter(dsl::id.eq(id)))
        .set(dsl::reply_count.eq(dsl::reply_count + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn decrement_reply_count(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::update(
        schema::comment::table
            .filter(dsl::id.eq(id))
            .filter(dsl::reply_count.gt(0)),
    )
    .set(dsl::reply_count.eq(dsl::reply_count - 1))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        let exists = comment_exists(conn, id)?;
        if exists {
            log::warn!("Reply count of comment {id} would become negative");
        }
        return Err(missing_or_conflict(exists, "comment", id));
    }
    Ok(())
}

fn load_top_level_comments(
    conn: &mut SqliteConnection,
    post_id: &str,
    sort: CommentSort,
    pagination: &Pagination,
) -> Result<Vec<Comment>> {
    use schema::comment::dsl;
    let mut query = schema::comment::table
        .filter(dsl::post_id.eq(post_id))
        .filter(dsl::parent_id.is_null())
        .filter(dsl::deleted_at.is_null())
        .into_boxed();
    // The rowid breaks ties between comments that have
    // been created within the same millisecond.
    query = match sort {
        CommentSort::Newest => query.order_by((dsl::created_at.desc(), dsl::rowid.desc())),
        CommentSort::Oldest => query.order_by((dsl::created_at.asc(), dsl::rowid.asc())),
        CommentSort::Popular => query.order_by((
            (dsl::thumbs_up_count - dsl::thumbs_down_count).desc(),
            dsl::created_at.desc(),
            dsl::rowid.desc(),
        )),
    };
    let (limit, offset) = pagination_bounds(pagination)?;
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    if let Some(offset) = offset {
        query = query.offset(offset);
    }
    query
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_comment_row)
        .collect()
}

fn load_replies(
    conn: &mut SqliteConnection,
    parent_id: &str,
    pagination: &Pagination,
) -> Result<Vec<Comment>> {
    use schema::comment::dsl;
    let mut query = schema::comment::table
        .filter(dsl::parent_id.eq(parent_id))
        .filter(dsl::deleted_at.is_null())
        .order_by((dsl::created_at.asc(), dsl::rowid.asc()))
        .into_boxed();
    let (limit, offset) = pagination_bounds(pagination)?;
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    if let Some(offset) = offset {
        query = query.offset(offset);
    }
    query
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_comment_row)
        .collect()
}

pub(super) fn load_comment_reaction_counts(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<ReactionCounts> {
    use schema::comment::dsl;
    let (thumbs_up_count, thumbs_down_count) = schema::comment::table
        .select((dsl::thumbs_up_count, dsl::thumbs_down_count))
        .filter(dsl::id.eq(id))
        .filter(dsl::deleted_at.is_null())
        .first::<(i64, i64)>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_reaction_counts(thumbs_up_count, thumbs_down_count))
}

pub(super) fn compare_and_swap_comment_reaction_counts(
    conn: &mut SqliteConnection,
    id: &str,
    expected: ReactionCounts,
    new: ReactionCounts,
) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::update(
        schema::comment::table
            .filter(dsl::id.eq(id))
            .filter(dsl::deleted_at.is_null())
            .filter(dsl::thumbs_up_count.eq(expected.thumbs_up as i64))
            .filter(dsl::thumbs_down_count.eq(expected.thumbs_down as i64)),
    )
    .set((
        dsl::thumbs_up_count.eq(new.thumbs_up as i64),
        dsl::thumbs_down_count.eq(new.thumbs_down as i64),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        let exists = match load_comment_reaction_counts(conn, id) {
            Ok(_) => true,
            Err(repo::Error::NotFound) => false,
            Err(err) => return Err(err),
        };
        return Err(missing_or_conflict(exists, "comment", id));
    }
    Ok(())
}
