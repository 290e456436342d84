use super::*;

impl PostRepo for DbConnection<'_> {
    fn create_post(&self, post: &Post) -> Result<()> {
        create_post(&mut self.conn.borrow_mut(), post)
    }
    fn load_post(&self, id: &str) -> Result<Post> {
        load_post(&mut self.conn.borrow_mut(), id)
    }
    fn increment_comment_count(&self, post_id: &str) -> Result<()> {
        increment_comment_count(&mut self.conn.borrow_mut(), post_id)
    }
    fn decrement_comment_count(&self, post_id: &str) -> Result<()> {
        decrement_comment_count(&mut self.conn.borrow_mut(), post_id)
    }
}

impl From<models::Post> for Post {
    fn from(from: models::Post) -> Self {
        let models::Post {
            rowid: _,
            id,
            community_id,
            author_id,
            created_at,
            comment_count,
            thumbs_up_count,
            thumbs_down_count,
        } = from;
        Self {
            id: id.into(),
            community_id: community_id.map(Into::into),
            author_id: author_id.into(),
            created_at: Timestamp::from_millis(created_at),
            comment_count: comment_count as u64,
            reactions: load_reaction_counts(thumbs_up_count, thumbs_down_count),
        }
    }
}

fn create_post(conn: &mut SqliteConnection, post: &Post) -> Result<()> {
    let new_post = models::NewPost {
        id: post.id.as_str(),
        community_id: post.community_id.as_ref().map(Id::as_str),
        author_id: post.author_id.as_str(),
        created_at: post.created_at.as_millis(),
        comment_count: post.comment_count as i64,
        thumbs_up_count: post.reactions.thumbs_up as i64,
        thumbs_down_count: post.reactions.thumbs_down as i64,
    };
    let _count = diesel::insert_into(schema::post::table)
        .values(&new_post)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_post(conn: &mut SqliteConnection, id: &str) -> Result<Post> {
    use schema::post::dsl;
    Ok(schema::post::table
        .filter(dsl::id.eq(id))
        .first::<models::Post>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn increment_comment_count(conn: &mut SqliteConnection, post_id: &str) -> Result<()> {
    use schema::post::dsl;
    let count = diesel::update(schema::post::table.filter(dsl::id.eq(post_id)))
        .set(dsl::comment_count.eq(dsl::comment_count + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn decrement_comment_count(conn: &mut SqliteConnection, post_id: &str) -> Result<()> {
    use schema::post::dsl;
    let count = diesel::update(
        schema::post::table
            .filter(dsl::id.eq(post_id))
            .filter(dsl::comment_count.gt(0)),
    )
    .set(dsl::comment_count.eq(dsl::comment_count - 1))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        let exists = match load_post(conn, post_id) {
            Ok(_) => true,
            Err(repo::Error::NotFound) => false,
            Err(err) => return Err(err),
        };
        if exists {
            log::warn!("Comment count of post {post_id} would become negative");
        }
        return Err(missing_or_conflict(exists, "post", post_id));
    }
    Ok(())
}

pub(super) fn load_post_reaction_counts(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<ReactionCounts> {
    use schema::post::dsl;
    let (thumbs_up_count, thumbs_down_count) = schema::post::table
        .select((dsl::thumbs_up_count, dsl::thumbs_down_count))
        .filter(dsl::id.eq(id))
        .first::<(i64, i64)>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_reaction_counts(thumbs_up_count, thumbs_down_count))
}

pub(super) fn compare_and_swap_post_reaction_counts(
    conn: &mut SqliteConnection,
    id: &str,
    expected: ReactionCounts,
    new: ReactionCounts,
) -> Result<()> {
    use schema::post::dsl;
    let count = diesel::update(
        schema::post::table
            .filter(dsl::id.eq(id))
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
        let exists = match load_post_reaction_counts(conn, id) {
            Ok(_) => true,
            Err(repo::Error::NotFound) => false,
            Err(err) => return Err(err),
        };
        return Err(missing_or_conflict(exists, "post", id));
    }
    Ok(())
}
