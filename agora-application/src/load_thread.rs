use super::*;

pub fn get_comment(connections: &sqlite::Connections, id: &str) -> Result<Comment> {
    let mut db = connections.shared()?;
    Ok(usecases::get_comment(&db.connection(), id)?)
}

pub fn get_post(connections: &sqlite::Connections, id: &str) -> Result<Post> {
    let mut db = connections.shared()?;
    Ok(usecases::get_post(&db.connection(), id)?)
}

pub fn load_comment_page(
    connections: &sqlite::Connections,
    viewer_id: Option<&str>,
    post_id: &str,
    query: &usecases::CommentQuery,
) -> Result<usecases::CommentPage> {
    let mut db = connections.shared()?;
    Ok(usecases::load_comment_page(
        &db.connection(),
        viewer_id,
        post_id,
        query,
    )?)
}

pub fn load_reply_page(
    connections: &sqlite::Connections,
    viewer_id: Option<&str>,
    comment_id: &str,
    pagination: &Pagination,
) -> Result<usecases::CommentPage> {
    let mut db = connections.shared()?;
    Ok(usecases::load_reply_page(
        &db.connection(),
        viewer_id,
        comment_id,
        pagination,
    )?)
}

pub fn list_replies(
    connections: &sqlite::Connections,
    comment_id: &str,
    pagination: &Pagination,
) -> Result<Vec<Comment>> {
    let mut db = connections.shared()?;
    Ok(usecases::list_replies(&db.connection(), comment_id, pagination)?)
}
