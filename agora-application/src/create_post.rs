use super::*;

pub fn create_post(connections: &sqlite::Connections, new_post: usecases::NewPost) -> Result<Post> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::create_post(conn, new_post))?)
}
