use super::*;

pub fn assign_community_role(
    connections: &sqlite::Connections,
    community_id: &str,
    user_id: &str,
    role: CommunityRole,
) -> Result<CommunityMember> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::assign_community_role(conn, community_id, user_id, role).map_err(|err| {
            warn!("Failed to assign role {role} to user {user_id}: {err}");
            err
        })
    })?)
}

pub fn ban_community_member(
    connections: &sqlite::Connections,
    community_id: &str,
    user_id: &str,
) -> Result<CommunityMember> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::ban_community_member(conn, community_id, user_id))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn banned_moderators_lose_their_permissions() {
        let fixture = BackendFixture::new();
        let post = fixture.create_post(Some("rustaceans"));
        let c1 = fixture.create_comment(&post.id, None, "alice", "c1");
        let c2 = fixture.create_comment(&post.id, None, "alice", "c2");
        flows::assign_community_role(&fixture.db_connections, "rustaceans", "mod", CommunityRole::Admin)
            .unwrap();
        flows::delete_comment(&fixture.db_connections, c1.id.as_str(), "mod").unwrap();
        let member = flows::ban_community_member(&fixture.db_connections, "rustaceans", "mod").unwrap();
        assert!(member.banned);
        assert_eq!(CommunityRole::Admin, member.role);
        let err = flows::delete_comment(&fixture.db_connections, c2.id.as_str(), "mod").unwrap_err();
        assert_eq!(ErrorKind::Forbidden, err.kind());
    }
}
