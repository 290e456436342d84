use super::prelude::*;

/// The effective moderation permissions of a user within a community.
///
/// Users that are not a member of the community have no permissions.
pub fn moderation_permissions<R>(
    repo: &R,
    user_id: &str,
    community_id: &str,
) -> Result<ModerationPermissions>
where
    R: CommunityRepo,
{
    match repo.load_community_member(community_id, user_id) {
        Ok(member) => Ok(member.permissions()),
        Err(RepoError::NotFound) => Ok(ModerationPermissions::none()),
        Err(err) => Err(err.into()),
    }
}

pub fn assign_community_role<R>(
    repo: &R,
    community_id: &str,
    user_id: &str,
    role: CommunityRole,
) -> Result<CommunityMember>
where
    R: CommunityRepo,
{
    let member = match repo.load_community_member(community_id, user_id) {
        Ok(member) => CommunityMember { role, ..member },
        Err(RepoError::NotFound) => CommunityMember {
            community_id: community_id.into(),
            user_id: super::actor_id(user_id)?,
            role,
            banned: false,
        },
        Err(err) => return Err(err.into()),
    };
    log::info!("Assigning role {role} in community {community_id} to user {user_id}");
    repo.create_or_update_community_member(&member)?;
    Ok(member)
}

pub fn ban_community_member<R>(repo: &R, community_id: &str, user_id: &str) -> Result<CommunityMember>
where
    R: CommunityRepo,
{
    let member = match repo.load_community_member(community_id, user_id) {
        Ok(member) => member,
        Err(RepoError::NotFound) => CommunityMember {
            community_id: community_id.into(),
            user_id: super::actor_id(user_id)?,
            role: CommunityRole::Member,
            banned: true,
        },
        Err(err) => return Err(err.into()),
    };
    let member = CommunityMember {
        banned: true,
        ..member
    };
    log::info!("Banning user {user_id} from community {community_id}");
    repo.create_or_update_community_member(&member)?;
    Ok(member)
}
