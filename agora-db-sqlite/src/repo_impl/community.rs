use agora_core::gateways::moderation::ModerationGateway;
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use super::*;

impl CommunityRepo for DbConnection<'_> {
    fn load_community_member(&self, community_id: &str, user_id: &str) -> Result<CommunityMember> {
        load_community_member(&mut self.conn.borrow_mut(), community_id, user_id)
    }
    fn create_or_update_community_member(&self, member: &CommunityMember) -> Result<()> {
        create_or_update_community_member(&mut self.conn.borrow_mut(), member)
    }
}

// Moderation decisions are read from the same database
// and within the same transaction as the moderated comment.
impl ModerationGateway for DbConnection<'_> {
    fn can_moderate(
        &self,
        actor_id: &Id,
        community_id: &Id,
    ) -> anyhow::Result<ModerationPermissions> {
        Ok(agora_core::usecases::moderation_permissions(
            self,
            actor_id.as_str(),
            community_id.as_str(),
        )?)
    }
}

fn load_community_member(
    conn: &mut SqliteConnection,
    community_id: &str,
    user_id: &str,
) -> Result<CommunityMember> {
    use schema::community_member::dsl;
    let models::CommunityMember {
        rowid: _,
        community_id,
        user_id,
        role,
        banned,
    } = schema::community_member::table
        .filter(dsl::community_id.eq(community_id))
        .filter(dsl::user_id.eq(user_id))
        .first::<models::CommunityMember>(conn)
        .map_err(from_diesel_err)?;
    let role = CommunityRole::from_i16(role)
        .ok_or_else(|| anyhow!("Invalid community role: {role}"))?;
    Ok(CommunityMember {
        community_id: community_id.into(),
        user_id: user_id.into(),
        role,
        banned,
    })
}

fn create_or_update_community_member(
    conn: &mut SqliteConnection,
    member: &CommunityMember,
) -> Result<()> {
    use schema::community_member::dsl;
    let role = member
        .role
        .to_i16()
        .ok_or_else(|| anyhow!("Unsupported community role: {}", member.role))?;
    let new_member = models::NewCommunityMember {
        community_id: member.community_id.as_str(),
        user_id: member.user_id.as_str(),
        role,
        banned: member.banned,
    };
    diesel::insert_into(schema::community_member::table)
        .values(&new_member)
        .on_conflict((dsl::community_id, dsl::user_id))
        .do_update()
        .set(&new_member)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}
