#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = post)]
pub struct NewPost<'a> {
    pub id: &'a str,
    pub community_id: Option<&'a str>,
    pub author_id: &'a str,
    pub created_at: i64,
    pub comment_count: i64,
    pub thumbs_up_count: i64,
    pub thumbs_down_count: i64,
}

#[derive(Queryable)]
pub struct Post {
    pub rowid: i64,
    pub id: String,
    pub community_id: Option<String>,
    pub author_id: String,
    pub created_at: i64,
    pub comment_count: i64,
    pub thumbs_up_count: i64,
    pub thumbs_down_count: i64,
}

#[derive(Insertable)]
#[diesel(table_name = comment)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub post_id: &'a str,
    pub parent_id: Option<&'a str>,
    pub depth: i16,
    pub author_id: &'a str,
    pub text: &'a str,
    pub thumbs_up_count: i64,
    pub thumbs_down_count: i64,
    pub reply_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub edited_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

#[derive(Queryable)]
pub struct Comment {
    pub rowid: i64,
    pub id: String,
    pub post_id: String,
    pub parent_id: Option<String>,
    pub depth: i16,
    pub author_id: String,
    pub text: String,
    pub thumbs_up_count: i64,
    pub thumbs_down_count: i64,
    pub reply_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub edited_at: Option<i64>,
    pub deleted_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = reaction)]
pub struct NewReaction<'a> {
    pub actor_id: &'a str,
    pub target_type: i16,
    pub target_id: &'a str,
    pub value: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct Reaction {
    pub rowid: i64,
    pub actor_id: String,
    pub target_type: i16,
    pub target_id: String,
    pub value: i16,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = community_member)]
pub struct NewCommunityMember<'a> {
    pub community_id: &'a str,
    pub user_id: &'a str,
    pub role: i16,
    pub banned: bool,
}

#[derive(Queryable)]
pub struct CommunityMember {
    pub rowid: i64,
    pub community_id: String,
    pub user_id: String,
    pub role: i16,
    pub banned: bool,
}
