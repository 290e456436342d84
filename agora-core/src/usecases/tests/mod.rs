use super::prelude::*;

use anyhow::Result as Fallible;
use std::{cell::RefCell, collections::HashMap, result};

type RepoResult<T> = result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for Comment {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Post {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    objects
        .iter()
        .find(|x| x.key() == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: &T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e.clone());
    Ok(())
}

fn modify<T: Key>(objects: &mut [T], id: &str, f: impl FnOnce(&mut T) -> RepoResult<()>) -> RepoResult<()> {
    let object = objects
        .iter_mut()
        .find(|x| x.key() == id)
        .ok_or(RepoError::NotFound)?;
    f(object)
}

fn paginate<T>(objects: Vec<T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or_default() as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    objects.into_iter().skip(offset).take(limit).collect()
}

/// All entities are kept in insertion order, which serves
/// as the tie breaker for equal creation times.
#[derive(Default)]
pub struct MockDb {
    pub comments: RefCell<Vec<Comment>>,
    pub posts: RefCell<Vec<Post>>,
    pub reactions: RefCell<Vec<Reaction>>,
    pub members: RefCell<Vec<CommunityMember>>,
    // Number of upcoming compare-and-swap operations that fail
    pub injected_conflicts: RefCell<usize>,
}

impl MockDb {
    pub fn live_reply_count(&self, parent_id: &str) -> u64 {
        self.comments
            .borrow()
            .iter()
            .filter(|c| !c.is_deleted() && c.parent_id.as_ref().map(Id::as_str) == Some(parent_id))
            .count() as u64
    }

    pub fn stored_comment(&self, id: &str) -> Comment {
        get(&self.comments.borrow(), id).unwrap()
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: &Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment)
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        get(&self.comments.borrow(), id).and_then(|c| {
            if c.is_deleted() {
                Err(RepoError::NotFound)
            } else {
                Ok(c)
            }
        })
    }

    fn update_comment_text(&self, id: &str, text: &str, edited_at: Timestamp) -> RepoResult<()> {
        modify(&mut self.comments.borrow_mut(), id, |c| {
            c.text = text.to_owned();
            c.edited_at = Some(edited_at);
            c.updated_at = edited_at;
            Ok(())
        })
    }

    fn mark_comment_deleted(&self, id: &str, deleted_at: Timestamp) -> RepoResult<()> {
        modify(&mut self.comments.borrow_mut(), id, |c| {
            c.deleted_at = Some(deleted_at);
            c.updated_at = deleted_at;
            Ok(())
        })
    }

    fn increment_reply_count(&self, id: &str) -> RepoResult<()> {
        modify(&mut self.comments.borrow_mut(), id, |c| {
            c.reply_count += 1;
            Ok(())
        })
    }

    fn decrement_reply_count(&self, id: &str) -> RepoResult<()> {
        modify(&mut self.comments.borrow_mut(), id, |c| {
            c.reply_count = c.reply_count.checked_sub(1).ok_or(RepoError::Conflict)?;
            Ok(())
        })
    }

    fn load_top_level_comments(
        &self,
        post_id: &str,
        sort: CommentSort,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| !c.is_deleted() && c.is_top_level() && c.post_id.as_str() == post_id)
            .cloned()
            .collect();
        match sort {
            CommentSort::Oldest => {}
            CommentSort::Newest => comments.reverse(),
            CommentSort::Popular => {
                comments.reverse();
                comments.sort_by_key(|c| std::cmp::Reverse(c.reactions.score()));
            }
        }
        Ok(paginate(comments, pagination))
    }

    fn load_replies(&self, parent_id: &str, pagination: &Pagination) -> RepoResult<Vec<Comment>> {
        let replies = self
            .comments
            .borrow()
            .iter()
            .filter(|c| !c.is_deleted() && c.parent_id.as_ref().map(Id::as_str) == Some(parent_id))
            .cloned()
            .collect();
        Ok(paginate(replies, pagination))
    }
}

impl PostRepo for MockDb {
    fn create_post(&self, post: &Post) -> RepoResult<()> {
        create(&mut self.posts.borrow_mut(), post)
    }

    fn load_post(&self, id: &str) -> RepoResult<Post> {
        get(&self.posts.borrow(), id)
    }

    fn increment_comment_count(&self, post_id: &str) -> RepoResult<()> {
        modify(&mut self.posts.borrow_mut(), post_id, |p| {
            p.comment_count += 1;
            Ok(())
        })
    }

    fn decrement_comment_count(&self, post_id: &str) -> RepoResult<()> {
        modify(&mut self.posts.borrow_mut(), post_id, |p| {
            p.comment_count = p.comment_count.checked_sub(1).ok_or(RepoError::Conflict)?;
            Ok(())
        })
    }
}

fn is_identity(reaction: &Reaction, actor_id: &str, target: &ReactionTarget) -> bool {
    reaction.actor_id.as_str() == actor_id && &reaction.target == target
}

impl ReactionRepo for MockDb {
    fn load_reaction(&self, actor_id: &str, target: &ReactionTarget) -> RepoResult<Option<Reaction>> {
        Ok(self
            .reactions
            .borrow()
            .iter()
            .find(|r| is_identity(r, actor_id, target))
            .cloned())
    }

    fn create_reaction(&self, reaction: &Reaction) -> RepoResult<()> {
        let mut reactions = self.reactions.borrow_mut();
        if reactions
            .iter()
            .any(|r| is_identity(r, reaction.actor_id.as_str(), &reaction.target))
        {
            return Err(RepoError::AlreadyExists);
        }
        reactions.push(reaction.clone());
        Ok(())
    }

    fn update_reaction_value(
        &self,
        actor_id: &str,
        target: &ReactionTarget,
        value: ReactionKind,
        updated_at: Timestamp,
    ) -> RepoResult<()> {
        let mut reactions = self.reactions.borrow_mut();
        let reaction = reactions
            .iter_mut()
            .find(|r| is_identity(r, actor_id, target))
            .ok_or(RepoError::NotFound)?;
        reaction.value = value;
        reaction.updated_at = updated_at;
        Ok(())
    }

    fn delete_reaction(&self, actor_id: &str, target: &ReactionTarget) -> RepoResult<()> {
        let mut reactions = self.reactions.borrow_mut();
        let len = reactions.len();
        reactions.retain(|r| !is_identity(r, actor_id, target));
        if reactions.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn load_reactions_of_actor(
        &self,
        actor_id: &str,
        target_type: TargetType,
        target_ids: &[&str],
    ) -> RepoResult<Vec<Reaction>> {
        Ok(self
            .reactions
            .borrow()
            .iter()
            .filter(|r| {
                r.actor_id.as_str() == actor_id
                    && r.target.target_type == target_type
                    && target_ids.contains(&r.target.id.as_str())
            })
            .cloned()
            .collect())
    }

    fn count_reactions(&self, target: &ReactionTarget) -> RepoResult<ReactionCounts> {
        let mut counts = ReactionCounts::default();
        for r in self.reactions.borrow().iter().filter(|r| &r.target == target) {
            match r.value {
                ReactionKind::ThumbsUp => counts.thumbs_up += 1,
                ReactionKind::ThumbsDown => counts.thumbs_down += 1,
            }
        }
        Ok(counts)
    }
}

impl ReactionCounterRepo for MockDb {
    fn load_reaction_counts(&self, target: &ReactionTarget) -> RepoResult<ReactionCounts> {
        match target.target_type {
            TargetType::Comment => self.load_comment(target.id.as_str()).map(|c| c.reactions),
            TargetType::Post => self.load_post(target.id.as_str()).map(|p| p.reactions),
        }
    }

    fn compare_and_swap_reaction_counts(
        &self,
        target: &ReactionTarget,
        expected: ReactionCounts,
        new: ReactionCounts,
    ) -> RepoResult<()> {
        {
            let mut conflicts = self.injected_conflicts.borrow_mut();
            if *conflicts > 0 {
                *conflicts -= 1;
                return Err(RepoError::Conflict);
            }
        }
        let swap = |counts: &mut ReactionCounts| {
            if *counts != expected {
                return Err(RepoError::Conflict);
            }
            *counts = new;
            Ok(())
        };
        let id = target.id.as_str();
        match target.target_type {
            TargetType::Comment => {
                modify(&mut self.comments.borrow_mut(), id, |c| swap(&mut c.reactions))
            }
            TargetType::Post => modify(&mut self.posts.borrow_mut(), id, |p| swap(&mut p.reactions)),
        }
    }
}

impl CommunityRepo for MockDb {
    fn load_community_member(&self, community_id: &str, user_id: &str) -> RepoResult<CommunityMember> {
        self.members
            .borrow()
            .iter()
            .find(|m| m.community_id.as_str() == community_id && m.user_id.as_str() == user_id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn create_or_update_community_member(&self, member: &CommunityMember) -> RepoResult<()> {
        let mut members = self.members.borrow_mut();
        members.retain(|m| !(m.community_id == member.community_id && m.user_id == member.user_id));
        members.push(member.clone());
        Ok(())
    }
}

impl ModerationGateway for MockDb {
    fn can_moderate(&self, actor_id: &Id, community_id: &Id) -> Fallible<ModerationPermissions> {
        Ok(super::moderation_permissions(self, actor_id.as_str(), community_id.as_str())?)
    }
}

/// Inserts a post and returns its id.
pub fn insert_post(db: &MockDb, community_id: Option<&str>) -> String {
    use agora_entities::builders::Builder as _;
    let post = Post::build().community_id(community_id).finish();
    db.create_post(&post).unwrap();
    post.id.into()
}

pub fn reply_counts_by_parent(db: &MockDb) -> HashMap<String, (u64, u64)> {
    db.comments
        .borrow()
        .iter()
        .map(|c| {
            (
                c.id.to_string(),
                (c.reply_count, db.live_reply_count(c.id.as_str())),
            )
        })
        .collect()
}
