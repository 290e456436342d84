//! Optimistic reactions on the client.
//!
//! Only the reaction of the current user is updated optimistically.
//! Counts are always taken from the server after a toggle has settled.

use std::{collections::HashMap, future::Future, sync::Arc};

use parking_lot::Mutex;

use agora_boundary::{ReactionCounts, ReactionType, ToggleReactionResponse};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionTargetKind {
    Comment,
    Post,
}

/// Identity of a reaction target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetKey {
    pub kind: ReactionTargetKind,
    pub id: String,
}

impl TargetKey {
    pub fn comment(id: impl Into<String>) -> Self {
        Self {
            kind: ReactionTargetKind::Comment,
            id: id.into(),
        }
    }

    pub fn post(id: impl Into<String>) -> Self {
        Self {
            kind: ReactionTargetKind::Post,
            id: id.into(),
        }
    }
}

/// Remote side of the reconciler.
pub trait ReactionBackend {
    fn toggle_reaction(
        &self,
        target: &TargetKey,
        reaction_type: ReactionType,
    ) -> impl Future<Output = Result<ToggleReactionResponse>>;

    fn reaction_counts(&self, target: &TargetKey)
        -> impl Future<Output = Result<ReactionCounts>>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CachedReaction {
    /// What the user sees
    user_reaction: Option<ReactionType>,
    /// Last state acknowledged by the server
    confirmed: Option<ReactionType>,
    /// Sequence number of the toggle that produced `confirmed`
    confirmed_seq: u64,
    /// `None` until fetched or after invalidation
    counts: Option<ReactionCounts>,
    /// Sequence number of the latest in-flight toggle
    pending: Option<u64>,
}

#[derive(Debug, Default)]
struct QueryCache {
    entries: HashMap<TargetKey, CachedReaction>,
    last_seq: u64,
}

/// Handle of a toggle that has been applied locally
/// but not yet settled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingToggle {
    target: TargetKey,
    seq: u64,
    snapshot: Option<ReactionType>,
}

impl PendingToggle {
    pub const fn target(&self) -> &TargetKey {
        &self.target
    }

    /// The confirmed reaction when this toggle started.
    pub const fn snapshot(&self) -> Option<ReactionType> {
        self.snapshot
    }
}

/// Same state machine as on the server.
const fn toggled(current: Option<ReactionType>, requested: ReactionType) -> Option<ReactionType> {
    match (current, requested) {
        (Some(ReactionType::ThumbsUp), ReactionType::ThumbsUp)
        | (Some(ReactionType::ThumbsDown), ReactionType::ThumbsDown) => None,
        _ => Some(requested),
    }
}

/// Session-owned query cache for reactions.
#[derive(Debug, Clone)]
pub struct Reconciler<B> {
    backend: B,
    cache: Arc<Mutex<QueryCache>>,
}

impl<B> Reconciler<B>
where
    B: ReactionBackend,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: Default::default(),
        }
    }

    /// Stores server state, e.g. from a loaded comment page.
    ///
    /// Targets with a toggle in flight keep their local reaction.
    pub fn seed(
        &self,
        target: TargetKey,
        user_reaction: Option<ReactionType>,
        counts: ReactionCounts,
    ) {
        let mut cache = self.cache.lock();
        let entry = cache.entries.entry(target).or_default();
        entry.confirmed = user_reaction;
        entry.counts = Some(counts);
        if entry.pending.is_none() {
            entry.user_reaction = user_reaction;
        }
    }

    pub fn user_reaction(&self, target: &TargetKey) -> Option<ReactionType> {
        self.cache
            .lock()
            .entries
            .get(target)
            .and_then(|entry| entry.user_reaction)
    }

    /// Cached counts or `None` if they need to be (re)fetched.
    pub fn counts(&self, target: &TargetKey) -> Option<ReactionCounts> {
        self.cache
            .lock()
            .entries
            .get(target)
            .and_then(|entry| entry.counts)
    }

    pub fn is_pending(&self, target: &TargetKey) -> bool {
        self.cache
            .lock()
            .entries
            .get(target)
            .is_some_and(|entry| entry.pending.is_some())
    }

    /// Applies the expected outcome of a toggle locally.
    ///
    /// Supersedes any toggle on the same target that is still in flight.
    pub fn begin_toggle(&self, target: TargetKey, requested: ReactionType) -> PendingToggle {
        let mut cache = self.cache.lock();
        cache.last_seq += 1;
        let seq = cache.last_seq;
        let entry = cache.entries.entry(target.clone()).or_default();
        entry.user_reaction = toggled(entry.user_reaction, requested);
        entry.pending = Some(seq);
        PendingToggle {
            target,
            seq,
            snapshot: entry.confirmed,
        }
    }

    /// Applies the server response of a toggle.
    ///
    /// Returns `true` if the toggle was the latest one on its target.
    pub fn settle(
        &self,
        pending: &PendingToggle,
        result: &Result<ToggleReactionResponse>,
    ) -> bool {
        let mut cache = self.cache.lock();
        let Some(entry) = cache.entries.get_mut(&pending.target) else {
            return false;
        };
        let latest = entry.pending == Some(pending.seq);
        match (result, latest) {
            (Ok(response), _) => {
                // Responses may arrive out of order
                if pending.seq > entry.confirmed_seq {
                    entry.confirmed = response.reaction;
                    entry.confirmed_seq = pending.seq;
                }
                if latest {
                    entry.user_reaction = response.reaction;
                }
            }
            (Err(err), true) => {
                log::warn!(
                    "Rolling back reaction on {:?} {}: {err}",
                    pending.target.kind,
                    pending.target.id
                );
                entry.user_reaction = entry.confirmed;
            }
            (Err(err), false) => {
                log::debug!("Superseded toggle failed: {err}");
            }
        }
        if latest {
            entry.pending = None;
        }
        entry.counts = None;
        latest
    }

    /// Refetches the counts of a target.
    pub async fn refresh_counts(&self, target: &TargetKey) -> Result<ReactionCounts> {
        let counts = self.backend.reaction_counts(target).await?;
        if let Some(entry) = self.cache.lock().entries.get_mut(target) {
            entry.counts = Some(counts);
        }
        Ok(counts)
    }

    /// Toggles a reaction optimistically and reconciles
    /// the cache with the response of the server.
    pub async fn toggle(
        &self,
        target: TargetKey,
        requested: ReactionType,
    ) -> Result<ToggleReactionResponse> {
        let pending = self.begin_toggle(target, requested);
        let result = self
            .backend
            .toggle_reaction(pending.target(), requested)
            .await;
        self.settle(&pending, &result);
        if let Err(err) = self.refresh_counts(pending.target()).await {
            log::warn!("Failed to refetch reaction counts: {err}");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use agora_boundary::ReactionAction;
    use std::collections::VecDeque;

    const UP: ReactionType = ReactionType::ThumbsUp;
    const DOWN: ReactionType = ReactionType::ThumbsDown;

    #[derive(Default)]
    struct MockBackend {
        toggle_results: Mutex<VecDeque<Result<ToggleReactionResponse>>>,
        counts: Mutex<ReactionCounts>,
        fetched: Mutex<usize>,
    }

    impl MockBackend {
        fn respond(&self, result: Result<ToggleReactionResponse>) {
            self.toggle_results.lock().push_back(result);
        }
    }

    impl ReactionBackend for &MockBackend {
        async fn toggle_reaction(
            &self,
            _: &TargetKey,
            _: ReactionType,
        ) -> Result<ToggleReactionResponse> {
            self.toggle_results
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Fetch("no response".into())))
        }

        async fn reaction_counts(&self, _: &TargetKey) -> Result<ReactionCounts> {
            *self.fetched.lock() += 1;
            Ok(*self.counts.lock())
        }
    }

    fn response(action: ReactionAction, reaction: Option<ReactionType>) -> ToggleReactionResponse {
        ToggleReactionResponse {
            action,
            reaction,
            counts: Default::default(),
        }
    }

    fn failure() -> Result<ToggleReactionResponse> {
        Err(Error::Api(agora_boundary::Error {
            http_status: 409,
            message: "conflict".into(),
        }))
    }

    fn counts(thumbs_up: u64, thumbs_down: u64) -> ReactionCounts {
        ReactionCounts {
            thumbs_up,
            thumbs_down,
        }
    }

    #[test]
    fn optimistic_value_is_visible_before_settlement() {
        let backend = MockBackend::default();
        let reconciler = Reconciler::new(&backend);
        let target = TargetKey::comment("c2");
        reconciler.seed(target.clone(), None, counts(3, 0));

        let pending = reconciler.begin_toggle(target.clone(), UP);
        assert_eq!(Some(UP), reconciler.user_reaction(&target));
        assert!(reconciler.is_pending(&target));
        assert_eq!(None, pending.snapshot());
        // Counts are never touched optimistically
        assert_eq!(Some(counts(3, 0)), reconciler.counts(&target));

        assert!(reconciler.settle(&pending, &Ok(response(ReactionAction::Added, Some(UP)))));
        assert_eq!(Some(UP), reconciler.user_reaction(&target));
        assert!(!reconciler.is_pending(&target));
        assert_eq!(None, reconciler.counts(&target));
    }

    #[test]
    fn optimistic_state_machine() {
        assert_eq!(Some(UP), toggled(None, UP));
        assert_eq!(None, toggled(Some(UP), UP));
        assert_eq!(Some(DOWN), toggled(Some(UP), DOWN));
        assert_eq!(None, toggled(Some(DOWN), DOWN));
    }

    #[test]
    fn roll_back_to_the_confirmed_state() {
        let backend = MockBackend::default();
        let reconciler = Reconciler::new(&backend);
        let target = TargetKey::post("p");
        reconciler.seed(target.clone(), Some(DOWN), counts(0, 1));

        let pending = reconciler.begin_toggle(target.clone(), UP);
        assert_eq!(Some(UP), reconciler.user_reaction(&target));
        assert_eq!(Some(DOWN), pending.snapshot());
        assert!(reconciler.settle(&pending, &failure()));
        assert_eq!(Some(DOWN), reconciler.user_reaction(&target));
        assert!(!reconciler.is_pending(&target));
    }

    #[test]
    fn superseded_success_only_advances_the_confirmed_state() {
        let backend = MockBackend::default();
        let reconciler = Reconciler::new(&backend);
        let target = TargetKey::comment("c");

        let first = reconciler.begin_toggle(target.clone(), UP);
        let second = reconciler.begin_toggle(target.clone(), UP);
        assert_eq!(None, reconciler.user_reaction(&target));

        assert!(!reconciler.settle(&first, &Ok(response(ReactionAction::Added, Some(UP)))));
        // The latest optimistic value stays visible
        assert_eq!(None, reconciler.user_reaction(&target));
        assert!(reconciler.is_pending(&target));

        // A failure of the latest toggle falls back to what
        // the server acknowledged for the first toggle.
        assert!(reconciler.settle(&second, &failure()));
        assert_eq!(Some(UP), reconciler.user_reaction(&target));
    }

    #[test]
    fn out_of_order_settlements_keep_the_newest_confirmation() {
        let backend = MockBackend::default();
        let reconciler = Reconciler::new(&backend);
        let target = TargetKey::comment("c");
        reconciler.seed(target.clone(), None, counts(0, 0));

        let first = reconciler.begin_toggle(target.clone(), UP);
        let second = reconciler.begin_toggle(target.clone(), UP);

        let removed = Ok(response(ReactionAction::Removed, None));
        assert!(reconciler.settle(&second, &removed));
        assert_eq!(None, reconciler.user_reaction(&target));

        // The stale response of the first toggle arrives last
        let added = Ok(response(ReactionAction::Added, Some(UP)));
        assert!(!reconciler.settle(&first, &added));
        assert_eq!(None, reconciler.user_reaction(&target));

        let third = reconciler.begin_toggle(target.clone(), UP);
        assert_eq!(None, third.snapshot());
        assert_eq!(Some(UP), reconciler.user_reaction(&target));
        assert!(reconciler.settle(&third, &failure()));
        assert_eq!(None, reconciler.user_reaction(&target));
    }

    #[test]
    fn superseded_failure_is_ignored() {
        let backend = MockBackend::default();
        let reconciler = Reconciler::new(&backend);
        let target = TargetKey::comment("c");

        let first = reconciler.begin_toggle(target.clone(), UP);
        let second = reconciler.begin_toggle(target.clone(), DOWN);
        assert!(!reconciler.settle(&first, &failure()));
        assert_eq!(Some(DOWN), reconciler.user_reaction(&target));

        let ok = Ok(response(ReactionAction::Added, Some(DOWN)));
        assert!(reconciler.settle(&second, &ok));
        assert_eq!(Some(DOWN), reconciler.user_reaction(&target));
    }

    #[test]
    fn targets_are_independent() {
        let backend = MockBackend::default();
        let reconciler = Reconciler::new(&backend);
        let a = TargetKey::comment("x");
        let b = TargetKey::post("x");
        let _pending = reconciler.begin_toggle(a.clone(), UP);
        assert_eq!(Some(UP), reconciler.user_reaction(&a));
        assert_eq!(None, reconciler.user_reaction(&b));
        assert!(!reconciler.is_pending(&b));
    }

    #[tokio::test]
    async fn refetch_counts_after_success() {
        let backend = MockBackend::default();
        *backend.counts.lock() = counts(4, 1);
        backend.respond(Ok(response(ReactionAction::Added, Some(UP))));
        let reconciler = Reconciler::new(&backend);
        let target = TargetKey::comment("c");
        reconciler.seed(target.clone(), None, counts(3, 1));

        let response = reconciler.toggle(target.clone(), UP).await.unwrap();
        assert_eq!(ReactionAction::Added, response.action);
        assert_eq!(Some(UP), reconciler.user_reaction(&target));
        assert_eq!(Some(counts(4, 1)), reconciler.counts(&target));
        assert_eq!(1, *backend.fetched.lock());
    }

    #[tokio::test]
    async fn refetch_counts_after_failure() {
        let backend = MockBackend::default();
        *backend.counts.lock() = counts(2, 0);
        backend.respond(failure());
        let reconciler = Reconciler::new(&backend);
        let target = TargetKey::comment("c");
        reconciler.seed(target.clone(), Some(UP), counts(1, 0));

        let err = reconciler.toggle(target.clone(), UP).await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(Some(UP), reconciler.user_reaction(&target));
        assert_eq!(Some(counts(2, 0)), reconciler.counts(&target));
        assert_eq!(1, *backend.fetched.lock());
    }
}
