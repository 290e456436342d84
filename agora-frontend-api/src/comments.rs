use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::RequestCredentials;

use agora_boundary::{
    Comment, CommentPage, CommentSort, NewComment, ReactionCounts, ReactionType, ToggleReaction,
    ToggleReactionResponse, UpdateComment,
};

use crate::{into_json, ReactionBackend, ReactionTargetKind, Result, TargetKey};

/// Comment and reaction API of a single session.
///
/// The actor is identified by the session cookie.
#[derive(Debug, Clone, Copy)]
pub struct CommentApi {
    url: &'static str,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub sort: Option<CommentSort>,
}

impl PageQuery {
    fn query_string(&self) -> String {
        let Self {
            limit,
            offset,
            sort,
        } = self;
        let mut params = vec![];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(sort) = sort {
            let sort = match sort {
                CommentSort::Newest => "newest",
                CommentSort::Oldest => "oldest",
                CommentSort::Popular => "popular",
            };
            params.push(("sort", sort.to_string()));
        }
        if params.is_empty() {
            return String::new();
        }
        let params = params
            .into_iter()
            .map(|(key, value)| [key, &value].join("="))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{params}")
    }
}

fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()
}

const fn target_path(kind: ReactionTargetKind) -> &'static str {
    match kind {
        ReactionTargetKind::Comment => "comments",
        ReactionTargetKind::Post => "posts",
    }
}

impl CommentApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = req
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .send()
            .await?;
        into_json(response).await
    }

    async fn send_json<D, T>(&self, req: RequestBuilder, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let response = req
            .credentials(RequestCredentials::Include)
            .json(data)?
            .send()
            .await?;
        into_json(response).await
    }

    pub async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Comment> {
        let url = format!("{}/posts/{}/comments", self.url, encode_id(post_id));
        self.send_json(Request::post(&url), comment).await
    }

    pub async fn update_comment(&self, id: &str, content: String) -> Result<Comment> {
        let url = format!("{}/comments/{}", self.url, encode_id(id));
        self.send_json(Request::patch(&url), &UpdateComment { content })
            .await
    }

    pub async fn delete_comment(&self, id: &str) -> Result<()> {
        let url = format!("{}/comments/{}", self.url, encode_id(id));
        self.send(Request::delete(&url)).await
    }

    pub async fn comments(&self, post_id: &str, query: &PageQuery) -> Result<CommentPage> {
        let url = format!(
            "{}/posts/{}/comments{}",
            self.url,
            encode_id(post_id),
            query.query_string()
        );
        self.send(Request::get(&url)).await
    }

    pub async fn replies(&self, comment_id: &str, limit: u64, offset: u64) -> Result<Vec<Comment>> {
        let query = PageQuery {
            limit: Some(limit),
            offset: Some(offset),
            sort: None,
        };
        let url = format!(
            "{}/comments/{}/replies{}",
            self.url,
            encode_id(comment_id),
            query.query_string()
        );
        self.send(Request::get(&url)).await
    }

    pub async fn toggle_reaction(
        &self,
        target: &TargetKey,
        reaction_type: ReactionType,
    ) -> Result<ToggleReactionResponse> {
        let url = format!(
            "{}/{}/{}/reactions",
            self.url,
            target_path(target.kind),
            encode_id(&target.id)
        );
        self.send_json(Request::post(&url), &ToggleReaction { reaction_type })
            .await
    }

    pub async fn reaction_counts(&self, target: &TargetKey) -> Result<ReactionCounts> {
        let url = format!(
            "{}/{}/{}/reactions",
            self.url,
            target_path(target.kind),
            encode_id(&target.id)
        );
        self.send(Request::get(&url)).await
    }
}

impl ReactionBackend for CommentApi {
    async fn toggle_reaction(
        &self,
        target: &TargetKey,
        reaction_type: ReactionType,
    ) -> Result<ToggleReactionResponse> {
        CommentApi::toggle_reaction(self, target, reaction_type).await
    }

    async fn reaction_counts(&self, target: &TargetKey) -> Result<ReactionCounts> {
        CommentApi::reaction_counts(self, target).await
    }
}
