use crate::domain::model::{
    CommentOutcome, NewComment, PostDetail, PostId, ReactionOutcome, ReactionRequest,
    SearchResults, Timings,
};
use crate::domain::view::Patch;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The blog server's AJAX surface. One implementation speaks HTTP; tests
/// substitute their own.
#[async_trait]
pub trait BlogApi: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResults>;
    async fn post_detail(&self, id: PostId) -> Result<PostDetail>;
    async fn add_comment(&self, comment: &NewComment) -> Result<CommentOutcome>;
    async fn react(&self, reaction: &ReactionRequest) -> Result<ReactionOutcome>;
}

/// Where patches land. Hosts apply them to a real page; tests record them.
pub trait Surface: Send + Sync {
    fn apply(&self, patch: Patch);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    /// Raw `Cookie` header forwarded to the server; the `csrftoken` value
    /// inside it is mirrored into `X-CSRFToken` on writes.
    fn cookie_header(&self) -> Option<&str>;
    fn timings(&self) -> Timings;
}
