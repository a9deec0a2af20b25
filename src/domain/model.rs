use serde::{Deserialize, Serialize};
use std::time::Duration;

pub type PostId = u64;

/// Server-side comment length limit mirrored client-side so oversized
/// comments never reach the wire.
pub const MAX_COMMENT_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserReaction {
    #[default]
    None,
    Like,
    Dislike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionAction {
    Added,
    Changed,
    Removed,
}

/// One row of `GET /blog/ajax/search/` results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub views: u64,
    pub likes: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTag {
    pub name: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentEntry {
    pub author: String,
    #[serde(default)]
    pub email: Option<String>,
    pub body: String,
    pub date: String,
    #[serde(default)]
    pub is_featured: bool,
}

/// Full post payload from `GET /blog/ajax/post/<id>/`. Fetched per modal
/// open; never cached.
#[derive(Debug, Clone, Deserialize)]
pub struct PostDetail {
    pub id: PostId,
    pub title: String,
    pub date: String,
    pub reading_time: u32,
    pub views: u64,
    #[serde(default)]
    pub categories: Vec<CategoryTag>,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    pub likes: u64,
    pub dislikes: u64,
    #[serde(default)]
    pub user_reaction: UserReaction,
    pub engagement_ratio: f64,
    #[serde(default)]
    pub comments: Vec<CommentEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub post_id: PostId,
    pub author: String,
    pub body: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReactionRequest {
    pub post_id: PostId,
    pub is_like: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionOutcome {
    pub success: bool,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
    #[serde(default)]
    pub user_reaction: UserReaction,
    #[serde(default)]
    pub action: Option<ReactionAction>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Behavioral timing windows. These are contract, not cosmetics: the
/// navigation cool-down and the search debounce are observable in tests.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    /// Lock held after a section transition.
    pub transition_cooldown: Duration,
    /// Minimum gap between accepted wheel steps.
    pub wheel_threshold: Duration,
    /// Quiet period before a search query is issued.
    pub search_debounce: Duration,
    /// Delay between hiding a filtered card and collapsing it from layout.
    pub collapse_delay: Duration,
    /// Toast lifetime before auto-dismiss.
    pub toast_ttl: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            transition_cooldown: Duration::from_millis(800),
            wheel_threshold: Duration::from_millis(700),
            search_debounce: Duration::from_millis(300),
            collapse_delay: Duration::from_millis(300),
            toast_ttl: Duration::from_millis(4000),
        }
    }
}
