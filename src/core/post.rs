use crate::core::notify::Notifier;
use crate::core::render;
use crate::domain::model::{
    NewComment, PostDetail, PostId, ReactionAction, ReactionRequest, UserReaction,
};
use crate::domain::ports::{BlogApi, Surface};
use crate::domain::view::{CounterLevel, Patch, Region};
use crate::utils::error::UiError;
use crate::utils::fmt::{engagement_ratio, format_number};
use crate::utils::validation;
use std::sync::Arc;

/// The post a modal currently shows, with the last server-confirmed
/// engagement numbers. Owned here and overwritten on each open; comment
/// submission reads the id from this state instead of a free-floating
/// page-wide variable.
#[derive(Debug, Clone, Copy)]
pub struct OpenPost {
    id: PostId,
    likes: u64,
    dislikes: u64,
    user_reaction: UserReaction,
}

impl OpenPost {
    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn user_reaction(&self) -> UserReaction {
        self.user_reaction
    }
}

/// Post modal workflow: load → render → submit comments / reactions →
/// re-render with server-confirmed state. Every failure path leaves the
/// modal interactive and re-enables whatever it disabled.
pub struct PostWorkflow<A: BlogApi + 'static> {
    api: Arc<A>,
    surface: Arc<dyn Surface>,
    notifier: Arc<Notifier>,
    open: Option<OpenPost>,
    comments_visible: bool,
}

impl<A: BlogApi + 'static> PostWorkflow<A> {
    pub fn new(api: Arc<A>, surface: Arc<dyn Surface>, notifier: Arc<Notifier>) -> Self {
        Self {
            api,
            surface,
            notifier,
            open: None,
            comments_visible: false,
        }
    }

    pub fn open_post(&self) -> Option<&OpenPost> {
        self.open.as_ref()
    }

    /// Shows the loading placeholder and fetches the post. The caller has
    /// already made the modal visible.
    pub async fn open(&mut self, id: PostId) {
        self.open = Some(OpenPost {
            id,
            likes: 0,
            dislikes: 0,
            user_reaction: UserReaction::None,
        });
        self.surface.apply(Patch::ReplaceHtml {
            region: Region::PostTitle,
            html: render::LOADING_TITLE.to_string(),
        });
        self.surface.apply(Patch::ReplaceHtml {
            region: Region::PostBody,
            html: render::loading_placeholder(),
        });

        match self.api.post_detail(id).await {
            Ok(post) => self.render_post(&post),
            Err(e) => {
                tracing::error!(error = %e, post = id, "failed to load post");
                self.notifier.error("Failed to load post data");
            }
        }
    }

    fn render_post(&mut self, post: &PostDetail) {
        if let Some(open) = self.open.as_mut() {
            open.likes = post.likes;
            open.dislikes = post.dislikes;
            open.user_reaction = post.user_reaction;
        }
        self.surface.apply(Patch::ReplaceHtml {
            region: Region::PostTitle,
            html: render::escape_html(&post.title),
        });
        self.surface.apply(Patch::ReplaceHtml {
            region: Region::PostMeta,
            html: render::post_meta(post),
        });
        self.surface.apply(Patch::ReplaceHtml {
            region: Region::PostBody,
            html: render::post_body(post),
        });
        self.surface.apply(Patch::ReplaceHtml {
            region: Region::PostComments,
            html: render::comments_section(&post.comments),
        });
    }

    /// Reaction click. Press feedback is immediate; displayed counts only
    /// change once the server confirms.
    pub async fn react(&mut self, is_like: bool) {
        let Some(open) = &self.open else { return };
        let post_id = open.id;

        self.surface.apply(Patch::ReactionPressed { is_like });

        let request = ReactionRequest { post_id, is_like };
        match self.api.react(&request).await {
            Ok(outcome) if outcome.success => {
                if let Some(open) = self.open.as_mut() {
                    open.likes = outcome.likes;
                    open.dislikes = outcome.dislikes;
                    open.user_reaction = outcome.user_reaction;
                }
                self.surface.apply(Patch::ReactionCounts {
                    likes: format_number(outcome.likes),
                    dislikes: format_number(outcome.dislikes),
                });
                self.surface.apply(Patch::ReactionActive {
                    like: outcome.user_reaction == UserReaction::Like,
                    dislike: outcome.user_reaction == UserReaction::Dislike,
                });
                let ratio = engagement_ratio(outcome.likes, outcome.dislikes);
                self.surface.apply(Patch::EngagementRatio {
                    width_pct: format!("{ratio:.1}%"),
                    label: format!("{ratio:.1}% positive"),
                });

                let action = match outcome.action {
                    Some(ReactionAction::Removed) => "removed",
                    Some(ReactionAction::Changed) => "changed",
                    _ => "added",
                };
                let reaction = if is_like { "like" } else { "dislike" };
                self.notifier.success(format!("Reaction {action}: {reaction}"));
            }
            Ok(outcome) => {
                let message = outcome
                    .error
                    .unwrap_or_else(|| "Failed to process reaction".to_string());
                self.notifier.error(message);
            }
            Err(e) => {
                tracing::error!(error = %e, post = post_id, "reaction request failed");
                self.notifier.error("Failed to process reaction");
            }
        }
    }

    /// Comment submission. Validation failures toast and never reach the
    /// wire; wire failures re-enable the control and keep the modal open.
    pub async fn submit_comment(&mut self, author: &str, email: &str, body: &str) {
        let Some(open) = &self.open else { return };
        let post_id = open.id;

        let author = author.trim();
        let body = body.trim();
        let email = email.trim();

        if let Err(e) = validation::validate_comment(author, body) {
            self.notifier.error(toast_message(e));
            return;
        }

        self.surface.apply(Patch::SubmitBusy(true));

        let request = NewComment {
            post_id,
            author: author.to_string(),
            body: body.to_string(),
            email: email.to_string(),
        };
        match self.api.add_comment(&request).await {
            Ok(outcome) if outcome.success => {
                // Re-fetch so the comment list reflects server state
                // (moderation flags, featured ordering) instead of an
                // optimistic local append.
                match self.api.post_detail(post_id).await {
                    Ok(post) => self.surface.apply(Patch::ReplaceHtml {
                        region: Region::PostComments,
                        html: render::comments_section(&post.comments),
                    }),
                    Err(e) => {
                        tracing::error!(error = %e, post = post_id, "failed to reload post");
                        self.notifier.error("Failed to load post data");
                    }
                }
                self.notifier.success("Comment added successfully!");
            }
            Ok(outcome) => {
                let reason = outcome.error.unwrap_or_else(|| "unknown error".to_string());
                self.notifier
                    .error(format!("Failed to submit comment: {reason}"));
            }
            Err(UiError::ServerError { message }) => {
                self.notifier
                    .error(format!("Failed to submit comment: {message}"));
            }
            Err(e) => {
                tracing::error!(error = %e, post = post_id, "comment request failed");
                self.notifier.error("Failed to submit comment");
            }
        }

        self.surface.apply(Patch::SubmitBusy(false));
    }

    /// Live character counter under the comment textarea.
    pub fn comment_draft(&self, text: &str) {
        let count = text.chars().count();
        self.surface.apply(Patch::CharCounter {
            count,
            level: counter_level(count),
        });
    }

    pub fn toggle_comments(&mut self) {
        self.comments_visible = !self.comments_visible;
        let label = if self.comments_visible {
            "Hide Comments"
        } else {
            "Show Comments"
        };
        self.surface.apply(Patch::CommentsPanel {
            visible: self.comments_visible,
            label: label.to_string(),
        });
    }
}

fn counter_level(count: usize) -> CounterLevel {
    if count > 900 {
        CounterLevel::Red
    } else if count > 750 {
        CounterLevel::Amber
    } else {
        CounterLevel::Green
    }
}

fn toast_message(e: UiError) -> String {
    match e {
        UiError::ValidationError { message } | UiError::ServerError { message } => message,
        other => other.to_string(),
    }
}
