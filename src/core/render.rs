//! Markup builders for the regions the engine rebuilds wholesale. The
//! class names are the page's styling contract and must stay stable.
//!
//! User-supplied text (comment authors/bodies, post titles, excerpts) is
//! escaped here. The post body is trusted server content and passes
//! through with newlines converted to `<br>`.

use crate::domain::model::{CommentEntry, PostDetail, SearchHit, UserReaction};
use crate::utils::fmt::format_number;

pub const LOADING_TITLE: &str = "Loading...";
pub const SUBMIT_LABEL: &str = "Send Comment";
pub const SUBMIT_BUSY_LABEL: &str = "Sending...";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn loading_placeholder() -> String {
    r#"<div class="loading-spinner"><i class="fas fa-spinner fa-spin"></i> Loading content...</div>"#
        .to_string()
}

pub fn no_results() -> String {
    r#"<div class="no-results">No results found</div>"#.to_string()
}

pub fn search_results(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| {
            format!(
                r#"<div class="search-result-item" data-post-id="{id}">
    <h4>{title}</h4>
    <p>{excerpt}</p>
    <div class="result-meta">
        <span><i class="fas fa-tags"></i> {categories}</span>
        <span><i class="fas fa-eye"></i> {views}</span>
        <span><i class="fas fa-heart"></i> {likes}</span>
    </div>
</div>"#,
                id = hit.id,
                title = escape_html(&hit.title),
                excerpt = escape_html(&hit.excerpt),
                categories = escape_html(&hit.categories.join(", ")),
                views = format_number(hit.views),
                likes = format_number(hit.likes),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn post_meta(post: &PostDetail) -> String {
    let categories = post
        .categories
        .iter()
        .map(|cat| {
            format!(
                r#"<span class="category-tag" style="background-color: {color};"><i class="{icon}"></i> {name}</span>"#,
                color = escape_html(&cat.color),
                icon = escape_html(&cat.icon),
                name = escape_html(&cat.name),
            )
        })
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<div class="post-meta-grid">
    <div class="meta-item"><i class="fas fa-calendar"></i> {date}</div>
    <div class="meta-item"><i class="fas fa-clock"></i> {reading_time} min read</div>
    <div class="meta-item"><i class="fas fa-eye"></i> {views} views</div>
    <div class="meta-categories">{categories}</div>
</div>"#,
        date = escape_html(&post.date),
        reading_time = post.reading_time,
        views = format_number(post.views),
    )
}

/// Engagement controls + optional lead image + body. This is the whole
/// post-body region, rebuilt as one fragment.
pub fn post_body(post: &PostDetail) -> String {
    let mut out = engagement(
        post.likes,
        post.dislikes,
        post.user_reaction,
        post.engagement_ratio,
    );
    if let Some(image) = &post.image {
        out.push_str(&format!(
            r#"<img src="{src}" alt="{alt}" class="post-main-image">"#,
            src = escape_html(image),
            alt = escape_html(&post.title),
        ));
    }
    out.push_str(&post.body.replace('\n', "<br>"));
    out
}

pub fn engagement(likes: u64, dislikes: u64, reaction: UserReaction, ratio: f64) -> String {
    let like_active = if reaction == UserReaction::Like { " active" } else { "" };
    let dislike_active = if reaction == UserReaction::Dislike { " active" } else { "" };

    format!(
        r#"<div class="post-engagement">
    <div class="engagement-buttons">
        <button class="like-btn{like_active}" data-type="like">
            <i class="fas fa-thumbs-up"></i>
            <span class="count">{likes}</span>
        </button>
        <button class="dislike-btn{dislike_active}" data-type="dislike">
            <i class="fas fa-thumbs-down"></i>
            <span class="count">{dislikes}</span>
        </button>
    </div>
    <div class="engagement-info">
        <div class="engagement-bar"><div class="engagement-fill" style="width: {ratio:.1}%"></div></div>
        <span class="engagement-text">{ratio:.1}% positive</span>
    </div>
</div>"#,
        likes = format_number(likes),
        dislikes = format_number(dislikes),
    )
}

pub fn comments_section(comments: &[CommentEntry]) -> String {
    let list = if comments.is_empty() {
        r#"<div class="no-comments"><i class="fas fa-comment-slash"></i><p>No comments yet. Be the first to comment!</p></div>"#
            .to_string()
    } else {
        comments
            .iter()
            .map(comment_card)
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<div class="comment-form-container">
    <h3><i class="fas fa-comment-dots"></i> Leave a comment:</h3>
    <form class="comment-form" id="server-comment-form">
        <div class="form-row">
            <div class="form-group">
                <label>Name *</label>
                <input type="text" name="author" required placeholder="Your name" maxlength="60">
            </div>
            <div class="form-group">
                <label>Email (optional)</label>
                <input type="email" name="email" placeholder="you@email.com">
            </div>
        </div>
        <div class="form-group">
            <label>Comment *</label>
            <div class="textarea-container">
                <textarea name="body" rows="4" required placeholder="Write your comment here..." maxlength="1000" class="comment-textarea"></textarea>
                <div class="char-count"><span class="current">0</span> / <span class="max">1000</span></div>
            </div>
        </div>
        <button type="submit" class="submit-comment-btn"><i class="fas fa-paper-plane"></i> {submit}</button>
    </form>
</div>
<div class="comments-list-container">
    <h3 class="comments-title"><i class="fas fa-comments"></i> Comments ({count})</h3>
    <div class="comments-list">{list}</div>
</div>"#,
        submit = SUBMIT_LABEL,
        count = comments.len(),
    )
}

fn comment_card(comment: &CommentEntry) -> String {
    let featured_class = if comment.is_featured { " featured" } else { "" };
    let featured_badge = if comment.is_featured {
        r#"<div class="featured-badge"><i class="fas fa-star"></i> Featured</div>"#
    } else {
        ""
    };
    let verified = if comment.email.is_some() {
        r#" <i class="fas fa-envelope verified-email" title="Verified email"></i>"#
    } else {
        ""
    };

    format!(
        r#"<div class="comment{featured_class}">
    {featured_badge}
    <div class="comment-header">
        <div class="comment-author"><i class="fas fa-user"></i> <strong>{author}</strong>{verified}</div>
        <span class="comment-date"><i class="fas fa-clock"></i> {date}</span>
    </div>
    <p class="comment-body">{body}</p>
</div>"#,
        author = escape_html(&comment.author),
        date = escape_html(&comment.date),
        body = escape_html(&comment.body),
    )
}
