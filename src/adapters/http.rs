use crate::domain::model::{
    CommentOutcome, NewComment, PostDetail, PostId, ReactionOutcome, ReactionRequest,
    SearchResults,
};
use crate::domain::ports::{BlogApi, ConfigProvider};
use crate::utils::cookie;
use crate::utils::error::{Result, UiError};
use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

/// Fallback error payload of every endpoint: `{"error": "..."}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// The real blog server over HTTP. Reads the CSRF token out of the
/// configured cookie header and mirrors it into `X-CSRFToken` on writes,
/// the way the browser page does.
pub struct HttpBlogApi {
    client: Client,
    base: Url,
    cookie_header: Option<String>,
    csrf_token: Option<String>,
}

impl HttpBlogApi {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        let base = Url::parse(config.base_url()).map_err(|e| UiError::ConfigError {
            message: format!("base_url: {e}"),
        })?;
        let cookie_header = config.cookie_header().map(str::to_string);
        let csrf_token = cookie_header
            .as_deref()
            .and_then(|header| cookie::cookie_value(header, CSRF_COOKIE));

        Ok(Self {
            client: Client::new(),
            base,
            cookie_header,
            csrf_token,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|e| UiError::ConfigError {
            message: format!("endpoint {path}: {e}"),
        })
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(header) = &self.cookie_header {
            request = request.header(COOKIE, header);
        }
        request
    }

    fn post(&self, url: Url) -> reqwest::RequestBuilder {
        let mut request = self.client.post(url);
        if let Some(header) = &self.cookie_header {
            request = request.header(COOKIE, header);
        }
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        request
    }

    async fn server_error(response: reqwest::Response, fallback: &str) -> UiError {
        let body: ErrorBody = response.json().await.unwrap_or_default();
        UiError::ServerError {
            message: body.error.unwrap_or_else(|| fallback.to_string()),
        }
    }
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    async fn search(&self, query: &str) -> Result<SearchResults> {
        let url = self.endpoint("/blog/ajax/search/")?;
        tracing::debug!(query, "issuing search request");
        let response = self.get(url).query(&[("q", query)]).send().await?;
        Ok(response.json().await?)
    }

    async fn post_detail(&self, id: PostId) -> Result<PostDetail> {
        let url = self.endpoint(&format!("/blog/ajax/post/{id}/"))?;
        let response = self.get(url).send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::server_error(response, "Failed to load post").await)
        }
    }

    async fn add_comment(&self, comment: &NewComment) -> Result<CommentOutcome> {
        let url = self.endpoint("/blog/ajax/add-comment/")?;
        let response = self.post(url).json(comment).send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::server_error(response, "Failed to submit comment").await)
        }
    }

    async fn react(&self, reaction: &ReactionRequest) -> Result<ReactionOutcome> {
        let url = self.endpoint("/blog/ajax/like-post/")?;
        let response = self.post(url).json(reaction).send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::server_error(response, "Failed to process reaction").await)
        }
    }
}
