//! HTTP client for the remote blog API.

use crate::{
    dto::{Direction, NewPostRequest, PostDraft, PostPatch, SearchQuery, SortKey, UpdatePostRequest},
    errors::ClientError,
    models::Post,
};
use chrono::{Local, NaiveDate};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::future::Future;

/// The remote operations the UI needs.
///
/// Every call takes the base URL explicitly; implementations never remember
/// it between calls.
pub trait PostsApi: Send + Sync {
    /// GET {base_url}/posts
    fn list(&self, base_url: &str) -> impl Future<Output = Result<Vec<Post>, ClientError>> + Send;

    /// GET {base_url}/posts?sort=<key>&direction=<asc|desc>
    fn list_sorted(
        &self,
        base_url: &str,
        key: SortKey,
        direction: Direction,
    ) -> impl Future<Output = Result<Vec<Post>, ClientError>> + Send;

    /// GET {base_url}/posts/search?<non-empty filters>
    fn search(
        &self,
        base_url: &str,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<Post>, ClientError>> + Send;

    /// POST {base_url}/posts, dated with today's local date
    fn create(
        &self,
        base_url: &str,
        draft: PostDraft,
    ) -> impl Future<Output = Result<Post, ClientError>> + Send;

    /// PUT {base_url}/posts/{id} with the id plus only the fields in `patch`
    fn update(
        &self,
        base_url: &str,
        id: i64,
        patch: &PostPatch,
    ) -> impl Future<Output = Result<Post, ClientError>> + Send;

    /// DELETE {base_url}/posts/{id}, response body ignored
    fn delete(&self, base_url: &str, id: i64) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// `PostsApi` over real HTTP.
#[derive(Clone)]
pub struct HttpPostsApi {
    http: reqwest::Client,
    today: fn() -> NaiveDate,
}

impl Default for HttpPostsApi {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl HttpPostsApi {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            today: local_today,
        }
    }

    /// Replaces the clock used to date new posts.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    async fn get_posts(&self, url: Url) -> Result<Vec<Post>, ClientError> {
        let response = self.http.get(url).send().await?;
        decode(response).await
    }
}

impl PostsApi for HttpPostsApi {
    async fn list(&self, base_url: &str) -> Result<Vec<Post>, ClientError> {
        self.get_posts(posts_url(base_url, &[])?).await
    }

    async fn list_sorted(
        &self,
        base_url: &str,
        key: SortKey,
        direction: Direction,
    ) -> Result<Vec<Post>, ClientError> {
        let url = posts_url(
            base_url,
            &[("sort", key.as_str()), ("direction", direction.as_str())],
        )?;
        self.get_posts(url).await
    }

    async fn search(&self, base_url: &str, query: &SearchQuery) -> Result<Vec<Post>, ClientError> {
        let url = parse_url(&format!("{}/posts/search", base_url), &query.pairs())?;
        self.get_posts(url).await
    }

    async fn create(&self, base_url: &str, draft: PostDraft) -> Result<Post, ClientError> {
        let body: NewPostRequest = draft.dated((self.today)());
        let response = self
            .http
            .post(posts_url(base_url, &[])?)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    async fn update(&self, base_url: &str, id: i64, patch: &PostPatch) -> Result<Post, ClientError> {
        let body = UpdatePostRequest { id, patch };
        let response = self
            .http
            .put(post_url(base_url, id)?)
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete(&self, base_url: &str, id: i64) -> Result<(), ClientError> {
        let response = self.http.delete(post_url(base_url, id)?).send().await?;
        check_status(&response)?;
        Ok(())
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

// Base URLs are joined by plain concatenation, so "http://host/api/" yields
// "http://host/api//posts". Users type the root without a trailing slash.
fn posts_url(base_url: &str, query: &[(&str, &str)]) -> Result<Url, ClientError> {
    parse_url(&format!("{}/posts", base_url), query)
}

fn post_url(base_url: &str, id: i64) -> Result<Url, ClientError> {
    parse_url(&format!("{}/posts/{}", base_url, id), &[])
}

fn parse_url(raw: &str, query: &[(&str, &str)]) -> Result<Url, ClientError> {
    let parsed = if query.is_empty() {
        Url::parse(raw)
    } else {
        Url::parse_with_params(raw, query)
    };
    parsed.map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
}

fn check_status(response: &Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Status(status))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    check_status(&response)?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
