//! The UI controller: ties the config store, the remote API, the display
//! container and the edit modal together.
//!
//! Every remote failure is logged and swallowed here. Callers never see an
//! error and the container keeps whatever it showed before the failed call.

use crate::{
    client::PostsApi,
    config_store::ConfigStore,
    dto::{Direction, PostDraft, PostPatch, SearchQuery, SortKey},
    edit_session::{EditDraft, EditSession},
    errors::ClientError,
    models::Post,
    render::{PostContainer, render},
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info};

pub struct Frontend<A, S> {
    api: A,
    store: Mutex<S>,
    container: Mutex<PostContainer>,
    session: Mutex<EditSession>,
}

impl<A, S> Frontend<A, S>
where
    A: PostsApi,
    S: ConfigStore + Send,
{
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store: Mutex::new(store),
            container: Mutex::new(PostContainer::default()),
            session: Mutex::new(EditSession::default()),
        }
    }

    /// The persisted base URL. A saved empty string counts as unset.
    pub fn base_url(&self) -> Option<String> {
        lock(&self.store).get().filter(|url| !url.is_empty())
    }

    /// Snapshot of what the page currently shows.
    pub fn container(&self) -> PostContainer {
        lock(&self.container).clone()
    }

    pub fn session(&self) -> EditSession {
        lock(&self.session).clone()
    }

    /// Restores the saved base URL and, if there is one, shows its posts.
    pub async fn bootstrap(&self) -> Option<String> {
        let base_url = self.base_url();
        match &base_url {
            Some(url) => {
                info!("Restored API base URL {}", url);
                self.refresh(url).await;
            }
            None => info!("No API base URL saved yet"),
        }
        base_url
    }

    /// Remembers `base_url` and lists its posts.
    pub async fn load_posts(&self, base_url: &str) {
        // A few bytes written synchronously under the store lock. The lock
        // is never held across an await, so nothing queues behind the write.
        let saved = lock(&self.store).set(base_url);
        if let Err(e) = saved {
            error!("Error: could not save API base URL: {}", e);
        }
        self.refresh(base_url).await;
    }

    /// Fetches the full list and re-renders it. Returns whether it worked.
    pub async fn refresh(&self, base_url: &str) -> bool {
        let posts = self.api.list(base_url).await;
        self.show(posts)
    }

    pub async fn search_posts(&self, base_url: &str, query: &SearchQuery) -> bool {
        let posts = self.api.search(base_url, query).await;
        self.show(posts)
    }

    pub async fn sort_posts(&self, base_url: &str, key: SortKey, direction: Direction) -> bool {
        let posts = self.api.list_sorted(base_url, key, direction).await;
        self.show(posts)
    }

    pub async fn add_post(&self, base_url: &str, draft: PostDraft) -> Option<Post> {
        match self.api.create(base_url, draft).await {
            Ok(post) => {
                info!("Post added: {}", post.id);
                self.refresh(base_url).await;
                Some(post)
            }
            Err(e) => {
                log_failure("add post", &e);
                None
            }
        }
    }

    pub async fn delete_post(&self, base_url: &str, id: i64) -> bool {
        match self.api.delete(base_url, id).await {
            Ok(()) => {
                info!("Post deleted: {}", id);
                self.refresh(base_url).await;
                true
            }
            Err(e) => {
                log_failure("delete post", &e);
                false
            }
        }
    }

    /// Shows the edit modal for `post_id` with a blank draft.
    pub fn open_edit(&self, post_id: i64) {
        lock(&self.session).open(post_id);
    }

    pub fn update_draft(&self, fields: EditDraft) {
        lock(&self.session).set_draft(fields);
    }

    pub fn cancel_edit(&self) {
        lock(&self.session).close();
    }

    /// Submits the open draft.
    ///
    /// The modal is closed before the update is sent, so it stays closed
    /// whether or not the update succeeds.
    pub async fn confirm_edit(&self, base_url: &str) -> Option<Post> {
        let (post_id, patch) = self.take_edit()?;
        self.submit_edit(base_url, post_id, &patch).await
    }

    /// Closes the modal and returns the update it held, if it was open.
    pub fn take_edit(&self) -> Option<(i64, PostPatch)> {
        lock(&self.session).confirm()
    }

    /// Sends an update taken from the modal, refreshing on success.
    pub async fn submit_edit(&self, base_url: &str, post_id: i64, patch: &PostPatch) -> Option<Post> {
        match self.api.update(base_url, post_id, patch).await {
            Ok(post) => {
                info!("Post updated: {}", post_id);
                self.refresh(base_url).await;
                Some(post)
            }
            Err(e) => {
                log_failure("update post", &e);
                None
            }
        }
    }

    fn show(&self, posts: Result<Vec<Post>, ClientError>) -> bool {
        match posts {
            Ok(posts) => {
                render(&mut lock(&self.container), &posts);
                true
            }
            Err(e) => {
                log_failure("load posts", &e);
                false
            }
        }
    }
}

fn log_failure(action: &str, e: &ClientError) {
    error!("Error: could not {}: {}", action, e);
}

// A panic while holding one of these locks cannot leave the guarded value
// half-updated, so a poisoned lock is still safe to use.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// A recorded call to the mock API.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        List(String),
        ListSorted(SortKey, Direction),
        Search(SearchQuery),
        Create(PostDraft),
        Update(i64, PostPatch),
        Delete(i64),
    }

    /// A mock implementation of `PostsApi` that records every call.
    #[derive(Default)]
    pub struct MockApi {
        pub posts: Mutex<Vec<Post>>,
        pub fail_list: Mutex<bool>,
        pub fail_mutations: Mutex<bool>,
        pub calls: Mutex<Vec<Call>>,
    }

    impl MockApi {
        pub fn with_posts(posts: Vec<Post>) -> Self {
            Self {
                posts: Mutex::new(posts),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn list_calls(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, Call::List(_)))
                .count()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn current(&self) -> Result<Vec<Post>, ClientError> {
            if *self.fail_list.lock().unwrap() {
                return Err(ClientError::InvalidUrl("simulated".into()));
            }
            Ok(self.posts.lock().unwrap().clone())
        }

        fn mutation(&self) -> Result<(), ClientError> {
            if *self.fail_mutations.lock().unwrap() {
                return Err(ClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
            }
            Ok(())
        }
    }

    impl PostsApi for MockApi {
        async fn list(&self, base_url: &str) -> Result<Vec<Post>, ClientError> {
            self.record(Call::List(base_url.to_string()));
            self.current()
        }

        async fn list_sorted(
            &self,
            _base_url: &str,
            key: SortKey,
            direction: Direction,
        ) -> Result<Vec<Post>, ClientError> {
            self.record(Call::ListSorted(key, direction));
            self.current()
        }

        async fn search(&self, _base_url: &str, query: &SearchQuery) -> Result<Vec<Post>, ClientError> {
            self.record(Call::Search(query.clone()));
            self.current()
        }

        async fn create(&self, _base_url: &str, draft: PostDraft) -> Result<Post, ClientError> {
            self.record(Call::Create(draft.clone()));
            self.mutation()?;
            let mut posts = self.posts.lock().unwrap();
            let post = Post {
                id: posts.iter().map(|p| p.id).max().unwrap_or(0) + 1,
                title: draft.title,
                content: draft.content,
                author: draft.author,
                date: "2024-03-05".into(),
            };
            posts.push(post.clone());
            Ok(post)
        }

        async fn update(&self, _base_url: &str, id: i64, patch: &PostPatch) -> Result<Post, ClientError> {
            self.record(Call::Update(id, patch.clone()));
            self.mutation()?;
            let mut posts = self.posts.lock().unwrap();
            let post = posts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(ClientError::Status(reqwest::StatusCode::NOT_FOUND))?;
            if let Some(title) = &patch.title {
                post.title = title.clone();
            }
            if let Some(content) = &patch.content {
                post.content = content.clone();
            }
            if let Some(author) = &patch.author {
                post.author = author.clone();
            }
            if let Some(date) = &patch.date {
                post.date = date.clone();
            }
            Ok(post.clone())
        }

        async fn delete(&self, _base_url: &str, id: i64) -> Result<(), ClientError> {
            self.record(Call::Delete(id));
            self.mutation()?;
            self.posts.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{Call, MockApi};
    use super::*;
    use crate::config_store::MemoryStore;

    const BASE: &str = "http://blog.test/api";

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: "Body".to_string(),
            author: "Ann".to_string(),
            date: "2024-03-05".to_string(),
        }
    }

    fn frontend(posts: Vec<Post>) -> Frontend<MockApi, MemoryStore> {
        Frontend::new(MockApi::with_posts(posts), MemoryStore::default())
    }

    fn titles(frontend: &Frontend<MockApi, MemoryStore>) -> Vec<String> {
        frontend
            .container()
            .blocks()
            .iter()
            .map(|b| b.title.clone())
            .collect()
    }

    #[tokio::test]
    async fn bootstrap_without_saved_url_does_nothing() {
        let frontend = frontend(vec![post(1, "a")]);

        assert_eq!(frontend.bootstrap().await, None);

        assert!(frontend.api.calls().is_empty());
        assert!(frontend.container().is_empty());
    }

    #[tokio::test]
    async fn saved_empty_url_counts_as_unset() {
        let frontend = Frontend::new(
            MockApi::with_posts(vec![post(1, "a")]),
            MemoryStore::with_url(""),
        );

        assert_eq!(frontend.base_url(), None);
        assert_eq!(frontend.bootstrap().await, None);
        assert!(frontend.api.calls().is_empty());
    }

    #[tokio::test]
    async fn take_edit_closes_before_anything_is_sent() {
        let frontend = frontend(vec![post(1, "a")]);
        frontend.open_edit(1);

        let taken = frontend.take_edit();

        assert_eq!(taken, Some((1, PostPatch::default())));
        assert_eq!(frontend.session(), EditSession::Closed);
        assert!(frontend.api.calls().is_empty());
    }

    #[tokio::test]
    async fn bootstrap_with_saved_url_lists_posts() {
        let frontend = Frontend::new(
            MockApi::with_posts(vec![post(1, "a")]),
            MemoryStore::with_url(BASE),
        );

        assert_eq!(frontend.bootstrap().await.as_deref(), Some(BASE));

        assert_eq!(frontend.api.calls(), vec![Call::List(BASE.into())]);
        assert_eq!(titles(&frontend), ["a"]);
    }

    #[tokio::test]
    async fn load_posts_persists_the_url_and_renders() {
        let frontend = frontend(vec![post(2, "b"), post(1, "a")]);

        frontend.load_posts(BASE).await;

        assert_eq!(frontend.base_url().as_deref(), Some(BASE));
        assert_eq!(titles(&frontend), ["b", "a"]);
    }

    #[tokio::test]
    async fn failed_list_leaves_container_unchanged() {
        let frontend = frontend(vec![post(1, "a")]);
        frontend.load_posts(BASE).await;
        let before = frontend.container();

        *frontend.api.fail_list.lock().unwrap() = true;
        frontend.load_posts(BASE).await;

        assert_eq!(frontend.container(), before);
    }

    #[tokio::test]
    async fn add_post_refreshes_exactly_once() {
        let frontend = frontend(vec![]);
        let draft = PostDraft {
            title: "new".into(),
            content: "Body".into(),
            author: "Ann".into(),
        };

        let created = frontend.add_post(BASE, draft.clone()).await;

        assert_eq!(created.map(|p| p.id), Some(1));
        assert_eq!(
            frontend.api.calls(),
            vec![Call::Create(draft), Call::List(BASE.into())]
        );
        assert_eq!(titles(&frontend), ["new"]);
    }

    #[tokio::test]
    async fn delete_post_refreshes_exactly_once() {
        let frontend = frontend(vec![post(1, "a"), post(2, "b")]);

        assert!(frontend.delete_post(BASE, 1).await);

        assert_eq!(
            frontend.api.calls(),
            vec![Call::Delete(1), Call::List(BASE.into())]
        );
        assert_eq!(titles(&frontend), ["b"]);
    }

    #[tokio::test]
    async fn failed_mutation_skips_refresh() {
        let frontend = frontend(vec![post(1, "a")]);
        *frontend.api.fail_mutations.lock().unwrap() = true;

        assert!(!frontend.delete_post(BASE, 1).await);
        assert!(frontend.add_post(BASE, PostDraft::default()).await.is_none());

        assert_eq!(frontend.api.list_calls(), 0);
    }

    #[tokio::test]
    async fn confirm_edit_sends_only_filled_fields_then_refreshes() {
        let frontend = frontend(vec![post(1, "a")]);
        frontend.open_edit(1);
        frontend.update_draft(EditDraft {
            title: "renamed".into(),
            ..Default::default()
        });

        let updated = frontend.confirm_edit(BASE).await;

        assert_eq!(updated.map(|p| p.title), Some("renamed".to_string()));
        assert_eq!(
            frontend.api.calls(),
            vec![
                Call::Update(
                    1,
                    PostPatch {
                        title: Some("renamed".into()),
                        ..Default::default()
                    }
                ),
                Call::List(BASE.into()),
            ]
        );
        assert_eq!(frontend.session(), EditSession::Closed);
        assert_eq!(titles(&frontend), ["renamed"]);
    }

    #[tokio::test]
    async fn confirm_edit_closes_even_when_update_fails() {
        let frontend = frontend(vec![post(1, "a")]);
        *frontend.api.fail_mutations.lock().unwrap() = true;
        frontend.open_edit(1);

        assert!(frontend.confirm_edit(BASE).await.is_none());

        assert_eq!(frontend.session(), EditSession::Closed);
        assert_eq!(frontend.api.list_calls(), 0);
    }

    #[tokio::test]
    async fn confirm_without_open_session_sends_nothing() {
        let frontend = frontend(vec![post(1, "a")]);

        assert!(frontend.confirm_edit(BASE).await.is_none());

        assert!(frontend.api.calls().is_empty());
    }

    #[tokio::test]
    async fn cancel_edit_discards_the_draft() {
        let frontend = frontend(vec![post(1, "a")]);
        frontend.open_edit(1);
        frontend.update_draft(EditDraft {
            title: "typed".into(),
            ..Default::default()
        });

        frontend.cancel_edit();

        assert_eq!(frontend.session(), EditSession::Closed);
        assert!(frontend.api.calls().is_empty());
    }

    #[tokio::test]
    async fn search_and_sort_render_what_the_server_returns() {
        let frontend = frontend(vec![post(2, "b"), post(1, "a")]);
        let query = SearchQuery {
            title: "a".into(),
            ..Default::default()
        };

        assert!(frontend.search_posts(BASE, &query).await);
        assert!(frontend.sort_posts(BASE, SortKey::Title, Direction::Asc).await);

        assert_eq!(
            frontend.api.calls(),
            vec![
                Call::Search(query),
                Call::ListSorted(SortKey::Title, Direction::Asc)
            ]
        );
        assert_eq!(titles(&frontend), ["b", "a"]);
    }
}
