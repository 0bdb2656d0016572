//! Post list with a create/update/delete form.
//!
//! Writes are "fire and reconcile": nothing in the local list changes until
//! the server confirms the write. A failed write only sets the write error.

use tracing::{debug, info, warn};

use crate::channel::FetchChannel;
use crate::client::RestClient;
use crate::effect::{Fetch, FetchKey, Outcome};
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{Post, PostDraft};

#[derive(Debug, Clone)]
pub struct CrudFormView {
    client: RestClient,
    mounted: bool,
    posts: FetchChannel<Vec<Post>>,
    draft: PostDraft,
    /// Id of the post loaded into the draft by `edit`.
    editing: Option<u32>,
    /// Only the phase is used; one write is in flight at a time.
    write: FetchChannel<()>,
}

impl CrudFormView {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            mounted: false,
            posts: FetchChannel::new(),
            draft: PostDraft::default(),
            editing: None,
            write: FetchChannel::new(),
        }
    }

    /// Returns the list fetch on the first call only.
    pub fn mount(&mut self) -> Option<Fetch> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.posts.begin();
        debug!("fetching posts for the form");
        Some(Fetch::new(FetchKey::CrudList, self.client.build_list_posts()))
    }

    pub fn settle_list(&mut self, outcome: Outcome) {
        match outcome.and_then(|response| self.client.parse_list_posts(response)) {
            Ok(posts) => {
                info!(count = posts.len(), "form posts loaded");
                self.posts.succeed(posts);
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch form posts");
                self.posts.fail(err.to_string());
            }
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
    }

    pub fn set_body(&mut self, body: &str) {
        self.draft.body = body.to_string();
    }

    pub fn set_user_id(&mut self, user_id: u32) {
        self.draft.user_id = user_id;
    }

    /// Load an existing post into the draft. Returns `false` if the id is not
    /// in the local list.
    pub fn edit(&mut self, id: u32) -> bool {
        match self.posts.data().iter().find(|post| post.id == id) {
            Some(post) => {
                self.draft = PostDraft::from_post(post);
                self.editing = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn clear_draft(&mut self) {
        self.draft = PostDraft::default();
        self.editing = None;
    }

    pub fn submit_create(&mut self) -> Option<Fetch> {
        let request = self.client.build_create_post(&self.draft);
        self.start_write(FetchKey::CrudCreate, request)
    }

    pub fn submit_update(&mut self, id: u32) -> Option<Fetch> {
        let request = self.client.build_update_post(id, &self.draft);
        self.start_write(FetchKey::CrudUpdate { id }, request)
    }

    pub fn delete(&mut self, id: u32) -> Option<Fetch> {
        if !self.can_write() {
            return None;
        }
        self.write.begin();
        debug!(id, "deleting post");
        Some(Fetch::new(
            FetchKey::CrudDelete { id },
            self.client.build_delete_post(id),
        ))
    }

    /// Writes wait for the list fetch: a list settling after a confirmed
    /// write would replace the reconciled data.
    fn can_write(&mut self) -> bool {
        if self.write.is_loading() {
            return false;
        }
        if self.posts.is_loading() {
            self.write.fail("post list is still loading");
            return false;
        }
        true
    }

    fn start_write(
        &mut self,
        key: FetchKey,
        request: Result<HttpRequest, ApiError>,
    ) -> Option<Fetch> {
        if !self.can_write() {
            return None;
        }
        if self.draft.title.trim().is_empty() {
            self.write.fail("title is required");
            return None;
        }
        match request {
            Ok(request) => {
                self.write.begin();
                debug!(?key, "submitting post");
                Some(Fetch::new(key, request))
            }
            Err(err) => {
                self.write.fail(err.to_string());
                None
            }
        }
    }

    pub fn settle_create(&mut self, outcome: Outcome) {
        match outcome.and_then(|response| self.client.parse_create_post(response)) {
            Ok(mut post) => {
                // The public host answers every create with the same id.
                if self.posts.data().iter().any(|p| p.id == post.id) {
                    post.id = self.next_local_id();
                }
                info!(id = post.id, "post created");
                self.posts.data_mut().push(post);
                self.clear_draft();
                self.write.succeed(());
            }
            Err(err) => self.write_failed("create", err),
        }
    }

    pub fn settle_update(&mut self, id: u32, outcome: Outcome) {
        match outcome.and_then(|response| self.client.parse_update_post(response)) {
            Ok(post) => {
                let post = Post { id, ..post };
                match self.posts.data_mut().iter_mut().find(|p| p.id == id) {
                    Some(entry) => *entry = post,
                    None => debug!(id, "updated post is not in the local list"),
                }
                info!(id, "post updated");
                self.clear_draft();
                self.write.succeed(());
            }
            Err(err) => self.write_failed("update", err),
        }
    }

    pub fn settle_delete(&mut self, id: u32, outcome: Outcome) {
        match outcome.and_then(|response| self.client.parse_delete_post(response)) {
            Ok(()) => {
                self.posts.data_mut().retain(|post| post.id != id);
                if self.editing == Some(id) {
                    self.clear_draft();
                }
                info!(id, "post deleted");
                self.write.succeed(());
            }
            Err(err) => self.write_failed("delete", err),
        }
    }

    fn write_failed(&mut self, action: &str, err: ApiError) {
        warn!(action, error = %err, "post write failed");
        self.write.fail(err.to_string());
    }

    fn next_local_id(&self) -> u32 {
        self.posts.data().iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn posts(&self) -> &FetchChannel<Vec<Post>> {
        &self.posts
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn editing(&self) -> Option<u32> {
        self.editing
    }

    pub fn is_writing(&self) -> bool {
        self.write.is_loading()
    }

    pub fn write_error(&self) -> Option<&str> {
        self.write.error()
    }
}
