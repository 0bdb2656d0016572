//! Searchable user list with a dependent per-user posts list.
//!
//! # Design
//! Two independent channels: `users` is fetched once on mount, `posts` is
//! re-fetched every time the selection becomes non-empty. The posts fetch is
//! keyed by the owner id (and a sequence number) captured when it was
//! issued; `settle_posts` drops any outcome whose key no longer matches the
//! live selection, so a slow response for a previously selected user can
//! never overwrite the list of the current one.

use tracing::{debug, info, warn};

use crate::channel::FetchChannel;
use crate::client::RestClient;
use crate::effect::{Fetch, FetchKey, Outcome};
use crate::types::{Post, User};

/// Counters shown under the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total_users: usize,
    pub filtered_users: usize,
    pub user_posts: usize,
    pub has_selection: bool,
}

#[derive(Debug, Clone)]
pub struct DependentFetchView {
    client: RestClient,
    mounted: bool,
    users: FetchChannel<Vec<User>>,
    posts: FetchChannel<Vec<Post>>,
    /// Empty when nothing is selected.
    selected_owner_id: String,
    posts_seq: u64,
    filter_term: String,
}

impl DependentFetchView {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            mounted: false,
            users: FetchChannel::new(),
            posts: FetchChannel::new(),
            selected_owner_id: String::new(),
            posts_seq: 0,
            filter_term: String::new(),
        }
    }

    /// Returns the users fetch on the first call only.
    pub fn mount(&mut self) -> Option<Fetch> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.users.begin();
        debug!("fetching users");
        Some(Fetch::new(FetchKey::Users, self.client.build_list_users()))
    }

    pub fn settle_users(&mut self, outcome: Outcome) {
        match outcome.and_then(|response| self.client.parse_list_users(response)) {
            Ok(users) => {
                info!(count = users.len(), "users loaded");
                self.users.succeed(users);
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch users");
                self.users.fail(err.to_string());
            }
        }
    }

    /// Select the owner whose posts should be shown. Clears the current posts
    /// and their error, then runs the dependent fetch for the new selection.
    pub fn select_owner(&mut self, id: &str) -> Option<Fetch> {
        self.selected_owner_id = id.trim().to_string();
        self.posts.clear();
        let owner_id = self.selected_owner_id.clone();
        self.dependent_fetch(&owner_id)
    }

    /// Issue the posts fetch for `owner_id`. An empty id is a no-op.
    fn dependent_fetch(&mut self, owner_id: &str) -> Option<Fetch> {
        if owner_id.is_empty() {
            return None;
        }
        // Ids go into the query string verbatim.
        if owner_id.parse::<u32>().is_err() {
            warn!(owner_id, "not fetching posts for a malformed user id");
            self.posts.fail(format!("'{owner_id}' is not a valid user id"));
            return None;
        }
        self.posts_seq += 1;
        self.posts.begin();
        debug!(owner_id, seq = self.posts_seq, "fetching posts");
        Some(Fetch::new(
            FetchKey::Posts {
                owner_id: owner_id.to_string(),
                seq: self.posts_seq,
            },
            self.client.build_list_posts_by_user(owner_id),
        ))
    }

    /// Commit a posts outcome. Returns `false` when the outcome is stale and
    /// was discarded without touching state.
    pub fn settle_posts(&mut self, owner_id: &str, seq: u64, outcome: Outcome) -> bool {
        if owner_id != self.selected_owner_id || seq != self.posts_seq {
            debug!(
                owner_id,
                seq,
                current = %self.selected_owner_id,
                "discarding stale posts result"
            );
            return false;
        }
        match outcome.and_then(|response| self.client.parse_list_posts(response)) {
            Ok(posts) => {
                info!(owner_id, count = posts.len(), "posts loaded");
                self.posts.succeed(posts);
            }
            Err(err) => {
                warn!(owner_id, error = %err, "failed to fetch posts");
                self.posts.fail(err.to_string());
            }
        }
        true
    }

    pub fn set_filter_term(&mut self, text: &str) {
        self.filter_term = text.to_string();
    }

    /// Users whose name or email contains the filter term, ignoring case.
    pub fn filtered_users(&self) -> Vec<&User> {
        let needle = self.filter_term.to_lowercase();
        self.users
            .data()
            .iter()
            .filter(|user| user.matches(&needle))
            .collect()
    }

    /// Clear the selection, the posts and the filter. Users stay loaded.
    pub fn reset(&mut self) {
        self.selected_owner_id.clear();
        self.posts.clear();
        self.filter_term.clear();
    }

    pub fn users(&self) -> &FetchChannel<Vec<User>> {
        &self.users
    }

    pub fn posts(&self) -> &FetchChannel<Vec<Post>> {
        &self.posts
    }

    pub fn selected_owner_id(&self) -> Option<&str> {
        if self.selected_owner_id.is_empty() {
            None
        } else {
            Some(&self.selected_owner_id)
        }
    }

    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }

    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected_owner_id()?;
        self.users
            .data()
            .iter()
            .find(|user| user.id.to_string() == id)
    }

    pub fn is_selected(&self, user: &User) -> bool {
        self.selected_owner_id() == Some(user.id.to_string().as_str())
    }

    /// Title for the posts section: the selected user's name, or the raw id
    /// when the users list has no match.
    pub fn posts_owner_label(&self) -> Option<String> {
        let id = self.selected_owner_id()?;
        Some(
            self.selected_user()
                .map(|user| user.name.clone())
                .unwrap_or_else(|| id.to_string()),
        )
    }

    /// True when a selection has settled without error and has no posts.
    pub fn shows_empty_posts(&self) -> bool {
        self.selected_owner_id().is_some()
            && !self.posts.is_loading()
            && self.posts.error().is_none()
            && self.posts.data().is_empty()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total_users: self.users.data().len(),
            filtered_users: self.filtered_users().len(),
            user_posts: self.posts.data().len(),
            has_selection: self.selected_owner_id().is_some(),
        }
    }
}
