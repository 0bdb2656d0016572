use tracing::debug;

use crate::client::RestClient;
use crate::effect::{Fetch, FetchKey, Outcome};

use super::{BasicFetchView, CrudFormView, DependentFetchView};

/// Static composition of the three views. They share a client but no state.
#[derive(Debug, Clone)]
pub struct RootView {
    pub basic: BasicFetchView,
    pub dependent: DependentFetchView,
    pub crud: CrudFormView,
}

impl RootView {
    pub fn new(client: RestClient) -> Self {
        Self {
            basic: BasicFetchView::new(client.clone()),
            dependent: DependentFetchView::new(client.clone()),
            crud: CrudFormView::new(client),
        }
    }

    /// Mount every view. Returns the fetches still to run; empty on a second
    /// call.
    pub fn mount(&mut self) -> Vec<Fetch> {
        [
            self.basic.mount(),
            self.dependent.mount(),
            self.crud.mount(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Route an outcome to the view that issued the fetch.
    pub fn settle(&mut self, key: FetchKey, outcome: Outcome) {
        debug!(?key, ok = outcome.is_ok(), "settling fetch");
        match key {
            FetchKey::Todos => self.basic.settle(outcome),
            FetchKey::Users => self.dependent.settle_users(outcome),
            FetchKey::Posts { owner_id, seq } => {
                self.dependent.settle_posts(&owner_id, seq, outcome);
            }
            FetchKey::CrudList => self.crud.settle_list(outcome),
            FetchKey::CrudCreate => self.crud.settle_create(outcome),
            FetchKey::CrudUpdate { id } => self.crud.settle_update(id, outcome),
            FetchKey::CrudDelete { id } => self.crud.settle_delete(id, outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::HttpResponse;

    #[test]
    fn mount_returns_one_fetch_per_view() {
        let mut root = RootView::new(RestClient::new("http://localhost:3000"));
        let keys: Vec<_> = root.mount().into_iter().map(|f| f.key).collect();
        assert_eq!(keys, [FetchKey::Todos, FetchKey::Users, FetchKey::CrudList]);
        assert!(root.mount().is_empty());
    }

    #[test]
    fn failures_stay_in_their_view() {
        let mut root = RootView::new(RestClient::new("http://localhost:3000"));
        root.mount();
        root.settle(FetchKey::Users, Err(ApiError::Transport("offline".into())));
        root.settle(FetchKey::Todos, Ok(HttpResponse::new(200, "[]")));
        assert!(root.dependent.users().error().is_some());
        assert_eq!(root.basic.todos().error(), None);
        assert!(root.crud.posts().is_loading());
    }

    #[test]
    fn routes_posts_through_the_stale_guard() {
        let mut root = RootView::new(RestClient::new("http://localhost:3000"));
        root.mount();
        let first = root.dependent.select_owner("1").unwrap();
        let second = root.dependent.select_owner("2").unwrap();
        root.settle(
            second.key,
            Ok(HttpResponse::new(200, r#"[{"id":11,"userId":2,"title":"b","body":""}]"#)),
        );
        root.settle(
            first.key,
            Ok(HttpResponse::new(200, r#"[{"id":1,"userId":1,"title":"a","body":""}]"#)),
        );
        assert_eq!(root.dependent.posts().data()[0].title, "b");
    }
}
