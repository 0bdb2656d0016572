use tracing::{debug, info, warn};

use crate::channel::FetchChannel;
use crate::client::RestClient;
use crate::effect::{Fetch, FetchKey, Outcome};
use crate::types::Todo;

/// Fetch-on-mount list of todos with a single loading/error channel.
#[derive(Debug, Clone)]
pub struct BasicFetchView {
    client: RestClient,
    mounted: bool,
    todos: FetchChannel<Vec<Todo>>,
}

impl BasicFetchView {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            mounted: false,
            todos: FetchChannel::new(),
        }
    }

    /// Returns the list fetch on the first call only.
    pub fn mount(&mut self) -> Option<Fetch> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.todos.begin();
        debug!("fetching todos");
        Some(Fetch::new(FetchKey::Todos, self.client.build_list_todos()))
    }

    pub fn settle(&mut self, outcome: Outcome) {
        match outcome.and_then(|response| self.client.parse_list_todos(response)) {
            Ok(todos) => {
                info!(count = todos.len(), "todos loaded");
                self.todos.succeed(todos);
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch todos");
                self.todos.fail(err.to_string());
            }
        }
    }

    pub fn todos(&self) -> &FetchChannel<Vec<Todo>> {
        &self.todos
    }
}
