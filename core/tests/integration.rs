//! Drive the views against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then executes every `Fetch` the
//! views hand out over real HTTP using ureq and settles the outcome through
//! `RootView::settle`, the same path the host binary takes.

use fetchdemo_core::{
    ApiError, Fetch, FetchKey, HttpMethod, HttpResponse, Outcome, RestClient, RootView,
};

/// Execute a `Fetch` with ureq and return its key and outcome.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data; the core decides what a status means.
fn execute(fetch: Fetch) -> (FetchKey, Outcome) {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let req = fetch.request;
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };

    let outcome = match result {
        Ok(mut response) => {
            let status = response.status().as_u16();
            let body = response.body_mut().read_to_string().unwrap_or_default();
            Ok(HttpResponse::new(status, body))
        }
        Err(err) => Err(ApiError::Transport(err.to_string())),
    };
    (fetch.key, outcome)
}

fn run(root: &mut RootView, fetch: Option<Fetch>) {
    let (key, outcome) = execute(fetch.expect("view should issue a fetch"));
    root.settle(key, outcome);
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn views_against_mock_server() {
    let base_url = start_server();
    let mut root = RootView::new(RestClient::new(&base_url));

    // Step 1: mount all three views.
    for fetch in root.mount() {
        let (key, outcome) = execute(fetch);
        root.settle(key, outcome);
    }
    assert!(!root.basic.todos().data().is_empty());
    assert!(!root.crud.posts().data().is_empty());
    assert_eq!(root.dependent.users().error(), None);

    // Step 2: search.
    root.dependent.set_filter_term("leanne");
    let filtered = root.dependent.filtered_users();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].email, "Sincere@april.biz");
    root.dependent.set_filter_term("zzz");
    assert!(root.dependent.filtered_users().is_empty());

    // Step 3: select an owner and load their posts.
    let fetch = root.dependent.select_owner("1");
    run(&mut root, fetch);
    let posts = root.dependent.posts().data();
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|p| p.user_id == 1));
    assert_eq!(root.dependent.posts_owner_label().as_deref(), Some("Leanne Graham"));

    // Step 4: an owner with no posts shows the empty state.
    let fetch = root.dependent.select_owner("4");
    run(&mut root, fetch);
    assert!(root.dependent.shows_empty_posts());

    // Step 5: reset.
    root.dependent.reset();
    assert_eq!(root.dependent.selected_owner_id(), None);
    assert!(root.dependent.posts().data().is_empty());
    assert_eq!(root.dependent.filter_term(), "");
}

#[test]
fn stale_posts_response_is_discarded() {
    let base_url = start_server();
    let mut root = RootView::new(RestClient::new(&base_url));

    let first = root.dependent.select_owner("1").unwrap();
    let second = root.dependent.select_owner("2").unwrap();

    // Second resolves first, then the first one arrives late.
    let (key, outcome) = execute(second);
    root.settle(key, outcome);
    let (key, outcome) = execute(first);
    root.settle(key, outcome);

    let posts = root.dependent.posts().data();
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|p| p.user_id == 2));
}

#[test]
fn crud_form_lifecycle() {
    let base_url = start_server();
    let mut root = RootView::new(RestClient::new(&base_url));
    for fetch in root.mount() {
        let (key, outcome) = execute(fetch);
        root.settle(key, outcome);
    }
    let initial = root.crud.posts().data().len();

    // Step 1: create.
    root.crud.set_title("Integration test");
    root.crud.set_body("created from the form");
    root.crud.set_user_id(2);
    let fetch = root.crud.submit_create();
    run(&mut root, fetch);
    assert_eq!(root.crud.write_error(), None);
    assert_eq!(root.crud.posts().data().len(), initial + 1);
    let created = root.crud.posts().data().last().unwrap().clone();
    assert_eq!(created.title, "Integration test");
    assert_eq!(created.user_id, 2);

    // Step 2: edit and update.
    assert!(root.crud.edit(created.id));
    root.crud.set_title("Updated title");
    let fetch = root.crud.submit_update(created.id);
    run(&mut root, fetch);
    assert_eq!(root.crud.write_error(), None);
    let updated = root
        .crud
        .posts()
        .data()
        .iter()
        .find(|p| p.id == created.id)
        .unwrap();
    assert_eq!(updated.title, "Updated title");
    assert_eq!(updated.body, "created from the form");

    // Step 3: delete.
    let fetch = root.crud.delete(created.id);
    run(&mut root, fetch);
    assert_eq!(root.crud.posts().data().len(), initial);

    // Step 4: delete again, the server answers 404 and the list is untouched.
    let fetch = root.crud.delete(created.id);
    run(&mut root, fetch);
    assert_eq!(root.crud.write_error(), Some("resource not found"));
    assert_eq!(root.crud.posts().data().len(), initial);
}

#[test]
fn unreachable_host_surfaces_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut root = RootView::new(RestClient::new(&format!("http://127.0.0.1:{port}")));
    for fetch in root.mount() {
        let (key, outcome) = execute(fetch);
        root.settle(key, outcome);
    }
    let error = root.dependent.users().error().unwrap();
    assert!(error.starts_with("network error"));
    assert!(!root.dependent.users().is_loading());
    assert!(root.basic.todos().error().is_some());
}
