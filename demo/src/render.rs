//! Plain-text rendering of the root view.
//!
//! `Screen` borrows the root view and implements `Display`; each section
//! shows its own loading/error line so a failure in one never hides another.

use std::fmt::{self, Display, Formatter};

use fetchdemo_core::{BasicFetchView, CrudFormView, DependentFetchView, FetchChannel, RootView};

pub struct Screen<'a> {
    root: &'a RootView,
    max_rows: usize,
}

impl<'a> Screen<'a> {
    pub fn new(root: &'a RootView, max_rows: usize) -> Self {
        Self { root, max_rows }
    }
}

impl Display for Screen<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "== 1. Basic fetching ==")?;
        basic(f, &self.root.basic, self.max_rows)?;
        writeln!(f)?;
        writeln!(f, "== 2. Dependent fetching ==")?;
        dependent(f, &self.root.dependent, self.max_rows)?;
        writeln!(f)?;
        writeln!(f, "== 3. CRUD operations ==")?;
        crud(f, &self.root.crud, self.max_rows)
    }
}

/// Writes the loading or error line. Returns `true` when the content should
/// be skipped in favour of that line.
fn status<T: Default>(f: &mut Formatter<'_>, channel: &FetchChannel<T>, what: &str) -> Result<bool, fmt::Error> {
    if channel.is_loading() {
        writeln!(f, "  loading {what}...")?;
        return Ok(true);
    }
    if let Some(error) = channel.error() {
        writeln!(f, "  error: {error}")?;
        return Ok(true);
    }
    Ok(false)
}

fn more(f: &mut Formatter<'_>, total: usize, max_rows: usize) -> fmt::Result {
    if total > max_rows {
        writeln!(f, "  ... and {} more", total - max_rows)?;
    }
    Ok(())
}

fn basic(f: &mut Formatter<'_>, view: &BasicFetchView, max_rows: usize) -> fmt::Result {
    let todos = view.todos();
    if status(f, todos, "todos")? {
        return Ok(());
    }
    for todo in todos.data().iter().take(max_rows) {
        let mark = if todo.completed { 'x' } else { ' ' };
        writeln!(f, "  [{mark}] #{} {}", todo.id, todo.title)?;
    }
    more(f, todos.data().len(), max_rows)
}

fn dependent(f: &mut Formatter<'_>, view: &DependentFetchView, max_rows: usize) -> fmt::Result {
    if !view.filter_term().is_empty() {
        writeln!(f, "  search: \"{}\"", view.filter_term())?;
    }

    writeln!(f, "  users:")?;
    if !status(f, view.users(), "users")? {
        let filtered = view.filtered_users();
        for user in filtered.iter().take(max_rows) {
            let marker = if view.is_selected(user) { '*' } else { ' ' };
            writeln!(
                f,
                "  {marker} [{}] {} <{}> {} {}",
                user.id,
                user.name,
                user.email,
                user.company_name(),
                user.website
            )?;
        }
        more(f, filtered.len(), max_rows)?;
    }

    if let Some(owner) = view.posts_owner_label() {
        let badge = if view.posts().is_loading() { " (loading...)" } else { "" };
        writeln!(f, "  posts from {owner}{badge}")?;
        if let Some(error) = view.posts().error() {
            writeln!(f, "  error: {error}")?;
        } else {
            for post in view.posts().data().iter().take(max_rows) {
                writeln!(f, "    #{} {}", post.id, post.title)?;
                writeln!(f, "       {}", post.body)?;
            }
            more(f, view.posts().data().len(), max_rows)?;
            if view.shows_empty_posts() {
                writeln!(f, "    this user has no posts yet")?;
            }
        }
    }

    let stats = view.stats();
    writeln!(
        f,
        "  stats: {} users | {} filtered | {} posts | selected: {}",
        stats.total_users,
        stats.filtered_users,
        stats.user_posts,
        if stats.has_selection { "yes" } else { "no" }
    )
}

fn crud(f: &mut Formatter<'_>, view: &CrudFormView, max_rows: usize) -> fmt::Result {
    let draft = view.draft();
    write!(
        f,
        "  draft: user {} | title \"{}\" | body \"{}\"",
        draft.user_id, draft.title, draft.body
    )?;
    match view.editing() {
        Some(id) => writeln!(f, " (editing #{id})")?,
        None => writeln!(f)?,
    }
    if view.is_writing() {
        writeln!(f, "  saving...")?;
    } else if let Some(error) = view.write_error() {
        writeln!(f, "  write error: {error}")?;
    }

    let posts = view.posts();
    if status(f, posts, "posts")? {
        return Ok(());
    }
    // Newest first so created posts are visible without scrolling.
    for post in posts.data().iter().rev().take(max_rows) {
        writeln!(f, "  #{} [user {}] {}", post.id, post.user_id, post.title)?;
    }
    more(f, posts.data().len(), max_rows)
}
