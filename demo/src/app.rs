//! Event loop: stdin commands and in-flight fetches, both polled with
//! `tokio::select!` on a single-threaded runtime.
//!
//! Fetches run concurrently in a `JoinSet`, so outcomes can arrive in any
//! order. The core views decide whether an outcome is still wanted.

use std::io;

use anyhow::Result;
use fetchdemo_core::{Fetch, FetchKey, Outcome, RestClient, RootView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::render::Screen;
use crate::transport::Transport;

/// What the loop does after applying a command.
#[derive(Debug)]
enum Reaction {
    Fetch(Fetch),
    Render,
    Notice(String),
    Quit,
}

pub struct App {
    root: RootView,
    transport: Transport,
    in_flight: JoinSet<(FetchKey, Outcome)>,
    max_rows: usize,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            root: RootView::new(RestClient::new(&config.base_url)),
            transport: Transport::new()?,
            in_flight: JoinSet::new(),
            max_rows: config.max_rows,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        for fetch in self.root.mount() {
            self.spawn(fetch);
        }
        self.render();
        println!("type 'help' for commands");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;

        loop {
            tokio::select! {
                line = lines.next_line(), if stdin_open => {
                    let line = match read_input(line)? {
                        Input::Line(line) => line,
                        Input::Skipped(reason) => {
                            println!("{reason}");
                            continue;
                        }
                        Input::Closed => {
                            tracing::debug!("stdin closed, draining in-flight fetches");
                            stdin_open = false;
                            continue;
                        }
                    };
                    match Command::parse(&line) {
                        Ok(command) => match apply(&mut self.root, command) {
                            Reaction::Fetch(fetch) => {
                                self.spawn(fetch);
                                self.render();
                            }
                            Reaction::Render => self.render(),
                            Reaction::Notice(text) => println!("{text}"),
                            Reaction::Quit => break,
                        },
                        Err(err) => println!("{err}"),
                    }
                }
                Some(joined) = self.in_flight.join_next() => {
                    let (key, outcome) = joined?;
                    self.root.settle(key, outcome);
                    self.render();
                }
                else => break,
            }
        }
        Ok(())
    }

    fn spawn(&mut self, fetch: Fetch) {
        let transport = self.transport.clone();
        self.in_flight.spawn(async move {
            let outcome = transport.execute(fetch.request).await;
            (fetch.key, outcome)
        });
    }

    fn render(&self) {
        println!("{}", Screen::new(&self.root, self.max_rows));
    }
}

/// One read from stdin.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Line(String),
    /// The line was unreadable but the session goes on.
    Skipped(String),
    Closed,
}

/// Only a line that is not UTF-8 is recoverable; other read errors end the
/// session.
fn read_input(result: io::Result<Option<String>>) -> io::Result<Input> {
    match result {
        Ok(Some(line)) => Ok(Input::Line(line)),
        Ok(None) => Ok(Input::Closed),
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            tracing::warn!(error = %err, "skipping unreadable input line");
            Ok(Input::Skipped("input line is not valid UTF-8, ignored".to_string()))
        }
        Err(err) => Err(err),
    }
}

fn apply(root: &mut RootView, command: Command) -> Reaction {
    let fetch = match command {
        Command::Search(text) => {
            root.dependent.set_filter_term(&text);
            None
        }
        Command::Select(id) => root.dependent.select_owner(&id.to_string()),
        Command::Reset => {
            root.dependent.reset();
            None
        }
        Command::Title(text) => {
            root.crud.set_title(&text);
            None
        }
        Command::Body(text) => {
            root.crud.set_body(&text);
            None
        }
        Command::User(id) => {
            root.crud.set_user_id(id);
            None
        }
        Command::Edit(id) => {
            if !root.crud.edit(id) {
                return Reaction::Notice(format!("post #{id} is not in the list"));
            }
            None
        }
        Command::Create => root.crud.submit_create(),
        Command::Update(id) => root.crud.submit_update(id),
        Command::Delete(id) => root.crud.delete(id),
        Command::Clear => {
            root.crud.clear_draft();
            None
        }
        Command::Show => None,
        Command::Help => return Reaction::Notice(HELP.to_string()),
        Command::Quit => return Reaction::Quit,
    };
    match fetch {
        Some(fetch) => Reaction::Fetch(fetch),
        None => Reaction::Render,
    }
}
