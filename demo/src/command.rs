//! Line commands read from stdin. One command per line, first word is the verb.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Select(u32),
    Reset,
    Title(String),
    Body(String),
    User(u32),
    Edit(u32),
    Create,
    Update(u32),
    Delete(u32),
    Clear,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),

    #[error("'{verb}' needs {what}")]
    MissingArgument { verb: &'static str, what: &'static str },

    #[error("'{0}' is not a valid id")]
    InvalidId(String),
}

pub const HELP: &str = "\
commands:
  search <text>   filter users by name or email (no text clears the filter)
  select <id>     show posts of a user
  reset           clear selection, posts and filter
  title <text>    set the draft title
  body <text>     set the draft body
  user <id>       set the draft owner
  edit <id>       load a post into the draft
  create          create a post from the draft
  update <id>     replace a post with the draft
  delete <id>     delete a post
  clear           clear the draft
  show            render again
  help            this text
  quit            exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "select" => parse_id("select", rest).map(Command::Select),
            "reset" => Ok(Command::Reset),
            "title" => Ok(Command::Title(rest.to_string())),
            "body" => Ok(Command::Body(rest.to_string())),
            "user" => parse_id("user", rest).map(Command::User),
            "edit" => parse_id("edit", rest).map(Command::Edit),
            "create" => Ok(Command::Create),
            "update" => parse_id("update", rest).map(Command::Update),
            "delete" => parse_id("delete", rest).map(Command::Delete),
            "clear" => Ok(Command::Clear),
            "" | "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(verb: &'static str, rest: &str) -> Result<u32, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { verb, what: "an id" });
    }
    rest.parse()
        .map_err(|_| CommandError::InvalidId(rest.to_string()))
}
