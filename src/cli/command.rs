//! Parsing of the interactive command line.

use std::str::FromStr;

use thiserror::Error;

use crate::feed::PostId;

pub const HELP: &str = "\
commands:
  show             redraw the board
  toggle <LABEL>   check/uncheck a category
  all              check all categories, or clear them if all are checked
  apply            apply the checked categories (asks first)
  page <N>         go to page N
  next | prev      next / previous page
  size <N>         posts per page (returns to page 1)
  refresh          refetch posts
  write <TEXT>     submit a new post
  delete <ID>      delete a post (asks first)
  categories       list valid categories
  help             this text
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Toggle(String),
    All,
    Apply,
    Page(i64),
    Next,
    Prev,
    Size(i64),
    Refresh,
    Write(String),
    Delete(PostId),
    Categories,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (type `help`)")]
    Unknown(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

fn number<T: FromStr>(value: &str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "" => Err(CommandError::Empty),
            "show" | "ls" => Ok(Command::Show),
            "toggle" => Ok(Command::Toggle(
                required(rest, "toggle", "a category")?.to_string(),
            )),
            "all" => Ok(Command::All),
            "apply" => Ok(Command::Apply),
            "page" => Ok(Command::Page(number(required(rest, "page", "a page number")?)?)),
            "next" => Ok(Command::Next),
            "prev" => Ok(Command::Prev),
            "size" => Ok(Command::Size(number(required(rest, "size", "a page size")?)?)),
            "refresh" => Ok(Command::Refresh),
            // Keep the text as typed, minus surrounding whitespace.
            "write" => Ok(Command::Write(required(rest, "write", "some text")?.to_string())),
            "delete" => Ok(Command::Delete(number(required(rest, "delete", "a post id")?)?)),
            "categories" => Ok(Command::Categories),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
