//! Line-oriented front-end loop.
//!
//! Commands and prompt answers are read from the same input, so the whole
//! loop can be driven from a script or a test buffer.

use std::io::{self, BufRead, Write};

use crate::cli::command::{Command, HELP};
use crate::remote::BoardSource;
use crate::session::{BoardSession, Prompt, SessionError};
use crate::ui::render::{render_board, render_filters, render_page};

/// Reads a y/n answer from the command input.
struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<'_, R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if write!(self.output, "{} [y/N] ", message).is_err() || self.output.flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

pub struct Repl<S, R, W> {
    session: BoardSession<S>,
    input: R,
    output: W,
}

impl<S: BoardSource, R: BufRead, W: Write> Repl<S, R, W> {
    pub fn new(session: BoardSession<S>, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &BoardSession<S> {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Fetch once, then read commands until `quit` or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        if let Err(e) = self.session.refresh().await {
            writeln!(self.output, "error: {}", e)?;
        }
        self.show()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(e) => writeln!(self.output, "error: {}", e)?,
            }
        }
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render_board(self.session.board().state()))
    }

    fn report(&mut self, error: impl Into<SessionError>) -> io::Result<()> {
        writeln!(self.output, "error: {}", error.into())
    }

    async fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Show => self.show(),
            Command::Toggle(label) => match self.session.board_mut().toggle(&label) {
                Ok(_) => write!(
                    self.output,
                    "{}",
                    render_filters(self.session.board().state())
                ),
                Err(e) => self.report(e),
            },
            Command::All => {
                self.session.board_mut().select_all();
                write!(
                    self.output,
                    "{}",
                    render_filters(self.session.board().state())
                )
            }
            Command::Apply => {
                let mut prompt = LinePrompt {
                    input: &mut self.input,
                    output: &mut self.output,
                };
                if self.session.apply_filters(&mut prompt) {
                    self.show()
                } else {
                    writeln!(self.output, "filter not applied")
                }
            }
            Command::Page(page) => self.change_page(page),
            Command::Next => {
                let next = i64::try_from(self.session.board().current_page())
                    .ok()
                    .and_then(|page| page.checked_add(1));
                match next {
                    Some(page) => self.change_page(page),
                    None => writeln!(self.output, "already on the last possible page"),
                }
            }
            Command::Prev => {
                let current = self.session.board().current_page() as i64;
                if current <= 1 {
                    writeln!(self.output, "already on the first page")
                } else {
                    self.change_page(current - 1)
                }
            }
            Command::Size(items_per_page) => {
                match self.session.board_mut().set_items_per_page(items_per_page) {
                    Ok(()) => self.show_page(),
                    Err(e) => self.report(e),
                }
            }
            Command::Refresh => match self.session.refresh().await {
                Ok(count) => {
                    writeln!(self.output, "fetched {} posts", count)?;
                    self.show_page()
                }
                Err(e) => self.report(e),
            },
            Command::Write(text) => {
                self.session.edit_draft(text);
                match self.session.submit_draft().await {
                    Ok(()) => {
                        writeln!(self.output, "posted")?;
                        self.show_page()
                    }
                    Err(e) => self.report(e),
                }
            }
            Command::Delete(id) => {
                let mut prompt = LinePrompt {
                    input: &mut self.input,
                    output: &mut self.output,
                };
                match self.session.delete_post(id, &mut prompt).await {
                    Ok(true) => {
                        writeln!(self.output, "deleted #{}", id)?;
                        self.show_page()
                    }
                    Ok(false) => writeln!(self.output, "not deleted"),
                    Err(e) => self.report(e),
                }
            }
            Command::Categories => {
                let labels: Vec<&str> = self
                    .session
                    .board()
                    .categories()
                    .iter()
                    .map(|c| c.as_str())
                    .collect();
                writeln!(self.output, "{}", labels.join(" "))
            }
            Command::Help => writeln!(self.output, "{}", HELP),
            Command::Quit => Ok(()),
        }
    }

    fn change_page(&mut self, page: i64) -> io::Result<()> {
        match self.session.board_mut().set_page(page) {
            Ok(()) => self.show_page(),
            Err(e) => self.report(e),
        }
    }

    fn show_page(&mut self) -> io::Result<()> {
        write!(self.output, "{}", render_page(self.session.board().state()))
    }
}
