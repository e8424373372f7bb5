//! User commands.

use crate::render::{render_page, render_selected, render_status};
use artbrowse_catalog::PageSource;
use artbrowse_selection::{SelectionError, parse_select_count};
use artbrowse_session::BrowserSession;
use artbrowse_types::RowId;
use std::io::Write;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  first | prev (p) | next (n) | last    move between pages
  page <N>                              jump to page N
  select <N> (s <N>)                    select the next N rows, across pages
  toggle <ID> (t <ID>)                  select or deselect one row on this page
  fill [MAX]                            scan ahead until the selection is complete
  clear                                 deselect everything
  selected                              list selected rows
  show                                  redraw the current page
  help                                  this text
  quit (q)                              exit";

/// A parsed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    First,
    Previous,
    Next,
    Last,
    Page(u32),
    Select(NonZeroUsize),
    Toggle(RowId),
    Fill(Option<u32>),
    Clear,
    Selected,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid argument {value:?} for `{command}`")]
    InvalidArgument { command: &'static str, value: String },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Show);
        };
        let arg = words.next();

        let command = match head.to_ascii_lowercase().as_str() {
            "first" => Command::First,
            "prev" | "p" | "previous" => Command::Previous,
            "next" | "n" => Command::Next,
            "last" => Command::Last,
            "page" | "g" => Command::Page(parse_arg("page", arg)?),
            "select" | "s" => {
                let raw = arg.ok_or(CommandError::MissingArgument("select"))?;
                Command::Select(parse_select_count(raw)?)
            }
            "toggle" | "t" => Command::Toggle(parse_arg("toggle", arg)?),
            "fill" => match arg {
                Some(_) => Command::Fill(Some(parse_arg("fill", arg)?)),
                None => Command::Fill(None),
            },
            "clear" => Command::Clear,
            "selected" => Command::Selected,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn parse_arg<T: FromStr>(command: &'static str, arg: Option<&str>) -> Result<T, CommandError> {
    let raw = arg.ok_or(CommandError::MissingArgument(command))?;
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: raw.to_string(),
    })
}

/// Whether the command loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one command against the session and writes what the user sees.
///
/// Session errors are reported to `out` and do not end the loop; only
/// failures to write are returned.
pub async fn execute<S: PageSource>(
    session: &mut BrowserSession<S>,
    command: Command,
    out: &mut impl Write,
) -> std::io::Result<Flow> {
    let result = match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(Flow::Continue);
        }
        Command::Show => Ok(()),
        Command::Selected => {
            render_selected(&session.view(), out)?;
            return Ok(Flow::Continue);
        }
        Command::First => session.first_page().await.map(drop),
        Command::Previous => session.previous_page().await.map(drop),
        Command::Next => session.next_page().await.map(drop),
        Command::Last => session.last_page().await.map(drop),
        Command::Page(number) => session.go_to(number).await.map(drop),
        Command::Select(n) => session.request_select(n).map(|step| {
            tracing::debug!(added = step.added, pending = step.pending, "select command");
        }),
        Command::Toggle(id) => session.toggle_row(id).map(drop),
        Command::Fill(max_pages) => match session.fill_pending(max_pages).await {
            Ok(report) => {
                writeln!(
                    out,
                    "scanned {} page(s), added {} row(s)",
                    report.pages_scanned.len(),
                    report.added
                )?;
                if let Some(failed) = &report.failed {
                    writeln!(out, "error: page {} failed: {}", failed.page, failed.error)?;
                }
                Ok(())
            }
            Err(e) => Err(e),
        },
        Command::Clear => {
            session.clear_selection();
            Ok(())
        }
    };

    match result {
        Ok(()) => render_page(&session.view(), out)?,
        Err(e) => {
            writeln!(out, "error: {e}")?;
            render_status(&session.view(), out)?;
        }
    }
    Ok(Flow::Continue)
}
