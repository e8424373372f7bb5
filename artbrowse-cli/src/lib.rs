//! Command parsing and table rendering for the `artbrowse` terminal browser.

mod command;
mod render;

pub use command::{Command, CommandError, Flow, HELP, execute};
pub use render::{fit, render_page, render_selected, render_status};
