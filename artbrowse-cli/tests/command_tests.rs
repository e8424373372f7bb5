use artbrowse_cli::{Command, CommandError};
use artbrowse_selection::SelectionError;
use artbrowse_types::RowId;
use pretty_assertions::assert_eq;
use std::num::NonZeroUsize;

fn parse(line: &str) -> Result<Command, CommandError> {
    line.parse()
}

// ── Navigation ──────────────────────────────────────────────────

#[test]
fn navigation_commands_and_aliases() {
    assert_eq!(parse("first"), Ok(Command::First));
    assert_eq!(parse("prev"), Ok(Command::Previous));
    assert_eq!(parse("p"), Ok(Command::Previous));
    assert_eq!(parse("next"), Ok(Command::Next));
    assert_eq!(parse("N"), Ok(Command::Next));
    assert_eq!(parse("last"), Ok(Command::Last));
    assert_eq!(parse("page 7"), Ok(Command::Page(7)));
}

#[test]
fn blank_line_redraws() {
    assert_eq!(parse(""), Ok(Command::Show));
    assert_eq!(parse("   "), Ok(Command::Show));
}

#[test]
fn page_needs_a_number() {
    assert_eq!(parse("page"), Err(CommandError::MissingArgument("page")));
    assert_eq!(
        parse("page two"),
        Err(CommandError::InvalidArgument {
            command: "page",
            value: "two".to_string()
        })
    );
}

// ── Selection ───────────────────────────────────────────────────

#[test]
fn select_parses_positive_count() {
    assert_eq!(
        parse("select 25"),
        Ok(Command::Select(NonZeroUsize::new(25).unwrap()))
    );
    assert_eq!(parse("s 1"), Ok(Command::Select(NonZeroUsize::new(1).unwrap())));
}

#[test]
fn select_rejects_zero_and_garbage() {
    assert_eq!(
        parse("select 0"),
        Err(CommandError::Selection(SelectionError::InvalidCount {
            input: "0".to_string()
        }))
    );
    assert!(matches!(parse("select -2"), Err(CommandError::Selection(_))));
    assert_eq!(parse("select"), Err(CommandError::MissingArgument("select")));
}

#[test]
fn toggle_parses_row_id() {
    assert_eq!(parse("toggle 27992"), Ok(Command::Toggle(RowId::new(27992))));
    assert_eq!(parse("t 4"), Ok(Command::Toggle(RowId::new(4))));
    assert!(matches!(
        parse("toggle x"),
        Err(CommandError::InvalidArgument { command: "toggle", .. })
    ));
}

#[test]
fn fill_takes_optional_limit() {
    assert_eq!(parse("fill"), Ok(Command::Fill(None)));
    assert_eq!(parse("fill 5"), Ok(Command::Fill(Some(5))));
    assert!(parse("fill lots").is_err());
}

// ── Misc ────────────────────────────────────────────────────────

#[test]
fn remaining_commands() {
    assert_eq!(parse("clear"), Ok(Command::Clear));
    assert_eq!(parse("selected"), Ok(Command::Selected));
    assert_eq!(parse("help"), Ok(Command::Help));
    assert_eq!(parse("q"), Ok(Command::Quit));
    assert_eq!(parse("exit"), Ok(Command::Quit));
}

#[test]
fn unknown_command_is_reported() {
    let err = parse("dance").unwrap_err();
    assert_eq!(err, CommandError::Unknown("dance".to_string()));
    assert!(err.to_string().contains("help"));
}
