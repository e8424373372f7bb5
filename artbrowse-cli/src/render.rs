//! Plain-text table rendering.

use artbrowse_selection::Phase;
use artbrowse_session::SessionView;
use artbrowse_types::Row;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

struct Column {
    header: &'static str,
    field: &'static str,
    width: usize,
}

const COLUMNS: &[Column] = &[
    Column { header: "TITLE", field: "title", width: 32 },
    Column { header: "PLACE OF ORIGIN", field: "place_of_origin", width: 16 },
    Column { header: "ARTIST", field: "artist_display", width: 24 },
    Column { header: "INSCRIPTIONS", field: "inscriptions", width: 20 },
    Column { header: "START DATE", field: "date_start", width: 10 },
    Column { header: "END DATE", field: "date_end", width: 10 },
];

const ID_WIDTH: usize = 8;

/// Fits `text` on one line of at most `width` terminal columns.
pub fn fit(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.width() <= width {
        return flat;
    }
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut cut = String::new();
    for c in flat.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push('…');
    cut
}

/// Pads `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn cell(row: &Row, column: &Column) -> String {
    let text = row.field_text(column.field).filter(|s| !s.trim().is_empty());
    match (text, column.field) {
        (Some(text), _) => fit(&text, column.width),
        (None, "inscriptions") => "N/A".to_string(),
        (None, _) => String::new(),
    }
}

fn write_cells(out: &mut impl Write, mark: &str, id: &str, cells: &[String]) -> io::Result<()> {
    write!(out, "{mark:<3} {id:<width$}", width = ID_WIDTH)?;
    for (column, text) in COLUMNS.iter().zip(cells) {
        write!(out, " | {}", pad(text, column.width))?;
    }
    writeln!(out)
}

/// Writes the summary line and the selection status.
pub fn render_status(view: &SessionView<'_>, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{} · {} selected", view.summary(), view.selection.len())?;
    if let Phase::Accumulating { pending } = view.selection.phase() {
        write!(out, " · pending {pending}")?;
    }
    writeln!(out)
}

/// Writes the page on display as a table followed by the status line.
pub fn render_page(view: &SessionView<'_>, out: &mut impl Write) -> io::Result<()> {
    let Some(page) = view.current_page() else {
        writeln!(out, "(no page loaded)")?;
        return render_status(view, out);
    };

    let headers: Vec<String> = COLUMNS.iter().map(|c| c.header.to_string()).collect();
    write_cells(out, "", "ID", &headers)?;

    if page.is_empty() {
        writeln!(out, "(no rows)")?;
    }
    for row in &page.rows {
        let mark = if view.selection.is_selected(row.id) { "[x]" } else { "[ ]" };
        let cells: Vec<String> = COLUMNS.iter().map(|c| cell(row, c)).collect();
        write_cells(out, mark, &row.id.to_string(), &cells)?;
    }

    writeln!(out, "page {} of {}", page.number, view.catalog.page_count().max(1))?;
    render_status(view, out)
}

/// Lists selected rows in selection order.
pub fn render_selected(view: &SessionView<'_>, out: &mut impl Write) -> io::Result<()> {
    if view.selection.is_empty() {
        writeln!(out, "nothing selected")?;
    }
    for (position, row) in view.selection.selected().iter().enumerate() {
        let title = row.field_text("title").unwrap_or_default();
        writeln!(
            out,
            "{:>4}. {:<width$} {}",
            position + 1,
            row.id,
            fit(&title, 60),
            width = ID_WIDTH
        )?;
    }
    render_status(view, out)
}
