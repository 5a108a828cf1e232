use std::fmt::{self, Write};

use chrono::{DateTime, TimeZone};
use sentence_core::{ActiveView, AppViewModel, ItemRowView};

/// Clock line shown above the sentence, e.g.
/// `Sunday, October 18, 2026, 09:05:03`.
pub fn format_clock<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    now.format("%A, %B %-d, %Y, %H:%M:%S").to_string()
}

pub fn render(view: &AppViewModel, clock: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{clock}");
    let _ = writeln!(out, "{}", status_line(view));
    let _ = writeln!(out);

    if view.load_error.is_some() {
        let _ = writeln!(
            out,
            "Error loading sentences. Please check the sentences file."
        );
    } else if !view.batch.is_empty() {
        for row in &view.batch {
            let _ = writeln!(out, "{}", format_row(row, view.active_len));
        }
    } else {
        match &view.current {
            Some(row) => {
                let _ = writeln!(out, "{}", format_row(row, view.active_len));
            }
            None => {
                let _ = writeln!(out, "No sentences available.");
            }
        }
    }

    if let Some(rows) = &view.list {
        let _ = writeln!(out);
        for row in rows {
            let marker = if row.current { '>' } else { ' ' };
            let seen = if row.seen { '·' } else { ' ' };
            let _ = writeln!(out, "{marker}{seen}{}", format_row(row, view.active_len));
        }
    }

    if let Some(notice) = &view.notice {
        let _ = writeln!(out);
        let _ = writeln!(out, "! {notice}");
    }
    out
}

fn status_line(view: &AppViewModel) -> String {
    let scope = match view.active_view {
        ActiveView::Full => "all".to_string(),
        ActiveView::Filtered => format!(
            "filter \"{}\"",
            view.filter_query.as_deref().unwrap_or_default()
        ),
        ActiveView::Favorites => "favorites".to_string(),
    };
    format!(
        "Sentences: {} | View: {} ({}) | Seen: {}/{}",
        view.item_count, scope, view.active_len, view.seen_count, view.active_len
    )
}

fn format_row(row: &ItemRowView, len: usize) -> String {
    let star = if row.favorite { '*' } else { ' ' };
    format!("[{}/{}] {star} {}", row.position + 1, len, row.content)
}
