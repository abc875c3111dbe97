//! CLI presentation: text and json formatters.

use crate::session::SessionOutcome;
use crate::snapshot::SortState;
use crate::song::Song;
use crate::store::SaveRecord;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

/// Numbered ranking, best first.
pub fn format_ranking(songs: &[Song], color: bool) -> String {
    let mut lines = Vec::with_capacity(songs.len() + 1);
    let header = "Your ranking:";
    lines.push(if color {
        header.bold().to_string()
    } else {
        header.to_string()
    });
    for (i, song) in songs.iter().enumerate() {
        let number = format!("{:>3}.", i + 1);
        if color {
            lines.push(format!("{} {}", number.cyan(), song.list_item()));
        } else {
            lines.push(format!("{} {}", number, song.list_item()));
        }
    }
    lines.join("\n")
}

pub fn format_outcome(outcome: &SessionOutcome, color: bool) -> String {
    match outcome {
        SessionOutcome::Ranked(songs) => format_ranking(songs, color),
        SessionOutcome::Saved { location } => format!("Progress saved to {}", location),
        SessionOutcome::Abandoned => "Quit without saving.".to_string(),
    }
}

fn state_details(state: &SortState<Song>) -> Value {
    match state {
        SortState::BinaryInsertionOrder(s) => json!({
            "placed": s.ordered.len(),
            "remaining": s.songs_to_order.len(),
        }),
        SortState::MergeOrder(s) => json!({
            "width": s.width,
            "low": s.low,
            "high": s.high,
            "index": s.index,
        }),
    }
}

pub fn state_summary_json(state: &SortState<Song>) -> Value {
    json!({
        "algorithm": state.algorithm(),
        "songs": state.item_count(),
        "progress": state_details(state),
    })
}

fn state_summary_lines(state: &SortState<Song>) -> Vec<String> {
    let mut lines = vec![
        format!("Algorithm: {}", state.algorithm()),
        format!("Songs: {}", state.item_count()),
    ];
    match state {
        SortState::BinaryInsertionOrder(s) => {
            lines.push(format!("Placed: {}", s.ordered.len()));
            lines.push(format!("Remaining: {}", s.songs_to_order.len()));
            if let Some(next) = s.songs_to_order.first() {
                lines.push(format!("Next to place: {}", next.list_item()));
            }
        }
        SortState::MergeOrder(s) => {
            lines.push(format!("Merge width: {}", s.width));
            lines.push(format!(
                "Merging positions {}..={} (at {})",
                s.low, s.high, s.index
            ));
        }
    }
    lines
}

/// Summary of a save file for `inspect`.
pub fn format_state_summary(
    state: &SortState<Song>,
    format: &str,
) -> Result<String, serde_json::Error> {
    if format == "json" {
        serde_json::to_string_pretty(&state_summary_json(state))
    } else {
        Ok(state_summary_lines(state).join("\n"))
    }
}

pub fn format_session_list(
    records: &[SaveRecord],
    format: &str,
) -> Result<String, serde_json::Error> {
    if format == "json" {
        let rows: Vec<Value> = records.iter().map(record_json).collect();
        return serde_json::to_string_pretty(&rows);
    }
    if records.is_empty() {
        return Ok("No saved sessions.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Algorithm", "Songs", "Answered", "Saved at"]);
    for record in records {
        table.add_row(vec![
            record.name.clone(),
            record.algorithm.to_string(),
            record.state.item_count().to_string(),
            record.comparisons.to_string(),
            record.saved_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ]);
    }
    Ok(table.to_string())
}

pub fn format_session_show(
    record: &SaveRecord,
    format: &str,
) -> Result<String, serde_json::Error> {
    if format == "json" {
        return serde_json::to_string_pretty(&record_json(record));
    }
    let mut lines = vec![
        format!("Session: {}", record.name),
        format!("Saved at: {}", record.saved_at.to_rfc3339()),
        format!("Comparisons answered: {}", record.comparisons),
    ];
    lines.extend(state_summary_lines(&record.state));
    Ok(lines.join("\n"))
}

fn record_json(record: &SaveRecord) -> Value {
    let mut value = state_summary_json(&record.state);
    value["name"] = json!(record.name);
    value["saved_at"] = json!(record.saved_at.to_rfc3339());
    value["comparisons"] = json!(record.comparisons);
    value
}
