//! Export formats for the leaderboard.

use chrono::SecondsFormat;
use strum::{Display, EnumString};

use crate::entry::ScoreEntry;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Tsv,
    Json,
}

pub fn format_tsv_header() -> String {
    ["rank", "player", "score", "level", "date"].join("\t")
}

/// One TSV row; tabs and line breaks in the player name become spaces.
pub fn format_tsv_row(rank: usize, entry: &ScoreEntry) -> String {
    let player: String = entry
        .player_name
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect();

    [
        rank.to_string(),
        player,
        entry.score.to_string(),
        entry.level.to_string(),
        entry.date.to_rfc3339_opts(SecondsFormat::Secs, false),
    ]
    .join("\t")
}

/// Header plus one row per entry, ranked from 1 in iteration order.
pub fn format_tsv<'a>(entries: impl IntoIterator<Item = &'a ScoreEntry>) -> String {
    let mut lines = vec![format_tsv_header()];
    lines.extend(
        entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| format_tsv_row(i + 1, entry)),
    );
    lines.join("\n")
}

/// Indented JSON array, the on-disk board format.
///
/// Only quotes, backslashes and control characters are escaped; `<`, `&`,
/// accents and the like are written as-is.
pub fn format_json<'a>(entries: impl IntoIterator<Item = &'a ScoreEntry>) -> Result<String> {
    let entries: Vec<&ScoreEntry> = entries.into_iter().collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

pub fn export<'a>(
    entries: impl IntoIterator<Item = &'a ScoreEntry>,
    format: ExportFormat,
) -> Result<String> {
    match format {
        ExportFormat::Tsv => Ok(format_tsv(entries)),
        ExportFormat::Json => format_json(entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use std::str::FromStr;

    fn at(day: u32) -> DateTime<Local> {
        Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0)
            .unwrap()
            .with_timezone(&Local)
    }

    #[test]
    fn test_tsv_header() {
        assert_eq!(format_tsv_header(), "rank\tplayer\tscore\tlevel\tdate");
    }

    #[test]
    fn test_tsv_rows_are_ranked_in_order() {
        let entries = vec![
            ScoreEntry::new("B", 200, at(2), 3),
            ScoreEntry::new("A", 100, at(1), 1),
        ];
        let tsv = format_tsv(&entries);
        let lines: Vec<&str> = tsv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1\tB\t200\t3\t"));
        assert!(lines[2].starts_with("2\tA\t100\t1\t"));
    }

    #[test]
    fn test_tsv_row_sanitizes_player_name() {
        let entry = ScoreEntry::new("Solid\tSnake\n", 1, at(1), 1);
        let row = format_tsv_row(1, &entry);

        assert_eq!(row.split('\t').nth(1), Some("Solid Snake "));
        assert_eq!(row.split('\t').count(), 5);
    }

    #[test]
    fn test_json_empty_board() {
        let entries: Vec<ScoreEntry> = Vec::new();
        assert_eq!(format_json(&entries).unwrap(), "[]");
    }

    #[test]
    fn test_json_is_indented_and_unescaped() {
        let entries = vec![ScoreEntry::new("<Snake & Otacon>", 10, at(1), 2)];
        let json = format_json(&entries).unwrap();

        assert!(json.contains("\n  {\n    \"playerName\": \"<Snake & Otacon>\""));
        assert!(!json.contains("\\u003c"));
    }

    #[test]
    fn test_json_keeps_non_ascii() {
        let entries = vec![ScoreEntry::new("スネーク", 10, at(1), 2)];
        let json = format_json(&entries).unwrap();
        assert!(json.contains("スネーク"));
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!(ExportFormat::from_str("tsv").unwrap(), ExportFormat::Tsv);
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_str("csv").is_err());
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_export_dispatch() {
        let entries = vec![ScoreEntry::new("A", 1, at(1), 1)];
        assert!(export(&entries, ExportFormat::Tsv).unwrap().starts_with("rank"));
        assert!(export(&entries, ExportFormat::Json).unwrap().starts_with('['));
    }
}
