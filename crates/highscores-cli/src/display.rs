//! Console table output with colored ranks

use std::fmt::Write as _;

use highscores_core::ScoreEntry;
use owo_colors::OwoColorize;

const NAME_WIDTH: usize = 16;

/// Format entries as a ranked table, first entry as rank 1.
pub fn format_board_console(entries: &[&ScoreEntry]) -> String {
    if entries.is_empty() {
        return format!("{}", "No high scores yet".dimmed());
    }

    let mut output = String::new();
    let border = "━".repeat(NAME_WIDTH + 40);

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(
        output,
        "  {:>4}  {:<width$}  {:>8}  {:>5}  {}",
        "#",
        "PLAYER",
        "SCORE",
        "LEVEL",
        "DATE",
        width = NAME_WIDTH
    );
    let _ = writeln!(output, "{}", border.dimmed());

    for (i, entry) in entries.iter().enumerate() {
        let rank = format_colored_rank(i + 1);
        let name = truncate_name(&entry.player_name);
        let _ = writeln!(
            output,
            "  {}  {:<width$}  {:>8}  {:>5}  {}",
            rank,
            name,
            entry.score.bold(),
            entry.level,
            entry.date.format("%Y-%m-%d %H:%M"),
            width = NAME_WIDTH
        );
    }
    let _ = write!(output, "{}", border.dimmed());

    output
}

/// Rank padded to 4 columns before coloring so ANSI codes don't skew alignment
fn format_colored_rank(rank: usize) -> String {
    let padded = format!("{:>4}", rank);
    match rank {
        1 => padded.yellow().bold().to_string(),
        2 => padded.white().bold().to_string(),
        3 => padded.red().to_string(),
        _ => padded,
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(NAME_WIDTH - 1).collect();
        short.push('…');
        short
    }
}
