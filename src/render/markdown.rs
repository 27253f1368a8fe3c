//! Markdown fragment rendering
//!
//! Pure function of a [`StatsSnapshot`]. Sections whose source block is
//! absent are omitted entirely; inside a present section, a missing leaf
//! field only drops its own row. The daily performance table is the
//! exception: it always has seven rows and fills gaps with zeros.

use crate::render::table::Table;
use crate::stats::weekday::{day_name, streak_index, weekdays_from_monday};
use crate::stats::{
    CrosswordPayload, CrosswordStreaks, DayStats, SpellingBeeStats, StatsSnapshot, WordleStats,
};
use serde_json::Number;

/// Fragment title line
pub const TITLE: &str = "## 🧩 My NYT Puzzle Stats";

/// Render the full fragment placed between the document markers
pub fn render_fragment(snapshot: &StatsSnapshot) -> String {
    let mut markdown = format!("{}\n\n*Last updated: {}*\n\n", TITLE, snapshot.last_updated);

    if let Some(section) = render_crossword(&snapshot.crossword) {
        markdown.push_str(&section);
    }
    if let Some(wordle) = snapshot.games.wordle.as_ref().filter(|w| !w.is_empty()) {
        markdown.push_str(&render_wordle(wordle));
    }
    if let Some(bee) = snapshot.games.spelling_bee.as_ref().filter(|b| !b.is_empty()) {
        markdown.push_str(&render_spelling_bee(bee));
    }

    markdown
}

/// `### Crossword` section; `None` unless both stats and streaks are present
pub fn render_crossword(payload: &CrosswordPayload) -> Option<String> {
    let stats = payload.stats()?;
    let streaks = payload.streaks()?;

    let mut table = Table::statistics();
    if let Some(current) = &streaks.current_streak {
        table.stat("Current Streak", current);
    }
    if let Some(longest) = &streaks.longest_streak {
        table.stat("Max Streak", longest);
    }
    if let Some(solved) = &stats.puzzles_solved {
        table.stat("Total Solved", solved);
    }
    if let Some(attempted) = &stats.puzzles_attempted {
        table.stat("Total Attempted", attempted);
    }
    if let Some(rate) = stats.solve_rate {
        table.stat("Solve Rate", format_rate(rate));
    }
    if let Some(avg) = stats.longest_avg_time {
        table.stat("Average Time", format_duration(avg));
    }

    let mut section = format!("### Crossword\n\n{}\n", table.render());

    if let Some(days) = stats.stats_by_day.as_deref().filter(|d| !d.is_empty()) {
        section.push_str(&render_daily_performance(days, streaks));
    }

    Some(section)
}

/// `#### Daily Performance`: one row per weekday, Monday first
pub fn render_daily_performance(days: &[Option<DayStats>], streaks: &CrosswordStreaks) -> String {
    let day_streaks = streaks.day_of_week_streaks.as_deref().unwrap_or(&[]);

    let mut table = Table::new(["Day", "Best Time", "Average Time", "Solved", "Streak"]);
    for (day_index, day) in weekdays_from_monday().enumerate() {
        let entry = days.get(day_index).and_then(Option::as_ref);
        let streak = day_streaks.get(streak_index(day)).and_then(Option::as_ref);
        table.row([
            day_name(day).to_string(),
            format_duration(entry.and_then(|d| d.best_time).unwrap_or(0.0)),
            format_duration(entry.and_then(|d| d.avg_time).unwrap_or(0.0)),
            number_or_zero(entry.and_then(DayStats::solved_count)),
            number_or_zero(streak),
        ]);
    }

    format!("#### Daily Performance\n\n{}\n", table.render())
}

fn render_wordle(wordle: &WordleStats) -> String {
    let mut table = Table::statistics();
    if let Some(current) = &wordle.current_streak {
        table.stat("Current Streak", current);
    }
    if let Some(max) = &wordle.max_streak {
        table.stat("Max Streak", max);
    }
    if let Some(played) = &wordle.games_played {
        table.stat("Games Played", played);
    }
    if let Some(win) = &wordle.win_percentage {
        table.stat("Win Rate", format!("{}%", win));
    }
    if let Some(guesses) = &wordle.guesses {
        let distribution: Vec<String> = (1..=6)
            .map(|n| {
                let count = number_or_zero(guesses.get(&n.to_string()));
                format!("{}: {}", n, count)
            })
            .collect();
        table.stat("Guess Distribution", distribution.join(", "));
    }

    format!("### Wordle\n\n{}\n", table.render())
}

fn render_spelling_bee(bee: &SpellingBeeStats) -> String {
    let mut table = Table::statistics();
    if let Some(current) = &bee.current_streak {
        table.stat("Current Streak", current);
    }
    if let Some(max) = &bee.max_streak {
        table.stat("Max Streak", max);
    }
    if let Some(played) = &bee.games_played {
        table.stat("Games Played", played);
    }
    if let Some(genius) = &bee.genius {
        table.stat("Genius Achieved", format!("{} times", genius));
    }
    if let Some(pangrams) = &bee.pangrams {
        table.stat("Total Pangrams", pangrams);
    }

    // last section: no trailing blank line before the end marker
    format!("### Spelling Bee\n\n{}", table.render())
}

/// Fraction to percentage with one decimal: `0.8567` -> `85.7%`
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Whole seconds as `{m}m {s}s`; fractional seconds are truncated
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.trunc() as i64;
    format!("{}m {}s", total.div_euclid(60), total.rem_euclid(60))
}

fn number_or_zero(value: Option<&Number>) -> String {
    value.map_or_else(|| "0".to_string(), Number::to_string)
}
