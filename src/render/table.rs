//! Minimal markdown table builder

use std::fmt;

/// Markdown table with a fixed header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Two-column `| Statistic | Value |` table
    pub fn statistics() -> Self {
        Self::new(["Statistic", "Value"])
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Two-cell `label | value` row
    pub fn stat(&mut self, label: &str, value: impl fmt::Display) -> &mut Self {
        self.row([label.to_string(), value.to_string()])
    }

    /// Render header, separator and rows, each line `\n`-terminated.
    /// Separator cells are two dashes wider than their header text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&render_line(&self.headers));
        let separator: Vec<String> = self
            .headers
            .iter()
            .map(|h| "-".repeat(h.chars().count() + 2))
            .collect();
        out.push('|');
        out.push_str(&separator.join("|"));
        out.push_str("|\n");
        for row in &self.rows {
            out.push_str(&render_line(row));
        }
        out
    }
}

fn render_line(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}
