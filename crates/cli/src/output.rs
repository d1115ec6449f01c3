//! Terminal and JSON output helpers

use console::{style, StyledObject};
use psyche_usecase::psyche_domain::{ChangeDirection, TrendDirection};
use serde::Serialize;

/// Where command results go
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Pretty-print a value as JSON on stdout
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Fixed-width bar for a score in [0, 1]
pub fn score_bar(score: f64) -> String {
    const WIDTH: usize = 10;
    let filled = (score.clamp(0.0, 1.0) * WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

pub fn styled_trend(trend: TrendDirection) -> StyledObject<&'static str> {
    match trend {
        TrendDirection::Improving => style("↑ improving").green(),
        TrendDirection::Stable => style("→ stable").dim(),
        TrendDirection::Declining => style("↓ declining").red(),
    }
}

pub fn styled_change(direction: ChangeDirection, change: f64) -> StyledObject<String> {
    let text = format!("{:+.3}", change);
    match direction {
        ChangeDirection::Up => style(text).green(),
        ChangeDirection::Down => style(text).red(),
    }
}

/// Success line
pub fn ok(message: impl std::fmt::Display) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Warning line (stderr)
pub fn warn(message: impl std::fmt::Display) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}
