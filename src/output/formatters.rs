//! Formatting utilities for terminal output

use crate::core::{Code, Hint, Marker};
use colored::{ColoredString, Colorize};

/// Pin drawn for each exact match
pub const EXACT_PIN: char = '●';
/// Pin drawn for each partial match
pub const PARTIAL_PIN: char = '○';
/// Filler for positions that earned nothing
pub const EMPTY_PIN: char = '·';

/// Color a single peg symbol
///
/// Classic colors get their own hue; any other symbol is shown bold white.
#[must_use]
pub fn peg(symbol: char) -> ColoredString {
    let text = symbol.to_string();
    match symbol {
        'R' => text.red().bold(),
        'G' => text.green().bold(),
        'B' => text.blue().bold(),
        'Y' => text.yellow().bold(),
        'O' => text.truecolor(255, 165, 0).bold(),
        'P' => text.magenta().bold(),
        _ => text.white().bold(),
    }
}

/// Render a code with each peg colored
#[must_use]
pub fn colored_code(code: &Code) -> String {
    code.symbols().iter().map(|&s| peg(s).to_string()).collect()
}

/// Render the marker row, exact hits colored and blanks dimmed
#[must_use]
pub fn colored_markers(hint: &Hint) -> String {
    hint.markers()
        .iter()
        .map(|marker| match *marker {
            Marker::Exact(symbol) => peg(symbol).to_string(),
            Marker::Blank => marker.as_char().to_string().bright_black().to_string(),
        })
        .collect()
}

/// Format a hint as key pins: exact first, then partial, then filler
///
/// Pin order carries no positional meaning.
#[must_use]
pub fn hint_pins(hint: &Hint) -> String {
    let total = hint.markers().len();
    let filler = total.saturating_sub(hint.exact_matches() + hint.partial_matches());

    let mut result = String::with_capacity(total * 3);
    result.extend(std::iter::repeat_n(EXACT_PIN, hint.exact_matches()));
    result.extend(std::iter::repeat_n(PARTIAL_PIN, hint.partial_matches()));
    result.extend(std::iter::repeat_n(EMPTY_PIN, filler));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many attempts are left
#[must_use]
pub fn attempts_bar(remaining: u32, max: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(max), width)
}
