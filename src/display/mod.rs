//! Formatting utilities for terminal output
//!
//! Shared helpers for the report renderer and the listing commands.

use crate::models::{parse_timestamp, Money};

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Format an ISO timestamp string as a short date ("Jan 15, 2025")
///
/// Unparseable input falls back to the raw string.
pub fn short_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%b %d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2025-01-15T08:30:00.000Z"), "Jan 15, 2025");
        assert_eq!(short_date("2025-01-15"), "Jan 15, 2025");
        assert_eq!(short_date("whenever"), "whenever");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }

    #[test]
    fn test_money_colored() {
        assert!(format_money_colored(Money::from_cents(-100)).contains("\x1b[31m"));
        assert!(format_money_colored(Money::from_cents(100)).contains("\x1b[32m"));
        assert_eq!(format_money_colored(Money::zero()), "0.00");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3).chars().count(), 3);
    }
}
