//! Formatting utilities used for CLI output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

/// `R$ 12.50`
pub fn money(value: &str, currency: &str) -> String {
    format!("{currency} {value}")
}

/// "N min" under an hour, "Hh Mmin" otherwise.
pub fn minutes_label(minutes: i64) -> String {
    let minutes = minutes.max(0);
    if minutes < 60 {
        format!("{minutes} min")
    } else {
        format!("{}h {}min", minutes / 60, minutes % 60)
    }
}

/// `rating/10` as a row of filled and empty dots.
pub fn rating_dots(rating: u8) -> String {
    let filled = usize::from(rating.min(10));
    format!("{}{} {}/10", "●".repeat(filled), "○".repeat(10 - filled), rating)
}

/// Cut `s` to `width` display columns, ending with `…` when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_label_switches_at_one_hour() {
        assert_eq!(minutes_label(59), "59 min");
        assert_eq!(minutes_label(60), "1h 0min");
        assert_eq!(minutes_label(95), "1h 35min");
        assert_eq!(minutes_label(-3), "0 min");
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("Cohiba", 10), "Cohiba");
        assert_eq!(truncate("Montecristo", 6), "Monte…");
        assert_eq!(rating_dots(3), "●●●○○○○○○○ 3/10");
    }
}
