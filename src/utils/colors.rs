/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// 9-10 green, 7-8 cyan, 5-6 yellow, below that red.
pub fn color_for_rating(rating: u8) -> &'static str {
    match rating {
        9.. => GREEN,
        7..=8 => CYAN,
        5..=6 => YELLOW,
        _ => RED,
    }
}

/// Sold-out rows are greyed.
pub fn color_for_quantity(quantity: u32) -> &'static str {
    if quantity == 0 { GREY } else { RESET }
}

/// Empty values are shown as a grey `--`.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_colors_follow_bands() {
        assert_eq!(color_for_rating(10), GREEN);
        assert_eq!(color_for_rating(8), CYAN);
        assert_eq!(color_for_rating(5), YELLOW);
        assert_eq!(color_for_rating(0), RED);
    }

    #[test]
    fn blank_optional_is_grey() {
        assert_eq!(colorize_optional(Some("Cuba")), "Cuba");
        assert!(colorize_optional(Some("  ")).contains("--"));
        assert!(colorize_optional(None).starts_with(GREY));
    }
}
