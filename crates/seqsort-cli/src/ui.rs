//! Styled terminal messages.

use console::style;

/// Check if color output is disabled via `NO_COLOR` or a non-color terminal.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some() || !console::colors_enabled()
}

/// Render a section header, with terminal styling when `styled`.
#[must_use]
pub fn header(text: &str, styled: bool) -> String {
    if !styled {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// Render a `label: value` line, with the label dimmed when `styled`.
#[must_use]
pub fn field(label: &str, value: &str, styled: bool) -> String {
    if !styled {
        format!("{label}: {value}")
    } else {
        format!("{} {value}", style(format!("{label}:")).dim())
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_contains_text() {
        assert!(header("Sequence", true).contains("=== Sequence ==="));
        assert_eq!(header("Sequence", false), "=== Sequence ===");
    }

    #[test]
    fn field_contains_label_and_value() {
        let line = field("Formula", "add", true);
        assert!(line.contains("Formula:"));
        assert!(line.ends_with("add"));
    }

    #[test]
    fn unstyled_output_has_no_escape_codes() {
        console::set_colors_enabled(true);
        assert!(!header("Rows", false).contains('\u{1b}'));
        assert_eq!(field("Rows", "3", false), "Rows: 3");
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("Something went wrong");
        print_error("");
    }
}
