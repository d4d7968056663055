//! CLI result presenter.

use std::time::Duration;

use crate::interfaces::{ResultPresenter, SequenceReport, SortReport};
use crate::output::{format_duration, format_number, format_row, format_term, to_json};
use crate::ui::{field, header, is_color_disabled, print_error};

/// CLI result presenter.
///
/// Quiet mode prints one term or row per line and nothing else; JSON mode
/// prints the report as JSON; otherwise a header and summary precede the
/// values.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl CLIResultPresenter {
    /// Create a presenter for the given output mode flags.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self {
            verbose,
            quiet,
            json,
        }
    }

    /// Render a sequence report; `styled` adds terminal colors.
    #[must_use]
    pub fn render_sequence(
        &self,
        report: &SequenceReport,
        duration: Duration,
        styled: bool,
    ) -> String {
        if self.json {
            return to_json(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"));
        }
        if self.quiet {
            return report.terms.join("\n");
        }

        let terms: Vec<String> = report
            .terms
            .iter()
            .map(|t| format_term(t, self.verbose))
            .collect();
        let mut lines = vec![
            header("Sequence", styled),
            field("Formula", &report.formula, styled),
            field("Terms", &format_number(report.count), styled),
        ];
        if self.verbose {
            lines.push(field("Duration", &format_duration(duration), styled));
        }
        lines.push(terms.join(", "));
        lines.join("\n")
    }

    /// Render a sort report; `styled` adds terminal colors.
    #[must_use]
    pub fn render_sorted(&self, report: &SortReport, duration: Duration, styled: bool) -> String {
        if self.json {
            return to_json(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"));
        }

        let rows = report.rows.iter().map(|row| format_row(row));
        if self.quiet {
            return rows.collect::<Vec<_>>().join("\n");
        }

        let mut lines = vec![
            header("Sorted rows", styled),
            field("Comparer", &report.comparer, styled),
            field("Rows", &format_number(report.rows.len()), styled),
        ];
        if self.verbose {
            let stats = &report.stats;
            lines.push(field("Passes", &format_number(stats.passes), styled));
            lines.push(field("Comparisons", &format_number(stats.comparisons), styled));
            lines.push(field("Swaps", &format_number(stats.swaps), styled));
            lines.push(field("Duration", &format_duration(duration), styled));
        }
        lines.extend(rows);
        lines.join("\n")
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_sequence(&self, report: &SequenceReport, duration: Duration) {
        print_nonempty(&self.render_sequence(report, duration, !is_color_disabled()));
    }

    fn present_sorted(&self, report: &SortReport, duration: Duration) {
        print_nonempty(&self.render_sorted(report, duration, !is_color_disabled()));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Quiet output with nothing to show prints nothing, not a blank line.
fn print_nonempty(rendered: &str) {
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}

#[cfg(test)]
mod tests {
    use seqsort_core::sort::SortStats;

    use super::*;

    fn fib_report() -> SequenceReport {
        SequenceReport {
            formula: "add".into(),
            count: 5,
            terms: ["1", "1", "2", "3", "5"].map(String::from).to_vec(),
        }
    }

    fn sort_report() -> SortReport {
        SortReport {
            comparer: "length-then-first".into(),
            rows: vec![vec![17, 32], vec![77, 17]],
            stats: SortStats {
                passes: 1,
                comparisons: 1,
                swaps: 1,
            },
        }
    }

    #[test]
    fn quiet_sequence_is_one_term_per_line() {
        let presenter = CLIResultPresenter::new(false, true, false);
        let out = presenter.render_sequence(&fib_report(), Duration::from_millis(1), false);
        assert_eq!(out, "1\n1\n2\n3\n5");
    }

    #[test]
    fn normal_sequence_has_summary() {
        let presenter = CLIResultPresenter::new(false, false, false);
        let out = presenter.render_sequence(&fib_report(), Duration::from_millis(1), false);
        assert!(out.contains("Formula"));
        assert!(out.contains("add"));
        assert!(out.ends_with("1, 1, 2, 3, 5"));
        assert!(!out.contains("Duration"));
    }

    #[test]
    fn verbose_sequence_shows_duration() {
        let presenter = CLIResultPresenter::new(true, false, false);
        let out = presenter.render_sequence(&fib_report(), Duration::from_millis(1), false);
        assert!(out.contains("Duration"));
    }

    #[test]
    fn json_sequence_parses_back() {
        let presenter = CLIResultPresenter::new(false, false, true);
        let out = presenter.render_sequence(&fib_report(), Duration::ZERO, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 5);
        assert_eq!(value["terms"][4], "5");
    }

    #[test]
    fn quiet_sorted_rows() {
        let presenter = CLIResultPresenter::new(false, true, false);
        let out = presenter.render_sorted(&sort_report(), Duration::ZERO, false);
        assert_eq!(out, "[17, 32]\n[77, 17]");
    }

    #[test]
    fn verbose_sorted_shows_stats() {
        let presenter = CLIResultPresenter::new(true, false, false);
        let out = presenter.render_sorted(&sort_report(), Duration::ZERO, false);
        assert!(out.contains("Comparisons"));
        assert!(out.contains("Swaps"));
        assert!(out.ends_with("[17, 32]\n[77, 17]"));
    }

    #[test]
    fn json_sorted_parses_back() {
        let presenter = CLIResultPresenter::new(false, false, true);
        let out = presenter.render_sorted(&sort_report(), Duration::ZERO, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["rows"][0], serde_json::json!([17, 32]));
        assert_eq!(value["stats"]["swaps"], 1);
    }

    #[test]
    fn quiet_empty_renders_nothing() {
        let presenter = CLIResultPresenter::new(false, true, false);
        let empty_sequence = SequenceReport {
            formula: "add".into(),
            count: 0,
            terms: Vec::new(),
        };
        let empty_sort = SortReport {
            rows: Vec::new(),
            stats: SortStats::default(),
            ..sort_report()
        };
        assert!(presenter.render_sequence(&empty_sequence, Duration::ZERO, false).is_empty());
        assert!(presenter.render_sorted(&empty_sort, Duration::ZERO, false).is_empty());
    }

    #[test]
    fn unstyled_rendering_has_no_escape_codes() {
        console::set_colors_enabled(true);
        let presenter = CLIResultPresenter::new(true, false, false);
        let sequence = presenter.render_sequence(&fib_report(), Duration::ZERO, false);
        let sorted = presenter.render_sorted(&sort_report(), Duration::ZERO, false);
        assert!(!sequence.contains('\u{1b}'));
        assert!(!sorted.contains('\u{1b}'));
        assert!(sorted.starts_with("=== Sorted rows ==="));
    }

    #[test]
    fn present_does_not_panic() {
        let presenter = CLIResultPresenter::new(false, false, false);
        presenter.present_sequence(&fib_report(), Duration::ZERO);
        presenter.present_sorted(&sort_report(), Duration::ZERO);
        presenter.present_error("test error message");
    }
}
