use crate::models::{ComparisonTable, ScoreBreakdown};
use crate::utils::formatting::format_score;

/// Escape a line for use inside a Markdown table cell.
fn escape_cell(text: &str) -> String {
    text.replace('\\', "\\\\").replace('|', "\\|")
}

/// Backtick fence one longer than any backtick run in `text`, minimum three.
fn code_fence(text: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in text.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

pub fn format_comparison_markdown(table: &ComparisonTable) -> String {
    let mut out = String::from("| # | Extracted Data | Validated Data |\n|---|---|---|\n");
    for (i, row) in table.rows().iter().enumerate() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            i + 1,
            escape_cell(&row.extracted),
            escape_cell(&row.validated)
        ));
    }
    out
}

pub fn format_breakdown_markdown(breakdown: &ScoreBreakdown) -> String {
    format!(
        "| Component | Points |\n|---|---|\n| Accuracy | {} / 50 |\n| Explanation | {} / 30 |\n| Thoroughness | {} / 20 |\n| **Total** | **{}** |\n",
        breakdown.accuracy,
        breakdown.explanation,
        breakdown.thoroughness,
        format_score(breakdown.total),
    )
}

/// Full Markdown report for one run.
pub fn format_report_markdown(
    extracted: &str,
    validated: &str,
    breakdown: &ScoreBreakdown,
    table: &ComparisonTable,
) -> String {
    let fence = code_fence(extracted);
    format!(
        "# Extraction & Validation Report\n\n## Score\n\nFinal score: **{}**\n\n{}\n## Extracted Data\n\n{fence}\n{}\n{fence}\n\n## Detailed Explanation & Corrections\n\n{}\n\n## Data Comparison (Extracted vs. Validated)\n\n{}",
        format_score(breakdown.total),
        format_breakdown_markdown(breakdown),
        extracted,
        validated,
        format_comparison_markdown(table),
        fence = fence,
    )
}

/// Fixed-width two-column rendering for terminals. Cells longer than
/// `width` are cut with an ellipsis.
pub fn format_comparison_text(table: &ComparisonTable, width: usize) -> String {
    let width = width.max(4);
    let fit = |s: &str| -> String {
        if s.chars().count() <= width {
            format!("{:<width$}", s, width = width)
        } else {
            let cut: String = s.chars().take(width - 1).collect();
            format!("{}…", cut)
        }
    };

    let mut out = format!("{} | {}\n", fit("Extracted Data"), fit("Validated Data"));
    out.push_str(&format!("{}-+-{}\n", "-".repeat(width), "-".repeat(width)));
    for row in table {
        out.push_str(&format!("{} | {}\n", fit(&row.extracted), fit(&row.validated)));
    }
    out
}
