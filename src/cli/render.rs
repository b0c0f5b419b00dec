use console::{style, Term};

use crate::models::{ComparisonTable, ScoreBreakdown};
use crate::reporting::formatter::format_comparison_text;
use crate::utils::formatting::format_score;

const MIN_COLUMN_WIDTH: usize = 20;

fn heading(title: &str) -> String {
    format!(
        "\n{} {} {}",
        style("---").cyan().bold(),
        style(title).cyan().bold(),
        style("---").cyan().bold(),
    )
}

/// Half the terminal, minus the separator.
fn column_width() -> usize {
    let (_, cols) = Term::stdout().size();
    ((cols as usize).saturating_sub(3) / 2).max(MIN_COLUMN_WIDTH)
}

pub fn text_card(title: &str, body: &str) -> String {
    format!("{}\n{}", heading(title), body.trim_end())
}

pub fn score_card(breakdown: &ScoreBreakdown, show_components: bool) -> String {
    let total = format_score(breakdown.total);
    let styled = if breakdown.total >= 80.0 {
        style(total).green().bold()
    } else if breakdown.total >= 50.0 {
        style(total).yellow().bold()
    } else {
        style(total).red().bold()
    };

    let mut out = format!("{}\n  Score: {}", heading("Score"), styled);
    if show_components {
        out.push_str(&format!(
            "\n  {:<13} {:>6} / 50\n  {:<13} {:>6} / 30\n  {:<13} {:>6} / 20",
            "Accuracy", breakdown.accuracy,
            "Explanation", breakdown.explanation,
            "Thoroughness", breakdown.thoroughness,
        ));
    }
    out
}

pub fn comparison_card(table: &ComparisonTable) -> String {
    if table.is_empty() {
        return format!("{}\n  {}", heading("Data Comparison"), style("(no lines)").dim());
    }
    format!(
        "{}\n{}{}",
        heading("Data Comparison"),
        format_comparison_text(table, column_width()),
        style(format!("{} of {} rows differ", table.changed_rows(), table.len())).dim(),
    )
}

pub fn diff_card(diff: &str, (inserted, deleted): (usize, usize)) -> String {
    let body: Vec<String> = diff
        .lines()
        .map(|line| {
            if line.starts_with("+++") || line.starts_with("---") {
                style(line).bold().to_string()
            } else if line.starts_with('+') {
                style(line).green().to_string()
            } else if line.starts_with('-') {
                style(line).red().to_string()
            } else if line.starts_with("@@") {
                style(line).cyan().to_string()
            } else {
                line.to_string()
            }
        })
        .collect();
    if body.is_empty() {
        return format!("{}\n  {}", heading("Diff"), style("(identical)").dim());
    }
    format!(
        "{}\n{}\n{}",
        heading("Diff"),
        body.join("\n"),
        style(format!("{} inserted, {} deleted", inserted, deleted)).dim(),
    )
}
