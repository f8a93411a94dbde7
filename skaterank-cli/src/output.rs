/// Output formatting: terminal table and JSON.
use serde::Serialize;
use skaterank_core::{SkaterResult, TieBreak, TieBreakLevel};

/// Human label for a tie-break criterion.
pub fn level_label(level: TieBreakLevel) -> &'static str {
    match level {
        TieBreakLevel::DirectComparison => "direct comparison",
        TieBreakLevel::BScoreSum => "B-score sum",
        TieBreakLevel::ComparisonAll => "comparison with all",
        TieBreakLevel::TotalScore => "total score",
    }
}

fn tie_break_cell(tie_break: Option<TieBreak>) -> String {
    match tie_break {
        Some(record) => format!("{} ({})", level_label(record.level), record.value),
        None => "-".to_string(),
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    skaters: &'a [SkaterResult],
}

/// Print results as a formatted terminal table.
pub fn print_table(results: &[SkaterResult]) {
    // Find the widest skater name for padding
    let name_width = results
        .iter()
        .map(|r| r.skater.name.len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Name"

    println!(" # | {:<name_width$} | M.V. |  Total | Tie-break", "Name");
    println!("---|-{}-|------|--------|----------", "-".repeat(name_width));

    for r in results {
        println!(
            "{:>2} | {:<name_width$} | {:>4} | {:>6.1} | {}",
            r.rank,
            r.skater.name,
            r.majority_victories,
            r.total_score,
            tie_break_cell(r.tie_break),
        );
    }

    println!("\n{} skaters ranked by majority victories", results.len());
}

/// Print results as JSON.
pub fn print_json(results: &[SkaterResult]) {
    let output = JsonOutput { skaters: results };
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
