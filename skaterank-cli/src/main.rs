mod graph;
mod output;
mod parse;

use clap::Parser;
use skaterank_core::{effective_judge_count, rank_skaters, SkaterResult};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "skaterank", version, about = "Rank skaters from judge score sheets by pairwise majority comparison")]
struct Cli {
    /// Score sheet file, one skater per line (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Output a Graphviz DOT graph of head-to-head wins
    #[arg(long)]
    dot: bool,

    /// Show parsing and tie-break detail on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Load the raw score sheet from the file argument or from stdin.
fn load_sheet(input: &Option<PathBuf>) -> String {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read score sheet {}: {e}", path.display()))),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail("No score sheet provided. Pass a file or pipe one via stdin.");
            }
            let mut content = String::new();
            stdin
                .lock()
                .read_to_string(&mut content)
                .unwrap_or_else(|e| bail(format!("Failed to read from stdin: {e}")));
            content
        }
    }
}

/// Runs of equal majority victories in the rank-ordered results.
fn count_tied_groups(results: &[SkaterResult]) -> usize {
    let mut groups = 0;
    let mut start = 0;
    while start < results.len() {
        let mut end = start + 1;
        while end < results.len()
            && results[end].majority_victories == results[start].majority_victories
        {
            end += 1;
        }
        if end - start > 1 {
            groups += 1;
        }
        start = end;
    }
    groups
}

fn main() {
    let cli = Cli::parse();

    if cli.json && cli.dot {
        bail("--json and --dot are mutually exclusive.");
    }

    let sheet = load_sheet(&cli.input);
    let skaters = parse::parse_skaters(&sheet);
    if skaters.is_empty() {
        bail("No skater lines found in the input.");
    }

    if cli.verbose {
        let judges = skaters.iter().map(effective_judge_count).max().unwrap_or(0);
        eprintln!("Parsed {} skaters (up to {} judges)", skaters.len(), judges);
    }

    let results = rank_skaters(&skaters);

    if cli.verbose {
        let tied = count_tied_groups(&results);
        if tied > 0 {
            eprintln!("{} group(s) of equal majority victories went to the tie-break cascade", tied);
        }
        for result in &results {
            if let Some(trail) = &result.tie_break_trail {
                let steps: Vec<String> = trail
                    .iter()
                    .map(|record| format!("{} {}", output::level_label(record.level), record.value))
                    .collect();
                eprintln!("  {} separated via: {}", result.skater.name, steps.join(" / "));
            }
        }
    }

    if cli.json {
        output::print_json(&results);
    } else if cli.dot {
        graph::print_dot(&results);
    } else {
        output::print_table(&results);
    }
}
