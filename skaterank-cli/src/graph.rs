/// Head-to-head win graph in Graphviz DOT form.
///
/// Nodes are skaters, annotated with their final rank; an edge points from
/// the winner of a pairing to the loser, labelled with the vote split.
/// Edges already implied by a two-step winning path are dropped to keep
/// the picture readable. Strict-majority wins can be cyclic, so this is a
/// decluttering pass against the original edge set, not a true transitive
/// reduction; in a cycle nothing is implied and every edge survives.
use skaterank_core::SkaterResult;

/// Render the DOT graph for a ranked field.
pub fn render_dot(results: &[SkaterResult]) -> String {
    let n = results.len();
    let mut won = vec![vec![false; n]; n];
    for result in results {
        for entry in &result.head_to_head {
            if entry.won {
                won[result.index][entry.opponent] = true;
            }
        }
    }

    // Drop x -> y when the original edges already contain x -> w -> y.
    let mut kept = won.clone();
    for x in 0..n {
        for y in 0..n {
            if won[x][y] {
                let implied =
                    (0..n).any(|w| w != x && w != y && won[x][w] && won[w][y]);
                if implied {
                    kept[x][y] = false;
                }
            }
        }
    }

    let mut dot = String::new();
    dot.push_str("digraph head_to_head {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box];\n");
    for result in results {
        dot.push_str(&format!(
            "  n{} [label=\"{}\\n#{}\"];\n",
            result.index,
            escape(&result.skater.name),
            result.rank,
        ));
    }
    for result in results {
        for entry in &result.head_to_head {
            if entry.won && kept[result.index][entry.opponent] {
                dot.push_str(&format!(
                    "  n{} -> n{} [label=\"{}-{}\"];\n",
                    result.index, entry.opponent, entry.votes_for, entry.votes_against,
                ));
            }
        }
    }
    dot.push_str("}\n");
    dot
}

/// Print the DOT graph to stdout.
pub fn print_dot(results: &[SkaterResult]) {
    print!("{}", render_dot(results));
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use skaterank_core::{rank_skaters, SkaterInput};

    fn skater(name: &str, technical: &[f64]) -> SkaterInput {
        SkaterInput {
            name: name.to_string(),
            technical: technical.iter().copied().map(Some).collect(),
            artistic: vec![None, None, None],
        }
    }

    #[test]
    fn test_chain_drops_implied_edges() {
        let results = rank_skaters(&[
            skater("Top", &[6.0, 6.0, 6.0]),
            skater("Mid", &[5.0, 5.0, 5.0]),
            skater("Low", &[4.0, 4.0, 4.0]),
        ]);
        let dot = render_dot(&results);
        assert!(dot.contains("n0 -> n1 [label=\"3-0\"];"));
        assert!(dot.contains("n1 -> n2 [label=\"3-0\"];"));
        // Top beats Low too, but the path through Mid already says so.
        assert!(!dot.contains("n0 -> n2"));
    }

    #[test]
    fn test_cycle_keeps_every_edge() {
        let results = rank_skaters(&[
            skater("Rock", &[3.0, 1.0, 2.0]),
            skater("Paper", &[2.0, 3.0, 1.0]),
            skater("Scissors", &[1.0, 2.0, 3.0]),
        ]);
        let dot = render_dot(&results);
        assert!(dot.contains("n0 -> n1"));
        assert!(dot.contains("n1 -> n2"));
        assert!(dot.contains("n2 -> n0"));
    }

    #[test]
    fn test_nodes_carry_name_and_rank() {
        let results = rank_skaters(&[
            skater("Anna", &[6.0, 6.0, 6.0]),
            skater("Ben", &[5.0, 5.0, 5.0]),
        ]);
        let dot = render_dot(&results);
        assert!(dot.contains(r#"n0 [label="Anna\n#1"];"#));
        assert!(dot.contains(r#"n1 [label="Ben\n#2"];"#));
    }

    #[test]
    fn test_drawn_pairings_draw_no_edges() {
        let results = rank_skaters(&[
            skater("Twin A", &[3.0, 3.0, 3.0]),
            skater("Twin B", &[3.0, 3.0, 3.0]),
        ]);
        let dot = render_dot(&results);
        assert!(!dot.contains("->"));
        assert!(dot.contains("digraph head_to_head {"));
    }

    #[test]
    fn test_names_are_escaped() {
        let results = rank_skaters(&[
            skater(r#"The "Blade""#, &[6.0, 6.0, 6.0]),
            skater("Plain", &[5.0, 5.0, 5.0]),
        ]);
        let dot = render_dot(&results);
        assert!(dot.contains(r#"label="The \"Blade\"\n#1""#));
    }
}
